use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::{AppError, Result};
use crate::models::{Category, Opportunity, OpportunityStatus, UserProfile};
use crate::storage::{load_list, save_list, KeyValueStore, StorageKey};

/// Fields a club fills in when creating a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOpportunity {
    pub title: String,
    pub category: Category,
    #[serde(rename = "type")]
    pub type_label: String,
    pub description: String,
    pub location: String,
    pub city: String,
    pub time_commitment: String,
    pub employment_type: Option<String>,
    pub start_date: String,
    pub compensation: Option<String>,
    pub spots: Option<u32>,
    /// Publish straight away instead of saving a draft.
    pub publish: bool,
}

/// Stores a new listing owned by the logged-in club.
pub fn publish_opportunity(
    store: &dyn KeyValueStore,
    user: &UserProfile,
    input: NewOpportunity,
) -> Result<Opportunity> {
    let club = user
        .as_club()
        .ok_or_else(|| AppError::Forbidden("only clubs can publish opportunities".to_string()))?;

    for (field, value) in [
        ("title", &input.title),
        ("description", &input.description),
        ("city", &input.city),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{field} is required")));
        }
    }

    let opportunity = Opportunity {
        id: format!("opp_{}", Uuid::new_v4().simple()),
        club_id: user.id.clone(),
        club_name: club.club_name.clone(),
        title: input.title.trim().to_string(),
        category: input.category,
        type_label: input.type_label,
        description: input.description,
        location: input.location,
        city: input.city.trim().to_string(),
        time_commitment: input.time_commitment,
        employment_type: input.employment_type,
        start_date: input.start_date,
        compensation: input.compensation,
        spots: input.spots,
        applicant_count: 0,
        featured: false,
        days_left: None,
        status: if input.publish {
            OpportunityStatus::Active
        } else {
            OpportunityStatus::Draft
        },
    };

    let mut all: Vec<Opportunity> = load_list(store, StorageKey::OPPORTUNITIES)?;
    all.push(opportunity.clone());
    save_list(store, StorageKey::OPPORTUNITIES, &all)?;

    info!(
        "Club {} stored opportunity {} ({})",
        user.id, opportunity.id, opportunity.status
    );
    Ok(opportunity)
}

/// Moves one of the club's own listings to `next` and persists it.
pub fn set_opportunity_status(
    store: &dyn KeyValueStore,
    user: &UserProfile,
    opportunity_id: &str,
    next: OpportunityStatus,
) -> Result<Opportunity> {
    let mut all: Vec<Opportunity> = load_list(store, StorageKey::OPPORTUNITIES)?;
    let opp = all
        .iter_mut()
        .find(|o| o.id == opportunity_id)
        .ok_or_else(|| AppError::NotFound(format!("Opportunity {opportunity_id} not found")))?;

    if opp.club_id != user.id {
        return Err(AppError::Forbidden(format!(
            "opportunity {opportunity_id} belongs to another club"
        )));
    }

    let previous = opp.status;
    opp.status = previous.transition_to(next)?;
    let updated = opp.clone();
    save_list(store, StorageKey::OPPORTUNITIES, &all)?;

    info!("Opportunity {opportunity_id}: {previous} -> {next}");
    Ok(updated)
}
