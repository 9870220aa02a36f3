use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::{AppError, Result};
use crate::models::{Application, ApplicationStatus, Opportunity, UserProfile};
use crate::storage::{load_list, save_list, KeyValueStore, StorageKey};

/// Stores a pending application from a talent and bumps the listing's
/// applicant count. Each talent can apply to a listing once.
pub fn submit_application(
    store: &dyn KeyValueStore,
    user: &UserProfile,
    opportunity_id: &str,
    now: DateTime<Utc>,
) -> Result<Application> {
    if user.as_talent().is_none() {
        return Err(AppError::Forbidden(
            "only talent accounts can apply".to_string(),
        ));
    }

    let mut opportunities: Vec<Opportunity> = load_list(store, StorageKey::OPPORTUNITIES)?;
    let mut applications: Vec<Application> = load_list(store, StorageKey::APPLICATIONS)?;

    let opp = opportunities
        .iter_mut()
        .find(|o| o.id == opportunity_id)
        .ok_or_else(|| AppError::NotFound(format!("Opportunity {opportunity_id} not found")))?;
    if !opp.is_active() {
        return Err(AppError::Validation(format!(
            "opportunity {opportunity_id} is not accepting applications ({})",
            opp.status
        )));
    }

    let duplicate = applications
        .iter()
        .any(|a| a.opportunity_id == opportunity_id && a.talent_id.as_deref() == Some(user.id.as_str()));
    if duplicate {
        return Err(AppError::Conflict(format!(
            "{} has already applied to {opportunity_id}",
            user.id
        )));
    }

    let application = Application {
        id: format!("app_{}", Uuid::new_v4().simple()),
        opportunity_id: opportunity_id.to_string(),
        applicant_name: user.display_name(),
        talent_id: Some(user.id.clone()),
        status: ApplicationStatus::Pending,
        applied_at: now,
    };
    opp.applicant_count += 1;
    applications.push(application.clone());

    // Count first; undo it if the application itself cannot be stored.
    save_list(store, StorageKey::OPPORTUNITIES, &opportunities)?;
    if let Err(e) = save_list(store, StorageKey::APPLICATIONS, &applications) {
        warn!("Storing application to {opportunity_id} failed, restoring count: {e}");
        if let Some(opp) = opportunities.iter_mut().find(|o| o.id == opportunity_id) {
            opp.applicant_count -= 1;
        }
        save_list(store, StorageKey::OPPORTUNITIES, &opportunities)?;
        return Err(e);
    }

    info!("Talent {} applied to {opportunity_id}", user.id);
    Ok(application)
}
