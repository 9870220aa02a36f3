use tracing::{info, warn};

use crate::errors::{AppError, Result};
use crate::models::{Application, Opportunity, ReviewDecision, UserProfile};
use crate::storage::{load_list, save_list, KeyValueStore, StorageKey};

/// Applies a club's decision to one application and writes it back.
///
/// The club must own the opportunity the application targets. Accepted and
/// rejected applications cannot be decided again.
pub fn review_application(
    store: &dyn KeyValueStore,
    user: &UserProfile,
    application_id: &str,
    decision: ReviewDecision,
) -> Result<Application> {
    if user.as_club().is_none() {
        return Err(AppError::Forbidden(
            "only clubs can review applications".to_string(),
        ));
    }
    let club_id = user.id.as_str();

    let opportunities: Vec<Opportunity> = load_list(store, StorageKey::OPPORTUNITIES)?;
    let mut applications: Vec<Application> = load_list(store, StorageKey::APPLICATIONS)?;

    let app = applications
        .iter_mut()
        .find(|a| a.id == application_id)
        .ok_or_else(|| AppError::NotFound(format!("Application {application_id} not found")))?;

    let owned = opportunities
        .iter()
        .any(|o| o.id == app.opportunity_id && o.club_id == club_id);
    if !owned {
        warn!("Club {club_id} tried to review application {application_id} it does not own");
        return Err(AppError::Forbidden(format!(
            "application {application_id} targets another club's opportunity"
        )));
    }

    let previous = app.status;
    app.status = previous.decide(decision)?;
    let updated = app.clone();
    save_list(store, StorageKey::APPLICATIONS, &applications)?;

    info!(
        "Application {application_id}: {previous} -> {} by {club_id}",
        updated.status
    );
    Ok(updated)
}
