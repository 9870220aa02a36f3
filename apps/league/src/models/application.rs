use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::errors::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Reviewed,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Väntande",
            ApplicationStatus::Reviewed => "Granskad",
            ApplicationStatus::Accepted => "Accepterad",
            ApplicationStatus::Rejected => "Avvisad",
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(
            self,
            ApplicationStatus::Accepted | ApplicationStatus::Rejected
        )
    }

    /// Applies a club's review decision.
    /// Accepted and rejected are final; `MarkReviewed` only applies to pending.
    pub fn decide(self, decision: ReviewDecision) -> Result<ApplicationStatus> {
        let next = decision.target();
        let allowed = match decision {
            ReviewDecision::MarkReviewed => self == ApplicationStatus::Pending,
            ReviewDecision::Accept | ReviewDecision::Reject => !self.is_final(),
        };
        if allowed {
            Ok(next)
        } else {
            Err(AppError::invalid_transition(self, next))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReviewDecision {
    MarkReviewed,
    Accept,
    Reject,
}

impl ReviewDecision {
    pub fn target(&self) -> ApplicationStatus {
        match self {
            ReviewDecision::MarkReviewed => ApplicationStatus::Reviewed,
            ReviewDecision::Accept => ApplicationStatus::Accepted,
            ReviewDecision::Reject => ApplicationStatus::Rejected,
        }
    }
}

/// A talent's submission against an opportunity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub opportunity_id: String,
    #[serde(alias = "talentName")]
    pub applicant_name: String,
    #[serde(default)]
    pub talent_id: Option<String>,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accept_from_pending_and_reviewed() {
        assert_eq!(
            ApplicationStatus::Pending
                .decide(ReviewDecision::Accept)
                .unwrap(),
            ApplicationStatus::Accepted
        );
        assert_eq!(
            ApplicationStatus::Reviewed
                .decide(ReviewDecision::Reject)
                .unwrap(),
            ApplicationStatus::Rejected
        );
    }

    #[test]
    fn test_final_states_reject_further_decisions() {
        assert!(ApplicationStatus::Accepted
            .decide(ReviewDecision::Reject)
            .is_err());
        assert!(ApplicationStatus::Rejected
            .decide(ReviewDecision::Accept)
            .is_err());
        assert!(ApplicationStatus::Accepted
            .decide(ReviewDecision::MarkReviewed)
            .is_err());
    }

    #[test]
    fn test_mark_reviewed_only_from_pending() {
        assert_eq!(
            ApplicationStatus::Pending
                .decide(ReviewDecision::MarkReviewed)
                .unwrap(),
            ApplicationStatus::Reviewed
        );
        assert!(ApplicationStatus::Reviewed
            .decide(ReviewDecision::MarkReviewed)
            .is_err());
    }

    #[test]
    fn test_accepts_legacy_talent_name_key() {
        let app: Application = serde_json::from_value(json!({
            "id": "app_9",
            "opportunityId": "opp_1",
            "talentName": "Lars Eriksson",
            "status": "pending",
            "appliedAt": "2025-10-02T08:30:00.000Z"
        }))
        .unwrap();
        assert_eq!(app.applicant_name, "Lars Eriksson");
        assert_eq!(app.talent_id, None);
        assert_eq!(app.status, ApplicationStatus::Pending);
    }
}
