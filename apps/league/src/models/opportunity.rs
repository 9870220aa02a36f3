use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::errors::{AppError, Result};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    Matchday,
    Professional,
    Volunteer,
    Strategic,
    Facility,
    Content,
    Coaching,
    Sponsorship,
}

impl Category {
    /// Swedish label shown on listing badges and tabs.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Matchday => "Matchdag",
            Category::Professional => "Professionell",
            Category::Volunteer => "Volontär",
            Category::Strategic => "Strategisk",
            Category::Facility => "Anläggning",
            Category::Content => "Content & Media",
            Category::Coaching => "Tränarroll",
            Category::Sponsorship => "Sponsring & Partnerskap",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OpportunityStatus {
    #[default]
    Active,
    Draft,
    Closed,
}

impl OpportunityStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OpportunityStatus::Active => "Aktiv",
            OpportunityStatus::Draft => "Utkast",
            OpportunityStatus::Closed => "Stängd",
        }
    }

    /// draft → active (publish), active → closed, closed → active (reopen).
    pub fn can_transition_to(&self, next: OpportunityStatus) -> bool {
        matches!(
            (self, next),
            (OpportunityStatus::Draft, OpportunityStatus::Active)
                | (OpportunityStatus::Active, OpportunityStatus::Closed)
                | (OpportunityStatus::Closed, OpportunityStatus::Active)
        )
    }

    pub fn transition_to(self, next: OpportunityStatus) -> Result<OpportunityStatus> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(AppError::invalid_transition(self, next))
        }
    }
}

/// A listing published by a club.
///
/// Landing-page listings and club-owned listings were historically stored with
/// slightly different keys (`role`/`title`, `time`/`timeCommitment`,
/// `date`/`startDate`, `applicants`); the aliases accept both shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: String,
    #[serde(default)]
    pub club_id: String,
    #[serde(default, alias = "club")]
    pub club_name: String,
    #[serde(alias = "role")]
    pub title: String,
    pub category: Category,
    #[serde(rename = "type", default)]
    pub type_label: String,
    pub description: String,
    pub location: String,
    pub city: String,
    #[serde(alias = "time")]
    pub time_commitment: String,
    #[serde(default)]
    pub employment_type: Option<String>,
    #[serde(alias = "date")]
    pub start_date: String,
    #[serde(default)]
    pub compensation: Option<String>,
    #[serde(default)]
    pub spots: Option<u32>,
    #[serde(default, alias = "applicants")]
    pub applicant_count: u32,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub days_left: Option<u32>,
    #[serde(default)]
    pub status: OpportunityStatus,
}

impl Opportunity {
    pub fn is_active(&self) -> bool {
        self.status == OpportunityStatus::Active
    }

    /// Case-insensitive substring match against title, club name and description.
    /// `needle` must already be lowercased.
    pub(crate) fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.club_name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_category_parses_from_snake_case() {
        assert_eq!(Category::from_str("matchday").unwrap(), Category::Matchday);
        assert_eq!(
            Category::from_str("sponsorship").unwrap(),
            Category::Sponsorship
        );
        assert!(Category::from_str("Matchday").is_err());
    }

    #[test]
    fn test_status_transitions() {
        use OpportunityStatus::*;
        assert!(Draft.can_transition_to(Active));
        assert!(Active.can_transition_to(Closed));
        assert!(Closed.can_transition_to(Active));
        assert!(!Active.can_transition_to(Draft));
        assert!(!Closed.can_transition_to(Draft));
        assert!(!Active.can_transition_to(Active));
    }

    #[test]
    fn test_transition_error_names_both_states() {
        let err = OpportunityStatus::Closed
            .transition_to(OpportunityStatus::Draft)
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid transition from closed to draft");
    }

    #[test]
    fn test_deserializes_landing_listing_shape() {
        let raw = json!({
            "id": "listing_3",
            "club": "AIK",
            "role": "Ungdomstränare",
            "category": "volunteer",
            "type": "Volontärroll",
            "location": "Stockholm",
            "city": "Stockholm",
            "time": "6 timmar/vecka",
            "date": "Säsongsstart",
            "description": "Träna och utveckla våra unga spelare.",
            "applicants": 45
        });
        let opp: Opportunity = serde_json::from_value(raw).unwrap();
        assert_eq!(opp.title, "Ungdomstränare");
        assert_eq!(opp.club_name, "AIK");
        assert_eq!(opp.applicant_count, 45);
        assert_eq!(opp.status, OpportunityStatus::Active);
        assert!(opp.club_id.is_empty());
    }

    #[test]
    fn test_serializes_camel_case() {
        let raw = json!({
            "id": "opp_1",
            "clubId": "club_1",
            "title": "Anläggningsskötare",
            "category": "facility",
            "type": "Anläggning",
            "description": "Underhåll av gräsplan.",
            "location": "Årsta IP, Stockholm",
            "city": "Stockholm",
            "timeCommitment": "Heltid",
            "startDate": "2025-11-01",
            "status": "draft"
        });
        let opp: Opportunity = serde_json::from_value(raw).unwrap();
        let back = serde_json::to_value(&opp).unwrap();
        assert_eq!(back["clubId"], "club_1");
        assert_eq!(back["timeCommitment"], "Heltid");
        assert_eq!(back["status"], "draft");
    }

    #[test]
    fn test_mentions_is_case_insensitive_over_three_fields() {
        let opp = Opportunity {
            id: "x".into(),
            club_id: String::new(),
            club_name: "Malmö FF".into(),
            title: "Social Media Manager".into(),
            category: Category::Professional,
            type_label: String::new(),
            description: "Ansvarig för klubbens digitala närvaro.".into(),
            location: "Malmö".into(),
            city: "Malmö".into(),
            time_commitment: "Heltid".into(),
            employment_type: None,
            start_date: "Löpande".into(),
            compensation: None,
            spots: None,
            applicant_count: 0,
            featured: false,
            days_left: None,
            status: OpportunityStatus::Active,
        };
        assert!(opp.mentions("malmö"));
        assert!(opp.mentions("media"));
        assert!(opp.mentions("digitala"));
        assert!(!opp.mentions("göteborg"));
    }
}
