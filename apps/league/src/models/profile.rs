use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::models::opportunity::Category;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UserKind {
    Talent,
    Club,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
pub enum ExperienceLevel {
    #[serde(rename = "none")]
    #[strum(serialize = "Ingen erfarenhet")]
    NoExperience,
    #[default]
    #[serde(rename = "1-3")]
    #[strum(serialize = "1-3 år")]
    OneToThree,
    #[serde(rename = "3-5")]
    #[strum(serialize = "3-5 år")]
    ThreeToFive,
    #[serde(rename = "5+")]
    #[strum(serialize = "5+ år")]
    FivePlus,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Availability {
    Fulltime,
    Parttime,
    Volunteer,
    Matchday,
}

impl Availability {
    pub fn label(&self) -> &'static str {
        match self {
            Availability::Fulltime => "Heltid",
            Availability::Parttime => "Deltid",
            Availability::Volunteer => "Volontär",
            Availability::Matchday => "Matchdag",
        }
    }
}

/// Swedish league tiers a club can register under.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum Division {
    Allsvenskan,
    Superettan,
    #[serde(rename = "Division 1")]
    #[strum(serialize = "Division 1")]
    Division1,
    #[default]
    #[serde(rename = "Division 2")]
    #[strum(serialize = "Division 2")]
    Division2,
    #[serde(rename = "Division 3")]
    #[strum(serialize = "Division 3")]
    Division3,
    #[serde(rename = "Division 4")]
    #[strum(serialize = "Division 4")]
    Division4,
    #[serde(rename = "Division 5")]
    #[strum(serialize = "Division 5")]
    Division5,
    #[serde(rename = "Division 6")]
    #[strum(serialize = "Division 6")]
    Division6,
    #[serde(rename = "Division 7")]
    #[strum(serialize = "Division 7")]
    Division7,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub bio: String,
    pub experience: ExperienceLevel,
    pub availability: Vec<Availability>,
    pub skills: Vec<String>,
    pub interests: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubProfile {
    pub club_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub division: Division,
    pub about: String,
    pub founded: u16,
    pub members: u32,
    #[serde(default)]
    pub website: Option<String>,
    pub contact_name: String,
    pub contact_role: String,
    pub contact_email: String,
    pub contact_phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProfileDetails {
    Talent(TalentProfile),
    Club(ClubProfile),
}

/// A finished account created by the onboarding flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub details: ProfileDetails,
}

impl UserProfile {
    /// Builds a profile with an id of the form `<kind>_<unix millis>`.
    pub fn new(details: ProfileDetails, now: DateTime<Utc>) -> Self {
        let kind = match &details {
            ProfileDetails::Talent(_) => UserKind::Talent,
            ProfileDetails::Club(_) => UserKind::Club,
        };
        UserProfile {
            id: format!("{}_{}", kind, now.timestamp_millis()),
            created_at: now,
            updated_at: now,
            details,
        }
    }

    pub fn kind(&self) -> UserKind {
        match self.details {
            ProfileDetails::Talent(_) => UserKind::Talent,
            ProfileDetails::Club(_) => UserKind::Club,
        }
    }

    pub fn display_name(&self) -> String {
        match &self.details {
            ProfileDetails::Talent(t) => format!("{} {}", t.first_name, t.last_name),
            ProfileDetails::Club(c) => c.club_name.clone(),
        }
    }

    pub fn as_club(&self) -> Option<&ClubProfile> {
        match &self.details {
            ProfileDetails::Club(c) => Some(c),
            ProfileDetails::Talent(_) => None,
        }
    }

    pub fn as_talent(&self) -> Option<&TalentProfile> {
        match &self.details {
            ProfileDetails::Talent(t) => Some(t),
            ProfileDetails::Club(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn talent() -> TalentProfile {
        TalentProfile {
            first_name: "Sofia".into(),
            last_name: "Bergman".into(),
            email: "sofia@example.se".into(),
            phone: "070-123 45 67".into(),
            city: "Stockholm".into(),
            bio: "Fotograf".into(),
            experience: ExperienceLevel::default(),
            availability: vec![Availability::Parttime],
            skills: vec!["Fotografi".into()],
            interests: vec![Category::Matchday],
        }
    }

    #[test]
    fn test_id_uses_kind_and_millis() {
        let now = Utc.with_ymd_and_hms(2025, 10, 1, 12, 0, 0).unwrap();
        let user = UserProfile::new(ProfileDetails::Talent(talent()), now);
        assert_eq!(user.id, format!("talent_{}", now.timestamp_millis()));
        assert_eq!(user.kind(), UserKind::Talent);
        assert_eq!(user.display_name(), "Sofia Bergman");
    }

    #[test]
    fn test_serialized_shape_is_flat_with_type_tag() {
        let now = Utc.with_ymd_and_hms(2025, 10, 1, 12, 0, 0).unwrap();
        let user = UserProfile::new(ProfileDetails::Talent(talent()), now);
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["type"], "talent");
        assert_eq!(value["firstName"], "Sofia");
        assert_eq!(value["experience"], "1-3");
        assert_eq!(value["availability"][0], "parttime");
        assert!(value.get("password").is_none());

        let back: UserProfile = serde_json::from_value(value).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn test_division_strings() {
        assert_eq!(Division::default().to_string(), "Division 2");
        assert_eq!(Division::Allsvenskan.to_string(), "Allsvenskan");
        assert_eq!(
            serde_json::to_value(Division::Division7).unwrap(),
            "Division 7"
        );
    }
}
