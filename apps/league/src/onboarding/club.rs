use serde::Serialize;
use strum::Display;

use crate::models::{ClubProfile, Division};
use crate::onboarding::steps::WizardStep;
use crate::onboarding::validation::FieldErrors;
use crate::onboarding::wizard::OnboardingForm;

pub const ABOUT_MAX_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ClubField {
    ClubName,
    Email,
    Phone,
    City,
    Division,
    Password,
    About,
    Founded,
    Members,
    Website,
    ContactName,
    ContactRole,
    ContactEmail,
    ContactPhone,
}

/// Club registration form. `founded` and `members` are numeric inputs; the input
/// widget guarantees digits, so only presence is checked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClubForm {
    pub club_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub division: Division,
    pub password: String,
    about: String,
    pub founded: Option<u16>,
    pub members: Option<u32>,
    pub website: String,
    pub contact_name: String,
    pub contact_role: String,
    pub contact_email: String,
    pub contact_phone: String,
}

impl ClubForm {
    pub fn about(&self) -> &str {
        &self.about
    }

    /// Stores the description, cut at 500 characters like the text area does.
    pub fn set_about(&mut self, text: &str) {
        self.about = text.chars().take(ABOUT_MAX_CHARS).collect();
    }

    /// "N/500 tecken".
    pub fn about_counter(&self) -> String {
        format!("{}/{} tecken", self.about.chars().count(), ABOUT_MAX_CHARS)
    }
}

impl OnboardingForm for ClubForm {
    type Field = ClubField;
    type Profile = ClubProfile;

    fn validate_step(&self, step: WizardStep) -> FieldErrors<ClubField> {
        let mut errors = FieldErrors::new();
        match step {
            WizardStep::Identity => {
                errors.require_text(ClubField::ClubName, &self.club_name, "Klubbnamn krävs");
                errors.require_email(ClubField::Email, &self.email);
                errors.require_text(ClubField::Phone, &self.phone, "Telefon krävs");
                errors.require_text(ClubField::City, &self.city, "Stad krävs");
                errors.require_password(ClubField::Password, &self.password);
            }
            WizardStep::Details => {
                errors.require_text(ClubField::About, &self.about, "Beskrivning krävs");
                errors.require_present(ClubField::Founded, self.founded, "Grundad år krävs");
                errors.require_present(ClubField::Members, self.members, "Antal medlemmar krävs");
            }
            WizardStep::Background => {
                errors.require_text(
                    ClubField::ContactName,
                    &self.contact_name,
                    "Kontaktperson krävs",
                );
                errors.require_text(ClubField::ContactRole, &self.contact_role, "Roll krävs");
                errors.require_email(ClubField::ContactEmail, &self.contact_email);
                errors.require_text(ClubField::ContactPhone, &self.contact_phone, "Telefon krävs");
            }
            WizardStep::Confirmation => {}
        }
        errors
    }

    fn step_title(step: WizardStep) -> &'static str {
        match step {
            WizardStep::Identity => "Klubbinformation",
            WizardStep::Details => "Om klubben",
            WizardStep::Background => "Kontaktperson",
            WizardStep::Confirmation => "Bekräfta klubbprofil",
        }
    }

    fn finish(&self) -> Result<ClubProfile, FieldErrors<ClubField>> {
        let mut errors = FieldErrors::new();
        for step in WizardStep::INPUT_STEPS {
            for (field, message) in self.validate_step(step).iter() {
                errors.insert(field, message);
            }
        }

        match (self.founded, self.members) {
            (Some(founded), Some(members)) if errors.is_empty() => {
                let website = self.website.trim();
                Ok(ClubProfile {
                    club_name: self.club_name.trim().to_string(),
                    email: self.email.trim().to_string(),
                    phone: self.phone.trim().to_string(),
                    city: self.city.trim().to_string(),
                    division: self.division,
                    about: self.about.trim().to_string(),
                    founded,
                    members,
                    website: (!website.is_empty()).then(|| website.to_string()),
                    contact_name: self.contact_name.trim().to_string(),
                    contact_role: self.contact_role.trim().to_string(),
                    contact_email: self.contact_email.trim().to_string(),
                    contact_phone: self.contact_phone.trim().to_string(),
                })
            }
            _ => Err(errors),
        }
    }
}
