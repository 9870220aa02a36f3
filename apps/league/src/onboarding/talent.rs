use serde::Serialize;
use strum::Display;

use crate::models::{Availability, Category, ExperienceLevel, TalentProfile};
use crate::onboarding::steps::WizardStep;
use crate::onboarding::validation::{toggle, FieldErrors};
use crate::onboarding::wizard::OnboardingForm;

/// Skills offered as toggles on step 3.
pub const SKILLS: &[&str] = &[
    "Social Media",
    "Event Management",
    "Coaching",
    "Data Analysis",
    "Marketing",
    "Administration",
    "Sponsorship",
    "Fotografi",
    "Video",
    "Annat",
];

/// Interest areas offered on step 3.
pub const INTERESTS: [Category; 4] = [
    Category::Matchday,
    Category::Professional,
    Category::Volunteer,
    Category::Strategic,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum TalentField {
    FirstName,
    LastName,
    Email,
    Phone,
    City,
    Password,
    Bio,
    Experience,
    Availability,
    Skills,
    Interests,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TalentForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub password: String,
    pub bio: String,
    pub experience: ExperienceLevel,
    pub availability: Vec<Availability>,
    pub skills: Vec<String>,
    pub interests: Vec<Category>,
}

impl TalentForm {
    pub fn toggle_availability(&mut self, value: Availability) {
        toggle(&mut self.availability, value);
    }

    pub fn toggle_skill(&mut self, skill: &str) {
        toggle(&mut self.skills, skill.to_string());
    }

    pub fn toggle_interest(&mut self, interest: Category) {
        toggle(&mut self.interests, interest);
    }
}

impl OnboardingForm for TalentForm {
    type Field = TalentField;
    type Profile = TalentProfile;

    fn validate_step(&self, step: WizardStep) -> FieldErrors<TalentField> {
        let mut errors = FieldErrors::new();
        match step {
            WizardStep::Identity => {
                errors.require_text(TalentField::FirstName, &self.first_name, "Förnamn krävs");
                errors.require_text(TalentField::LastName, &self.last_name, "Efternamn krävs");
                errors.require_email(TalentField::Email, &self.email);
                errors.require_text(TalentField::Phone, &self.phone, "Telefon krävs");
                errors.require_text(TalentField::City, &self.city, "Stad krävs");
                errors.require_password(TalentField::Password, &self.password);
            }
            WizardStep::Details => {
                errors.require_text(TalentField::Bio, &self.bio, "Presentation krävs");
                errors.require_any(
                    TalentField::Availability,
                    &self.availability,
                    "Välj minst en tillgänglighet",
                );
            }
            WizardStep::Background => {
                errors.require_any(TalentField::Skills, &self.skills, "Välj minst en kompetens");
                errors.require_any(
                    TalentField::Interests,
                    &self.interests,
                    "Välj minst ett intresseområde",
                );
            }
            WizardStep::Confirmation => {}
        }
        errors
    }

    fn step_title(step: WizardStep) -> &'static str {
        match step {
            WizardStep::Identity => "Grundläggande information",
            WizardStep::Details => "Din profil",
            WizardStep::Background => "Kompetenser & Intressen",
            WizardStep::Confirmation => "Bekräfta din profil",
        }
    }

    fn finish(&self) -> Result<TalentProfile, FieldErrors<TalentField>> {
        let mut errors = FieldErrors::new();
        for step in WizardStep::INPUT_STEPS {
            for (field, message) in self.validate_step(step).iter() {
                errors.insert(field, message);
            }
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(TalentProfile {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            city: self.city.trim().to_string(),
            bio: self.bio.trim().to_string(),
            experience: self.experience,
            availability: self.availability.clone(),
            skills: self.skills.clone(),
            interests: self.interests.clone(),
        })
    }
}
