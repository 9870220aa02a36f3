use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// The four linear wizard steps shared by the talent and club variants.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WizardStep {
    /// Identity and contact details.
    Identity,
    /// Profile details.
    Details,
    /// Skills and interests (talent) or contact person (club).
    Background,
    /// Review and submit.
    Confirmation,
}

impl WizardStep {
    pub const COUNT: u8 = 4;

    /// Steps that carry input, in order.
    pub const INPUT_STEPS: [WizardStep; 3] = [
        WizardStep::Identity,
        WizardStep::Details,
        WizardStep::Background,
    ];

    /// 1-based step number.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Identity => 1,
            WizardStep::Details => 2,
            WizardStep::Background => 3,
            WizardStep::Confirmation => 4,
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Identity => Some(WizardStep::Details),
            WizardStep::Details => Some(WizardStep::Background),
            WizardStep::Background => Some(WizardStep::Confirmation),
            WizardStep::Confirmation => None,
        }
    }

    pub fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Identity => None,
            WizardStep::Details => Some(WizardStep::Identity),
            WizardStep::Background => Some(WizardStep::Details),
            WizardStep::Confirmation => Some(WizardStep::Background),
        }
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    /// Rounded share of the wizard reached, 25 / 50 / 75 / 100.
    pub fn progress_percent(&self) -> u8 {
        ((self.number() as f32 / Self::COUNT as f32) * 100.0).round() as u8
    }

    /// "Steg N av 4".
    pub fn counter(&self) -> String {
        format!("Steg {} av {}", self.number(), Self::COUNT)
    }
}
