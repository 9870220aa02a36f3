// Onboarding: the four-step talent and club registration wizards and the
// role-selection flow that wraps them.
// Validation failures are `FieldErrors` maps, never `AppError`.

pub mod club;
pub mod flow;
pub mod steps;
pub mod talent;
pub mod validation;
pub mod wizard;

pub use club::{ClubField, ClubForm};
pub use flow::{OnboardingFlow, Stage};
pub use steps::WizardStep;
pub use talent::{TalentField, TalentForm};
pub use validation::FieldErrors;
pub use wizard::{OnboardingForm, StepBack, StepOutcome, Wizard, WizardCallbacks};
