//! Outer onboarding flow: role selection, then the talent or club wizard.
//!
//! The flow turns a finished wizard into a `UserProfile`, logs it into the
//! session and sends the user to their dashboard.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::errors::{AppError, Result};
use crate::models::{ProfileDetails, UserKind, UserProfile};
use crate::onboarding::club::ClubForm;
use crate::onboarding::talent::TalentForm;
use crate::onboarding::wizard::{StepBack, StepOutcome, Wizard, WizardCallbacks};
use crate::routes::{Navigator, Route};
use crate::session::AuthSession;

#[derive(Debug, Clone)]
pub enum Stage {
    ChoosingRole,
    Talent(Wizard<TalentForm>),
    Club(Wizard<ClubForm>),
    Done(UserProfile),
}

/// Captures what a wizard hands back during one `next` / `previous` call.
struct Collector<P> {
    profile: Option<P>,
    exited: bool,
}

impl<P> Default for Collector<P> {
    fn default() -> Self {
        Collector {
            profile: None,
            exited: false,
        }
    }
}

impl<P> WizardCallbacks<P> for Collector<P> {
    fn on_complete(&mut self, profile: P) {
        self.profile = Some(profile);
    }

    fn on_back(&mut self) {
        self.exited = true;
    }
}

#[derive(Debug, Clone)]
pub struct OnboardingFlow {
    stage: Stage,
}

impl Default for OnboardingFlow {
    fn default() -> Self {
        OnboardingFlow {
            stage: Stage::ChoosingRole,
        }
    }
}

impl OnboardingFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn role(&self) -> Option<UserKind> {
        match &self.stage {
            Stage::ChoosingRole => None,
            Stage::Talent(_) => Some(UserKind::Talent),
            Stage::Club(_) => Some(UserKind::Club),
            Stage::Done(user) => Some(user.kind()),
        }
    }

    /// Opens a fresh wizard for `kind`. Only valid on the role selection screen.
    pub fn choose_role(&mut self, kind: UserKind) -> Result<()> {
        if !matches!(self.stage, Stage::ChoosingRole) {
            return Err(AppError::Validation(
                "a role has already been chosen".to_string(),
            ));
        }
        self.stage = match kind {
            UserKind::Talent => Stage::Talent(Wizard::new()),
            UserKind::Club => Stage::Club(Wizard::new()),
        };
        info!("Onboarding started as {kind}");
        Ok(())
    }

    pub fn talent_mut(&mut self) -> Option<&mut Wizard<TalentForm>> {
        match &mut self.stage {
            Stage::Talent(wizard) => Some(wizard),
            _ => None,
        }
    }

    pub fn club_mut(&mut self) -> Option<&mut Wizard<ClubForm>> {
        match &mut self.stage {
            Stage::Club(wizard) => Some(wizard),
            _ => None,
        }
    }

    pub fn next(
        &mut self,
        session: &mut dyn AuthSession,
        navigator: &mut dyn Navigator,
        now: DateTime<Utc>,
    ) -> Result<StepOutcome> {
        let (outcome, finished) = match &mut self.stage {
            Stage::ChoosingRole => {
                return Err(AppError::Validation("choose talent or club first".to_string()))
            }
            Stage::Done(_) => return Ok(StepOutcome::AlreadyCompleted),
            Stage::Talent(wizard) => {
                let mut collector = Collector::default();
                let outcome = wizard.next(&mut collector);
                (outcome, collector.profile.map(ProfileDetails::Talent))
            }
            Stage::Club(wizard) => {
                let mut collector = Collector::default();
                let outcome = wizard.next(&mut collector);
                (outcome, collector.profile.map(ProfileDetails::Club))
            }
        };

        if let Some(details) = finished {
            let user = UserProfile::new(details, now);
            session.login(user.clone())?;
            navigator.navigate(Route::dashboard_for(user.kind()));
            info!("Onboarding finished for {}", user.id);
            self.stage = Stage::Done(user);
        }
        Ok(outcome)
    }

    /// Steps back. From step 1 this returns to role selection; from role
    /// selection it leaves onboarding for the landing page.
    pub fn previous(&mut self, navigator: &mut dyn Navigator) -> StepBack {
        let (back, exited) = match &mut self.stage {
            Stage::ChoosingRole => {
                navigator.navigate(Route::Landing);
                return StepBack::Exited;
            }
            Stage::Done(_) => return StepBack::AlreadyCompleted,
            Stage::Talent(wizard) => {
                let mut collector = Collector::default();
                (wizard.previous(&mut collector), collector.exited)
            }
            Stage::Club(wizard) => {
                let mut collector = Collector::default();
                (wizard.previous(&mut collector), collector.exited)
            }
        };

        if exited {
            self.stage = Stage::ChoosingRole;
        }
        back
    }
}
