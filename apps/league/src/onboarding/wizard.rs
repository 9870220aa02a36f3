//! Generic four-step wizard.
//!
//! A `Wizard` owns the form being filled in, the current `WizardStep` and the
//! error map of the last failed validation. The form type decides what each step
//! requires (`OnboardingForm::validate_step`); the wizard decides when validation
//! runs and what happens on success:
//!
//! - `next` on steps 1-3 validates that step only and advances when it passes.
//! - `next` on the confirmation step re-validates every input step, then hands
//!   the finished profile to `WizardCallbacks::on_complete` exactly once.
//! - `previous` on step 1 hands control back via `WizardCallbacks::on_back`.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::onboarding::steps::WizardStep;
use crate::onboarding::validation::FieldErrors;

/// A form collected by the wizard.
pub trait OnboardingForm: Clone + Default + fmt::Debug {
    type Field: Copy + Ord + fmt::Display + fmt::Debug + Serialize;
    type Profile;

    /// Runs the rules of a single step. The confirmation step has no rules.
    fn validate_step(&self, step: WizardStep) -> FieldErrors<Self::Field>;

    /// Heading shown for a step.
    fn step_title(step: WizardStep) -> &'static str;

    /// Builds the finished profile, or reports every failing field.
    fn finish(&self) -> Result<Self::Profile, FieldErrors<Self::Field>>;
}

/// Collaborators notified by the wizard.
pub trait WizardCallbacks<P> {
    fn on_complete(&mut self, profile: P);
    fn on_back(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Advanced(WizardStep),
    /// Validation failed; the wizard stays on (or returns to) this step.
    Blocked(WizardStep),
    Completed,
    /// The profile was already handed over; nothing happened.
    AlreadyCompleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepBack {
    Moved(WizardStep),
    Exited,
    AlreadyCompleted,
}

#[derive(Debug, Clone)]
pub struct Wizard<F: OnboardingForm> {
    step: WizardStep,
    form: F,
    errors: FieldErrors<F::Field>,
    completed: bool,
}

impl<F: OnboardingForm> Default for Wizard<F> {
    fn default() -> Self {
        Self::with_form(F::default())
    }
}

impl<F: OnboardingForm> Wizard<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(form: F) -> Self {
        Wizard {
            step: WizardStep::Identity,
            form,
            errors: FieldErrors::new(),
            completed: false,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors<F::Field> {
        &self.errors
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn title(&self) -> &'static str {
        F::step_title(self.step)
    }

    pub fn progress_percent(&self) -> u8 {
        self.step.progress_percent()
    }

    /// Applies an edit to the form and clears any pending error on `field`.
    pub fn edit(&mut self, field: F::Field, apply: impl FnOnce(&mut F)) {
        apply(&mut self.form);
        self.errors.remove(field);
    }

    pub fn next(&mut self, callbacks: &mut impl WizardCallbacks<F::Profile>) -> StepOutcome {
        if self.completed {
            return StepOutcome::AlreadyCompleted;
        }

        let Some(next) = self.step.next() else {
            return self.complete(callbacks);
        };

        let errors = self.form.validate_step(self.step);
        if !errors.is_empty() {
            debug!(step = %self.step, failing = errors.len(), "Step validation failed");
            self.errors = errors;
            return StepOutcome::Blocked(self.step);
        }

        debug!(from = %self.step, to = %next, "Advancing wizard");
        self.errors = FieldErrors::new();
        self.step = next;
        StepOutcome::Advanced(next)
    }

    pub fn previous(&mut self, callbacks: &mut impl WizardCallbacks<F::Profile>) -> StepBack {
        if self.completed {
            return StepBack::AlreadyCompleted;
        }
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                StepBack::Moved(previous)
            }
            None => {
                callbacks.on_back();
                StepBack::Exited
            }
        }
    }

    fn complete(&mut self, callbacks: &mut impl WizardCallbacks<F::Profile>) -> StepOutcome {
        for step in WizardStep::INPUT_STEPS {
            let errors = self.form.validate_step(step);
            if !errors.is_empty() {
                debug!(step = %step, "Confirmation found an invalid earlier step");
                self.errors = errors;
                self.step = step;
                return StepOutcome::Blocked(step);
            }
        }

        match self.form.finish() {
            Ok(profile) => {
                self.errors = FieldErrors::new();
                self.completed = true;
                info!("Onboarding wizard completed");
                callbacks.on_complete(profile);
                StepOutcome::Completed
            }
            Err(errors) => {
                self.errors = errors;
                StepOutcome::Blocked(self.step)
            }
        }
    }
}
