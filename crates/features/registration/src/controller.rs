//! Form state machine.
//!
//! [`FormController`] is a synchronous reducer: every input is a [`FormEvent`]
//! and the only side effects it asks for are timers, returned as [`Effect`]s.
//! Callers decide how to wait (see [`crate::FormSession`] for the Tokio driver).

use crate::draft::{FieldErrors, RegistrationDraft};
use crate::field::Field;
use crate::validators::{validate, validate_draft};
use setorial_kernel::domain::config::FormConfig;
use setorial_kernel::domain::constants::{
    DEFAULT_SUBMIT_DELAY_MS, DEFAULT_SUCCESS_TTL_MS, SUBMIT_LABEL, SUBMITTING_LABEL, SUCCESS_MESSAGE,
};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Lifecycle of a submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Editing,
    /// An accepted submission is waiting for completion; further submits are refused.
    Submitting,
    /// The last submission completed and its success message is visible.
    Succeeded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Changed { field: Field, value: String },
    Submit,
    SubmissionCompleted,
    /// Fired by the timer scheduled with [`Effect::ExpireSuccess`].
    SuccessExpired { generation: u64 },
}

/// A timer the controller wants fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    CompleteSubmission { after: Duration },
    ExpireSuccess { after: Duration, generation: u64 },
}

impl Effect {
    #[must_use]
    pub const fn delay(self) -> Duration {
        match self {
            Self::CompleteSubmission { after } | Self::ExpireSuccess { after, .. } => after,
        }
    }

    /// The event to feed back once the delay has elapsed.
    #[must_use]
    pub const fn into_event(self) -> FormEvent {
        match self {
            Self::CompleteSubmission { .. } => FormEvent::SubmissionCompleted,
            Self::ExpireSuccess { generation, .. } => FormEvent::SuccessExpired { generation },
        }
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field is valid; completion is due after `after`.
    Accepted { after: Duration },
    /// Validation failed; the failures are now displayed.
    Rejected(FieldErrors),
    /// A submission is already in flight.
    AlreadySubmitting,
}

impl SubmitOutcome {
    #[must_use]
    pub const fn effect(&self) -> Option<Effect> {
        match self {
            Self::Accepted { after } => Some(Effect::CompleteSubmission { after: *after }),
            Self::Rejected(_) | Self::AlreadySubmitting => None,
        }
    }
}

/// Delays of the simulated submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormTimings {
    pub submit_delay: Duration,
    pub success_ttl: Duration,
}

impl Default for FormTimings {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS),
            success_ttl: Duration::from_millis(DEFAULT_SUCCESS_TTL_MS),
        }
    }
}

impl From<&FormConfig> for FormTimings {
    fn from(config: &FormConfig) -> Self {
        Self { submit_delay: config.submit_delay(), success_ttl: config.success_ttl() }
    }
}

/// Everything a renderer needs to draw the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub draft: RegistrationDraft,
    pub errors: FieldErrors,
    pub phase: Phase,
    pub success_message: Option<&'static str>,
}

impl FormSnapshot {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() { SUBMITTING_LABEL } else { SUBMIT_LABEL }
    }

    /// Message to show under `field`, if it failed validation.
    #[must_use]
    pub fn error_message(&self, field: Field) -> Option<String> {
        self.errors.get(field).map(|error| error.to_string())
    }
}

#[derive(Debug, Default)]
pub struct FormController {
    timings: FormTimings,
    draft: RegistrationDraft,
    errors: FieldErrors,
    phase: Phase,
    success_message: Option<&'static str>,
    /// Bumped each time a success message is shown; older expiry timers become stale.
    generation: u64,
}

impl FormController {
    #[must_use]
    pub fn new(timings: FormTimings) -> Self {
        Self { timings, ..Self::default() }
    }

    pub fn apply(&mut self, event: FormEvent) -> Option<Effect> {
        match event {
            FormEvent::Changed { field, value } => {
                self.change(field, value);
                None
            },
            FormEvent::Submit => self.submit().effect(),
            FormEvent::SubmissionCompleted => self.complete_submission(),
            FormEvent::SuccessExpired { generation } => {
                self.expire_success(generation);
                None
            },
        }
    }

    /// Stores `value` and revalidates only that field. Allowed in every phase.
    pub fn change(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
        let outcome = validate(field, self.draft.value(field));
        debug!(field = %field, valid = outcome.is_ok(), "Field changed");
        self.errors.record(field, outcome);
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.phase == Phase::Submitting {
            debug!("Submit ignored, a submission is already in flight");
            return SubmitOutcome::AlreadySubmitting;
        }

        let errors = validate_draft(&self.draft);
        if !errors.is_empty() {
            warn!(failures = errors.len(), "Submit rejected by validation");
            self.errors = errors.clone();
            self.success_message = None;
            self.phase = Phase::Editing;
            return SubmitOutcome::Rejected(errors);
        }

        info!(sector = %self.draft.sector, "Submitting registration");
        self.errors.clear();
        self.phase = Phase::Submitting;
        SubmitOutcome::Accepted { after: self.timings.submit_delay }
    }

    /// Finishes an in-flight submission: clears the form and shows the success message.
    pub fn complete_submission(&mut self) -> Option<Effect> {
        if self.phase != Phase::Submitting {
            debug!(phase = ?self.phase, "Completion ignored, nothing in flight");
            return None;
        }

        self.draft.clear();
        self.errors.clear();
        self.phase = Phase::Succeeded;
        self.success_message = Some(SUCCESS_MESSAGE);
        self.generation = self.generation.wrapping_add(1);
        info!(generation = self.generation, "Registration completed");

        Some(Effect::ExpireSuccess { after: self.timings.success_ttl, generation: self.generation })
    }

    /// Hides the success message unless a newer one replaced it.
    pub fn expire_success(&mut self, generation: u64) {
        if generation != self.generation || self.success_message.is_none() {
            debug!(generation, current = self.generation, "Stale success expiry ignored");
            return;
        }

        self.success_message = None;
        if self.phase == Phase::Succeeded {
            self.phase = Phase::Editing;
        }
        info!(generation, "Success message expired");
    }

    #[must_use]
    pub const fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn success_message(&self) -> Option<&'static str> {
        self.success_message
    }

    #[must_use]
    pub const fn timings(&self) -> FormTimings {
        self.timings
    }

    #[must_use]
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            draft: self.draft.clone(),
            errors: self.errors.clone(),
            phase: self.phase,
            success_message: self.success_message,
        }
    }
}
