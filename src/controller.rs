//! Form controller
//!
//! Owns the [`FormState`] of one form instance and applies every transition
//! to it: field edits, the validate-then-submit sequence and the handling of
//! the gateway's verdict. The view only ever reads a snapshot via
//! [`FormController::state`] and receives notifications via
//! [`FormController::take_events`].

use crate::gateway::{SubmissionOutcome, SubmissionReceipt};
use crate::state::{FieldErrors, FieldName, FormData, FormState};
use crate::validation::{validate, ValidationResult};
use std::collections::VecDeque;

/// Notification shown to the user after an accepted submission
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Message sent successfully!";

/// Outbound notifications for the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A submission was accepted
    Submitted {
        message: String,
        receipt: SubmissionReceipt,
    },
    /// All values and errors were returned to their initial state
    Reset,
}

/// What a submit request turned into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRequest {
    /// A submission is already in flight; the request was dropped
    Ignored,
    /// Local validation failed; errors were applied and the form is idle
    Invalid(FieldErrors),
    /// The form is now submitting; hand this snapshot to the gateway
    Dispatch(FormData),
}

/// State machine for a single contact form
#[derive(Debug)]
pub struct FormController {
    state: FormState,
    events: VecDeque<FormEvent>,
    success_message: String,
}

impl FormController {
    pub fn new() -> Self {
        Self::with_success_message(DEFAULT_SUCCESS_MESSAGE)
    }

    /// Create a controller that reports `message` on success
    pub fn with_success_message(message: impl Into<String>) -> Self {
        Self {
            state: FormState::new(),
            events: VecDeque::new(),
            success_message: message.into(),
        }
    }

    /// Read-only snapshot for rendering
    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting
    }

    /// Replace a field's value. Only that field's stale error is cleared.
    pub fn change_field(&mut self, field: FieldName, value: impl Into<String>) {
        self.state.values.set(field, value.into());
        if self.state.field_errors.remove(&field).is_some() {
            tracing::debug!(field = %field, "Cleared stale field error");
        }
    }

    /// Start a submission attempt.
    ///
    /// Runs local validation on the current values. On success the form
    /// enters the submitting state and the normalized snapshot is returned;
    /// later edits do not affect it.
    pub fn request_submit(&mut self) -> SubmitRequest {
        if self.state.is_submitting {
            tracing::debug!("Submit ignored, attempt already in flight");
            return SubmitRequest::Ignored;
        }

        self.state.is_submitting = true;
        self.state.form_error = None;

        match validate(&self.state.values) {
            ValidationResult::Invalid(errors) => {
                tracing::info!(fields = errors.len(), "Submit blocked by validation");
                self.state.field_errors = errors.clone();
                self.state.is_submitting = false;
                SubmitRequest::Invalid(errors)
            }
            ValidationResult::Valid(data) => {
                tracing::info!("Submitting contact form");
                self.state.field_errors.clear();
                SubmitRequest::Dispatch(data)
            }
        }
    }

    /// Apply the gateway's verdict for the in-flight attempt
    pub fn complete_submit(&mut self, outcome: SubmissionOutcome) {
        if !self.state.is_submitting {
            tracing::warn!(?outcome, "Dropping submission outcome with nothing in flight");
            return;
        }
        self.state.is_submitting = false;

        match outcome {
            SubmissionOutcome::Accepted(receipt) => {
                tracing::info!(receipt_id = %receipt.id, "Submission accepted");
                self.reset_state();
                self.events.push_back(FormEvent::Submitted {
                    message: self.success_message.clone(),
                    receipt,
                });
                self.events.push_back(FormEvent::Reset);
            }
            SubmissionOutcome::Rejected(errors) => {
                tracing::info!(fields = errors.len(), "Submission rejected");
                self.state.field_errors = errors;
            }
            SubmissionOutcome::TransportError(err) => {
                tracing::warn!(error = %err, "Submission failed");
                self.state.form_error = Some(err.to_string());
            }
        }
    }

    /// Return the form to its initial values. Refused while submitting.
    pub fn reset(&mut self) -> bool {
        if self.state.is_submitting {
            tracing::debug!("Reset refused while submitting");
            return false;
        }
        self.reset_state();
        self.events.push_back(FormEvent::Reset);
        true
    }

    /// Drain pending notifications in emission order
    pub fn take_events(&mut self) -> Vec<FormEvent> {
        self.events.drain(..).collect()
    }

    fn reset_state(&mut self) {
        self.state = FormState::new();
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}
