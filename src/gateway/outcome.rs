//! Submission outcome types

use crate::state::FieldErrors;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Proof of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
        }
    }
}

impl Default for SubmissionReceipt {
    fn default() -> Self {
        Self::new()
    }
}

/// Failure to reach the receiving end. Not tied to any field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Submission timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
    #[error("Connection lost: {0}")]
    Disconnected(String),
}

/// Result of one submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The message was accepted and forwarded
    Accepted(SubmissionReceipt),
    /// Boundary validation failed; same shape as client-side field errors
    Rejected(FieldErrors),
    /// The attempt never reached a verdict
    TransportError(TransportError),
}

impl From<TransportError> for SubmissionOutcome {
    fn from(err: TransportError) -> Self {
        SubmissionOutcome::TransportError(err)
    }
}
