//! Trait abstraction for the submission boundary to enable mocking in tests

use super::outcome::SubmissionOutcome;
use crate::state::FormData;
use async_trait::async_trait;

/// Asynchronous boundary that receives contact form submissions.
///
/// Implementations must re-validate their input and report every failure as a
/// [`SubmissionOutcome`] value rather than an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Submit a message and wait for the verdict
    async fn submit(&self, data: FormData) -> SubmissionOutcome;
}
