//! Simulated submission endpoint
//!
//! Stands in for a remote contact endpoint: it waits, re-validates the
//! payload, waits again and then "forwards" the message as a structured log
//! event. Nothing is written to disk.

use super::outcome::{SubmissionOutcome, SubmissionReceipt, TransportError};
use super::traits::SubmissionGateway;
use crate::state::FormData;
use crate::validation::{validate, ValidationResult};
use async_trait::async_trait;
use std::time::Duration;

/// Default simulated validation latency
const DEFAULT_VALIDATION_DELAY: Duration = Duration::from_millis(500);

/// Default simulated forwarding latency
const DEFAULT_SUBMISSION_DELAY: Duration = Duration::from_millis(200);

/// Default upper bound on one round-trip
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Timing parameters for the simulated endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatewayConfig {
    pub validation_delay: Duration,
    pub submission_delay: Duration,
    pub timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            validation_delay: DEFAULT_VALIDATION_DELAY,
            submission_delay: DEFAULT_SUBMISSION_DELAY,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Gateway that simulates a remote endpoint with fixed latencies
pub struct SimulatedGateway {
    config: GatewayConfig,
}

impl SimulatedGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self { config }
    }

    async fn round_trip(&self, data: FormData) -> SubmissionOutcome {
        tokio::time::sleep(self.config.validation_delay).await;

        let normalized = match validate(&data) {
            ValidationResult::Valid(normalized) => normalized,
            ValidationResult::Invalid(errors) => {
                tracing::debug!(fields = errors.len(), "Submission rejected at boundary");
                return SubmissionOutcome::Rejected(errors);
            }
        };

        tokio::time::sleep(self.config.submission_delay).await;

        let receipt = SubmissionReceipt::new();
        tracing::info!(
            receipt_id = %receipt.id,
            email = %normalized.email,
            subject = %normalized.subject,
            message_chars = normalized.message.chars().count(),
            "Message forwarded"
        );

        SubmissionOutcome::Accepted(receipt)
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(GatewayConfig::default())
    }
}

#[async_trait]
impl SubmissionGateway for SimulatedGateway {
    async fn submit(&self, data: FormData) -> SubmissionOutcome {
        match tokio::time::timeout(self.config.timeout, self.round_trip(data)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.config.timeout.as_millis() as u64,
                    "Submission timed out"
                );
                TransportError::Timeout(self.config.timeout).into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldName;
    use pretty_assertions::assert_eq;
    use tokio::time::Instant;

    fn valid_data() -> FormData {
        FormData::new(
            "Alice",
            "alice@example.com",
            "Hello there",
            "This is a long enough message.",
        )
    }

    #[test]
    fn test_default_config_matches_reference_delays() {
        let config = GatewayConfig::default();
        assert_eq!(config.validation_delay, Duration::from_millis(500));
        assert_eq!(config.submission_delay, Duration::from_millis(200));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_valid_message_is_accepted_after_both_delays() {
        let gateway = SimulatedGateway::default();
        let started = Instant::now();

        let outcome = gateway.submit(valid_data()).await;

        assert!(matches!(outcome, SubmissionOutcome::Accepted(_)));
        assert!(started.elapsed() >= Duration::from_millis(700));
    }

    #[tokio::test(start_paused = true)]
    async fn test_boundary_revalidates_input() {
        let gateway = SimulatedGateway::default();
        let mut data = valid_data();
        data.email = "not-an-email".to_string();

        let outcome = gateway.submit(data).await;

        let SubmissionOutcome::Rejected(errors) = outcome else {
            panic!("expected rejection, got {outcome:?}");
        };
        assert_eq!(
            errors.get(&FieldName::Email).map(String::as_str),
            Some("Invalid email address")
        );
        assert_eq!(errors.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejection_skips_submission_delay() {
        let gateway = SimulatedGateway::new(GatewayConfig {
            validation_delay: Duration::from_millis(100),
            submission_delay: Duration::from_secs(60),
            timeout: Duration::from_secs(120),
        });
        let started = Instant::now();

        let outcome = gateway.submit(FormData::default()).await;

        assert!(matches!(outcome, SubmissionOutcome::Rejected(_)));
        assert!(started.elapsed() < Duration::from_secs(60));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_round_trip_times_out() {
        let gateway = SimulatedGateway::new(GatewayConfig {
            validation_delay: Duration::from_secs(10),
            submission_delay: Duration::from_millis(200),
            timeout: Duration::from_secs(1),
        });

        let outcome = gateway.submit(valid_data()).await;

        assert_eq!(
            outcome,
            SubmissionOutcome::TransportError(TransportError::Timeout(Duration::from_secs(1)))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_padded_values_pass_the_boundary() {
        let gateway = SimulatedGateway::default();
        let mut data = valid_data();
        data.name = "  Al  ".to_string();

        let outcome = gateway.submit(data).await;

        assert!(matches!(outcome, SubmissionOutcome::Accepted(_)));
    }
}
