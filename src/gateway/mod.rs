//! Submission gateway module

mod outcome;
mod simulated;
mod traits;

pub use outcome::{SubmissionOutcome, SubmissionReceipt, TransportError};
pub use simulated::{GatewayConfig, SimulatedGateway};
pub use traits::SubmissionGateway;

#[cfg(test)]
pub use traits::MockSubmissionGateway;
