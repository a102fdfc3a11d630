/*!
 * Error Types
 * Failure signals raised by the polling entry points, with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for the public polling API
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Public failure taxonomy
///
/// The two timeout-flavoured variants carry the fully composed failure
/// description and display it verbatim, so the message a test prints is
/// exactly `"<reason>\nExpected: <self>\n     but: <mismatch>"`.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ProbeError {
    #[error("{0}")]
    #[diagnostic(
        code(probe::assertion_failed),
        help("The probe was never satisfied before the deadline. Check the expected and observed state above.")
    )]
    AssertionFailed(String),

    #[error("{0}")]
    #[diagnostic(
        code(probe::synchronization_timeout),
        help("Timed out waiting for the subject to reach the expected state. Consider a longer duration.")
    )]
    SynchronizationTimeout(String),

    #[error("contract violation: {0}")]
    #[diagnostic(
        code(probe::contract_violation),
        help("An argument broke the polling contract. This is a programming error and is never retried.")
    )]
    ContractViolation(String),
}

impl ProbeError {
    /// Build a contract violation from any displayable detail
    pub fn contract_violation(detail: impl Into<String>) -> Self {
        Self::ContractViolation(detail.into())
    }

    /// Composed failure description, or the violation detail
    pub fn message(&self) -> &str {
        match self {
            Self::AssertionFailed(msg)
            | Self::SynchronizationTimeout(msg)
            | Self::ContractViolation(msg) => msg,
        }
    }

    pub fn is_assertion_failure(&self) -> bool {
        matches!(self, Self::AssertionFailed(_))
    }

    pub fn is_synchronization_timeout(&self) -> bool {
        matches!(self, Self::SynchronizationTimeout(_))
    }

    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::ContractViolation(_))
    }
}

/// Deadline passed before the probe was satisfied
///
/// Returned by [`Poller::check`](crate::Poller::check). Deliberately carries
/// no description; the entry points translate it into a [`ProbeError`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Diagnostic)]
#[error("poller timed out before probe was satisfied")]
#[diagnostic(code(probe::poll_timeout))]
pub struct PollTimeout;
