//! Error types for result derivation and the quiz session.
//!
//! Bad user input never shows up here: validators return `bool` and the
//! referral parser returns `Option`. These types cover contract violations
//! and misuse of the session and share-link APIs.

use thiserror::Error;

/// Alias for `Result<T, SobiError>`.
pub type SobiResult<T> = Result<T, SobiError>;

/// The answer tokens did not form a valid main code and sub-variant.
///
/// Only reachable if the quiz's answer vocabulary drifts from the code
/// enumeration. Treat it as a defect, not a recoverable condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid result: {code}")]
pub struct InvalidResultError {
    /// The computed main code followed by the computed sub code.
    pub code: String,
}

/// Errors from the session and share-link operations.
#[derive(Debug, Error)]
pub enum SobiError {
    /// Result derivation hit a contract violation.
    #[error(transparent)]
    InvalidResult(#[from] InvalidResultError),

    /// The operation is not valid in the session's current phase.
    #[error("cannot {action} during the {phase} phase")]
    WrongPhase {
        /// What was attempted.
        action: &'static str,
        /// The phase the session was in.
        phase: &'static str,
    },

    /// The configured share origin is not an absolute URL.
    #[error("invalid share origin \"{origin}\": {source}")]
    InvalidOrigin {
        /// The rejected origin.
        origin: String,
        /// Why it was rejected.
        source: url::ParseError,
    },
}
