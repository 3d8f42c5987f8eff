//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
///
/// These are the only failures that reach a user. Boundary failures are
/// absorbed before they get this far.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Input or state-transition validation failed.
    #[error("validation error: {0}")]
    Validation(String),

    /// An unexpected failure inside the orchestration layer itself.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
