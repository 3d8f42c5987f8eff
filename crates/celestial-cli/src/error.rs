//! Terminal client errors.

use celestial_core::error::DomainError;
use thiserror::Error;

/// Errors that end the terminal session.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading stdin or writing stdout failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The reading cycle was driven through an invalid transition.
    #[error(transparent)]
    Domain(#[from] DomainError),
}
