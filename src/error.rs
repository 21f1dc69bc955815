//! Error type shared by every fallible routine in the crate.

use thiserror::Error;

/// Errors reported to callers. Nothing here is retryable: every variant
/// describes input that falls outside an operation's contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed or out-of-contract input (non-square matrix, input over a
    /// configured limit, zero limit, out-of-range index, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
