//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for tracker and feed operations.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Network failure, non-success HTTP status, or a payload that did not
    /// parse as JSON.
    #[error("upstream source unavailable: {0}")]
    SourceUnavailable(String),

    /// Well-formed JSON that is missing expected fields or carries
    /// non-numeric coordinate values.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Caller passed out-of-range coordinates or an otherwise invalid
    /// argument.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<reqwest::Error> for TrackerError {
    fn from(err: reqwest::Error) -> Self {
        TrackerError::SourceUnavailable(err.to_string())
    }
}

/// Error types for startup failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}
