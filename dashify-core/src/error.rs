//! Error types for the Dashify calendar.

use thiserror::Error;

/// Errors that can occur in portal calendar operations.
#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Event store error: {0}")]
    Store(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for portal calendar operations.
pub type PortalResult<T> = Result<T, PortalError>;
