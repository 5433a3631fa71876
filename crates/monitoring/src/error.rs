//! Transaction monitor errors

use thiserror::Error;

/// Errors from the transaction monitor
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type for monitoring operations
pub type MonitorResult<T> = Result<T, MonitorError>;
