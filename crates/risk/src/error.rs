//! Risk assessor errors

use thiserror::Error;

/// Errors from the risk assessor
#[derive(Debug, Error)]
pub enum RiskError {
    /// Hard compliance stop: the party's primary country is embargoed.
    /// No score is produced; the relationship must not proceed.
    #[error("party {party_id} is incorporated in prohibited jurisdiction {country}")]
    ProhibitedJurisdiction { party_id: String, country: String },

    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type for risk operations
pub type RiskResult<T> = Result<T, RiskError>;
