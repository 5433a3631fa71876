//! SAR case management errors

use thiserror::Error;

use crate::status::SarStatus;

/// Errors from the case manager
#[derive(Debug, Error)]
pub enum SarError {
    /// A guarded transition was attempted from a state that does not allow it
    #[error("invalid transition for SAR {sar_id}: {from} -> {to} ({reason})")]
    InvalidTransition {
        sar_id: String,
        from: SarStatus,
        to: SarStatus,
        reason: String,
    },

    /// Maker-checker violation: the creator cannot approve their own SAR
    #[error("SAR {sar_id} cannot be approved by {approver}, who also created it")]
    ApprovalRequired { sar_id: String, approver: String },

    /// Cancellation attempted after the SAR left the institution
    #[error("SAR {sar_id} has already been submitted to the authority")]
    AlreadySubmitted { sar_id: String },

    /// A creation factory was given evidence that does not support a filing
    #[error("insufficient evidence for a SAR on party {party_id}: {reason}")]
    InsufficientEvidence { party_id: String, reason: String },

    #[error("SAR not found: {sar_id}")]
    NotFound { sar_id: String },

    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    /// Failure of the injected repository capability
    #[error("repository failure: {0}")]
    Repository(String),
}

/// Result type for SAR operations
pub type SarResult<T> = Result<T, SarError>;
