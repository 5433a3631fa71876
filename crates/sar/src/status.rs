//! SAR lifecycle states
//!
//! ```text
//! Draft -> PendingReview -> Approved -> Submitted -> Closed
//!               |
//!               +-> Rejected
//!
//! Draft | PendingReview | Approved -> Cancelled
//! ```
//!
//! Terminal states are `Closed`, `Cancelled` and `Rejected`. A submitted SAR
//! can no longer be cancelled, only closed.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Status of a suspicious activity report
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SarStatus {
    Draft,
    PendingReview,
    Approved,
    Rejected,
    Submitted,
    Closed,
    Cancelled,
}

impl SarStatus {
    /// Whether the SAR has reached a final state. Terminal SARs are
    /// retained for audit, never destroyed.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SarStatus::Rejected | SarStatus::Closed | SarStatus::Cancelled
        )
    }

    /// Whether narrative and transaction edits are permitted.
    ///
    /// Only `Draft` is editable: once a SAR enters review its content must
    /// be stable for the maker-checker control, and `Rejected` is terminal,
    /// so no post-review editing path exists.
    pub fn is_editable(&self) -> bool {
        matches!(self, SarStatus::Draft)
    }

    /// Whether the guarded workflow permits moving to `target` from here.
    /// Cancellation from `Submitted` is excluded; the case manager reports
    /// it as a distinct already-submitted failure.
    pub fn allows_transition_to(&self, target: SarStatus) -> bool {
        matches!(
            (*self, target),
            (SarStatus::Draft, SarStatus::PendingReview)
                | (SarStatus::PendingReview, SarStatus::Approved)
                | (SarStatus::PendingReview, SarStatus::Rejected)
                | (SarStatus::Approved, SarStatus::Submitted)
                | (SarStatus::Submitted, SarStatus::Closed)
                | (SarStatus::Draft, SarStatus::Cancelled)
                | (SarStatus::PendingReview, SarStatus::Cancelled)
                | (SarStatus::Approved, SarStatus::Cancelled)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_transitions() {
        assert!(SarStatus::Draft.allows_transition_to(SarStatus::PendingReview));
        assert!(SarStatus::PendingReview.allows_transition_to(SarStatus::Approved));
        assert!(SarStatus::PendingReview.allows_transition_to(SarStatus::Rejected));
        assert!(SarStatus::Approved.allows_transition_to(SarStatus::Submitted));
        assert!(SarStatus::Submitted.allows_transition_to(SarStatus::Closed));
    }

    #[test]
    fn test_skipping_review_is_blocked() {
        assert!(!SarStatus::Draft.allows_transition_to(SarStatus::Approved));
        assert!(!SarStatus::Draft.allows_transition_to(SarStatus::Submitted));
        assert!(!SarStatus::PendingReview.allows_transition_to(SarStatus::Submitted));
    }

    #[test]
    fn test_cancellation_reachability() {
        assert!(SarStatus::Draft.allows_transition_to(SarStatus::Cancelled));
        assert!(SarStatus::PendingReview.allows_transition_to(SarStatus::Cancelled));
        assert!(SarStatus::Approved.allows_transition_to(SarStatus::Cancelled));
        // Submitted and terminal states cannot be cancelled
        assert!(!SarStatus::Submitted.allows_transition_to(SarStatus::Cancelled));
        assert!(!SarStatus::Closed.allows_transition_to(SarStatus::Cancelled));
        assert!(!SarStatus::Rejected.allows_transition_to(SarStatus::Cancelled));
    }

    #[test]
    fn test_terminal_states_allow_nothing() {
        for terminal in [SarStatus::Rejected, SarStatus::Closed, SarStatus::Cancelled] {
            assert!(terminal.is_terminal());
            for target in [
                SarStatus::Draft,
                SarStatus::PendingReview,
                SarStatus::Approved,
                SarStatus::Rejected,
                SarStatus::Submitted,
                SarStatus::Closed,
                SarStatus::Cancelled,
            ] {
                assert!(!terminal.allows_transition_to(target));
            }
        }
    }

    #[test]
    fn test_only_draft_is_editable() {
        assert!(SarStatus::Draft.is_editable());
        assert!(!SarStatus::PendingReview.is_editable());
        assert!(!SarStatus::Approved.is_editable());
        assert!(!SarStatus::Submitted.is_editable());
        assert!(!SarStatus::Closed.is_editable());
    }

    #[test]
    fn test_display_snake_case() {
        assert_eq!(SarStatus::PendingReview.to_string(), "pending_review");
    }
}
