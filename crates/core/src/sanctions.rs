//! Sanctions screening outcome
//!
//! Produced by an external screening provider; the engine never performs
//! list matching itself.

use serde::{Deserialize, Serialize};

/// Result of screening a party against sanctions lists
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SanctionsResult {
    /// Party is on a blocking list; transactions must not proceed
    pub is_blocked: bool,
    /// At least one potential match was found
    pub has_matches: bool,
    /// Number of potential matches
    pub match_count: u32,
    /// Confidence of the strongest match, 0-100
    pub highest_match_score: f64,
    /// A match was manually confirmed by an analyst
    pub has_confirmed_match: bool,
}

impl SanctionsResult {
    /// A clean screening result with no matches
    pub fn clear() -> Self {
        Self::default()
    }

    /// A result with unconfirmed potential matches
    pub fn with_matches(match_count: u32, highest_match_score: f64) -> Self {
        Self {
            is_blocked: false,
            has_matches: match_count > 0,
            match_count,
            highest_match_score,
            has_confirmed_match: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_result() {
        let result = SanctionsResult::clear();
        assert!(!result.is_blocked);
        assert!(!result.has_matches);
        assert_eq!(result.match_count, 0);
    }

    #[test]
    fn test_with_matches() {
        let result = SanctionsResult::with_matches(2, 78.0);
        assert!(result.has_matches);
        assert_eq!(result.match_count, 2);
        assert_eq!(result.highest_match_score, 78.0);
        assert!(!result.has_confirmed_match);
    }
}
