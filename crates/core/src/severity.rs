//! Alert severity with formal lattice ordering
//!
//! Severities follow a total order so that aggregation can take the single
//! most severe alert: `Low < Medium < High < Critical`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum_macros::Display;

/// Severity of a monitoring alert - ordered from lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AlertSeverity {
    Low = 1,
    Medium = 2,
    High = 3,
    Critical = 4,
}

impl PartialOrd for AlertSeverity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AlertSeverity {
    fn cmp(&self, other: &Self) -> Ordering {
        (*self as u8).cmp(&(*other as u8))
    }
}

impl Default for AlertSeverity {
    fn default() -> Self {
        AlertSeverity::Low
    }
}

impl AlertSeverity {
    /// Score multiplier applied when this is the highest severity present
    pub fn score_multiplier(&self) -> f64 {
        match self {
            AlertSeverity::Critical => 1.5,
            AlertSeverity::High => 1.3,
            AlertSeverity::Medium => 1.1,
            AlertSeverity::Low => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(AlertSeverity::Low < AlertSeverity::Medium);
        assert!(AlertSeverity::Medium < AlertSeverity::High);
        assert!(AlertSeverity::High < AlertSeverity::Critical);
    }

    #[test]
    fn test_max_aggregation() {
        let severities = vec![
            AlertSeverity::Medium,
            AlertSeverity::Critical,
            AlertSeverity::Low,
        ];
        assert_eq!(
            severities.into_iter().max(),
            Some(AlertSeverity::Critical)
        );
    }

    #[test]
    fn test_score_multipliers() {
        assert_eq!(AlertSeverity::Low.score_multiplier(), 1.0);
        assert_eq!(AlertSeverity::Medium.score_multiplier(), 1.1);
        assert_eq!(AlertSeverity::High.score_multiplier(), 1.3);
        assert_eq!(AlertSeverity::Critical.score_multiplier(), 1.5);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&AlertSeverity::High).unwrap();
        assert_eq!(json, "\"high\"");
    }
}
