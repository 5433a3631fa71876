//! Score clamping and fixed risk banding
//!
//! All scores in the engine live on a 0-100 scale. The banding thresholds
//! are fixed and documented here; they are not configurable.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Clamp a score to the [0, 100] range
pub fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Risk level derived from an overall 0-100 score.
///
/// Banding is fixed: `Low` < 40.0 <= `Medium` < 70.0 <= `High`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Lowest overall score classified as Medium
    pub const MEDIUM_FLOOR: f64 = 40.0;
    /// Lowest overall score classified as High
    pub const HIGH_FLOOR: f64 = 70.0;

    /// Classify an overall score into its band
    pub fn from_score(score: f64) -> Self {
        let score = clamp_score(score);
        if score >= Self::HIGH_FLOOR {
            RiskLevel::High
        } else if score >= Self::MEDIUM_FLOOR {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_score() {
        assert_eq!(clamp_score(-5.0), 0.0);
        assert_eq!(clamp_score(50.0), 50.0);
        assert_eq!(clamp_score(140.0), 100.0);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(39.99), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(40.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(69.99), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(70.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(100.0), RiskLevel::High);
    }

    #[test]
    fn test_band_clamps_out_of_range_input() {
        assert_eq!(RiskLevel::from_score(-10.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(250.0), RiskLevel::High);
    }

    #[test]
    fn test_level_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn test_display() {
        assert_eq!(RiskLevel::High.to_string(), "high");
    }
}
