//! SAR filing categories

use sentra_core::PatternCategory;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Category of activity a SAR documents.
///
/// The set is fixed; manual SAR creation parses a caller-supplied string
/// against it and rejects anything else.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SarCategory {
    Structuring,
    Layering,
    GeographicAnomaly,
    VelocityAnomaly,
    HighRiskParty,
    Other,
}

/// Derive the filing category from the monitoring patterns that fired.
///
/// Priority: structuring > layering > geographic > velocity > round amounts
/// (which files as structuring) > anything else.
pub fn category_from_patterns(patterns: &[PatternCategory]) -> SarCategory {
    if patterns.contains(&PatternCategory::Structuring) {
        SarCategory::Structuring
    } else if patterns.contains(&PatternCategory::Layering) {
        SarCategory::Layering
    } else if patterns.contains(&PatternCategory::GeographicAnomaly) {
        SarCategory::GeographicAnomaly
    } else if patterns.contains(&PatternCategory::VelocitySpike) {
        SarCategory::VelocityAnomaly
    } else if patterns.contains(&PatternCategory::RoundAmount) {
        SarCategory::Structuring
    } else {
        SarCategory::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_and_display() {
        assert_eq!(
            SarCategory::from_str("geographic_anomaly").unwrap(),
            SarCategory::GeographicAnomaly
        );
        assert_eq!(SarCategory::HighRiskParty.to_string(), "high_risk_party");
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert!(SarCategory::from_str("tax_evasion").is_err());
    }

    #[test]
    fn test_priority_structuring_wins() {
        let patterns = vec![
            PatternCategory::VelocitySpike,
            PatternCategory::Structuring,
            PatternCategory::GeographicAnomaly,
        ];
        assert_eq!(category_from_patterns(&patterns), SarCategory::Structuring);
    }

    #[test]
    fn test_priority_layering_over_geographic() {
        let patterns = vec![
            PatternCategory::GeographicAnomaly,
            PatternCategory::Layering,
        ];
        assert_eq!(category_from_patterns(&patterns), SarCategory::Layering);
    }

    #[test]
    fn test_round_amounts_file_as_structuring() {
        assert_eq!(
            category_from_patterns(&[PatternCategory::RoundAmount]),
            SarCategory::Structuring
        );
    }

    #[test]
    fn test_unmatched_patterns_are_other() {
        assert_eq!(
            category_from_patterns(&[PatternCategory::LargeAmount, PatternCategory::Dormancy]),
            SarCategory::Other
        );
        assert_eq!(category_from_patterns(&[]), SarCategory::Other);
    }
}
