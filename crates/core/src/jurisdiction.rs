//! Country risk classification
//!
//! Static tiering of ISO 3166-1 alpha-2 country codes, shared by the risk
//! assessor (jurisdiction scoring) and the transaction monitor (geographic
//! anomaly detection). Countries absent from every table are Low tier.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Countries under comprehensive embargo. Assessment of a party whose
/// primary country is listed here is a hard compliance stop.
const PROHIBITED: &[&str] = &["KP", "IR", "SY", "CU"];

/// FATF call-to-action and severely deficient jurisdictions
const VERY_HIGH_RISK: &[&str] = &["AF", "MM", "YE", "SS", "LY", "SO", "CD"];

/// FATF increased-monitoring and comparable jurisdictions
const HIGH_RISK: &[&str] = &[
    "PA", "AE", "TR", "NG", "PK", "KH", "LA", "VE", "HT", "ML", "BF", "MZ", "UG", "TZ",
];

/// Elevated but not listed jurisdictions
const MEDIUM_RISK: &[&str] = &[
    "RU", "CN", "MX", "CO", "TH", "PH", "VN", "EG", "MA", "RS", "AL", "BA", "ZA", "KE",
];

/// Risk tier of a country
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CountryRiskTier {
    Low,
    Medium,
    High,
    VeryHigh,
    Prohibited,
}

impl CountryRiskTier {
    /// Classify a country code into its tier. Input is normalized
    /// (trimmed, upper-cased) before lookup.
    pub fn of(country: &str) -> Self {
        let code = country.trim().to_uppercase();
        let code = code.as_str();

        if PROHIBITED.contains(&code) {
            CountryRiskTier::Prohibited
        } else if VERY_HIGH_RISK.contains(&code) {
            CountryRiskTier::VeryHigh
        } else if HIGH_RISK.contains(&code) {
            CountryRiskTier::High
        } else if MEDIUM_RISK.contains(&code) {
            CountryRiskTier::Medium
        } else {
            CountryRiskTier::Low
        }
    }

    /// Base jurisdiction score contributed by this tier.
    ///
    /// Prohibited countries never reach scoring as a primary jurisdiction;
    /// the 95 here is the fixed contribution of a prohibited *associated*
    /// country or beneficial-owner residence.
    pub fn base_score(&self) -> f64 {
        match self {
            CountryRiskTier::Low => 10.0,
            CountryRiskTier::Medium => 40.0,
            CountryRiskTier::High => 75.0,
            CountryRiskTier::VeryHigh => 90.0,
            CountryRiskTier::Prohibited => 95.0,
        }
    }

    /// Whether the tier counts as high-risk for geographic detection
    pub fn is_high_risk(&self) -> bool {
        matches!(
            self,
            CountryRiskTier::High | CountryRiskTier::VeryHigh | CountryRiskTier::Prohibited
        )
    }
}

/// Whether a country is on the hard blocklist
pub fn is_prohibited(country: &str) -> bool {
    CountryRiskTier::of(country) == CountryRiskTier::Prohibited
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_lookup() {
        assert_eq!(CountryRiskTier::of("KP"), CountryRiskTier::Prohibited);
        assert_eq!(CountryRiskTier::of("AF"), CountryRiskTier::VeryHigh);
        assert_eq!(CountryRiskTier::of("PA"), CountryRiskTier::High);
        assert_eq!(CountryRiskTier::of("RU"), CountryRiskTier::Medium);
        assert_eq!(CountryRiskTier::of("DE"), CountryRiskTier::Low);
    }

    #[test]
    fn test_lookup_normalizes_input() {
        assert_eq!(CountryRiskTier::of(" ir "), CountryRiskTier::Prohibited);
        assert_eq!(CountryRiskTier::of("pa"), CountryRiskTier::High);
    }

    #[test]
    fn test_base_scores_increase_with_tier() {
        assert!(CountryRiskTier::Low.base_score() < CountryRiskTier::Medium.base_score());
        assert!(CountryRiskTier::Medium.base_score() < CountryRiskTier::High.base_score());
        assert!(CountryRiskTier::High.base_score() < CountryRiskTier::VeryHigh.base_score());
        assert!(CountryRiskTier::VeryHigh.base_score() < CountryRiskTier::Prohibited.base_score());
    }

    #[test]
    fn test_high_risk_predicate() {
        assert!(CountryRiskTier::of("AF").is_high_risk());
        assert!(CountryRiskTier::of("PA").is_high_risk());
        assert!(!CountryRiskTier::of("RU").is_high_risk());
        assert!(!CountryRiskTier::of("US").is_high_risk());
    }

    #[test]
    fn test_is_prohibited() {
        assert!(is_prohibited("KP"));
        assert!(is_prohibited("cu"));
        assert!(!is_prohibited("US"));
    }
}
