//! Risk score value objects
//!
//! All score objects are immutable once constructed. Component scores are
//! clamped to [0, 100] at construction, so a `RiskFactors` can never carry
//! an out-of-range value.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sentra_core::RiskLevel;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::RiskConfig;

/// The four component scores of an assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactors {
    pub jurisdiction_score: f64,
    pub business_type_score: f64,
    pub sanctions_score: f64,
    pub transaction_score: f64,
    /// Diagnostic context captured during scoring (PEP level, multiplier,
    /// primary tier). Consumed by SAR narrative synthesis.
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl RiskFactors {
    /// Build factors, clamping each component to [0, 100]
    pub fn new(jurisdiction: f64, business_type: f64, sanctions: f64, transaction: f64) -> Self {
        Self {
            jurisdiction_score: sentra_core::clamp_score(jurisdiction),
            business_type_score: sentra_core::clamp_score(business_type),
            sanctions_score: sentra_core::clamp_score(sanctions),
            transaction_score: sentra_core::clamp_score(transaction),
            metadata: HashMap::new(),
        }
    }

    /// Attach a metadata entry
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Weighted composition of the four factors, clamped to [0, 100].
    ///
    /// Pure: identical factors always compose to an identical overall score.
    pub fn compose_overall(&self, config: &RiskConfig) -> f64 {
        let weighted = self.jurisdiction_score * config.jurisdiction_weight
            + self.business_type_score * config.business_weight
            + self.sanctions_score * config.sanctions_weight
            + self.transaction_score * config.transaction_weight;

        let total = config.total_weight();
        if total > 0.0 {
            sentra_core::clamp_score(weighted / total)
        } else {
            0.0
        }
    }
}

/// A completed risk assessment for a party
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmlRiskScore {
    pub party_id: String,
    /// Overall score, 0-100
    pub overall_score: f64,
    pub risk_level: RiskLevel,
    pub factors: RiskFactors,
    /// Ordered, deduplicated follow-up actions
    pub recommendations: Vec<String>,
    pub assessed_at: DateTime<Utc>,
    pub assessed_by: String,
}

/// Aggregated transaction signals supplied by the caller.
///
/// All ratios are precomputed over whatever window the caller maintains;
/// the assessor treats them as opaque signals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionProfile {
    /// Observed volume over the window
    pub total_volume: Decimal,
    /// Expected volume for a party of this profile
    pub expected_volume: Decimal,
    /// Observed transaction count
    pub transaction_count: u32,
    /// Baseline transaction count for comparable parties
    pub average_transaction_count: f64,
    /// Distinct counterparty countries seen in the window
    pub counterparty_countries: Vec<String>,
    /// Share of transactions touching high-risk countries, 0-1
    pub high_risk_country_ratio: f64,
    /// Upstream system already suspects structuring
    pub structuring_suspected: bool,
    /// Share of round amounts in the window, 0-1
    pub round_amount_ratio: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factors_clamped_on_construction() {
        let factors = RiskFactors::new(-10.0, 140.0, 50.0, 100.0);

        assert_eq!(factors.jurisdiction_score, 0.0);
        assert_eq!(factors.business_type_score, 100.0);
        assert_eq!(factors.sanctions_score, 50.0);
        assert_eq!(factors.transaction_score, 100.0);
    }

    #[test]
    fn test_compose_overall_weighted() {
        let config = RiskConfig::default();
        let factors = RiskFactors::new(80.0, 60.0, 40.0, 20.0);

        // 80*0.25 + 60*0.20 + 40*0.35 + 20*0.20 = 20 + 12 + 14 + 4 = 50
        let overall = factors.compose_overall(&config);
        assert!((overall - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_compose_overall_deterministic() {
        let config = RiskConfig::default();
        let a = RiskFactors::new(73.2, 41.5, 90.0, 12.25);
        let b = RiskFactors::new(73.2, 41.5, 90.0, 12.25);

        assert_eq!(a.compose_overall(&config), b.compose_overall(&config));
    }

    #[test]
    fn test_compose_overall_in_range() {
        let config = RiskConfig::default();
        let maxed = RiskFactors::new(100.0, 100.0, 100.0, 100.0);
        let floored = RiskFactors::new(0.0, 0.0, 0.0, 0.0);

        assert_eq!(maxed.compose_overall(&config), 100.0);
        assert_eq!(floored.compose_overall(&config), 0.0);
    }

    #[test]
    fn test_metadata_attachment() {
        let factors = RiskFactors::new(10.0, 10.0, 10.0, 10.0)
            .with_metadata("pep_level", "1")
            .with_metadata("pep_multiplier", "2");

        assert_eq!(factors.metadata.get("pep_level").map(String::as_str), Some("1"));
        assert_eq!(factors.metadata.len(), 2);
    }
}
