//! Monitor configuration with configurable thresholds
//!
//! All detector thresholds can be overridden via config file; defaults
//! reflect common reporting-regime values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Configuration for the transaction monitor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    // === Structuring ===
    /// Reporting threshold the structuring band sits below
    #[serde(default = "default_structuring_threshold")]
    pub structuring_threshold: Decimal,

    /// Width of the just-under band as a fraction of the threshold
    #[serde(default = "default_structuring_margin")]
    pub structuring_margin: Decimal,

    /// Transactions inside the band needed to fire
    #[serde(default = "default_structuring_min_count")]
    pub structuring_min_count: u32,

    // === Velocity ===
    /// Max-day over average-day transaction count ratio that fires
    #[serde(default = "default_velocity_ratio_threshold")]
    pub velocity_ratio_threshold: f64,

    // === Geographic ===
    /// Distinct counterparty countries above which the spread itself alerts
    #[serde(default = "default_geo_country_limit")]
    pub geo_country_limit: u32,

    // === Round amounts ===
    /// Minimum window size for the round-amount detector
    #[serde(default = "default_round_min_count")]
    pub round_min_count: u32,

    /// Fraction of round amounts that fires (inclusive)
    #[serde(default = "default_round_ratio_threshold")]
    pub round_ratio_threshold: f64,

    // === Amount thresholds ===
    /// Single-transaction amount that fires a large-transaction alert
    #[serde(default = "default_large_amount_threshold")]
    pub large_amount_threshold: Decimal,

    /// Multiple of the large threshold at which severity becomes critical
    #[serde(default = "default_critical_amount_multiplier")]
    pub critical_amount_multiplier: u32,

    /// Daily aggregate amount that fires a threshold-breach alert
    #[serde(default = "default_daily_aggregation_threshold")]
    pub daily_aggregation_threshold: Decimal,

    // === Dormancy ===
    /// Days without activity after which reactivation alerts
    #[serde(default = "default_dormancy_days")]
    pub dormancy_days: i64,
}

// Default value functions for serde
fn default_structuring_threshold() -> Decimal {
    Decimal::new(10_000, 0)
}

fn default_structuring_margin() -> Decimal {
    Decimal::new(15, 2) // 0.15
}

fn default_structuring_min_count() -> u32 {
    3
}

fn default_velocity_ratio_threshold() -> f64 {
    3.0
}

fn default_geo_country_limit() -> u32 {
    5
}

fn default_round_min_count() -> u32 {
    5
}

fn default_round_ratio_threshold() -> f64 {
    0.8
}

fn default_large_amount_threshold() -> Decimal {
    Decimal::new(50_000, 0)
}

fn default_critical_amount_multiplier() -> u32 {
    5
}

fn default_daily_aggregation_threshold() -> Decimal {
    Decimal::new(25_000, 0)
}

fn default_dormancy_days() -> i64 {
    180
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            structuring_threshold: default_structuring_threshold(),
            structuring_margin: default_structuring_margin(),
            structuring_min_count: default_structuring_min_count(),
            velocity_ratio_threshold: default_velocity_ratio_threshold(),
            geo_country_limit: default_geo_country_limit(),
            round_min_count: default_round_min_count(),
            round_ratio_threshold: default_round_ratio_threshold(),
            large_amount_threshold: default_large_amount_threshold(),
            critical_amount_multiplier: default_critical_amount_multiplier(),
            daily_aggregation_threshold: default_daily_aggregation_threshold(),
            dormancy_days: default_dormancy_days(),
        }
    }
}

impl MonitorConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Lower bound of the structuring band: `threshold * (1 - margin)`
    pub fn structuring_band_low(&self) -> Decimal {
        self.structuring_threshold * (Decimal::ONE - self.structuring_margin)
    }

    /// Single-transaction amount at which severity escalates to critical
    pub fn critical_amount_threshold(&self) -> Decimal {
        self.large_amount_threshold * Decimal::from(self.critical_amount_multiplier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_config() {
        let config = MonitorConfig::default();

        assert_eq!(config.structuring_threshold, dec!(10_000));
        assert_eq!(config.structuring_margin, dec!(0.15));
        assert_eq!(config.structuring_min_count, 3);
        assert_eq!(config.velocity_ratio_threshold, 3.0);
        assert_eq!(config.geo_country_limit, 5);
        assert_eq!(config.round_min_count, 5);
        assert_eq!(config.round_ratio_threshold, 0.8);
        assert_eq!(config.large_amount_threshold, dec!(50_000));
        assert_eq!(config.daily_aggregation_threshold, dec!(25_000));
        assert_eq!(config.dormancy_days, 180);
    }

    #[test]
    fn test_structuring_band_low() {
        let config = MonitorConfig::default();
        assert_eq!(config.structuring_band_low(), dec!(8_500));
    }

    #[test]
    fn test_critical_amount_threshold() {
        let config = MonitorConfig::default();
        assert_eq!(config.critical_amount_threshold(), dec!(250_000));
    }

    #[test]
    fn test_config_partial_json() {
        // Missing fields fall back to defaults
        let json = r#"{ "structuring_threshold": "15000" }"#;
        let config: MonitorConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.structuring_threshold, dec!(15_000));
        assert_eq!(config.structuring_min_count, 3);
    }
}
