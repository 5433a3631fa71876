//! Risk assessor configuration
//!
//! Factor weights are configurable for tuning; detection constants that the
//! scoring contract documents (PEP multipliers, signal caps, review
//! intervals) are fixed in code.

use serde::{Deserialize, Serialize};

/// Configuration for the risk assessor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Identity recorded as `assessed_by` on produced scores
    #[serde(default = "default_assessor_id")]
    pub assessor_id: String,

    /// Weight of the jurisdiction factor in the overall score
    #[serde(default = "default_jurisdiction_weight")]
    pub jurisdiction_weight: f64,

    /// Weight of the business-type factor
    #[serde(default = "default_business_weight")]
    pub business_weight: f64,

    /// Weight of the sanctions factor
    #[serde(default = "default_sanctions_weight")]
    pub sanctions_weight: f64,

    /// Weight of the transaction factor
    #[serde(default = "default_transaction_weight")]
    pub transaction_weight: f64,
}

fn default_assessor_id() -> String {
    "system".to_string()
}

fn default_jurisdiction_weight() -> f64 {
    0.25
}

fn default_business_weight() -> f64 {
    0.20
}

fn default_sanctions_weight() -> f64 {
    0.35
}

fn default_transaction_weight() -> f64 {
    0.20
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            assessor_id: default_assessor_id(),
            jurisdiction_weight: default_jurisdiction_weight(),
            business_weight: default_business_weight(),
            sanctions_weight: default_sanctions_weight(),
            transaction_weight: default_transaction_weight(),
        }
    }
}

impl RiskConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Sum of the four factor weights
    pub fn total_weight(&self) -> f64 {
        self.jurisdiction_weight
            + self.business_weight
            + self.sanctions_weight
            + self.transaction_weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RiskConfig::default();

        assert_eq!(config.assessor_id, "system");
        assert_eq!(config.jurisdiction_weight, 0.25);
        assert_eq!(config.business_weight, 0.20);
        assert_eq!(config.sanctions_weight, 0.35);
        assert_eq!(config.transaction_weight, 0.20);
    }

    #[test]
    fn test_weights_sum_to_one() {
        let config = RiskConfig::default();
        assert!((config.total_weight() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_config_partial_json() {
        // Missing fields fall back to defaults
        let json = r#"{ "assessor_id": "aml-batch" }"#;
        let config: RiskConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.assessor_id, "aml-batch");
        assert_eq!(config.sanctions_weight, 0.35);
    }
}
