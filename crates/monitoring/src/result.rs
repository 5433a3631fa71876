//! Aggregate monitoring outcome

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sentra_core::{AlertSeverity, PatternCategory};
use serde::{Deserialize, Serialize};

use crate::alert::TransactionAlert;

/// Outcome of sweeping one party's transaction window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionMonitoringResult {
    pub party_id: String,
    /// True iff at least one alert fired
    pub is_suspicious: bool,
    /// Aggregate pattern score, 0-100
    pub risk_score: f64,
    /// Distinct pattern categories that fired, in detector order
    pub patterns: Vec<PatternCategory>,
    /// One human-readable reason per fired category
    pub reasons: Vec<String>,
    pub alerts: Vec<TransactionAlert>,
    pub period_start: DateTime<Utc>,
    pub period_end: DateTime<Utc>,
    pub transaction_count: usize,
    pub total_volume: Decimal,
}

impl TransactionMonitoringResult {
    /// Severity of the most severe alert, if any fired
    pub fn top_severity(&self) -> Option<AlertSeverity> {
        self.alerts.iter().map(|a| a.severity).max()
    }

    /// Whether a given pattern category fired
    pub fn has_pattern(&self, category: PatternCategory) -> bool {
        self.patterns.contains(&category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_severity() {
        let result = TransactionMonitoringResult {
            party_id: "P-1".to_string(),
            is_suspicious: true,
            risk_score: 50.0,
            patterns: vec![PatternCategory::Structuring],
            reasons: vec![],
            alerts: vec![
                TransactionAlert::new(
                    PatternCategory::Structuring,
                    AlertSeverity::High,
                    "structuring",
                ),
                TransactionAlert::new(
                    PatternCategory::RoundAmount,
                    AlertSeverity::Medium,
                    "round amounts",
                ),
            ],
            period_start: Utc::now(),
            period_end: Utc::now(),
            transaction_count: 4,
            total_volume: Decimal::ZERO,
        };

        assert_eq!(result.top_severity(), Some(AlertSeverity::High));
        assert!(result.has_pattern(PatternCategory::Structuring));
        assert!(!result.has_pattern(PatternCategory::Dormancy));
    }
}
