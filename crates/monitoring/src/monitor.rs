//! Transaction monitor - detector sweep and score aggregation

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sentra_core::{clamp_score, AlertSeverity, CountryRiskTier, PatternCategory, Transaction};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

use crate::alert::TransactionAlert;
use crate::config::MonitorConfig;
use crate::error::{MonitorError, MonitorResult};
use crate::input::TransactionInput;
use crate::result::TransactionMonitoringResult;

/// Fixed aggregate weight per fired pattern category
fn category_weight(category: PatternCategory) -> f64 {
    match category {
        PatternCategory::Structuring => 35.0,
        PatternCategory::VelocitySpike => 20.0,
        PatternCategory::GeographicAnomaly => 25.0,
        PatternCategory::RoundAmount => 15.0,
        PatternCategory::LargeAmount => 20.0,
        PatternCategory::ThresholdBreach => 25.0,
        PatternCategory::Dormancy => 15.0,
        PatternCategory::Layering | PatternCategory::Counterparty => 10.0,
    }
}

/// Whether an amount reads as "round": divisible by 1000 or 500, or by 100
/// once at least 100.
fn is_round_amount(amount: Decimal) -> bool {
    if amount <= Decimal::ZERO {
        return false;
    }
    let thousand = Decimal::from(1000);
    let five_hundred = Decimal::from(500);
    let hundred = Decimal::from(100);

    amount % thousand == Decimal::ZERO
        || amount % five_hundred == Decimal::ZERO
        || (amount >= hundred && amount % hundred == Decimal::ZERO)
}

/// The transaction monitor
///
/// Stateless between calls; the sweep is a pure function of the transaction
/// set and the configuration, independent of input order.
pub struct TransactionMonitor {
    config: MonitorConfig,
}

impl Default for TransactionMonitor {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl TransactionMonitor {
    /// Create a monitor with the given configuration
    pub fn new(config: MonitorConfig) -> Self {
        Self { config }
    }

    /// Create a monitor with default configuration
    pub fn with_defaults() -> Self {
        Self::new(MonitorConfig::default())
    }

    /// Get the current configuration
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Sweep a window of transactions for suspicious patterns.
    ///
    /// Records are normalized first, then every detector runs over the full
    /// window. The dormancy check is not part of this sweep; see
    /// [`TransactionMonitor::check_dormancy`].
    pub fn monitor(
        &self,
        party_id: &str,
        inputs: Vec<TransactionInput>,
        period_start: DateTime<Utc>,
        period_end: DateTime<Utc>,
    ) -> MonitorResult<TransactionMonitoringResult> {
        if party_id.trim().is_empty() {
            return Err(MonitorError::InvalidInput {
                field: "party_id".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        let mut transactions: Vec<Transaction> =
            inputs.into_iter().map(TransactionInput::normalize).collect();
        // Canonical order makes the sweep independent of input order
        transactions.sort_by(|a, b| (a.date, &a.id).cmp(&(b.date, &b.id)));

        let mut alerts: Vec<TransactionAlert> = Vec::new();

        // === Structuring ===
        alerts.extend(self.detect_structuring(&transactions));

        // === Velocity anomaly ===
        alerts.extend(self.detect_velocity(&transactions));

        // === Geographic anomaly ===
        alerts.extend(self.detect_geographic(&transactions));

        // === Round amounts ===
        alerts.extend(self.detect_round_amounts(&transactions));

        // === Large transactions ===
        alerts.extend(self.detect_large_transactions(&transactions));

        // === Daily aggregation ===
        alerts.extend(self.detect_daily_aggregation(&transactions));

        let (risk_score, patterns) = self.aggregate(&alerts);
        let reasons = first_reason_per_category(&alerts, &patterns);
        let total_volume: Decimal = transactions.iter().map(|t| t.amount).sum();

        info!(
            party_id = %party_id,
            transactions = transactions.len(),
            alerts = alerts.len(),
            score = risk_score,
            "transaction monitoring completed"
        );

        Ok(TransactionMonitoringResult {
            party_id: party_id.to_string(),
            is_suspicious: !alerts.is_empty(),
            risk_score,
            patterns,
            reasons,
            alerts,
            period_start,
            period_end,
            transaction_count: transactions.len(),
            total_volume,
        })
    }

    /// Dormancy reactivation check.
    ///
    /// Runs outside the main sweep: the monitor has no memory of prior
    /// windows, so the caller supplies the party's last known activity
    /// timestamp and merges any alert into its own handling.
    pub fn check_dormancy(
        &self,
        party_id: &str,
        last_activity: DateTime<Utc>,
        transactions: &[Transaction],
    ) -> Option<TransactionAlert> {
        let earliest = transactions.iter().map(|t| t.date).min()?;
        let dormant_days = (earliest - last_activity).num_days();

        if dormant_days >= self.config.dormancy_days {
            Some(
                TransactionAlert::new(
                    PatternCategory::Dormancy,
                    AlertSeverity::Medium,
                    format!("party {party_id} reactivated after {dormant_days} days of dormancy"),
                )
                .with_evidence("dormant_days", dormant_days)
                .with_evidence("last_activity", last_activity.to_rfc3339()),
            )
        } else {
            None
        }
    }

    /// Count of transactions sitting just under the reporting threshold
    fn detect_structuring(&self, transactions: &[Transaction]) -> Option<TransactionAlert> {
        let low = self.config.structuring_band_low();
        let high = self.config.structuring_threshold;

        let in_band: Vec<&Transaction> = transactions
            .iter()
            .filter(|t| t.amount >= low && t.amount < high)
            .collect();

        if in_band.len() < self.config.structuring_min_count as usize {
            return None;
        }

        debug!(count = in_band.len(), "structuring band populated");
        Some(
            TransactionAlert::new(
                PatternCategory::Structuring,
                AlertSeverity::High,
                format!(
                    "{} transactions between {low} and {high}, just under the reporting threshold",
                    in_band.len()
                ),
            )
            .with_evidence("count", in_band.len())
            .with_evidence("band_low", low.to_string())
            .with_evidence("threshold", high.to_string()),
        )
    }

    /// Peak-day transaction count against the window's daily average
    fn detect_velocity(&self, transactions: &[Transaction]) -> Option<TransactionAlert> {
        let mut by_day: BTreeMap<NaiveDate, u32> = BTreeMap::new();
        for tx in transactions {
            *by_day.entry(tx.day()).or_default() += 1;
        }
        if by_day.len() < 2 {
            return None;
        }

        let max_day = *by_day.values().max()? as f64;
        let avg_day = transactions.len() as f64 / by_day.len() as f64;
        let ratio = max_day / avg_day;

        if ratio < self.config.velocity_ratio_threshold {
            return None;
        }

        Some(
            TransactionAlert::new(
                PatternCategory::VelocitySpike,
                AlertSeverity::Medium,
                format!(
                    "peak of {max_day} transactions in one day against a {avg_day:.1} daily average"
                ),
            )
            .with_evidence("max_day_count", max_day)
            .with_evidence("avg_day_count", avg_day)
            .with_evidence("ratio", ratio),
        )
    }

    /// High-risk counterparty countries and overall country spread
    fn detect_geographic(&self, transactions: &[Transaction]) -> Vec<TransactionAlert> {
        let mut alerts = Vec::new();

        for tx in transactions {
            let Some(country) = &tx.counterparty_country else {
                continue;
            };
            let tier = CountryRiskTier::of(country);
            if !tier.is_high_risk() {
                continue;
            }
            let severity = if tier == CountryRiskTier::High {
                AlertSeverity::Medium
            } else {
                AlertSeverity::High
            };
            alerts.push(
                TransactionAlert::new(
                    PatternCategory::GeographicAnomaly,
                    severity,
                    format!("transaction {} involves high-risk country {country}", tx.id),
                )
                .with_evidence("transaction_id", tx.id.clone())
                .with_evidence("country", country.clone())
                .with_evidence("tier", tier.to_string()),
            );
        }

        let distinct: BTreeSet<&str> = transactions
            .iter()
            .filter_map(|t| t.counterparty_country.as_deref())
            .collect();
        if distinct.len() > self.config.geo_country_limit as usize {
            alerts.push(
                TransactionAlert::new(
                    PatternCategory::GeographicAnomaly,
                    AlertSeverity::Medium,
                    format!(
                        "activity spans {} distinct counterparty countries",
                        distinct.len()
                    ),
                )
                .with_evidence("distinct_countries", distinct.len()),
            );
        }

        alerts
    }

    /// Share of round amounts across the window (inclusive threshold)
    fn detect_round_amounts(&self, transactions: &[Transaction]) -> Option<TransactionAlert> {
        if transactions.len() < self.config.round_min_count as usize {
            return None;
        }

        let round_count = transactions
            .iter()
            .filter(|t| is_round_amount(t.amount))
            .count();
        let ratio = round_count as f64 / transactions.len() as f64;

        if ratio < self.config.round_ratio_threshold {
            return None;
        }

        Some(
            TransactionAlert::new(
                PatternCategory::RoundAmount,
                AlertSeverity::Medium,
                format!(
                    "{round_count} of {} transactions are round amounts",
                    transactions.len()
                ),
            )
            .with_evidence("round_count", round_count)
            .with_evidence("total_count", transactions.len())
            .with_evidence("ratio", ratio),
        )
    }

    /// Single transactions at or above the large-amount threshold
    fn detect_large_transactions(&self, transactions: &[Transaction]) -> Vec<TransactionAlert> {
        let critical_at = self.config.critical_amount_threshold();

        transactions
            .iter()
            .filter(|t| t.amount >= self.config.large_amount_threshold)
            .map(|t| {
                let severity = if t.amount >= critical_at {
                    AlertSeverity::Critical
                } else {
                    AlertSeverity::High
                };
                TransactionAlert::new(
                    PatternCategory::LargeAmount,
                    severity,
                    format!(
                        "transaction {} of {} {} exceeds the large-transaction threshold",
                        t.id, t.amount, t.currency
                    ),
                )
                .with_evidence("transaction_id", t.id.clone())
                .with_evidence("amount", t.amount.to_string())
            })
            .collect()
    }

    /// Days whose aggregate volume reaches the daily reporting threshold
    fn detect_daily_aggregation(&self, transactions: &[Transaction]) -> Vec<TransactionAlert> {
        let mut by_day: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
        for tx in transactions {
            *by_day.entry(tx.day()).or_default() += tx.amount;
        }

        by_day
            .into_iter()
            .filter(|(_, total)| *total >= self.config.daily_aggregation_threshold)
            .map(|(day, total)| {
                TransactionAlert::new(
                    PatternCategory::ThresholdBreach,
                    AlertSeverity::High,
                    format!("aggregate volume {total} on {day} exceeds the daily threshold"),
                )
                .with_evidence("day", day.to_string())
                .with_evidence("total", total.to_string())
            })
            .collect()
    }

    /// Weighted sum over distinct fired categories, amplified by the single
    /// most severe alert and clamped to [0, 100].
    fn aggregate(&self, alerts: &[TransactionAlert]) -> (f64, Vec<PatternCategory>) {
        let mut categories: Vec<PatternCategory> = Vec::new();
        for alert in alerts {
            if !categories.contains(&alert.category) {
                categories.push(alert.category);
            }
        }

        let base: f64 = categories.iter().map(|c| category_weight(*c)).sum();
        let multiplier = alerts
            .iter()
            .map(|a| a.severity)
            .max()
            .map(|s| s.score_multiplier())
            .unwrap_or(1.0);

        (clamp_score(base * multiplier), categories)
    }
}

/// First alert message per fired category, in category order
fn first_reason_per_category(
    alerts: &[TransactionAlert],
    categories: &[PatternCategory],
) -> Vec<String> {
    categories
        .iter()
        .filter_map(|category| {
            alerts
                .iter()
                .find(|a| a.category == *category)
                .map(|a| a.message.clone())
        })
        .collect()
}
