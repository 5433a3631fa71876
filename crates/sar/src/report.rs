//! Suspicious activity report entity
//!
//! The report is an immutable record: every "mutator" returns a new
//! instance, which preserves audit history naturally. Transaction ids and
//! activity tags are kept in ordered sets, so they are deduplicated by
//! construction.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use sentra_monitoring::TransactionAlert;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::category::SarCategory;
use crate::status::SarStatus;

/// A suspicious activity report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuspiciousActivityReport {
    pub sar_id: String,
    pub party_id: String,
    pub status: SarStatus,
    pub category: SarCategory,
    pub narrative: String,
    pub total_amount: Option<Decimal>,
    pub currency: Option<String>,
    pub activity_start: Option<DateTime<Utc>>,
    pub activity_end: Option<DateTime<Utc>>,
    /// Deduplicated ids of the transactions covered by this filing
    pub transaction_ids: BTreeSet<String>,
    /// Deduplicated activity tags (e.g. fired pattern names)
    pub activity_tags: BTreeSet<String>,
    /// Snapshot of the alerts that originated the case
    pub source_alerts: Vec<TransactionAlert>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub assigned_officer: Option<String>,
    /// Regulator filing reference; present iff the SAR reached `Submitted`
    pub filing_reference: Option<String>,
    pub rejection_reason: Option<String>,
    pub cancellation_reason: Option<String>,
    pub resolution: Option<String>,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

impl SuspiciousActivityReport {
    /// Regulatory filing deadline, counted from discovery (creation)
    pub const FILING_DEADLINE_DAYS: i64 = 30;

    /// Create a new draft report with a fresh id
    pub fn new(
        party_id: impl Into<String>,
        category: SarCategory,
        narrative: impl Into<String>,
        created_by: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        let created_by = created_by.into();
        Self {
            sar_id: new_sar_id(now),
            party_id: party_id.into(),
            status: SarStatus::Draft,
            category,
            narrative: narrative.into(),
            total_amount: None,
            currency: None,
            activity_start: None,
            activity_end: None,
            transaction_ids: BTreeSet::new(),
            activity_tags: BTreeSet::new(),
            source_alerts: Vec::new(),
            created_by: created_by.clone(),
            created_at: now,
            assigned_officer: None,
            filing_reference: None,
            rejection_reason: None,
            cancellation_reason: None,
            resolution: None,
            updated_at: now,
            updated_by: created_by,
        }
    }

    // === Copy-returning updates ===

    /// Move to a new status, stamping the audit fields
    pub fn with_status(mut self, status: SarStatus, by: &str) -> Self {
        self.status = status;
        self.touch(by);
        self
    }

    /// Replace the narrative
    pub fn with_narrative(mut self, narrative: impl Into<String>, by: &str) -> Self {
        self.narrative = narrative.into();
        self.touch(by);
        self
    }

    /// Attach transaction ids; duplicates collapse into the set
    pub fn with_transaction_ids(
        mut self,
        ids: impl IntoIterator<Item = String>,
        by: &str,
    ) -> Self {
        self.transaction_ids.extend(ids);
        self.touch(by);
        self
    }

    /// Set the activity period
    pub fn with_activity_period(
        mut self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Self {
        self.activity_start = start;
        self.activity_end = end;
        self
    }

    /// Set the total amount and its currency
    pub fn with_amount(mut self, amount: Decimal, currency: impl Into<String>) -> Self {
        self.total_amount = Some(amount);
        self.currency = Some(currency.into());
        self
    }

    /// Merge activity tags
    pub fn with_activity_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.activity_tags.extend(tags);
        self
    }

    /// Snapshot the originating alerts
    pub fn with_source_alerts(mut self, alerts: Vec<TransactionAlert>) -> Self {
        self.source_alerts = alerts;
        self
    }

    /// Record the regulator filing reference
    pub fn with_filing_reference(mut self, reference: impl Into<String>, by: &str) -> Self {
        self.filing_reference = Some(reference.into());
        self.touch(by);
        self
    }

    /// Record the reviewing officer
    pub fn with_officer(mut self, officer: impl Into<String>) -> Self {
        self.assigned_officer = Some(officer.into());
        self
    }

    /// Record the rejection reason
    pub fn with_rejection_reason(mut self, reason: impl Into<String>) -> Self {
        self.rejection_reason = Some(reason.into());
        self
    }

    /// Record the cancellation reason
    pub fn with_cancellation_reason(mut self, reason: impl Into<String>) -> Self {
        self.cancellation_reason = Some(reason.into());
        self
    }

    /// Record the closing resolution
    pub fn with_resolution(mut self, resolution: impl Into<String>) -> Self {
        self.resolution = Some(resolution.into());
        self
    }

    // === Derived values (never stored) ===

    /// Deadline for filing with the authority
    pub fn filing_deadline(&self) -> DateTime<Utc> {
        self.created_at + Duration::days(Self::FILING_DEADLINE_DAYS)
    }

    /// Days remaining until the filing deadline (negative once overdue)
    pub fn days_remaining(&self, now: DateTime<Utc>) -> i64 {
        (self.filing_deadline() - now).num_days()
    }

    /// Whether the filing deadline has passed without submission
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.filing_reference.is_none() && now > self.filing_deadline()
    }

    fn touch(&mut self, by: &str) {
        self.updated_at = Utc::now();
        self.updated_by = by.to_string();
    }
}

fn new_sar_id(now: DateTime<Utc>) -> String {
    format!(
        "SAR-{}-{}",
        now.format("%Y%m%d"),
        uuid::Uuid::new_v4().to_string()[..8].to_uppercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn draft() -> SuspiciousActivityReport {
        SuspiciousActivityReport::new("P-001", SarCategory::Structuring, "narrative", "analyst")
    }

    #[test]
    fn test_new_draft() {
        let sar = draft();

        assert!(sar.sar_id.starts_with("SAR-"));
        assert_eq!(sar.status, SarStatus::Draft);
        assert_eq!(sar.created_by, "analyst");
        assert_eq!(sar.updated_by, "analyst");
        assert!(sar.filing_reference.is_none());
        assert!(sar.transaction_ids.is_empty());
    }

    #[test]
    fn test_sar_ids_are_unique() {
        assert_ne!(draft().sar_id, draft().sar_id);
    }

    #[test]
    fn test_updates_return_new_instances() {
        let original = draft();
        let updated = original
            .clone()
            .with_narrative("a different narrative", "reviewer");

        assert_eq!(original.narrative, "narrative");
        assert_eq!(updated.narrative, "a different narrative");
        assert_eq!(updated.updated_by, "reviewer");
    }

    #[test]
    fn test_transaction_ids_deduplicated() {
        let sar = draft()
            .with_transaction_ids(
                vec!["TXN-1".to_string(), "TXN-2".to_string(), "TXN-1".to_string()],
                "analyst",
            )
            .with_transaction_ids(vec!["TXN-2".to_string()], "analyst");

        assert_eq!(sar.transaction_ids.len(), 2);
    }

    #[test]
    fn test_activity_tags_deduplicated() {
        let sar = draft()
            .with_activity_tags(vec!["structuring".to_string(), "structuring".to_string()]);

        assert_eq!(sar.activity_tags.len(), 1);
    }

    #[test]
    fn test_amount_carries_currency() {
        let sar = draft().with_amount(dec!(125_000), "EUR");

        assert_eq!(sar.total_amount, Some(dec!(125_000)));
        assert_eq!(sar.currency.as_deref(), Some("EUR"));
    }

    #[test]
    fn test_filing_deadline_is_thirty_days() {
        let sar = draft();
        assert_eq!(sar.filing_deadline(), sar.created_at + Duration::days(30));
    }

    #[test]
    fn test_days_remaining_and_overdue() {
        let sar = draft();

        let five_days_in = sar.created_at + Duration::days(5);
        assert_eq!(sar.days_remaining(five_days_in), 25);
        assert!(!sar.is_overdue(five_days_in));

        let after_deadline = sar.created_at + Duration::days(31);
        assert!(sar.is_overdue(after_deadline));
        assert!(sar.days_remaining(after_deadline) < 0);
    }

    #[test]
    fn test_submitted_sar_is_never_overdue() {
        let sar = draft().with_filing_reference("FIN-2026-0001", "officer");
        let after_deadline = sar.created_at + Duration::days(60);

        assert!(!sar.is_overdue(after_deadline));
    }
}
