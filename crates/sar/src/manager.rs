//! Case manager - guarded SAR workflow
//!
//! Creates SARs from monitoring results, risk assessments or manual input,
//! and advances them through the regulated lifecycle. Every guard failure
//! is a typed error carrying the SAR id and the attempted transition;
//! repository failures are wrapped rather than propagated raw.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sentra_monitoring::TransactionMonitoringResult;
use sentra_risk::AmlRiskScore;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::info;

use crate::category::{category_from_patterns, SarCategory};
use crate::error::{SarError, SarResult};
use crate::event::{EventSink, NoopSink, SarEvent};
use crate::narrative;
use crate::report::SuspiciousActivityReport;
use crate::repository::{InMemorySarRepository, SarRepository};
use crate::status::SarStatus;

/// Configuration for the case manager
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SarConfig {
    /// Minimum narrative length for a SAR to leave Draft
    #[serde(default = "default_min_narrative_length")]
    pub min_narrative_length: usize,
}

fn default_min_narrative_length() -> usize {
    100
}

impl Default for SarConfig {
    fn default() -> Self {
        Self {
            min_narrative_length: default_min_narrative_length(),
        }
    }
}

impl SarConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

/// Input for manually opening a SAR
#[derive(Debug, Clone)]
pub struct ManualSarRequest {
    pub party_id: String,
    /// Category name, validated against the fixed enumerated set
    pub category: String,
    pub narrative: String,
    pub total_amount: Option<Decimal>,
    pub currency: Option<String>,
    pub activity_start: Option<DateTime<Utc>>,
    pub activity_end: Option<DateTime<Utc>>,
    pub created_by: String,
}

/// The case manager
///
/// Holds the injected repository and an optional event sink. Concurrent
/// mutation of the same SAR id is the caller's problem to serialize; the
/// manager itself defines no locking.
pub struct CaseManager<R: SarRepository> {
    repository: R,
    config: SarConfig,
    sink: Box<dyn EventSink>,
}

impl CaseManager<InMemorySarRepository> {
    /// Create a manager backed by an in-memory repository (for testing and
    /// embedded use)
    pub fn in_memory() -> Self {
        Self::new(InMemorySarRepository::new(), SarConfig::default())
    }
}

impl<R: SarRepository> CaseManager<R> {
    /// Create a manager with the given repository and configuration
    pub fn new(repository: R, config: SarConfig) -> Self {
        Self {
            repository,
            config,
            sink: Box::new(NoopSink),
        }
    }

    /// Attach an event sink for status-transition observability
    pub fn with_sink(mut self, sink: Box<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Get the current configuration
    pub fn config(&self) -> &SarConfig {
        &self.config
    }

    /// Load a SAR by id
    pub fn get(&self, sar_id: &str) -> SarResult<SuspiciousActivityReport> {
        self.load(sar_id)
    }

    /// All SARs currently in the given status
    pub fn list_by_status(&self, status: SarStatus) -> SarResult<Vec<SuspiciousActivityReport>> {
        self.repository
            .list_by_status(status)
            .map_err(|e| SarError::Repository(e.to_string()))
    }

    // === Creation factories ===

    /// Open a SAR from a monitoring result.
    ///
    /// Fails with `InsufficientEvidence` when the result is not suspicious.
    /// The category is derived from the fired patterns, the narrative is
    /// synthesized from the result, and any transaction ids found in alert
    /// evidence are attached.
    pub fn create_from_monitoring(
        &mut self,
        result: &TransactionMonitoringResult,
        created_by: &str,
    ) -> SarResult<SuspiciousActivityReport> {
        require_non_empty("created_by", created_by)?;

        if !result.is_suspicious {
            return Err(SarError::InsufficientEvidence {
                party_id: result.party_id.clone(),
                reason: "monitoring result raised no alerts".to_string(),
            });
        }

        let category = category_from_patterns(&result.patterns);
        let transaction_ids: Vec<String> = result
            .alerts
            .iter()
            .filter_map(|a| a.evidence.get("transaction_id"))
            .filter_map(|v| v.as_str())
            .map(String::from)
            .collect();

        let mut sar = SuspiciousActivityReport::new(
            result.party_id.clone(),
            category,
            narrative::from_monitoring(result),
            created_by,
        )
        .with_activity_period(Some(result.period_start), Some(result.period_end))
        .with_activity_tags(result.patterns.iter().map(|p| p.to_string()))
        .with_source_alerts(result.alerts.clone())
        .with_transaction_ids(transaction_ids, created_by);

        if result.total_volume > Decimal::ZERO {
            // Monitoring normalizes missing currencies to USD before summing
            sar = sar.with_amount(result.total_volume, "USD");
        }

        self.persist(&sar)?;
        self.sink.publish(&SarEvent::created(
            sar.sar_id.clone(),
            sar.party_id.clone(),
            sar.category,
            created_by,
        ));
        info!(sar_id = %sar.sar_id, party_id = %sar.party_id, category = %sar.category, "SAR created from monitoring result");
        Ok(sar)
    }

    /// Open a SAR from a risk assessment, with a caller-supplied reason
    pub fn create_from_risk_score(
        &mut self,
        score: &AmlRiskScore,
        reason: &str,
        created_by: &str,
    ) -> SarResult<SuspiciousActivityReport> {
        require_non_empty("created_by", created_by)?;
        require_non_empty("reason", reason)?;

        let sar = SuspiciousActivityReport::new(
            score.party_id.clone(),
            SarCategory::HighRiskParty,
            narrative::from_risk_score(score, reason),
            created_by,
        )
        .with_activity_tags([
            "high_risk_party".to_string(),
            format!("risk_level_{}", score.risk_level),
        ]);

        self.persist(&sar)?;
        self.sink.publish(&SarEvent::created(
            sar.sar_id.clone(),
            sar.party_id.clone(),
            sar.category,
            created_by,
        ));
        info!(sar_id = %sar.sar_id, party_id = %sar.party_id, "SAR created from risk assessment");
        Ok(sar)
    }

    /// Open a SAR from manual input
    pub fn create_manual(&mut self, request: ManualSarRequest) -> SarResult<SuspiciousActivityReport> {
        require_non_empty("party_id", &request.party_id)?;
        require_non_empty("created_by", &request.created_by)?;

        let category =
            SarCategory::from_str(request.category.trim()).map_err(|_| SarError::InvalidInput {
                field: "category".to_string(),
                reason: format!("unknown category '{}'", request.category),
            })?;

        if let Some(amount) = request.total_amount {
            if amount < Decimal::ZERO {
                return Err(SarError::InvalidInput {
                    field: "total_amount".to_string(),
                    reason: "must be non-negative".to_string(),
                });
            }
        }

        if let (Some(start), Some(end)) = (request.activity_start, request.activity_end) {
            if end < start {
                return Err(SarError::InvalidInput {
                    field: "activity_end".to_string(),
                    reason: "must not precede activity start".to_string(),
                });
            }
        }

        let mut sar = SuspiciousActivityReport::new(
            request.party_id,
            category,
            request.narrative,
            &request.created_by,
        )
        .with_activity_period(request.activity_start, request.activity_end);

        if let (Some(amount), Some(currency)) = (request.total_amount, request.currency) {
            sar = sar.with_amount(amount, currency);
        }

        self.persist(&sar)?;
        self.sink.publish(&SarEvent::created(
            sar.sar_id.clone(),
            sar.party_id.clone(),
            sar.category,
            &request.created_by,
        ));
        info!(sar_id = %sar.sar_id, party_id = %sar.party_id, "SAR created manually");
        Ok(sar)
    }

    // === Validation ===

    /// Check a SAR for filing completeness. Non-throwing: returns every
    /// problem found, empty when the SAR is ready for review. The category
    /// is an enum and therefore valid by construction.
    pub fn validate(&self, sar: &SuspiciousActivityReport) -> Vec<String> {
        let mut errors = Vec::new();

        if sar.party_id.trim().is_empty() {
            errors.push("party id is required".to_string());
        }

        let narrative_len = sar.narrative.trim().chars().count();
        if narrative_len == 0 {
            errors.push("narrative is required".to_string());
        } else if narrative_len < self.config.min_narrative_length {
            errors.push(format!(
                "narrative must be at least {} characters (currently {narrative_len})",
                self.config.min_narrative_length
            ));
        }

        if !sar.transaction_ids.is_empty()
            && (sar.activity_start.is_none() || sar.activity_end.is_none())
        {
            errors.push("attached transactions require both activity dates".to_string());
        }

        if let Some(amount) = sar.total_amount {
            if amount < Decimal::ZERO {
                errors.push("total amount must be non-negative".to_string());
            }
            if sar
                .currency
                .as_deref()
                .map(str::trim)
                .unwrap_or("")
                .is_empty()
            {
                errors.push("total amount requires a currency".to_string());
            }
        }

        if let (Some(start), Some(end)) = (sar.activity_start, sar.activity_end) {
            if end < start {
                errors.push("activity end must not precede activity start".to_string());
            }
        }

        errors
    }

    // === Draft edits ===

    /// Replace the narrative of an editable SAR
    pub fn update_narrative(
        &mut self,
        sar_id: &str,
        narrative: &str,
        by: &str,
    ) -> SarResult<SuspiciousActivityReport> {
        require_non_empty("narrative", narrative)?;
        let sar = self.load(sar_id)?;

        if !sar.status.is_editable() {
            return Err(SarError::InvalidTransition {
                sar_id: sar.sar_id.clone(),
                from: sar.status,
                to: sar.status,
                reason: "narrative can only be edited while the SAR is a draft".to_string(),
            });
        }

        let updated = sar.with_narrative(narrative, by);
        self.persist(&updated)?;
        self.sink.publish(&SarEvent::NarrativeUpdated {
            sar_id: updated.sar_id.clone(),
            updated_by: by.to_string(),
            timestamp: Utc::now(),
        });
        Ok(updated)
    }

    /// Attach transaction ids to an editable SAR; duplicates collapse
    pub fn add_transactions(
        &mut self,
        sar_id: &str,
        transaction_ids: Vec<String>,
        by: &str,
    ) -> SarResult<SuspiciousActivityReport> {
        if transaction_ids.is_empty() {
            return Err(SarError::InvalidInput {
                field: "transaction_ids".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        let sar = self.load(sar_id)?;

        if !sar.status.is_editable() {
            return Err(SarError::InvalidTransition {
                sar_id: sar.sar_id.clone(),
                from: sar.status,
                to: sar.status,
                reason: "transactions can only be attached while the SAR is a draft".to_string(),
            });
        }

        let before = sar.transaction_ids.len();
        let updated = sar.with_transaction_ids(transaction_ids, by);
        let attached = updated.transaction_ids.len() - before;

        self.persist(&updated)?;
        self.sink.publish(&SarEvent::TransactionsAttached {
            sar_id: updated.sar_id.clone(),
            attached,
            updated_by: by.to_string(),
            timestamp: Utc::now(),
        });
        Ok(updated)
    }

    // === Guarded transitions ===

    /// Submit a draft for review. Requires validation to pass.
    pub fn submit_for_review(&mut self, sar_id: &str, by: &str) -> SarResult<SuspiciousActivityReport> {
        let sar = self.load(sar_id)?;
        self.guard(&sar, SarStatus::PendingReview, "only a draft can be submitted for review")?;

        let errors = self.validate(&sar);
        if !errors.is_empty() {
            return Err(SarError::InvalidTransition {
                sar_id: sar.sar_id.clone(),
                from: sar.status,
                to: SarStatus::PendingReview,
                reason: format!("validation failed: {}", errors.join("; ")),
            });
        }

        self.apply_transition(sar, SarStatus::PendingReview, by, |s| s)
    }

    /// Approve a SAR pending review. The approver must differ from the
    /// creator (maker-checker).
    pub fn approve(&mut self, sar_id: &str, approver: &str) -> SarResult<SuspiciousActivityReport> {
        require_non_empty("approver", approver)?;
        let sar = self.load(sar_id)?;
        self.guard(&sar, SarStatus::Approved, "approval requires a SAR pending review")?;

        if approver == sar.created_by {
            return Err(SarError::ApprovalRequired {
                sar_id: sar.sar_id.clone(),
                approver: approver.to_string(),
            });
        }

        let officer = approver.to_string();
        self.apply_transition(sar, SarStatus::Approved, approver, move |s| {
            s.with_officer(officer)
        })
    }

    /// Reject a SAR pending review, recording the mandatory reason
    pub fn reject(&mut self, sar_id: &str, by: &str, reason: &str) -> SarResult<SuspiciousActivityReport> {
        require_non_empty("reason", reason)?;
        let sar = self.load(sar_id)?;
        self.guard(&sar, SarStatus::Rejected, "rejection requires a SAR pending review")?;

        let reason = reason.to_string();
        self.apply_transition(sar, SarStatus::Rejected, by, move |s| {
            s.with_rejection_reason(reason)
        })
    }

    /// File an approved SAR with the authority, recording the filing
    /// reference and submission time
    pub fn submit_to_authority(
        &mut self,
        sar_id: &str,
        by: &str,
        filing_reference: &str,
    ) -> SarResult<SuspiciousActivityReport> {
        require_non_empty("filing_reference", filing_reference)?;
        let sar = self.load(sar_id)?;
        self.guard(&sar, SarStatus::Submitted, "only an approved SAR can be filed")?;

        let reference = filing_reference.to_string();
        let officer = by.to_string();
        self.apply_transition(sar, SarStatus::Submitted, by, move |s| {
            s.with_filing_reference(reference, &officer)
        })
    }

    /// Close a submitted SAR with a resolution
    pub fn close(&mut self, sar_id: &str, by: &str, resolution: &str) -> SarResult<SuspiciousActivityReport> {
        require_non_empty("resolution", resolution)?;
        let sar = self.load(sar_id)?;
        self.guard(&sar, SarStatus::Closed, "only a submitted SAR can be closed")?;

        let resolution = resolution.to_string();
        self.apply_transition(sar, SarStatus::Closed, by, move |s| {
            s.with_resolution(resolution)
        })
    }

    /// Cancel a SAR that has not yet left the institution
    pub fn cancel(&mut self, sar_id: &str, by: &str, reason: &str) -> SarResult<SuspiciousActivityReport> {
        require_non_empty("reason", reason)?;
        let sar = self.load(sar_id)?;

        if sar.status == SarStatus::Submitted {
            return Err(SarError::AlreadySubmitted {
                sar_id: sar.sar_id.clone(),
            });
        }
        if sar.status.is_terminal() {
            return Err(SarError::InvalidTransition {
                sar_id: sar.sar_id.clone(),
                from: sar.status,
                to: SarStatus::Cancelled,
                reason: "SAR is already in a terminal state".to_string(),
            });
        }

        let reason = reason.to_string();
        self.apply_transition(sar, SarStatus::Cancelled, by, move |s| {
            s.with_cancellation_reason(reason)
        })
    }

    // === Internals ===

    fn guard(
        &self,
        sar: &SuspiciousActivityReport,
        target: SarStatus,
        reason: &str,
    ) -> SarResult<()> {
        if sar.status.allows_transition_to(target) {
            Ok(())
        } else {
            Err(SarError::InvalidTransition {
                sar_id: sar.sar_id.clone(),
                from: sar.status,
                to: target,
                reason: reason.to_string(),
            })
        }
    }

    fn apply_transition(
        &mut self,
        sar: SuspiciousActivityReport,
        target: SarStatus,
        by: &str,
        prepare: impl FnOnce(SuspiciousActivityReport) -> SuspiciousActivityReport,
    ) -> SarResult<SuspiciousActivityReport> {
        let from = sar.status;
        let updated = prepare(sar).with_status(target, by);

        self.persist(&updated)?;
        self.sink.publish(&SarEvent::status_changed(
            updated.sar_id.clone(),
            from,
            target,
            by,
        ));
        info!(sar_id = %updated.sar_id, from = %from, to = %target, by = %by, "SAR transitioned");
        Ok(updated)
    }

    fn load(&self, sar_id: &str) -> SarResult<SuspiciousActivityReport> {
        self.repository
            .load(sar_id)
            .map_err(|e| SarError::Repository(e.to_string()))?
            .ok_or_else(|| SarError::NotFound {
                sar_id: sar_id.to_string(),
            })
    }

    fn persist(&mut self, sar: &SuspiciousActivityReport) -> SarResult<()> {
        self.repository
            .save(sar)
            .map_err(|e| SarError::Repository(e.to_string()))
    }
}

fn require_non_empty(field: &str, value: &str) -> SarResult<()> {
    if value.trim().is_empty() {
        Err(SarError::InvalidInput {
            field: field.to_string(),
            reason: "must not be empty".to_string(),
        })
    } else {
        Ok(())
    }
}
