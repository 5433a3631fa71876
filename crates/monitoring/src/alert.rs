//! Monitoring alerts

use chrono::{DateTime, Utc};
use sentra_core::{AlertSeverity, PatternCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single detector firing, with enough evidence to reconstruct why
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionAlert {
    pub category: PatternCategory,
    pub severity: AlertSeverity,
    pub message: String,
    /// Detector-specific evidence (counts, thresholds, transaction ids)
    #[serde(default)]
    pub evidence: HashMap<String, serde_json::Value>,
    pub triggered_at: DateTime<Utc>,
}

impl TransactionAlert {
    /// Create an alert with empty evidence
    pub fn new(
        category: PatternCategory,
        severity: AlertSeverity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            severity,
            message: message.into(),
            evidence: HashMap::new(),
            triggered_at: Utc::now(),
        }
    }

    /// Attach an evidence entry
    pub fn with_evidence(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.evidence.insert(key.into(), value.into());
        self
    }
}
