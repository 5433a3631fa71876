//! Case lifecycle events
//!
//! Published after every successful mutation so downstream observers can
//! track status transitions. Purely observational: publishing never affects
//! control flow, and the default sink discards everything.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::SarCategory;
use crate::status::SarStatus;

/// Events emitted by the case manager
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum SarEvent {
    /// A SAR was created from one of the factories
    Created {
        sar_id: String,
        party_id: String,
        category: SarCategory,
        created_by: String,
        timestamp: DateTime<Utc>,
    },

    /// A SAR moved between lifecycle states
    StatusChanged {
        sar_id: String,
        from: SarStatus,
        to: SarStatus,
        changed_by: String,
        timestamp: DateTime<Utc>,
    },

    /// The narrative of a draft was replaced
    NarrativeUpdated {
        sar_id: String,
        updated_by: String,
        timestamp: DateTime<Utc>,
    },

    /// Transactions were attached to a draft
    TransactionsAttached {
        sar_id: String,
        attached: usize,
        updated_by: String,
        timestamp: DateTime<Utc>,
    },
}

impl SarEvent {
    /// Create a new Created event
    pub fn created(
        sar_id: impl Into<String>,
        party_id: impl Into<String>,
        category: SarCategory,
        created_by: impl Into<String>,
    ) -> Self {
        SarEvent::Created {
            sar_id: sar_id.into(),
            party_id: party_id.into(),
            category,
            created_by: created_by.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a new StatusChanged event
    pub fn status_changed(
        sar_id: impl Into<String>,
        from: SarStatus,
        to: SarStatus,
        changed_by: impl Into<String>,
    ) -> Self {
        SarEvent::StatusChanged {
            sar_id: sar_id.into(),
            from,
            to,
            changed_by: changed_by.into(),
            timestamp: Utc::now(),
        }
    }

    /// The id of the SAR the event concerns
    pub fn sar_id(&self) -> &str {
        match self {
            SarEvent::Created { sar_id, .. } => sar_id,
            SarEvent::StatusChanged { sar_id, .. } => sar_id,
            SarEvent::NarrativeUpdated { sar_id, .. } => sar_id,
            SarEvent::TransactionsAttached { sar_id, .. } => sar_id,
        }
    }
}

/// Observability sink for case events
pub trait EventSink {
    fn publish(&self, event: &SarEvent);
}

/// Default sink: discards every event
#[derive(Debug, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn publish(&self, _event: &SarEvent) {}
}
