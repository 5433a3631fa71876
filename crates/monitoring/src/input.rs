//! Raw transaction records and normalization
//!
//! Upstream systems deliver records with gaps; normalization runs before
//! any detector so the sweep only ever sees complete [`Transaction`]s.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sentra_core::Transaction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A raw transaction record as delivered by an upstream provider
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionInput {
    pub id: Option<String>,
    pub amount: Decimal,
    pub currency: Option<String>,
    pub kind: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub counterparty_id: Option<String>,
    pub counterparty_country: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl TransactionInput {
    /// A minimal record carrying only an amount
    pub fn with_amount(amount: Decimal) -> Self {
        Self {
            amount,
            ..Self::default()
        }
    }

    /// Coerce into a normalized [`Transaction`]: a missing id is
    /// synthesized, a missing date becomes `now`, and the counterparty
    /// country is upper-cased.
    pub fn normalize(self) -> Transaction {
        let id = match self.id {
            Some(id) if !id.trim().is_empty() => id,
            _ => synthesize_id(),
        };

        Transaction {
            id,
            amount: self.amount,
            currency: self.currency.unwrap_or_else(|| "USD".to_string()),
            kind: self.kind.unwrap_or_else(|| "unknown".to_string()),
            date: self.date.unwrap_or_else(Utc::now),
            counterparty_id: self.counterparty_id,
            counterparty_country: self
                .counterparty_country
                .map(|c| c.trim().to_uppercase())
                .filter(|c| !c.is_empty()),
            description: self.description.unwrap_or_default(),
            metadata: self.metadata,
        }
    }
}

fn synthesize_id() -> String {
    format!(
        "TXN-{}",
        uuid::Uuid::new_v4().to_string()[..8].to_uppercase()
    )
}
