//! Normalized transaction record

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single normalized transaction.
///
/// Monitoring coerces raw provider records into this shape before any
/// detector runs: the id is always present, the counterparty country (when
/// known) is upper-cased, and the date is always set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub amount: Decimal,
    pub currency: String,
    /// Transaction type, e.g. "wire", "cash_deposit"
    pub kind: String,
    pub date: DateTime<Utc>,
    pub counterparty_id: Option<String>,
    pub counterparty_country: Option<String>,
    pub description: String,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Transaction {
    /// Calendar day of the transaction (UTC), used for daily grouping
    pub fn day(&self) -> chrono::NaiveDate {
        self.date.date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_day_grouping_key() {
        let tx = Transaction {
            id: "TXN-1".to_string(),
            amount: dec!(100),
            currency: "USD".to_string(),
            kind: "wire".to_string(),
            date: "2026-03-05T23:59:00Z".parse().unwrap(),
            counterparty_id: None,
            counterparty_country: None,
            description: String::new(),
            metadata: HashMap::new(),
        };

        assert_eq!(tx.day().to_string(), "2026-03-05");
    }
}
