//! Sentra transaction monitor
//!
//! Scans a window of transactions for suspicious patterns with a bank of
//! independent detectors and aggregates the fired patterns into a single
//! 0-100 risk score.
//!
//! ## Key Components
//!
//! - [`config::MonitorConfig`] - Detector thresholds (configurable, not hardcoded)
//! - [`input::TransactionInput`] - Raw records, normalized before detection
//! - [`alert::TransactionAlert`] - A single detector firing, with evidence
//! - [`monitor::TransactionMonitor`] - The detector sweep
//! - [`result::TransactionMonitoringResult`] - Aggregate outcome
//!
//! `monitor()` is pure over its transaction set: the result does not depend
//! on input order, and no external state is consulted beyond the injected
//! configuration.

pub mod alert;
pub mod config;
pub mod error;
pub mod input;
pub mod monitor;
pub mod result;

pub use alert::TransactionAlert;
pub use config::MonitorConfig;
pub use error::{MonitorError, MonitorResult};
pub use input::TransactionInput;
pub use monitor::TransactionMonitor;
pub use result::TransactionMonitoringResult;
