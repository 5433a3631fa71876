//! Sentra risk assessor
//!
//! Deterministic multi-factor AML risk scoring for a counterparty.
//!
//! ## Key Components
//!
//! - [`config::RiskConfig`] - Factor weights and assessor identity
//! - [`score::RiskFactors`] / [`score::AmlRiskScore`] - Immutable score objects
//! - [`score::TransactionProfile`] - Aggregated transaction signals input
//! - [`assessor::RiskAssessor`] - The scoring engine
//!
//! Scoring is a pure function of its inputs: identical party, sanctions and
//! transaction data always produce identical factor scores, overall score
//! and recommendations. The only failure paths are a prohibited primary
//! jurisdiction and malformed required input; everything else degrades to a
//! lower-confidence score.

pub mod assessor;
pub mod config;
pub mod error;
pub mod score;

pub use assessor::{next_review_date, pep_multiplier, RiskAssessor};
pub use config::RiskConfig;
pub use error::{RiskError, RiskResult};
pub use score::{AmlRiskScore, RiskFactors, TransactionProfile};
