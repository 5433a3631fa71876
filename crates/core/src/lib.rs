//! Sentra core domain types
//!
//! Shared value types used by the risk, monitoring and SAR crates:
//!
//! - [`party::Party`] - Counterparty identity, jurisdictions, PEP status, UBOs
//! - [`sanctions::SanctionsResult`] - Screening outcome from the sanctions provider
//! - [`transaction::Transaction`] - Normalized transaction record
//! - [`jurisdiction::CountryRiskTier`] - Country risk classification table
//! - [`score::RiskLevel`] - Fixed risk banding over 0-100 scores
//! - [`severity::AlertSeverity`] - Ordered severity lattice with `max()` aggregation

pub mod jurisdiction;
pub mod party;
pub mod pattern;
pub mod sanctions;
pub mod score;
pub mod severity;
pub mod transaction;

pub use jurisdiction::CountryRiskTier;
pub use party::{BeneficialOwner, Party, PartyFlags};
pub use pattern::PatternCategory;
pub use sanctions::SanctionsResult;
pub use score::{clamp_score, RiskLevel};
pub use severity::AlertSeverity;
pub use transaction::Transaction;
