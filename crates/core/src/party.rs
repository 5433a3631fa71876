//! Counterparty identity and KYC attributes

use serde::{Deserialize, Serialize};

/// A counterparty subject to AML assessment.
///
/// Country codes are ISO 3166-1 alpha-2 and are expected upper-cased;
/// [`Party::new`] normalizes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Party {
    /// Unique party identifier
    pub party_id: String,
    /// Primary country of incorporation / residence
    pub country: String,
    /// Other countries the party operates in or is connected to
    pub associated_countries: Vec<String>,
    /// NAICS industry code, if known
    pub industry_code: Option<String>,
    /// PEP exposure level: `Some(1)` = most exposed, `None` = not a PEP
    pub pep_level: Option<u8>,
    /// Ultimate beneficial owners
    pub beneficial_owners: Vec<BeneficialOwner>,
    /// Behavioral flags from onboarding
    pub flags: PartyFlags,
}

/// An ultimate beneficial owner of a [`Party`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeneficialOwner {
    pub name: String,
    /// Ownership percentage, 0-100
    pub ownership_pct: f64,
    /// Owner's country of residence
    pub country: String,
}

/// Behavioral flags recorded at onboarding
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PartyFlags {
    /// Business handles significant cash volume
    #[serde(default)]
    pub cash_intensive: bool,
    /// Business routinely moves high-value transactions
    #[serde(default)]
    pub high_value_transactions: bool,
}

impl Party {
    /// Create a party with normalized (upper-cased) country codes.
    pub fn new(party_id: impl Into<String>, country: &str) -> Self {
        Self {
            party_id: party_id.into(),
            country: country.trim().to_uppercase(),
            associated_countries: Vec::new(),
            industry_code: None,
            pep_level: None,
            beneficial_owners: Vec::new(),
            flags: PartyFlags::default(),
        }
    }

    /// Whether the party is a politically exposed person
    pub fn is_pep(&self) -> bool {
        self.pep_level.is_some()
    }
}
