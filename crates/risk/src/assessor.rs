//! Risk assessor - multi-factor scoring engine
//!
//! Computes four component scores (jurisdiction, business type, sanctions,
//! transactions), applies the PEP multiplier, composes the overall score and
//! derives recommendations. Never mutates external state.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::prelude::ToPrimitive;
use sentra_core::{clamp_score, jurisdiction, CountryRiskTier, Party, RiskLevel, SanctionsResult};
use std::collections::HashSet;
use tracing::{debug, info};

use crate::config::RiskConfig;
use crate::error::{RiskError, RiskResult};
use crate::score::{AmlRiskScore, RiskFactors, TransactionProfile};

/// NAICS prefix -> base business-type score. Longest matching prefix wins.
const INDUSTRY_BASE_SCORES: &[(&str, f64)] = &[
    ("7132", 90.0), // gambling industries
    ("5223", 85.0), // money services businesses
    ("5222", 75.0), // nondepository credit, incl. pawn
    ("4483", 70.0), // jewelry and precious metals
    ("4539", 65.0), // art and used merchandise dealers
    ("531", 65.0),  // real estate
    ("4411", 60.0), // vehicle dealers
    ("4453", 55.0), // beer, wine and liquor stores
];

/// Base score for a known industry code with no table entry
const INDUSTRY_UNLISTED_SCORE: f64 = 35.0;
/// Neutral base score when no industry code is on file
const INDUSTRY_UNKNOWN_SCORE: f64 = 50.0;

/// Fixed sanctions score for a confirmed but not yet blocking match
const CONFIRMED_MATCH_SCORE: f64 = 90.0;

/// Recommendation banding: at or above this a factor demands action
const BAND_HIGH: f64 = 70.0;
/// At or above this (and below [`BAND_HIGH`]) a factor warrants watching
const BAND_WATCH: f64 = 40.0;

/// Multiplier applied to jurisdiction and business scores for a PEP.
/// Level 1 is the most exposed; unknown levels get the floor multiplier.
pub fn pep_multiplier(pep_level: Option<u8>) -> f64 {
    match pep_level {
        None => 1.0,
        Some(1) => 2.0,
        Some(2) => 1.8,
        Some(3) => 1.6,
        Some(4) => 1.4,
        Some(_) => 1.2,
    }
}

/// Apply a PEP multiplier to a single factor score, reclamping to [0, 100]
pub fn apply_pep_adjustment(score: f64, multiplier: f64) -> f64 {
    clamp_score(score * multiplier)
}

/// Next periodic review date for a given risk level
pub fn next_review_date(level: RiskLevel, from: DateTime<Utc>) -> DateTime<Utc> {
    let days = match level {
        RiskLevel::Low => 365,
        RiskLevel::Medium => 180,
        RiskLevel::High => 90,
    };
    from + Duration::days(days)
}

/// The risk assessor
///
/// Stateless between calls; safe to share across threads by reference.
pub struct RiskAssessor {
    config: RiskConfig,
}

impl Default for RiskAssessor {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl RiskAssessor {
    /// Create an assessor with the given configuration
    pub fn new(config: RiskConfig) -> Self {
        Self { config }
    }

    /// Create an assessor with default configuration
    pub fn with_defaults() -> Self {
        Self::new(RiskConfig::default())
    }

    /// Get the current configuration
    pub fn config(&self) -> &RiskConfig {
        &self.config
    }

    /// Assess a party's AML risk.
    ///
    /// Fails only on a prohibited primary jurisdiction or a missing party
    /// id. Absent sanctions or transaction data contributes a zero factor
    /// score rather than an error.
    pub fn assess(
        &self,
        party: &Party,
        sanctions: Option<&SanctionsResult>,
        transactions: Option<&TransactionProfile>,
    ) -> RiskResult<AmlRiskScore> {
        if party.party_id.trim().is_empty() {
            return Err(RiskError::InvalidInput {
                field: "party_id".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        // Hard compliance stop - the only non-input error path
        if jurisdiction::is_prohibited(&party.country) {
            return Err(RiskError::ProhibitedJurisdiction {
                party_id: party.party_id.clone(),
                country: party.country.clone(),
            });
        }

        let jurisdiction_raw = self.assess_jurisdiction_risk(party);
        let business_raw = self.assess_business_type_risk(party);
        let sanctions_score = self.assess_sanctions_risk(sanctions);
        let transaction_score = self.assess_transaction_risk(transactions);

        // PEP amplification applies to jurisdiction and business type only
        let multiplier = pep_multiplier(party.pep_level);
        let jurisdiction_score = apply_pep_adjustment(jurisdiction_raw, multiplier);
        let business_score = apply_pep_adjustment(business_raw, multiplier);

        debug!(
            party_id = %party.party_id,
            jurisdiction = jurisdiction_score,
            business = business_score,
            sanctions = sanctions_score,
            transaction = transaction_score,
            "factor scores computed"
        );

        let primary_tier = CountryRiskTier::of(&party.country);
        let mut factors = RiskFactors::new(
            jurisdiction_score,
            business_score,
            sanctions_score,
            transaction_score,
        )
        .with_metadata("primary_country", party.country.clone())
        .with_metadata("primary_tier", primary_tier.to_string());

        if let Some(level) = party.pep_level {
            factors = factors
                .with_metadata("pep_level", level.to_string())
                .with_metadata("pep_multiplier", format!("{multiplier:.1}"));
        }

        let overall_score = factors.compose_overall(&self.config);
        let risk_level = RiskLevel::from_score(overall_score);
        let recommendations = self.generate_recommendations(&factors, overall_score);

        info!(
            party_id = %party.party_id,
            overall = overall_score,
            level = %risk_level,
            "risk assessment completed"
        );

        Ok(AmlRiskScore {
            party_id: party.party_id.clone(),
            overall_score,
            risk_level,
            factors,
            recommendations,
            assessed_at: Utc::now(),
            assessed_by: self.config.assessor_id.clone(),
        })
    }

    /// Jurisdiction factor: primary tier at 70%, worst associated tier at
    /// 30%, plus an ownership-weighted beneficial-owner surcharge of up to
    /// 20 points. An associated prohibited country contributes its fixed
    /// score instead of failing the assessment.
    pub fn assess_jurisdiction_risk(&self, party: &Party) -> f64 {
        let primary = CountryRiskTier::of(&party.country).base_score();
        let worst_associated = party
            .associated_countries
            .iter()
            .map(|c| CountryRiskTier::of(c).base_score())
            .fold(0.0, f64::max);

        let mut score = primary * 0.7 + worst_associated * 0.3;

        let total_pct: f64 = party
            .beneficial_owners
            .iter()
            .map(|o| o.ownership_pct.max(0.0))
            .sum();
        if total_pct > 0.0 {
            let weighted: f64 = party
                .beneficial_owners
                .iter()
                .map(|o| o.ownership_pct.max(0.0) * CountryRiskTier::of(&o.country).base_score())
                .sum();
            let owner_mean = weighted / total_pct;
            score += owner_mean / 100.0 * 20.0;
        }

        clamp_score(score)
    }

    /// Business-type factor: NAICS base score plus behavioral add-ons
    pub fn assess_business_type_risk(&self, party: &Party) -> f64 {
        let mut score = match &party.industry_code {
            None => INDUSTRY_UNKNOWN_SCORE,
            Some(code) => INDUSTRY_BASE_SCORES
                .iter()
                .filter(|(prefix, _)| code.starts_with(prefix))
                .max_by_key(|(prefix, _)| prefix.len())
                .map(|(_, base)| *base)
                .unwrap_or(INDUSTRY_UNLISTED_SCORE),
        };

        if party.flags.cash_intensive {
            score += 15.0;
        }
        if party.flags.high_value_transactions {
            score += 10.0;
        }
        if party.associated_countries.len() > 3 {
            score += 10.0;
        }

        clamp_score(score)
    }

    /// Sanctions factor from the screening provider's result
    pub fn assess_sanctions_risk(&self, sanctions: Option<&SanctionsResult>) -> f64 {
        let Some(result) = sanctions else {
            return 0.0;
        };

        if result.is_blocked {
            return 100.0;
        }
        if !result.has_matches {
            return 0.0;
        }
        if result.has_confirmed_match {
            return CONFIRMED_MATCH_SCORE;
        }

        let multiplier = (1.0 + 0.1 * f64::from(result.match_count)).min(1.5);
        clamp_score(result.highest_match_score * multiplier)
    }

    /// Transaction factor: additive signals, each individually capped
    pub fn assess_transaction_risk(&self, transactions: Option<&TransactionProfile>) -> f64 {
        let Some(profile) = transactions else {
            return 0.0;
        };

        let mut score = 0.0;

        let total = profile.total_volume.to_f64().unwrap_or(0.0);
        let expected = profile.expected_volume.to_f64().unwrap_or(0.0);
        if expected > 0.0 {
            let ratio = total / expected;
            if ratio > 1.0 {
                score += ((ratio - 1.0) * 10.0).min(30.0);
            }
        }

        if profile.average_transaction_count > 0.0 {
            let ratio = f64::from(profile.transaction_count) / profile.average_transaction_count;
            if ratio > 2.0 {
                score += ((ratio - 2.0) * 5.0).min(20.0);
            }
        }

        let distinct: HashSet<String> = profile
            .counterparty_countries
            .iter()
            .map(|c| c.trim().to_uppercase())
            .filter(|c| !c.is_empty())
            .collect();
        if distinct.len() > 5 {
            score += (3.0 * (distinct.len() - 5) as f64).min(15.0);
        }

        score += profile.high_risk_country_ratio.clamp(0.0, 1.0) * 25.0;

        if profile.structuring_suspected {
            score += 30.0;
        }

        let round = profile.round_amount_ratio.clamp(0.0, 1.0);
        if round > 0.6 {
            score += 50.0 * (round - 0.6);
        }

        clamp_score(score)
    }

    /// Threshold-banded recommendations in deterministic order:
    /// jurisdiction, business, sanctions, transaction, overall.
    pub fn generate_recommendations(&self, factors: &RiskFactors, overall: f64) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();

        let bands: [(f64, &str, &str); 5] = [
            (
                factors.jurisdiction_score,
                "Conduct enhanced due diligence on jurisdiction exposure",
                "Monitor jurisdiction exposure at the next periodic review",
            ),
            (
                factors.business_type_score,
                "Perform enhanced due diligence on business activities and ownership",
                "Review expected account activity against the stated business profile",
            ),
            (
                factors.sanctions_score,
                "Escalate to sanctions compliance for manual match review",
                "Re-screen against sanctions lists at increased frequency",
            ),
            (
                factors.transaction_score,
                "Place the account under enhanced transaction monitoring",
                "Review transaction activity against the expected profile",
            ),
            (
                overall,
                "Escalate to a compliance officer for enhanced due diligence approval",
                "Schedule an enhanced periodic review",
            ),
        ];

        for (score, high, watch) in bands {
            let rec = if score >= BAND_HIGH {
                Some(high)
            } else if score >= BAND_WATCH {
                Some(watch)
            } else {
                None
            };
            if let Some(rec) = rec {
                if !out.iter().any(|existing| existing == rec) {
                    out.push(rec.to_string());
                }
            }
        }

        out
    }
}
