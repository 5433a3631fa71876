//! Narrative synthesis
//!
//! Builds the regulator-facing narrative from the evidence a SAR was
//! created from. Sections are joined with blank lines; a filing narrative
//! must ultimately reach the minimum length enforced by validation.

use sentra_monitoring::TransactionMonitoringResult;
use sentra_risk::AmlRiskScore;

/// Synthesize a narrative from a monitoring result.
///
/// Five sections: who was monitored, what patterns fired, when the activity
/// occurred, how much volume was involved (only when non-zero), and why the
/// detectors fired - closed by an alert summary.
pub fn from_monitoring(result: &TransactionMonitoringResult) -> String {
    let mut sections: Vec<String> = Vec::new();

    sections.push(format!(
        "Suspicious activity was identified for party {} during routine transaction monitoring.",
        result.party_id
    ));

    let patterns: Vec<String> = result.patterns.iter().map(|p| p.to_string()).collect();
    sections.push(format!(
        "The following patterns were detected: {}.",
        patterns.join(", ")
    ));

    sections.push(format!(
        "The activity occurred between {} and {} across {} transactions.",
        result.period_start.format("%Y-%m-%d"),
        result.period_end.format("%Y-%m-%d"),
        result.transaction_count
    ));

    if result.total_volume > rust_decimal::Decimal::ZERO {
        sections.push(format!(
            "The aggregate volume of the reviewed activity was {}.",
            result.total_volume
        ));
    }

    sections.push(format!(
        "Detection reasons: {}.",
        result.reasons.join("; ")
    ));

    let severity = result
        .top_severity()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "none".to_string());
    sections.push(format!(
        "{} alert(s) were raised; the highest severity was {severity}.",
        result.alerts.len()
    ));

    sections.join("\n\n")
}

/// Synthesize a narrative from a risk assessment.
///
/// Covers the party, the full factor breakdown, PEP exposure when present
/// in the factor metadata, the caller's escalation reason, and the
/// assessment's recommendations.
pub fn from_risk_score(score: &AmlRiskScore, reason: &str) -> String {
    let mut sections: Vec<String> = Vec::new();

    sections.push(format!(
        "Party {} was assessed as {} risk with an overall score of {:.1}.",
        score.party_id, score.risk_level, score.overall_score
    ));

    sections.push(format!(
        "Component scores - jurisdiction: {:.1}, business type: {:.1}, sanctions: {:.1}, transactions: {:.1}.",
        score.factors.jurisdiction_score,
        score.factors.business_type_score,
        score.factors.sanctions_score,
        score.factors.transaction_score
    ));

    if let Some(level) = score.factors.metadata.get("pep_level") {
        let multiplier = score
            .factors
            .metadata
            .get("pep_multiplier")
            .map(String::as_str)
            .unwrap_or("n/a");
        sections.push(format!(
            "The party is a politically exposed person (level {level}); a multiplier of {multiplier} was applied to the jurisdiction and business factors."
        ));
    }

    sections.push(format!("Reason for escalation: {reason}."));

    if !score.recommendations.is_empty() {
        sections.push(format!(
            "Recommended actions: {}.",
            score.recommendations.join("; ")
        ));
    }

    sections.join("\n\n")
}
