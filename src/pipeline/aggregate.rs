use tracing::debug;

use crate::error::InputValidationError;
use crate::model::{ProbabilityMap, Recommendation, RiskLevel, TriagePolicy, TriageResult};
use crate::pipeline::stage1_validate::validate_probabilities;
use crate::pipeline::stage2_findings::{build_findings, select_reportable};
use crate::pipeline::stage3_scores::{calibrate, compute_scores};
use crate::pipeline::stage4_classify::decide;

/// Turns one classifier probability vector into a triage result.
///
/// Invalid probabilities (non-finite, outside [0, 1], or naming a category
/// outside the label space) are rejected. An empty vector is not an error; it
/// yields a low-risk result recommending a repeat analysis.
pub fn aggregate(
    probabilities: &ProbabilityMap,
    policy: &TriagePolicy,
) -> Result<TriageResult, InputValidationError> {
    let entries = validate_probabilities(probabilities, policy)?;
    if entries.is_empty() {
        debug!(policy = %policy.name, "no scored categories, returning insufficient-data result");
        return Ok(insufficient_data(policy));
    }

    let all_pathologies = build_findings(&entries, policy);
    let findings = select_reportable(&all_pathologies, policy.reportable_percent);
    let scores = compute_scores(&all_pathologies, policy);
    let decision = decide(&all_pathologies, scores.score_fraction, policy);

    debug!(
        policy = %policy.name,
        categories = all_pathologies.len(),
        reportable = findings.len(),
        score = scores.score_fraction,
        risk = decision.overall_risk.as_str(),
        "aggregated classifier output"
    );

    Ok(TriageResult {
        policy: policy.name.clone(),
        overall_risk: decision.overall_risk,
        risk_score: scores.risk_score,
        recommendation: decision.recommendation,
        findings,
        all_pathologies,
        has_abnormality: decision.overall_risk != RiskLevel::Low,
        confidence: scores.confidence,
        calibrated_confidence: scores.calibrated_confidence,
    })
}

fn insufficient_data(policy: &TriagePolicy) -> TriageResult {
    TriageResult {
        policy: policy.name.clone(),
        overall_risk: RiskLevel::Low,
        risk_score: 0.0,
        recommendation: Recommendation::InsufficientData,
        findings: Vec::new(),
        all_pathologies: Vec::new(),
        has_abnormality: false,
        confidence: 0.0,
        calibrated_confidence: calibrate(0.0, &policy.calibration),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/aggregate.rs"]
mod tests;
