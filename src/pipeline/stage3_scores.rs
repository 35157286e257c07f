use crate::model::thresholds::CalibrationParams;
use crate::model::{Finding, TriagePolicy, clip01, round_to};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriageScores {
    /// Normalized weighted score in [0, 1]; tiers are compared against this.
    pub score_fraction: f64,
    /// `score_fraction` on a 0-100 scale, one decimal.
    pub risk_score: f64,
    pub confidence: f64,
    pub calibrated_confidence: f64,
}

pub fn compute_scores(findings: &[Finding], policy: &TriagePolicy) -> TriageScores {
    let score_fraction = weighted_score(findings, policy);
    let confidence = raw_confidence(findings);
    TriageScores {
        score_fraction,
        risk_score: round_to(score_fraction * 100.0, 1),
        confidence,
        calibrated_confidence: calibrate(confidence, &policy.calibration),
    }
}

pub fn weighted_score(findings: &[Finding], policy: &TriagePolicy) -> f64 {
    let mut weighted = 0.0;
    for f in findings {
        weighted += (f.probability / 100.0) * policy.weight(&f.pathology);
    }
    clip01(weighted / policy.score_divisor)
}

/// Fraction of the highest-scoring finding; 0 when there are none.
pub fn raw_confidence(findings: &[Finding]) -> f64 {
    findings
        .iter()
        .map(|f| f.probability / 100.0)
        .fold(0.0, f64::max)
}

/// Logistic squash around 0.5, clamped to the configured band.
pub fn calibrate(raw: f64, params: &CalibrationParams) -> f64 {
    let squashed = 1.0 / (1.0 + (-params.steepness * (raw - 0.5)).exp());
    squashed.clamp(params.floor, params.ceiling)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_scores.rs"]
mod tests;
