use tracing::info;

use crate::model::screening::Prediction;
use crate::model::{
    BinaryProbabilities, ExactModelResult, FallbackResult, RiskLevel, ScreeningOutcome,
    TriageResult, round_to,
};

const EXACT_NOTE: &str = "AI screening result. Please consult a radiologist.";
const FALLBACK_NOTE: &str = "AI analysis complete. Please consult a radiologist.";

/// Findings at or below this fraction do not by themselves flag a study.
const FALLBACK_MIN_SIGNAL: f64 = 0.3;
const FALLBACK_MIN_HIGH_SCORE: f64 = 50.0;
const FALLBACK_LOW_SCALE: f64 = 30.0;
const BENIGN_RESIDUAL_SCALE: f64 = 20.0;

/// Verdict from a dedicated malignant/benign classifier.
pub fn screen_exact(probs: &BinaryProbabilities) -> ScreeningOutcome {
    let confidence = probs.malignant.max(probs.benign);
    let (prediction, risk_score, risk_level) = if probs.malignant >= probs.benign {
        (
            Prediction::Malignant,
            round_to(probs.malignant * 100.0, 1),
            RiskLevel::High,
        )
    } else {
        (
            Prediction::Benign,
            round_to((1.0 - probs.benign) * BENIGN_RESIDUAL_SCALE, 1),
            RiskLevel::Low,
        )
    };

    ScreeningOutcome::Exact(ExactModelResult {
        prediction,
        confidence,
        calibrated_confidence: confidence,
        risk_score,
        risk_level,
        probabilities: *probs,
        analysis_method: "binary-classifier",
        note: EXACT_NOTE,
    })
}

/// Verdict derived from a triage result when no dedicated classifier is
/// available. Any abnormality flags the study.
pub fn screen_fallback(triage: TriageResult) -> ScreeningOutcome {
    let max_prob = triage
        .findings
        .iter()
        .filter(|f| f.risk_level != RiskLevel::Low)
        .map(|f| f.probability / 100.0)
        .fold(0.0, f64::max);

    let flagged = triage.has_abnormality || max_prob > FALLBACK_MIN_SIGNAL;
    let (prediction, risk_score, risk_level) = if flagged {
        (
            Prediction::Malignant,
            round_to(max_prob * 100.0, 1).max(FALLBACK_MIN_HIGH_SCORE),
            RiskLevel::High,
        )
    } else {
        (
            Prediction::Benign,
            round_to(triage.confidence * FALLBACK_LOW_SCALE, 1),
            RiskLevel::Low,
        )
    };

    let malignant = max_prob.max(FALLBACK_MIN_SIGNAL);
    info!(
        policy = %triage.policy,
        flagged,
        "binary classifier unavailable, screening from triage result"
    );

    ScreeningOutcome::Fallback(FallbackResult {
        prediction,
        confidence: triage.confidence,
        calibrated_confidence: triage.calibrated_confidence,
        risk_score,
        risk_level,
        probabilities: BinaryProbabilities {
            malignant,
            benign: 1.0 - malignant,
        },
        analysis: triage,
        analysis_method: "chest-model-fallback",
        note: FALLBACK_NOTE,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_screening.rs"]
mod tests;
