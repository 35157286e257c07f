use serde::Serialize;

use crate::error::InputValidationError;
use crate::model::findings::RiskLevel;
use crate::model::triage::TriageResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Prediction {
    Malignant,
    Benign,
}

impl Prediction {
    pub fn as_str(self) -> &'static str {
        match self {
            Prediction::Malignant => "malignant",
            Prediction::Benign => "benign",
        }
    }
}

/// Output of a dedicated malignant/benign classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BinaryProbabilities {
    pub malignant: f64,
    pub benign: f64,
}

impl BinaryProbabilities {
    pub fn new(malignant: f64, benign: f64) -> Result<Self, InputValidationError> {
        for (category, value) in [("malignant", malignant), ("benign", benign)] {
            if !value.is_finite() {
                return Err(InputValidationError::NonFinite {
                    category: category.to_string(),
                });
            }
            if !(0.0..=1.0).contains(&value) {
                return Err(InputValidationError::OutOfRange {
                    category: category.to_string(),
                    value,
                });
            }
        }
        Ok(Self { malignant, benign })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExactModelResult {
    pub prediction: Prediction,
    pub confidence: f64,
    pub calibrated_confidence: f64,
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub probabilities: BinaryProbabilities,
    pub analysis_method: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FallbackResult {
    pub prediction: Prediction,
    pub confidence: f64,
    pub calibrated_confidence: f64,
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub probabilities: BinaryProbabilities,
    pub analysis: TriageResult,
    pub analysis_method: &'static str,
    pub note: &'static str,
}

/// Screening verdict, tagged by which model produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ScreeningOutcome {
    Exact(ExactModelResult),
    Fallback(FallbackResult),
}

impl ScreeningOutcome {
    pub fn prediction(&self) -> Prediction {
        match self {
            ScreeningOutcome::Exact(r) => r.prediction,
            ScreeningOutcome::Fallback(r) => r.prediction,
        }
    }

    pub fn risk_level(&self) -> RiskLevel {
        match self {
            ScreeningOutcome::Exact(r) => r.risk_level,
            ScreeningOutcome::Fallback(r) => r.risk_level,
        }
    }

    pub fn risk_score(&self) -> f64 {
        match self {
            ScreeningOutcome::Exact(r) => r.risk_score,
            ScreeningOutcome::Fallback(r) => r.risk_score,
        }
    }
}
