use serde::{Serialize, Serializer};

use crate::model::findings::{Finding, RiskLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    ImmediateConsultation,
    SpecialistConsultation,
    FollowUp,
    NoSignificantFindings,
    InsufficientData,
}

impl Recommendation {
    pub fn message(self) -> &'static str {
        match self {
            Recommendation::ImmediateConsultation => "Immediate medical consultation recommended",
            Recommendation::SpecialistConsultation => {
                "Medical consultation recommended to review elevated findings"
            }
            Recommendation::FollowUp => "Follow-up with specialist recommended",
            Recommendation::NoSignificantFindings => "No significant abnormalities detected",
            Recommendation::InsufficientData => {
                "Insufficient data for assessment; repeat the analysis or consult a clinician"
            }
        }
    }
}

impl Serialize for Recommendation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Aggregate triage output for one probability vector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriageResult {
    pub policy: String,
    pub overall_risk: RiskLevel,
    pub risk_score: f64,
    pub recommendation: Recommendation,
    pub findings: Vec<Finding>,
    pub all_pathologies: Vec<Finding>,
    pub has_abnormality: bool,
    pub confidence: f64,
    pub calibrated_confidence: f64,
}
