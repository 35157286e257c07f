use crate::model::{Finding, Recommendation, RiskLevel, TriagePolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub overall_risk: RiskLevel,
    pub recommendation: Recommendation,
}

/// First matching rule wins.
pub fn decide(all: &[Finding], score_fraction: f64, policy: &TriagePolicy) -> Decision {
    if has_critical_hit(all, policy) {
        return Decision {
            overall_risk: RiskLevel::High,
            recommendation: Recommendation::ImmediateConsultation,
        };
    }

    if score_fraction >= policy.score_tiers.high {
        return Decision {
            overall_risk: RiskLevel::High,
            recommendation: Recommendation::SpecialistConsultation,
        };
    }

    if score_fraction >= policy.score_tiers.medium {
        return Decision {
            overall_risk: RiskLevel::Medium,
            recommendation: Recommendation::FollowUp,
        };
    }

    Decision {
        overall_risk: RiskLevel::Low,
        recommendation: Recommendation::NoSignificantFindings,
    }
}

pub fn has_critical_hit(all: &[Finding], policy: &TriagePolicy) -> bool {
    all.iter()
        .any(|f| policy.is_critical(&f.pathology) && f.probability >= policy.critical.min_percent)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_classify.rs"]
mod tests;
