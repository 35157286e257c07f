use crate::model::thresholds::RiskBreakpoints;
use crate::model::{Finding, RiskLevel, TriagePolicy, round_to};
use crate::pipeline::stage1_validate::ScoredCategory;

pub fn classify_risk(fraction: f64, breakpoints: &RiskBreakpoints) -> RiskLevel {
    if fraction > breakpoints.high {
        RiskLevel::High
    } else if fraction > breakpoints.medium {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// One finding per validated category, sorted by descending percentage.
/// Equal percentages fall back to label-space position.
pub fn build_findings(entries: &[ScoredCategory<'_>], policy: &TriagePolicy) -> Vec<Finding> {
    let mut ranked = entries
        .iter()
        .map(|entry| {
            let finding = Finding {
                pathology: entry.category.to_string(),
                probability: round_to(entry.probability * 100.0, 2),
                risk_level: classify_risk(entry.probability, &policy.risk_levels),
            };
            (entry.index, finding)
        })
        .collect::<Vec<_>>();
    ranked.sort_by(|(ia, a), (ib, b)| {
        b.probability
            .total_cmp(&a.probability)
            .then_with(|| ia.cmp(ib))
    });
    ranked.into_iter().map(|(_, finding)| finding).collect()
}

pub fn select_reportable(findings: &[Finding], reportable_percent: f64) -> Vec<Finding> {
    findings
        .iter()
        .filter(|f| f.probability > reportable_percent)
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_findings.rs"]
mod tests;
