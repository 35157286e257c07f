use super::*;

fn entry(category: &'static str, index: usize, probability: f64) -> ScoredCategory<'static> {
    ScoredCategory {
        category,
        index,
        probability,
    }
}

#[test]
fn test_classify_risk_breakpoints_are_strict() {
    let bp = RiskBreakpoints {
        high: 0.85,
        medium: 0.65,
    };
    assert_eq!(classify_risk(0.9, &bp), RiskLevel::High);
    assert_eq!(classify_risk(0.85, &bp), RiskLevel::Medium);
    assert_eq!(classify_risk(0.7, &bp), RiskLevel::Medium);
    assert_eq!(classify_risk(0.65, &bp), RiskLevel::Low);
    assert_eq!(classify_risk(0.0, &bp), RiskLevel::Low);
}

#[test]
fn test_percent_rounding() {
    let policy = TriagePolicy::chest_v1();
    let out = build_findings(&[entry("Edema", 4, 0.123456)], &policy);
    assert_eq!(out[0].probability, 12.35);
}

#[test]
fn test_sorted_descending_with_stable_ties() {
    let policy = TriagePolicy::chest_v1();
    let entries = [
        entry("Atelectasis", 0, 0.4),
        entry("Consolidation", 1, 0.4),
        entry("Mass", 16, 0.6),
    ];
    let out = build_findings(&entries, &policy);
    let names = out.iter().map(|f| f.pathology.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Mass", "Atelectasis", "Consolidation"]);
    assert_eq!(out[0].probability, 60.0);
    assert_eq!(out[1].probability, 40.0);
}

#[test]
fn test_ties_follow_label_position_not_input_order() {
    let policy = TriagePolicy::chest_v1();
    let entries = [
        entry("Mass", 16, 0.3),
        entry("Edema", 4, 0.3),
        entry("Atelectasis", 0, 0.300001),
    ];
    let out = build_findings(&entries, &policy);
    let names = out.iter().map(|f| f.pathology.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Atelectasis", "Edema", "Mass"]);
}

#[test]
fn test_reportable_threshold_is_strict() {
    let findings = vec![
        Finding {
            pathology: "Mass".to_string(),
            probability: 25.01,
            risk_level: RiskLevel::Low,
        },
        Finding {
            pathology: "Edema".to_string(),
            probability: 25.0,
            risk_level: RiskLevel::Low,
        },
    ];
    let out = select_reportable(&findings, 25.0);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].pathology, "Mass");
}
