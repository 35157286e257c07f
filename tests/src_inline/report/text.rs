use super::*;
use crate::model::{ProbabilityMap, TriagePolicy};
use crate::pipeline::{aggregate, run_batch};

#[test]
fn test_analysis_text() {
    let policy = TriagePolicy::chest_v1();
    let mut probs = ProbabilityMap::new();
    probs.insert("Mass".to_string(), 0.9);
    probs.insert("Edema".to_string(), 0.05);
    let triage = aggregate(&probs, &policy).unwrap();
    let text = render_report_text(&ReportPayload::Analysis {
        triage: &triage,
        quality: None,
    });
    assert!(text.contains("Overall risk: high"));
    assert!(text.contains("  - Mass: 90.00% (high)"));
    assert!(!text.contains("Edema"));
    assert!(text.contains("Immediate medical consultation recommended"));
    assert!(text.ends_with(&format!("{DISCLAIMER}\n")));
}

#[test]
fn test_empty_findings_text() {
    let policy = TriagePolicy::chest_v1();
    let triage = aggregate(&ProbabilityMap::new(), &policy).unwrap();
    let text = render_report_text(&ReportPayload::Analysis {
        triage: &triage,
        quality: None,
    });
    assert!(text.contains("Reportable findings: none"));
}

#[test]
fn test_batch_text_counts() {
    let policy = TriagePolicy::chest_v1();
    let mut bad = ProbabilityMap::new();
    bad.insert("Edema".to_string(), 2.0);
    let items = run_batch(&[ProbabilityMap::new(), bad], &policy);
    let text = render_report_text(&ReportPayload::Batch(&items));
    assert!(text.contains("Batch: 2 items, 1 scored, 1 rejected"));
    assert!(text.contains("[1] rejected:"));
}
