use super::*;
use crate::model::{ProbabilityMap, TriagePolicy};
use crate::pipeline::aggregate;

fn temp_dir(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("cxr-triage-{}-{}", name, std::process::id()))
}

#[test]
fn test_write_reports_creates_both_files() {
    let policy = TriagePolicy::chest_v1();
    let mut probs = ProbabilityMap::new();
    probs.insert("Mass".to_string(), 0.9);
    let triage = aggregate(&probs, &policy).unwrap();

    let dir = temp_dir("write-reports");
    let payload = ReportPayload::Analysis {
        triage: &triage,
        quality: None,
    };
    write_reports(&payload, &dir).unwrap();

    let json = fs::read_to_string(dir.join("triage.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["success"], serde_json::json!(true));
    assert_eq!(value["analysis"]["overall_risk"], serde_json::json!("high"));

    let text = fs::read_to_string(dir.join("report.txt")).unwrap();
    assert!(text.contains("Overall risk: high"));

    let _ = fs::remove_dir_all(&dir);
}
