use crate::model::{QualityReport, ScreeningOutcome, TriageResult};
use crate::pipeline::batch::BatchItem;
use crate::report::{DISCLAIMER, ReportPayload, format_f64_3, format_f64_6, format_pct};

pub fn render_report_text(payload: &ReportPayload<'_>) -> String {
    let mut out = String::new();
    out.push_str("Radiograph Triage Report\n");
    out.push_str("========================\n\n");

    match payload {
        ReportPayload::Analysis { triage, quality } => {
            push_triage(&mut out, triage);
            if let Some(q) = quality {
                push_quality(&mut out, q);
            }
        }
        ReportPayload::Quality(q) => push_quality(&mut out, q),
        ReportPayload::Screening { outcome, quality } => {
            push_screening(&mut out, outcome);
            if let ScreeningOutcome::Fallback(r) = outcome {
                push_triage(&mut out, &r.analysis);
            }
            if let Some(q) = quality {
                push_quality(&mut out, q);
            }
        }
        ReportPayload::Batch(items) => push_batch(&mut out, items),
    }

    out.push_str(DISCLAIMER);
    out.push('\n');
    out
}

fn push_triage(out: &mut String, triage: &TriageResult) {
    out.push_str("Triage\n");
    out.push_str(&format!("Policy: {}\n", triage.policy));
    out.push_str(&format!("Overall risk: {}\n", triage.overall_risk.as_str()));
    out.push_str(&format!("Risk score: {:.1}\n", triage.risk_score));
    out.push_str(&format!(
        "Confidence: {} (calibrated {})\n",
        format_f64_3(triage.confidence),
        format_f64_3(triage.calibrated_confidence)
    ));
    out.push_str(&format!(
        "Recommendation: {}\n",
        triage.recommendation.message()
    ));
    if triage.findings.is_empty() {
        out.push_str("Reportable findings: none\n");
    } else {
        out.push_str("Reportable findings:\n");
        for f in &triage.findings {
            out.push_str(&format!(
                "  - {}: {} ({})\n",
                f.pathology,
                format_pct(f.probability),
                f.risk_level.as_str()
            ));
        }
    }
    out.push('\n');
}

fn push_quality(out: &mut String, q: &QualityReport) {
    out.push_str("Image quality\n");
    out.push_str(&format!("Quality: {}\n", q.quality.as_str()));
    let issues = q.issues.iter().map(|i| i.as_str()).collect::<Vec<_>>();
    if issues.is_empty() {
        out.push_str("Issues: none\n");
    } else {
        out.push_str(&format!("Issues: {}\n", issues.join(", ")));
    }
    match &q.error {
        Some(err) => out.push_str(&format!("Check failed: {err}\n")),
        None => {
            out.push_str(&format!(
                "Mean intensity: {}\nStd intensity: {}\nBlur score: {}\n",
                format_f64_3(q.mean_intensity),
                format_f64_3(q.std_intensity),
                format_f64_6(q.blur_score)
            ));
        }
    }
    out.push('\n');
}

fn push_screening(out: &mut String, outcome: &ScreeningOutcome) {
    let (method, note) = match outcome {
        ScreeningOutcome::Exact(r) => (r.analysis_method, r.note),
        ScreeningOutcome::Fallback(r) => (r.analysis_method, r.note),
    };
    out.push_str("Screening\n");
    out.push_str(&format!("Method: {method}\n"));
    out.push_str(&format!("Prediction: {}\n", outcome.prediction().as_str()));
    out.push_str(&format!("Risk level: {}\n", outcome.risk_level().as_str()));
    out.push_str(&format!("Risk score: {:.1}\n", outcome.risk_score()));
    out.push_str(&format!("{note}\n\n"));
}

fn push_batch(out: &mut String, items: &[BatchItem]) {
    let scored = items.iter().filter(|i| i.is_scored()).count();
    out.push_str(&format!(
        "Batch: {} items, {} scored, {} rejected\n\n",
        items.len(),
        scored,
        items.len() - scored
    ));
    for (idx, item) in items.iter().enumerate() {
        match item {
            BatchItem::Scored(t) => out.push_str(&format!(
                "[{idx}] {} risk, score {:.1}: {}\n",
                t.overall_risk.as_str(),
                t.risk_score,
                t.recommendation.message()
            )),
            BatchItem::Failed { error } => out.push_str(&format!("[{idx}] rejected: {error}\n")),
        }
    }
    out.push('\n');
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
