use serde::Serialize;

use crate::model::{QualityReport, ScreeningOutcome, TriageResult};
use crate::pipeline::batch::BatchItem;
use crate::report::{DISCLAIMER, ReportPayload};

#[derive(Debug, Serialize)]
struct AnalysisEnvelope<'a> {
    success: bool,
    analysis: &'a TriageResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    quality: Option<&'a QualityReport>,
    disclaimer: &'static str,
}

#[derive(Debug, Serialize)]
struct QualityEnvelope<'a> {
    success: bool,
    quality: &'a QualityReport,
}

#[derive(Debug, Serialize)]
struct ScreeningEnvelope<'a> {
    success: bool,
    #[serde(flatten)]
    outcome: &'a ScreeningOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    quality: Option<&'a QualityReport>,
    disclaimer: &'static str,
}

#[derive(Debug, Serialize)]
struct BatchEnvelope<'a> {
    success: bool,
    results: &'a [BatchItem],
}

pub fn render_json(payload: &ReportPayload<'_>) -> serde_json::Result<String> {
    match payload {
        ReportPayload::Analysis { triage, quality } => {
            serde_json::to_string_pretty(&AnalysisEnvelope {
                success: true,
                analysis: *triage,
                quality: *quality,
                disclaimer: DISCLAIMER,
            })
        }
        ReportPayload::Quality(quality) => serde_json::to_string_pretty(&QualityEnvelope {
            success: true,
            quality: *quality,
        }),
        ReportPayload::Screening { outcome, quality } => {
            serde_json::to_string_pretty(&ScreeningEnvelope {
                success: true,
                outcome: *outcome,
                quality: *quality,
                disclaimer: DISCLAIMER,
            })
        }
        ReportPayload::Batch(results) => serde_json::to_string_pretty(&BatchEnvelope {
            success: true,
            results: *results,
        }),
    }
}

/// Body written when a request cannot be served at all.
pub fn render_error_json(message: &str) -> String {
    serde_json::json!({ "success": false, "error": message }).to_string()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
