pub mod json;
pub mod text;

use crate::model::{QualityReport, ScreeningOutcome, TriageResult};
use crate::pipeline::batch::BatchItem;

pub const DISCLAIMER: &str = "This is an AI-assisted screening tool, not a medical diagnosis. \
Consult a healthcare professional for medical advice.";

/// What a single CLI invocation produced.
#[derive(Debug, Clone)]
pub enum ReportPayload<'a> {
    Analysis {
        triage: &'a TriageResult,
        quality: Option<&'a QualityReport>,
    },
    Quality(&'a QualityReport),
    Screening {
        outcome: &'a ScreeningOutcome,
        quality: Option<&'a QualityReport>,
    },
    Batch(&'a [BatchItem]),
}

pub fn format_pct(v: f64) -> String {
    format!("{:.2}%", v)
}

pub fn format_f64_3(v: f64) -> String {
    format!("{:.3}", v)
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}
