use std::collections::BTreeMap;

pub mod categories;
pub mod findings;
pub mod quality;
pub mod screening;
pub mod thresholds;
pub mod triage;

pub use findings::{Finding, RiskLevel};
pub use quality::{ImageQuality, PixelGrid, QualityIssue, QualityReport};
pub use screening::{BinaryProbabilities, ExactModelResult, FallbackResult, ScreeningOutcome};
pub use thresholds::{QualityThresholds, TriagePolicy};
pub use triage::{Recommendation, TriageResult};

/// Classifier output keyed by category name, each value in [0, 1].
pub type ProbabilityMap = BTreeMap<String, f64>;

pub fn clip01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Rounds half away from zero to `places` decimals.
pub fn round_to(x: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (x * scale).round() / scale
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/mod.rs"]
mod tests;
