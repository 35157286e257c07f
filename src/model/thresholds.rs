use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::categories::{DEFAULT_WEIGHT, chest_categories, chest_critical};

/// Per-finding risk breakpoints on the probability fraction (strict `>`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskBreakpoints {
    pub high: f64,
    pub medium: f64,
}

/// Overall-risk tiers on the normalized weighted score (inclusive `>=`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreTiers {
    pub high: f64,
    pub medium: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationParams {
    pub steepness: f64,
    pub floor: f64,
    pub ceiling: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalRule {
    pub categories: Vec<String>,
    /// Percentage at or above which a critical finding forces high risk.
    pub min_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityThresholds {
    pub exposure_min: f64,
    pub exposure_max: f64,
    pub min_std: f64,
    pub min_blur: f64,
}

impl Default for QualityThresholds {
    fn default() -> Self {
        Self {
            exposure_min: 0.15,
            exposure_max: 0.85,
            min_std: 0.08,
            min_blur: 0.0005,
        }
    }
}

/// Everything the aggregator needs, built once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriagePolicy {
    pub name: String,
    pub categories: Vec<String>,
    #[serde(default)]
    pub weights: BTreeMap<String, f64>,
    #[serde(default = "default_weight")]
    pub default_weight: f64,
    pub risk_levels: RiskBreakpoints,
    pub reportable_percent: f64,
    pub score_divisor: f64,
    pub score_tiers: ScoreTiers,
    pub calibration: CalibrationParams,
    pub critical: CriticalRule,
    #[serde(default)]
    pub quality: QualityThresholds,
}

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

impl TriagePolicy {
    pub fn chest_v1() -> Self {
        let defs = chest_categories();
        Self {
            name: "chest_v1".to_string(),
            categories: defs.iter().map(|d| d.name.to_string()).collect(),
            weights: defs.iter().map(|d| (d.name.to_string(), d.weight)).collect(),
            default_weight: DEFAULT_WEIGHT,
            risk_levels: RiskBreakpoints {
                high: 0.85,
                medium: 0.65,
            },
            reportable_percent: 25.0,
            score_divisor: 8.0,
            score_tiers: ScoreTiers {
                high: 0.75,
                medium: 0.55,
            },
            calibration: CalibrationParams {
                steepness: 6.0,
                floor: 0.05,
                ceiling: 0.95,
            },
            critical: CriticalRule {
                categories: chest_critical().iter().map(|c| c.to_string()).collect(),
                min_percent: 70.0,
            },
            quality: QualityThresholds::default(),
        }
    }

    /// Conservative variant used when a chest model stands in for a
    /// dedicated mammography classifier.
    pub fn mammography_v1() -> Self {
        let mut base = Self::chest_v1();
        base.name = "mammography_v1".to_string();
        base.risk_levels = RiskBreakpoints {
            high: 0.50,
            medium: 0.25,
        };
        base.reportable_percent = 20.0;
        base.score_tiers = ScoreTiers {
            high: 0.70,
            medium: 0.40,
        };
        base.critical.min_percent = 60.0;
        base
    }

    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "chest" | "chest_v1" => Some(Self::chest_v1()),
            "mammography" | "mammography_v1" => Some(Self::mammography_v1()),
            _ => None,
        }
    }

    pub fn weight(&self, category: &str) -> f64 {
        self.weights
            .get(category)
            .copied()
            .unwrap_or(self.default_weight)
    }

    pub fn is_critical(&self, category: &str) -> bool {
        self.critical.categories.iter().any(|c| c == category)
    }

    pub fn position(&self, category: &str) -> Option<usize> {
        self.categories.iter().position(|c| c == category)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/thresholds.rs"]
mod tests;
