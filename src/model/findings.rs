use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

/// One category's scored result. `probability` is a percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub pathology: String,
    pub probability: f64,
    pub risk_level: RiskLevel,
}
