use std::collections::BTreeSet;
use std::path::Path;

use tracing::{info, warn};

use crate::error::ConfigError;
use crate::model::TriagePolicy;

/// Outer limits for the calibrated-confidence band. A policy may narrow it
/// but never report certainty beyond these.
pub const CALIBRATION_FLOOR_MIN: f64 = 0.05;
pub const CALIBRATION_CEILING_MAX: f64 = 0.95;

/// A built-in profile name (`chest`, `mammography`, or their `_v1` forms) or
/// a path to a JSON policy file.
pub fn resolve_policy(name_or_path: &str) -> Result<TriagePolicy, ConfigError> {
    let policy = match TriagePolicy::builtin(name_or_path) {
        Some(policy) => {
            validate_policy(&policy)?;
            policy
        }
        None => load_policy(Path::new(name_or_path))?,
    };
    info!(policy = %policy.name, categories = policy.categories.len(), "triage policy loaded");
    Ok(policy)
}

pub fn load_policy(path: &Path) -> Result<TriagePolicy, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let policy: TriagePolicy =
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    validate_policy(&policy)?;
    Ok(policy)
}

pub fn validate_policy(policy: &TriagePolicy) -> Result<(), ConfigError> {
    if policy.categories.is_empty() {
        return Err(ConfigError::EmptyLabelSpace);
    }
    let mut seen = BTreeSet::new();
    for category in &policy.categories {
        if !seen.insert(category.as_str()) {
            return Err(ConfigError::DuplicateCategory(category.clone()));
        }
    }

    check_weight("default", policy.default_weight)?;
    for (category, &value) in &policy.weights {
        check_weight(category, value)?;
        if !seen.contains(category.as_str()) {
            warn!(category = %category, "weight given for category outside the label space; ignored");
        }
    }

    for critical in &policy.critical.categories {
        if !seen.contains(critical.as_str()) {
            return Err(ConfigError::UnknownCriticalCategory(critical.clone()));
        }
    }

    check_ordered_unit(
        "risk_levels",
        policy.risk_levels.medium,
        policy.risk_levels.high,
    )?;
    check_ordered_unit(
        "score_tiers",
        policy.score_tiers.medium,
        policy.score_tiers.high,
    )?;
    check_ordered_unit(
        "calibration band",
        policy.calibration.floor,
        policy.calibration.ceiling,
    )?;
    if policy.calibration.floor >= policy.calibration.ceiling {
        return Err(ConfigError::InvalidThreshold {
            name: "calibration band",
            reason: "floor must be below ceiling".to_string(),
        });
    }
    if policy.calibration.floor < CALIBRATION_FLOOR_MIN
        || policy.calibration.ceiling > CALIBRATION_CEILING_MAX
    {
        return Err(ConfigError::InvalidThreshold {
            name: "calibration band",
            reason: format!(
                "band [{}, {}] must lie within [{CALIBRATION_FLOOR_MIN}, {CALIBRATION_CEILING_MAX}]",
                policy.calibration.floor, policy.calibration.ceiling
            ),
        });
    }
    if !policy.calibration.steepness.is_finite() || policy.calibration.steepness <= 0.0 {
        return Err(ConfigError::InvalidThreshold {
            name: "calibration.steepness",
            reason: format!("must be positive, got {}", policy.calibration.steepness),
        });
    }
    if !policy.score_divisor.is_finite() || policy.score_divisor <= 0.0 {
        return Err(ConfigError::InvalidThreshold {
            name: "score_divisor",
            reason: format!("must be positive, got {}", policy.score_divisor),
        });
    }
    check_percent("reportable_percent", policy.reportable_percent)?;
    check_percent("critical.min_percent", policy.critical.min_percent)?;
    check_ordered_unit(
        "quality exposure band",
        policy.quality.exposure_min,
        policy.quality.exposure_max,
    )?;
    if !policy.quality.min_std.is_finite() || policy.quality.min_std < 0.0 {
        return Err(ConfigError::InvalidThreshold {
            name: "quality.min_std",
            reason: format!("must be non-negative, got {}", policy.quality.min_std),
        });
    }
    if !policy.quality.min_blur.is_finite() || policy.quality.min_blur < 0.0 {
        return Err(ConfigError::InvalidThreshold {
            name: "quality.min_blur",
            reason: format!("must be non-negative, got {}", policy.quality.min_blur),
        });
    }
    Ok(())
}

fn check_weight(category: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidWeight {
            category: category.to_string(),
            value,
        });
    }
    Ok(())
}

fn check_ordered_unit(name: &'static str, low: f64, high: f64) -> Result<(), ConfigError> {
    let in_unit = |v: f64| v.is_finite() && (0.0..=1.0).contains(&v);
    if !in_unit(low) || !in_unit(high) {
        return Err(ConfigError::InvalidThreshold {
            name,
            reason: format!("bounds must lie in [0, 1], got {low} and {high}"),
        });
    }
    if low > high {
        return Err(ConfigError::InvalidThreshold {
            name,
            reason: format!("lower bound {low} exceeds upper bound {high}"),
        });
    }
    Ok(())
}

fn check_percent(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(ConfigError::InvalidThreshold {
            name,
            reason: format!("must lie in [0, 100], got {value}"),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
