use tracing::debug;

use crate::error::InputValidationError;
use crate::model::{ProbabilityMap, TriagePolicy};

/// A probability that passed validation, tagged with its label-space slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCategory<'a> {
    pub category: &'a str,
    pub index: usize,
    pub probability: f64,
}

/// Checks every entry and returns the intersection with the label space,
/// in label-space order. Categories the policy does not know are skipped,
/// but their values must still be valid probabilities.
pub fn validate_probabilities<'a>(
    probabilities: &ProbabilityMap,
    policy: &'a TriagePolicy,
) -> Result<Vec<ScoredCategory<'a>>, InputValidationError> {
    for (category, &value) in probabilities {
        if !value.is_finite() {
            return Err(InputValidationError::NonFinite {
                category: category.clone(),
            });
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(InputValidationError::OutOfRange {
                category: category.clone(),
                value,
            });
        }
        if policy.position(category).is_none() {
            debug!(policy = %policy.name, category = %category, "category outside label space ignored");
        }
    }

    let mut out = Vec::with_capacity(probabilities.len());
    for (index, category) in policy.categories.iter().enumerate() {
        if let Some(&probability) = probabilities.get(category) {
            out.push(ScoredCategory {
                category: category.as_str(),
                index,
                probability,
            });
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_validate.rs"]
mod tests;
