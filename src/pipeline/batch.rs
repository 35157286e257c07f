use serde::Serialize;
use tracing::warn;

use crate::model::{ProbabilityMap, TriagePolicy, TriageResult};
use crate::pipeline::aggregate::aggregate;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BatchItem {
    Scored(TriageResult),
    Failed { error: String },
}

impl BatchItem {
    pub fn is_scored(&self) -> bool {
        matches!(self, BatchItem::Scored(_))
    }
}

/// Aggregates every vector independently; a bad item does not stop the rest.
pub fn run_batch(items: &[ProbabilityMap], policy: &TriagePolicy) -> Vec<BatchItem> {
    items
        .iter()
        .enumerate()
        .map(|(idx, probs)| match aggregate(probs, policy) {
            Ok(result) => BatchItem::Scored(result),
            Err(err) => {
                warn!(item = idx, error = %err, "batch item rejected");
                BatchItem::Failed {
                    error: err.to_string(),
                }
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/batch.rs"]
mod tests;
