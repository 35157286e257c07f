use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;

pub mod grid;
pub mod reader;

pub use grid::load_pixel_grid;
pub use reader::open_maybe_gz;

use crate::error::InputError;
use crate::model::{BinaryProbabilities, ProbabilityMap};

/// JSON object mapping category name to probability.
pub fn load_probabilities(path: &Path) -> Result<ProbabilityMap, InputError> {
    read_json(path)
}

/// JSON array of probability objects.
pub fn load_batch(path: &Path) -> Result<Vec<ProbabilityMap>, InputError> {
    read_json(path)
}

#[derive(Debug, Deserialize)]
struct RawBinary {
    malignant: f64,
    benign: f64,
}

/// JSON object `{"malignant": p, "benign": q}`.
pub fn load_binary(path: &Path) -> Result<BinaryProbabilities, InputError> {
    let raw: RawBinary = read_json(path)?;
    Ok(BinaryProbabilities::new(raw.malignant, raw.benign)?)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    serde_json::from_str(&buf).map_err(|e| InputError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
