use std::path::PathBuf;

use thiserror::Error;

/// Caller-supplied data that cannot be scored. Never retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputValidationError {
    #[error("probability for {category} is not finite")]
    NonFinite { category: String },
    #[error("probability for {category} is outside [0, 1]: {value}")]
    OutOfRange { category: String, value: f64 },
    #[error("pixel grid is empty")]
    EmptyGrid,
    #[error("pixel grid shape {width}x{height} does not match {len} values")]
    GridShape {
        width: usize,
        height: usize,
        len: usize,
    },
    #[error("pixel at index {index} is outside [0, 1]: {value}")]
    PixelOutOfRange { index: usize, value: f64 },
}

/// Raised inside the quality assessor and recovered there.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DegenerateInputError {
    #[error("constant-intensity image has zero dynamic range")]
    ZeroRange,
    #[error("grid {width}x{height} is too small for finite differences")]
    TooSmall { width: usize, height: usize },
}

/// Startup-time policy problems. Fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read policy file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed policy file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("policy label space is empty")]
    EmptyLabelSpace,
    #[error("category {0} appears more than once in the label space")]
    DuplicateCategory(String),
    #[error("weight for {category} must be finite and non-negative, got {value}")]
    InvalidWeight { category: String, value: f64 },
    #[error("critical category {0} is not part of the label space")]
    UnknownCriticalCategory(String),
    #[error("invalid threshold {name}: {reason}")]
    InvalidThreshold { name: &'static str, reason: String },
}

/// I/O and parse failures for the files fed to the CLI.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error(transparent)]
    Invalid(#[from] InputValidationError),
}
