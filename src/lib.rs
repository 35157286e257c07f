//! Triage aggregation for radiograph classifier outputs.
//!
//! [`pipeline::aggregate`] turns a per-category probability vector into a
//! [`model::TriageResult`] under a [`model::TriagePolicy`];
//! [`pipeline::assess`] checks exposure, contrast and sharpness of the source
//! image independently. Both are pure and safe to call concurrently.

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;
