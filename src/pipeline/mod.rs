pub mod aggregate;
pub mod batch;
pub mod stage1_validate;
pub mod stage2_findings;
pub mod stage3_scores;
pub mod stage4_classify;
pub mod stage5_quality;
pub mod stage6_screening;
pub mod stage7_report;

pub use aggregate::aggregate;
pub use batch::{BatchItem, run_batch};
pub use stage5_quality::assess;
pub use stage6_screening::{screen_exact, screen_fallback};
