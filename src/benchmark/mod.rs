pub mod harness;
pub mod reporting;
pub mod runner;
pub mod types;
pub mod verification;

pub use harness::{MeasurementHarness, amortized_ms};
pub use reporting::{
    format_ratio, format_tier_report, print_summary_table, print_tier_report, reports_to_csv,
};
pub use runner::BenchmarkRunner;
pub use types::{
    BenchmarkConfig, DEFAULT_REPETITIONS, DEFAULT_WORKING_SET_CAP, SizeTier, TierReport,
};
pub use verification::verify_sorted;
