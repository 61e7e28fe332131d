//! Benchmark-based competency match scoring for HR datasets.
//!
//! [`pipeline::score_matches`] is the pure scorer. [`dashboard::Dashboard`]
//! wires it to the dataset loader, the radar projection and the report data.

pub mod dashboard;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod profile_text;
pub mod report;

pub use model::matches::{MatchResult, MissingEmployeePolicy};
pub use model::profile::{BenchmarkIds, BenchmarkProfile};
pub use model::records::{CompetencyRecord, Employee, EmployeeDirectory};
pub use pipeline::{MatchOutput, ScoringError, score_matches};

#[cfg(test)]
#[path = "../tests/src_inline/support.rs"]
mod test_support;
