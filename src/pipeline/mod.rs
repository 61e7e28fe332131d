pub mod stage1_aggregate;
pub mod stage2_match;
pub mod stage3_radar;
pub mod stage4_report;

use thiserror::Error;

use crate::model::matches::{MatchResult, MissingEmployeePolicy};
use crate::model::profile::{BenchmarkIds, BenchmarkProfile};
use crate::model::records::{CompetencyRecord, EmployeeDirectory};
use stage1_aggregate::{EmployeePillarMeans, run_stage1};
use stage2_match::{Stage2Inputs, run_stage2};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("no competency records supplied")]
    EmptyInput,
    #[error("none of the {requested} benchmark ids has competency records")]
    NoBenchmarkOverlap { requested: usize },
    #[error("employee {employee_id} has no entry in the employee table")]
    MissingEmployee { employee_id: String },
}

#[derive(Debug, Clone)]
pub struct MatchOutput {
    pub benchmark: BenchmarkProfile,
    /// Benchmark ids that had at least one finite competency score.
    pub benchmark_matched: Vec<String>,
    /// Sorted by match rate, highest first.
    pub ranking: Vec<MatchResult>,
    /// Employees scored but left out because they have no name.
    pub unnamed: Vec<String>,
    /// Employees with no record on any benchmark pillar.
    pub no_overlap: Vec<String>,
    pub employee_means: Vec<EmployeePillarMeans>,
}

impl MatchOutput {
    pub fn top(&self, n: usize) -> &[MatchResult] {
        &self.ranking[..n.min(self.ranking.len())]
    }

    pub fn means_for(&self, employee_id: &str) -> Option<&EmployeePillarMeans> {
        self.employee_means
            .iter()
            .find(|m| m.employee_id == employee_id)
    }
}

/// Ranks every employee by closeness to the benchmark group's mean competency
/// profile.
///
/// Pillars outside the benchmark profile are ignored. Employees without a name
/// in `directory` are dropped or rejected according to `missing_employee`.
/// Ties keep the order in which employees first appear in `records`.
pub fn score_matches(
    records: &[CompetencyRecord],
    benchmark_ids: &BenchmarkIds,
    directory: &EmployeeDirectory,
    missing_employee: MissingEmployeePolicy,
) -> Result<MatchOutput, ScoringError> {
    let stage1 = run_stage1(records, benchmark_ids)?;
    let stage2 = run_stage2(&Stage2Inputs {
        benchmark: &stage1.benchmark,
        employees: &stage1.employees,
        directory,
        missing_employee,
    })?;

    Ok(MatchOutput {
        benchmark: stage1.benchmark,
        benchmark_matched: stage1.benchmark_matched,
        ranking: stage2.ranking,
        unnamed: stage2.unnamed,
        no_overlap: stage2.no_overlap,
        employee_means: stage1.employees,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/scorer.rs"]
mod tests;
