use tracing::{info, warn};

use crate::model::matches::{MatchResult, MissingEmployeePolicy};
use crate::model::profile::{BenchmarkProfile, Mean};
use crate::model::records::EmployeeDirectory;
use crate::pipeline::ScoringError;
use crate::pipeline::stage1_aggregate::EmployeePillarMeans;

#[derive(Debug, Clone)]
pub struct Stage2Inputs<'a> {
    pub benchmark: &'a BenchmarkProfile,
    pub employees: &'a [EmployeePillarMeans],
    pub directory: &'a EmployeeDirectory,
    pub missing_employee: MissingEmployeePolicy,
}

#[derive(Debug)]
pub struct Stage2Output {
    pub ranking: Vec<MatchResult>,
    pub unnamed: Vec<String>,
    pub no_overlap: Vec<String>,
}

pub fn run_stage2(inputs: &Stage2Inputs<'_>) -> Result<Stage2Output, ScoringError> {
    let mut ranking = Vec::with_capacity(inputs.employees.len());
    let mut unnamed = Vec::new();
    let mut no_overlap = Vec::new();

    for employee in inputs.employees {
        let Some(gap) = benchmark_gap(employee, inputs.benchmark) else {
            no_overlap.push(employee.employee_id.clone());
            continue;
        };
        let Some(fullname) = inputs.directory.fullname(&employee.employee_id) else {
            match inputs.missing_employee {
                MissingEmployeePolicy::Drop => {
                    unnamed.push(employee.employee_id.clone());
                    continue;
                }
                MissingEmployeePolicy::Error => {
                    return Err(ScoringError::MissingEmployee {
                        employee_id: employee.employee_id.clone(),
                    });
                }
            }
        };
        ranking.push(MatchResult {
            employee_id: employee.employee_id.clone(),
            fullname: fullname.to_string(),
            gap,
            match_rate: 1.0 - gap,
        });
    }

    if !unnamed.is_empty() {
        warn!(
            dropped = unnamed.len(),
            "employees without a name in the employee table left out of the ranking"
        );
    }

    rank_matches(&mut ranking);

    info!(
        ranked = ranking.len(),
        no_overlap = no_overlap.len(),
        "match rates computed"
    );

    Ok(Stage2Output {
        ranking,
        unnamed,
        no_overlap,
    })
}

/// Mean absolute deviation from the benchmark over the pillars both share.
/// `None` when the employee has no score on any benchmark pillar.
pub fn benchmark_gap(employee: &EmployeePillarMeans, benchmark: &BenchmarkProfile) -> Option<f64> {
    let mut gap = Mean::default();
    for (pillar, score_emp) in &employee.pillars {
        if let Some(score_bm) = benchmark.get(pillar) {
            gap.push((score_emp - score_bm).abs());
        }
    }
    gap.value()
}

/// Highest match rate first. The sort is stable, so equal rates keep their
/// incoming order.
pub fn rank_matches(results: &mut [MatchResult]) {
    results.sort_by(|a, b| b.match_rate.total_cmp(&a.match_rate));
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_match.rs"]
mod tests;
