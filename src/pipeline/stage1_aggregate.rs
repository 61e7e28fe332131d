use std::collections::{BTreeMap, HashMap};

use tracing::{debug, info};

use crate::model::profile::{BenchmarkIds, BenchmarkProfile, Mean};
use crate::model::records::CompetencyRecord;
use crate::pipeline::ScoringError;

/// One employee's mean score per pillar, across years.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeePillarMeans {
    pub employee_id: String,
    pub pillars: BTreeMap<String, f64>,
}

#[derive(Debug)]
pub struct Stage1Output {
    pub benchmark: BenchmarkProfile,
    pub benchmark_matched: Vec<String>,
    /// In order of first appearance in the records.
    pub employees: Vec<EmployeePillarMeans>,
}

pub fn run_stage1(
    records: &[CompetencyRecord],
    benchmark_ids: &BenchmarkIds,
) -> Result<Stage1Output, ScoringError> {
    if records.is_empty() {
        return Err(ScoringError::EmptyInput);
    }
    let (benchmark, benchmark_matched) = build_benchmark_profile(records, benchmark_ids)?;
    let employees = employee_pillar_means(records);

    info!(
        benchmark_requested = benchmark_ids.len(),
        benchmark_matched = benchmark_matched.len(),
        pillars = benchmark.len(),
        employees = employees.len(),
        "benchmark profile built"
    );

    Ok(Stage1Output {
        benchmark,
        benchmark_matched,
        employees,
    })
}

/// Mean score per pillar over every record of the benchmark employees.
///
/// Records are pooled directly, so an employee with more years on a pillar
/// weighs more on it. Non-finite scores count as missing. Ids without usable
/// records are ignored; if none match the profile would be empty and scoring
/// fails.
pub fn build_benchmark_profile(
    records: &[CompetencyRecord],
    benchmark_ids: &BenchmarkIds,
) -> Result<(BenchmarkProfile, Vec<String>), ScoringError> {
    let lookup = benchmark_ids.lookup();
    let mut sums: BTreeMap<String, Mean> = BTreeMap::new();
    let mut matched: Vec<String> = Vec::new();

    for record in records {
        if !record.score.is_finite() || !lookup.contains(record.employee_id.as_str()) {
            continue;
        }
        if !matched.contains(&record.employee_id) {
            matched.push(record.employee_id.clone());
        }
        sums.entry(record.pillar_code.clone())
            .or_default()
            .push(record.score);
    }

    if matched.is_empty() {
        return Err(ScoringError::NoBenchmarkOverlap {
            requested: benchmark_ids.len(),
        });
    }
    let ignored = benchmark_ids.len() - matched.len();
    if ignored > 0 {
        debug!(ignored, "benchmark ids without competency records ignored");
    }

    let scores = sums
        .into_iter()
        .filter_map(|(pillar, mean)| mean.value().map(|v| (pillar, v)))
        .collect();
    Ok((BenchmarkProfile::from_scores(scores), matched))
}

/// Non-finite scores are skipped; an employee with no finite score is left out.
pub fn employee_pillar_means(records: &[CompetencyRecord]) -> Vec<EmployeePillarMeans> {
    let mut order: Vec<&str> = Vec::new();
    let mut acc: HashMap<&str, BTreeMap<&str, Mean>> = HashMap::new();

    for record in records.iter().filter(|r| r.score.is_finite()) {
        let per_pillar = acc.entry(record.employee_id.as_str()).or_insert_with(|| {
            order.push(record.employee_id.as_str());
            BTreeMap::new()
        });
        per_pillar
            .entry(record.pillar_code.as_str())
            .or_default()
            .push(record.score);
    }

    order
        .into_iter()
        .map(|employee_id| {
            let pillars = acc
                .remove(employee_id)
                .unwrap_or_default()
                .into_iter()
                .filter_map(|(pillar, mean)| mean.value().map(|v| (pillar.to_string(), v)))
                .collect();
            EmployeePillarMeans {
                employee_id: employee_id.to_string(),
                pillars,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_aggregate.rs"]
mod tests;
