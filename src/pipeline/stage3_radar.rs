use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::profile::BenchmarkProfile;
use crate::model::records::PillarLabels;
use crate::pipeline::MatchOutput;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarRow {
    pub pillar_code: String,
    pub pillar_label: String,
    pub benchmark: f64,
    pub employee: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarComparison {
    pub employee_id: String,
    pub rows: Vec<RadarRow>,
}

impl RadarComparison {
    pub fn benchmark_values(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.benchmark).collect()
    }

    pub fn employee_values(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.employee).collect()
    }
}

/// Reindexes an employee's pillar means onto the benchmark's pillar order.
/// Pillars the employee has no score on become 0.
pub fn align_to_benchmark(
    benchmark: &BenchmarkProfile,
    employee: &BTreeMap<String, f64>,
) -> Vec<(String, f64, f64)> {
    benchmark
        .iter()
        .map(|(pillar, bm)| {
            let emp = employee.get(pillar).copied().unwrap_or(0.0);
            (pillar.to_string(), bm, emp)
        })
        .collect()
}

pub fn run_stage3(output: &MatchOutput, employee_id: &str, labels: &PillarLabels) -> RadarComparison {
    let empty = BTreeMap::new();
    let means = output
        .means_for(employee_id)
        .map(|m| &m.pillars)
        .unwrap_or(&empty);

    let rows = align_to_benchmark(&output.benchmark, means)
        .into_iter()
        .map(|(pillar_code, benchmark, employee)| RadarRow {
            pillar_label: labels.label_for(&pillar_code).to_string(),
            pillar_code,
            benchmark,
            employee,
        })
        .collect();

    RadarComparison {
        employee_id: employee_id.to_string(),
        rows,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_radar.rs"]
mod tests;
