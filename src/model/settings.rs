use clap::ValueEnum;
use serde::Serialize;

use crate::model::matches::MissingEmployeePolicy;
use crate::model::profile::BenchmarkIds;

#[derive(Debug, Clone)]
pub struct MatchSettings {
    pub top_n: usize,
    pub histogram_bins: usize,
    pub score_range: (f64, f64),
    pub missing_employee: MissingEmployeePolicy,
}

impl MatchSettings {
    pub fn default_v1() -> Self {
        Self {
            top_n: 10,
            histogram_bins: 20,
            score_range: (0.0, 5.0),
            missing_employee: MissingEmployeePolicy::Drop,
        }
    }

    pub fn strict_names() -> Self {
        let mut base = Self::default_v1();
        base.missing_employee = MissingEmployeePolicy::Error;
        base
    }
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self::default_v1()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum JobLevel {
    Junior,
    Middle,
    Senior,
}

impl std::fmt::Display for JobLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            JobLevel::Junior => "Junior",
            JobLevel::Middle => "Middle",
            JobLevel::Senior => "Senior",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobParameters {
    pub role_name: String,
    pub job_level: JobLevel,
    pub role_purpose: String,
    pub benchmark_ids: BenchmarkIds,
}

pub const DEFAULT_ROLE_NAME: &str = "Data Analyst";
pub const DEFAULT_ROLE_PURPOSE: &str = "Responsible for turning data into actionable insights.";
pub const DEFAULT_BENCHMARK_IDS: &str = "EMP100001, EMP100005, EMP100010";

impl Default for JobParameters {
    fn default() -> Self {
        Self {
            role_name: DEFAULT_ROLE_NAME.to_string(),
            job_level: JobLevel::Middle,
            role_purpose: DEFAULT_ROLE_PURPOSE.to_string(),
            benchmark_ids: BenchmarkIds::parse(DEFAULT_BENCHMARK_IDS),
        }
    }
}
