use serde::Serialize;

use crate::model::matches::MatchResult;
use crate::model::profile::BenchmarkProfile;
use crate::model::settings::JobParameters;
use crate::report::{HistogramBin, RateStats, SummaryInsight};

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkSummary {
    pub requested: Vec<String>,
    pub matched: Vec<String>,
    pub profile: BenchmarkProfile,
}

#[derive(Debug, Clone, Serialize)]
pub struct CountSummary {
    pub records: usize,
    pub skipped_missing_score: usize,
    pub employees_ranked: usize,
    pub dropped_unnamed: usize,
    pub no_benchmark_overlap: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub job: JobParameters,
    pub benchmark: BenchmarkSummary,
    pub counts: CountSummary,
    pub match_rate: Option<RateStats>,
    pub histogram: Vec<HistogramBin>,
    pub radar_range: [f64; 2],
    pub top: Vec<MatchResult>,
    pub selected_employee: Option<String>,
    pub insight: Option<SummaryInsight>,
}

pub fn render_summary_json(data: &SummaryData) -> serde_json::Result<String> {
    serde_json::to_string_pretty(data)
}
