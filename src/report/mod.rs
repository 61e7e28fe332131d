pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::matches::MatchResult;
use crate::model::settings::JobLevel;
use crate::pipeline::stage3_radar::RadarComparison;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateStats {
    pub min: f64,
    pub median: f64,
    pub p90: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryInsight {
    pub employee_id: String,
    pub fullname: String,
    pub match_rate: f64,
    /// Labels of the pillars where the employee sits closest to the benchmark.
    pub closest_pillars: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    pub role_name: &'a str,
    pub job_level: JobLevel,
    pub role_purpose: &'a str,
    pub benchmark_ids: String,
    pub top: &'a [MatchResult],
    pub n_ranked: usize,
    pub stats: Option<RateStats>,
    pub histogram: &'a [HistogramBin],
    pub radar: Option<&'a RadarComparison>,
    pub job_profile: &'a str,
    pub insight: Option<&'a SummaryInsight>,
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

pub fn quantile_indexed(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len();
    let idx = ((n - 1) as f64 * p).ceil() as usize;
    sorted[idx]
}

pub fn median(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.5)
}

pub fn p90(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.90)
}

pub fn rate_stats(values: &[f64]) -> Option<RateStats> {
    if values.is_empty() {
        return None;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(RateStats {
        min,
        median: median(values),
        p90: p90(values),
        max,
    })
}

/// Equal-width bins over `[min, max]`; the last bin is closed on the right.
/// A single bin holds everything when all values are equal.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max <= min {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: values.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: min + width * i as f64,
            upper: if i + 1 == bins {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();
    for &v in values {
        let idx = (((v - min) / width).floor() as usize).min(bins - 1);
        out[idx].count += 1;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
