//! Controller that recomputes the match view when a job parameter changes.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::input::cache::{CachePolicy, DatasetCache};
use crate::input::{Dataset, InputError};
use crate::model::profile::BenchmarkIds;
use crate::model::settings::{JobLevel, JobParameters, MatchSettings};
use crate::pipeline::stage3_radar::{RadarComparison, run_stage3};
use crate::pipeline::{MatchOutput, ScoringError, score_matches};
use crate::profile_text::{ProfileGenerator, ProfileRequest};
use crate::report::{HistogramBin, RateStats, SummaryInsight, histogram, rate_stats};

const INSIGHT_PILLARS: usize = 3;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    SetRoleName(String),
    SetJobLevel(JobLevel),
    SetRolePurpose(String),
    /// Comma separated employee ids.
    SetBenchmarkIds(String),
    SelectEmployee(String),
    /// Drops the cached dataset so the next view reads the tables again.
    Reload,
    Refresh,
}

#[derive(Debug, Clone)]
pub struct DashboardView {
    pub params: JobParameters,
    pub settings: MatchSettings,
    pub dataset: Arc<Dataset>,
    pub scoring: MatchOutput,
    pub stats: Option<RateStats>,
    pub histogram: Vec<HistogramBin>,
    pub radar: Option<RadarComparison>,
    pub job_profile: String,
    pub insight: Option<SummaryInsight>,
}

impl DashboardView {
    pub fn top(&self) -> &[crate::model::matches::MatchResult] {
        self.scoring.top(self.settings.top_n)
    }
}

pub struct Dashboard<G: ProfileGenerator> {
    input_dir: PathBuf,
    settings: MatchSettings,
    params: JobParameters,
    selected: Option<String>,
    cache: DatasetCache,
    generator: G,
}

impl<G: ProfileGenerator> Dashboard<G> {
    pub fn new(
        input_dir: &Path,
        settings: MatchSettings,
        cache_policy: CachePolicy,
        generator: G,
    ) -> Self {
        Self {
            input_dir: input_dir.to_path_buf(),
            settings,
            params: JobParameters::default(),
            selected: None,
            cache: DatasetCache::new(cache_policy),
            generator,
        }
    }

    pub fn with_params(mut self, params: JobParameters) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &JobParameters {
        &self.params
    }

    pub fn cache(&self) -> &DatasetCache {
        &self.cache
    }

    pub fn handle(&mut self, event: DashboardEvent) -> Result<DashboardView, DashboardError> {
        match event {
            DashboardEvent::SetRoleName(name) => self.params.role_name = name,
            DashboardEvent::SetJobLevel(level) => self.params.job_level = level,
            DashboardEvent::SetRolePurpose(purpose) => self.params.role_purpose = purpose,
            DashboardEvent::SetBenchmarkIds(raw) => {
                self.params.benchmark_ids = BenchmarkIds::parse(&raw)
            }
            DashboardEvent::SelectEmployee(id) => self.selected = Some(id),
            DashboardEvent::Reload => self.cache.invalidate(),
            DashboardEvent::Refresh => {}
        }
        self.render()
    }

    pub fn render(&mut self) -> Result<DashboardView, DashboardError> {
        let dataset = self.cache.get_or_load(&self.input_dir)?;
        let scoring = score_matches(
            &dataset.records,
            &self.params.benchmark_ids,
            &dataset.employees,
            self.settings.missing_employee,
        )?;

        let rates: Vec<f64> = scoring.ranking.iter().map(|m| m.match_rate).collect();
        let stats = rate_stats(&rates);
        let hist = histogram(&rates, self.settings.histogram_bins);

        let selected = self.resolve_selection(&scoring);
        let radar = selected
            .as_deref()
            .map(|id| run_stage3(&scoring, id, &dataset.pillars));

        let insight = scoring.ranking.first().map(|best| {
            let comparison = run_stage3(&scoring, &best.employee_id, &dataset.pillars);
            SummaryInsight {
                employee_id: best.employee_id.clone(),
                fullname: best.fullname.clone(),
                match_rate: best.match_rate,
                closest_pillars: closest_pillars(&scoring, &comparison, INSIGHT_PILLARS),
            }
        });

        let job_profile = self
            .generator
            .generate(&ProfileRequest::from(&self.params));

        info!(
            role = %self.params.role_name,
            level = %self.params.job_level,
            ranked = scoring.ranking.len(),
            selected = selected.as_deref().unwrap_or("-"),
            "dashboard view rendered"
        );

        Ok(DashboardView {
            params: self.params.clone(),
            settings: self.settings.clone(),
            dataset,
            scoring,
            stats,
            histogram: hist,
            radar,
            job_profile,
            insight,
        })
    }

    /// The explicit selection while it is still ranked, else the top match.
    fn resolve_selection(&self, scoring: &MatchOutput) -> Option<String> {
        let top = scoring.top(self.settings.top_n);
        if let Some(id) = &self.selected {
            if scoring.ranking.iter().any(|m| &m.employee_id == id) {
                return Some(id.clone());
            }
        }
        top.first().map(|m| m.employee_id.clone())
    }
}

/// Pillars the employee has a score on, by smallest distance to the benchmark.
fn closest_pillars(scoring: &MatchOutput, comparison: &RadarComparison, n: usize) -> Vec<String> {
    let Some(means) = scoring.means_for(&comparison.employee_id) else {
        return Vec::new();
    };
    let mut scored: Vec<(f64, &str)> = comparison
        .rows
        .iter()
        .filter(|row| means.pillars.contains_key(&row.pillar_code))
        .map(|row| ((row.employee - row.benchmark).abs(), row.pillar_label.as_str()))
        .collect();
    scored.sort_by(|a, b| a.0.total_cmp(&b.0));
    scored
        .into_iter()
        .take(n)
        .map(|(_, label)| label.to_string())
        .collect()
}

#[cfg(test)]
#[path = "../tests/src_inline/dashboard.rs"]
mod tests;
