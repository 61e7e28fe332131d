use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::dashboard::DashboardView;
use crate::report::json::{
    BenchmarkSummary, CountSummary, SummaryData, ToolMeta, render_summary_json,
};
use crate::report::text::render_report_text;
use crate::report::{ReportContext, format_f64_6};

pub const RANKING_FILE: &str = "ranking.tsv";
pub const BENCHMARK_FILE: &str = "benchmark_profile.tsv";
pub const RADAR_FILE: &str = "radar.tsv";
pub const SUMMARY_FILE: &str = "summary.json";
pub const REPORT_FILE: &str = "report.txt";

pub fn write_reports(view: &DashboardView, out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    write_ranking_tsv(view, &out_dir.join(RANKING_FILE))?;
    write_benchmark_tsv(view, &out_dir.join(BENCHMARK_FILE))?;

    let radar_path = out_dir.join(RADAR_FILE);
    if view.radar.is_some() {
        write_radar_tsv(view, &radar_path)?;
    } else if radar_path.exists() {
        fs::remove_file(&radar_path)?;
    }

    let summary = build_summary(view);
    let json = render_summary_json(&summary)?;
    write_text(&out_dir.join(SUMMARY_FILE), &json)?;

    let report = render_report_text(&build_report_context(view));
    write_text(&out_dir.join(REPORT_FILE), &report)?;

    info!(out_dir = %out_dir.display(), "reports written");
    Ok(())
}

fn write_ranking_tsv(view: &DashboardView, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "rank\temployee_id\tfullname\tgap\tmatch_rate")?;
    for (i, m) in view.scoring.ranking.iter().enumerate() {
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}",
            i + 1,
            m.employee_id,
            m.fullname,
            format_f64_6(m.gap),
            format_f64_6(m.match_rate)
        )?;
    }
    w.flush()
}

fn write_benchmark_tsv(view: &DashboardView, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "pillar_code\tpillar_label\tbenchmark_score")?;
    for (pillar, score) in view.scoring.benchmark.iter() {
        writeln!(
            w,
            "{}\t{}\t{}",
            pillar,
            view.dataset.pillars.label_for(pillar),
            format_f64_6(score)
        )?;
    }
    w.flush()
}

fn write_radar_tsv(view: &DashboardView, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "pillar_code\tpillar_label\tbenchmark\temployee")?;
    if let Some(radar) = &view.radar {
        for row in &radar.rows {
            writeln!(
                w,
                "{}\t{}\t{}\t{}",
                row.pillar_code,
                row.pillar_label,
                format_f64_6(row.benchmark),
                format_f64_6(row.employee)
            )?;
        }
    }
    w.flush()
}

fn build_summary(view: &DashboardView) -> SummaryData {
    let scoring = &view.scoring;
    SummaryData {
        tool: ToolMeta {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        job: view.params.clone(),
        benchmark: BenchmarkSummary {
            requested: view.params.benchmark_ids.as_slice().to_vec(),
            matched: scoring.benchmark_matched.clone(),
            profile: scoring.benchmark.clone(),
        },
        counts: CountSummary {
            records: view.dataset.records.len(),
            skipped_missing_score: view.dataset.skipped_missing_score,
            employees_ranked: scoring.ranking.len(),
            dropped_unnamed: scoring.unnamed.len(),
            no_benchmark_overlap: scoring.no_overlap.len(),
        },
        match_rate: view.stats,
        histogram: view.histogram.clone(),
        radar_range: [view.settings.score_range.0, view.settings.score_range.1],
        top: view.top().to_vec(),
        selected_employee: view.radar.as_ref().map(|r| r.employee_id.clone()),
        insight: view.insight.clone(),
    }
}

fn build_report_context(view: &DashboardView) -> ReportContext<'_> {
    ReportContext {
        role_name: &view.params.role_name,
        job_level: view.params.job_level,
        role_purpose: &view.params.role_purpose,
        benchmark_ids: view.params.benchmark_ids.to_string(),
        top: view.top(),
        n_ranked: view.scoring.ranking.len(),
        stats: view.stats,
        histogram: &view.histogram,
        radar: view.radar.as_ref(),
        job_profile: &view.job_profile,
        insight: view.insight.as_ref(),
    }
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(content.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
