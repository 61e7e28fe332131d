use super::*;
use crate::profile_text::TemplateProfileGenerator;
use crate::test_support::{write_file, write_sample_dataset};

fn dashboard(dir: &Path) -> Dashboard<TemplateProfileGenerator> {
    Dashboard::new(
        dir,
        MatchSettings::default_v1(),
        CachePolicy::default(),
        TemplateProfileGenerator,
    )
    .with_params(JobParameters {
        benchmark_ids: BenchmarkIds::parse("E1"),
        ..JobParameters::default()
    })
}

fn ranked_ids(view: &DashboardView) -> Vec<&str> {
    view.scoring
        .ranking
        .iter()
        .map(|m| m.employee_id.as_str())
        .collect()
}

#[test]
fn test_render_sample_dataset() {
    let dir = tempfile::tempdir().unwrap();
    write_sample_dataset(dir.path());
    let mut dash = dashboard(dir.path());

    let view = dash.render().unwrap();
    // E5 has no name and is dropped; E4's P3 score is outside the benchmark.
    assert_eq!(ranked_ids(&view), vec!["E1", "E2", "E4", "E3"]);
    assert_eq!(view.scoring.unnamed, vec!["E5".to_string()]);
    assert_eq!(view.scoring.ranking[2].match_rate, -1.0);

    let radar = view.radar.as_ref().unwrap();
    assert_eq!(radar.employee_id, "E1");
    assert_eq!(radar.rows[0].pillar_label, "Strategic Thinking");

    let insight = view.insight.as_ref().unwrap();
    assert_eq!(insight.fullname, "Alice Smith");
    assert_eq!(insight.closest_pillars, vec!["Strategic Thinking", "Social Empathy"]);

    assert!(view.job_profile.contains("Key Competencies"));
    assert_eq!(view.histogram.iter().map(|b| b.count).sum::<usize>(), 4);
}

#[test]
fn test_benchmark_change_recomputes_without_reload() {
    let dir = tempfile::tempdir().unwrap();
    write_sample_dataset(dir.path());
    let mut dash = dashboard(dir.path());
    dash.render().unwrap();

    let view = dash
        .handle(DashboardEvent::SetBenchmarkIds("E3".to_string()))
        .unwrap();
    assert_eq!(ranked_ids(&view)[0], "E3");
    assert_eq!(view.params.benchmark_ids.as_slice(), ["E3"]);
    assert_eq!(dash.cache().loads(), 1);
}

#[test]
fn test_select_employee_and_fallback() {
    let dir = tempfile::tempdir().unwrap();
    write_sample_dataset(dir.path());
    let mut dash = dashboard(dir.path());

    let view = dash
        .handle(DashboardEvent::SelectEmployee("E4".to_string()))
        .unwrap();
    let radar = view.radar.unwrap();
    assert_eq!(radar.employee_id, "E4");
    assert_eq!(radar.employee_values(), vec![3.0, 0.0]);

    let view = dash
        .handle(DashboardEvent::SelectEmployee("E5".to_string()))
        .unwrap();
    assert_eq!(view.radar.unwrap().employee_id, "E1");
}

#[test]
fn test_role_events_update_params() {
    let dir = tempfile::tempdir().unwrap();
    write_sample_dataset(dir.path());
    let mut dash = dashboard(dir.path());

    dash.handle(DashboardEvent::SetRoleName("Data Engineer".to_string()))
        .unwrap();
    dash.handle(DashboardEvent::SetJobLevel(JobLevel::Senior))
        .unwrap();
    let view = dash
        .handle(DashboardEvent::SetRolePurpose("Build pipelines.".to_string()))
        .unwrap();
    assert_eq!(view.params.role_name, "Data Engineer");
    assert_eq!(view.params.job_level, JobLevel::Senior);
    assert_eq!(view.params.role_purpose, "Build pipelines.");
    assert_eq!(dash.params().role_name, "Data Engineer");
}

#[test]
fn test_reload_reads_tables_again() {
    let dir = tempfile::tempdir().unwrap();
    write_sample_dataset(dir.path());
    let mut dash = dashboard(dir.path());
    dash.render().unwrap();
    dash.handle(DashboardEvent::Refresh).unwrap();
    assert_eq!(dash.cache().loads(), 1);

    dash.handle(DashboardEvent::Reload).unwrap();
    assert_eq!(dash.cache().loads(), 2);
}

#[test]
fn test_no_overlap_surfaces_scoring_error() {
    let dir = tempfile::tempdir().unwrap();
    write_sample_dataset(dir.path());
    let mut dash = dashboard(dir.path());
    let err = dash
        .handle(DashboardEvent::SetBenchmarkIds("EMP100001".to_string()))
        .unwrap_err();
    assert!(matches!(
        err,
        DashboardError::Scoring(ScoringError::NoBenchmarkOverlap { requested: 1 })
    ));
}

#[test]
fn test_strict_names_rejects_unnamed() {
    let dir = tempfile::tempdir().unwrap();
    write_sample_dataset(dir.path());
    let mut dash = Dashboard::new(
        dir.path(),
        MatchSettings::strict_names(),
        CachePolicy::default(),
        TemplateProfileGenerator,
    );
    let err = dash
        .handle(DashboardEvent::SetBenchmarkIds("E1".to_string()))
        .unwrap_err();
    assert!(matches!(
        err,
        DashboardError::Scoring(ScoringError::MissingEmployee { .. })
    ));
}

#[test]
fn test_missing_dataset_is_input_error() {
    let dir = tempfile::tempdir().unwrap();
    write_file(&dir.path().join("employees.tsv"), "employee_id\tfullname\nE1\tA\n");
    let mut dash = dashboard(dir.path());
    assert!(matches!(dash.render().unwrap_err(), DashboardError::Input(_)));
}
