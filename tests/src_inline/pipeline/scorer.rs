use super::*;
use crate::test_support::{directory, rec, scenario_records};

fn score(records: &[CompetencyRecord], ids: &str) -> MatchOutput {
    score_matches(
        records,
        &BenchmarkIds::parse(ids),
        &directory(&["E1", "E2", "E3", "E4"]),
        MissingEmployeePolicy::Drop,
    )
    .unwrap()
}

#[test]
fn test_reference_scenario() {
    let out = score(&scenario_records(), "E1");

    assert_eq!(out.benchmark.get("P1"), Some(5.0));
    assert_eq!(out.benchmark.get("P2"), Some(3.0));

    let order: Vec<&str> = out.ranking.iter().map(|m| m.employee_id.as_str()).collect();
    assert_eq!(order, vec!["E1", "E2", "E3"]);

    assert_eq!(out.ranking[0].gap, 0.0);
    assert_eq!(out.ranking[0].match_rate, 1.0);
    assert_eq!(out.ranking[1].match_rate, 1.0);
    assert_eq!(out.ranking[2].gap, 3.0);
    assert_eq!(out.ranking[2].match_rate, -2.0);
    assert_eq!(out.ranking[2].fullname, "Name E3");
}

#[test]
fn test_rate_is_one_minus_gap_and_gap_non_negative() {
    let records = vec![
        rec("E1", "P1", 3.5),
        rec("E1", "P2", 4.25),
        rec("E2", "P1", 2.0),
        rec("E2", "P2", 4.75),
        rec("E2", "P3", 1.0),
        rec("E3", "P1", 0.0),
        rec("E4", "P2", 5.0),
        rec("E4", "P2", 1.0),
    ];
    let out = score(&records, "E1, E2");
    assert_eq!(out.ranking.len(), 4);
    for m in &out.ranking {
        assert!(m.gap >= 0.0);
        assert_eq!(m.match_rate, 1.0 - m.gap);
    }
    for w in out.ranking.windows(2) {
        assert!(w[0].match_rate >= w[1].match_rate);
    }
}

#[test]
fn test_identical_profiles_all_match_fully() {
    let records = vec![
        rec("E1", "P1", 4.0),
        rec("E1", "P2", 2.0),
        rec("E2", "P1", 4.0),
        rec("E2", "P2", 2.0),
        rec("E3", "P2", 2.0),
        rec("E3", "P1", 4.0),
    ];
    let out = score(&records, "E1, E2, E3");
    assert_eq!(out.ranking.len(), 3);
    for m in &out.ranking {
        assert_eq!(m.gap, 0.0);
        assert_eq!(m.match_rate, 1.0);
    }
    let order: Vec<&str> = out.ranking.iter().map(|m| m.employee_id.as_str()).collect();
    assert_eq!(order, vec!["E1", "E2", "E3"]);
}

#[test]
fn test_idempotent() {
    let records = scenario_records();
    let a = score(&records, "E1, E3");
    let b = score(&records, "E1, E3");
    assert_eq!(a.ranking, b.ranking);
    assert_eq!(a.benchmark, b.benchmark);
}

#[test]
fn test_multi_year_scores_average_before_gap() {
    // E2's P1 years average to 5, so it matches the benchmark exactly.
    let records = vec![
        rec("E1", "P1", 5.0),
        rec("E2", "P1", 6.0),
        rec("E2", "P1", 4.0),
    ];
    let out = score(&records, "E1");
    let e2 = out.ranking.iter().find(|m| m.employee_id == "E2").unwrap();
    assert_eq!(e2.gap, 0.0);
}

#[test]
fn test_pillars_outside_benchmark_ignored() {
    let records = vec![
        rec("E1", "P1", 5.0),
        rec("E2", "P1", 4.0),
        rec("E2", "P9", 0.0),
        rec("E3", "P9", 5.0),
    ];
    let out = score(&records, "E1");
    assert_eq!(out.ranking.len(), 2);
    assert_eq!(out.ranking[1].employee_id, "E2");
    assert_eq!(out.ranking[1].gap, 1.0);
    assert_eq!(out.no_overlap, vec!["E3".to_string()]);
}

#[test]
fn test_top_truncates() {
    let out = score(&scenario_records(), "E1");
    assert_eq!(out.top(2).len(), 2);
    assert_eq!(out.top(50).len(), 3);
}

#[test]
fn test_empty_input_error() {
    let err = score_matches(
        &[],
        &BenchmarkIds::parse("E1"),
        &directory(&["E1"]),
        MissingEmployeePolicy::Drop,
    )
    .unwrap_err();
    assert_eq!(err, ScoringError::EmptyInput);
}

#[test]
fn test_nan_scores_are_skipped_not_ranked_first() {
    let records = vec![
        rec("E1", "P1", 5.0),
        rec("E2", "P1", 5.0),
        rec("E3", "P1", f64::NAN),
        rec("E3", "P2", 4.0),
        rec("E4", "P1", f64::INFINITY),
        rec("E4", "P1", 3.0),
    ];
    let out = score(&records, "E1");

    let order: Vec<&str> = out.ranking.iter().map(|m| m.employee_id.as_str()).collect();
    assert_eq!(order, vec!["E1", "E2", "E4"]);
    assert_eq!(out.ranking[2].gap, 2.0);
    assert!(out.ranking.iter().all(|m| m.match_rate.is_finite()));
    assert_eq!(out.no_overlap, vec!["E3".to_string()]);
}

#[test]
fn test_benchmark_with_only_nan_scores_has_no_overlap() {
    let records = vec![rec("E1", "P1", f64::NAN), rec("E2", "P1", 4.0)];
    let err = score_matches(
        &records,
        &BenchmarkIds::parse("E1"),
        &directory(&["E1", "E2"]),
        MissingEmployeePolicy::Drop,
    )
    .unwrap_err();
    assert_eq!(err, ScoringError::NoBenchmarkOverlap { requested: 1 });
}
