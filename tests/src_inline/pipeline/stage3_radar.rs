use super::*;
use crate::model::matches::MissingEmployeePolicy;
use crate::model::profile::BenchmarkIds;
use crate::model::records::Pillar;
use crate::pipeline::score_matches;
use crate::test_support::{directory, rec};

#[test]
fn test_align_fills_missing_with_zero() {
    let benchmark = BenchmarkProfile::from_scores(
        [("P1".to_string(), 5.0), ("P2".to_string(), 3.0)]
            .into_iter()
            .collect(),
    );
    let employee: BTreeMap<String, f64> = [("P1".to_string(), 4.0), ("P7".to_string(), 2.0)]
        .into_iter()
        .collect();

    let aligned = align_to_benchmark(&benchmark, &employee);
    let codes: Vec<&str> = aligned.iter().map(|(p, _, _)| p.as_str()).collect();
    let emp: Vec<f64> = aligned.iter().map(|(_, _, e)| *e).collect();
    let bm: Vec<f64> = aligned.iter().map(|(_, b, _)| *b).collect();
    assert_eq!(codes, vec!["P1", "P2"]);
    assert_eq!(emp, vec![4.0, 0.0]);
    assert_eq!(bm, vec![5.0, 3.0]);
}

#[test]
fn test_radar_rows_carry_labels() {
    let records = vec![
        rec("E1", "P1", 5.0),
        rec("E1", "P2", 3.0),
        rec("E2", "P1", 4.0),
    ];
    let output = score_matches(
        &records,
        &BenchmarkIds::parse("E1"),
        &directory(&["E1", "E2"]),
        MissingEmployeePolicy::Drop,
    )
    .unwrap();
    let labels: PillarLabels = vec![Pillar {
        pillar_code: "P1".to_string(),
        pillar_label: "Strategic Thinking".to_string(),
    }]
    .into_iter()
    .collect();

    let radar = run_stage3(&output, "E2", &labels);
    assert_eq!(radar.employee_id, "E2");
    assert_eq!(radar.rows[0].pillar_label, "Strategic Thinking");
    assert_eq!(radar.rows[1].pillar_label, "P2");
    assert_eq!(radar.employee_values(), vec![4.0, 0.0]);
    assert_eq!(radar.benchmark_values(), vec![5.0, 3.0]);
}

#[test]
fn test_radar_for_unknown_employee_is_all_zero() {
    let records = vec![rec("E1", "P1", 5.0)];
    let output = score_matches(
        &records,
        &BenchmarkIds::parse("E1"),
        &directory(&["E1"]),
        MissingEmployeePolicy::Drop,
    )
    .unwrap();
    let radar = run_stage3(&output, "E404", &PillarLabels::default());
    assert_eq!(radar.employee_values(), vec![0.0]);
}
