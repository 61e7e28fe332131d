use super::*;

#[test]
fn test_quantiles() {
    let v = vec![1.0f64, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(median(&v), 3.0);
    assert_eq!(p90(&v), 5.0);
    assert_eq!(quantile_indexed(&[], 0.5), 0.0);
}

#[test]
fn test_rate_stats() {
    let stats = rate_stats(&[1.0, -2.0, 0.5, 1.0]).unwrap();
    assert_eq!(stats.min, -2.0);
    assert_eq!(stats.max, 1.0);
    assert_eq!(stats.median, 1.0);
    assert!(rate_stats(&[]).is_none());
}

#[test]
fn test_histogram_bins() {
    let bins = histogram(&[0.0, 0.1, 0.5, 0.99, 1.0], 4);
    assert_eq!(bins.len(), 4);
    let counts: Vec<usize> = bins.iter().map(|b| b.count).collect();
    assert_eq!(counts, vec![2, 0, 1, 2]);
    assert_eq!(bins[0].lower, 0.0);
    assert_eq!(bins[3].upper, 1.0);
}

#[test]
fn test_histogram_degenerate() {
    let bins = histogram(&[0.7, 0.7, 0.7], 20);
    assert_eq!(bins.len(), 1);
    assert_eq!(bins[0].count, 3);
    assert!(histogram(&[], 20).is_empty());
    assert!(histogram(&[1.0], 0).is_empty());
}

#[test]
fn test_format_f64_6() {
    assert_eq!(format_f64_6(-2.0), "-2.000000");
    assert_eq!(format_f64_6(1.0 / 3.0), "0.333333");
}
