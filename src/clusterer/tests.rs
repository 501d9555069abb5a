use super::*;
use crate::loader::PointRecord;

fn p(x: f64, y: f64, label: i32) -> PointRecord {
    PointRecord::new(x, y, label)
}

fn worked_example() -> Vec<PointRecord> {
    vec![p(0.0, 0.0, 0), p(1.0, 1.0, 0), p(5.0, 5.0, 1), p(-1.0, -1.0, -1)]
}

#[test]
fn test_worked_example() {
    let records = worked_example();
    let parts = partition(&records);
    let aggs = aggregate(&parts.clusters);

    assert_eq!(parts.noise.len(), 1);
    assert_eq!(parts.noise[0].label, -1);

    let c0 = &aggs[&0];
    assert_eq!(c0.count, 2);
    assert!((c0.centroid.0 - 0.5).abs() < 1e-9);
    assert!((c0.centroid.1 - 0.5).abs() < 1e-9);

    let c1 = &aggs[&1];
    assert_eq!(c1.count, 1);
    assert_eq!(c1.centroid, (5.0, 5.0));
    assert_eq!(c1.spread, 0.0);
}

#[test]
fn test_partition_conserves_records() {
    let records: Vec<PointRecord> = (0..97)
        .map(|i| p(i as f64, (i * 3) as f64, (i % 7) as i32 - 1))
        .collect();

    let parts = partition(&records);
    let clustered: usize = parts.clusters.values().map(Vec::len).sum();

    assert_eq!(parts.noise.len() + clustered, records.len());
    assert_eq!(parts.len(), records.len());
    assert!(parts.noise.iter().all(|r| r.label == -1));
    for (label, members) in &parts.clusters {
        assert!(*label >= 0);
        assert!(members.iter().all(|r| r.label == *label));
    }
}

#[test]
fn test_labels_ascending_regardless_of_row_order() {
    let records = vec![p(0.0, 0.0, 9), p(0.0, 0.0, 2), p(0.0, 0.0, 11), p(0.0, 0.0, 0), p(0.0, 0.0, 2)];
    let parts = partition(&records);
    assert_eq!(parts.labels(), vec![0, 2, 9, 11]);

    let mut reversed = records.clone();
    reversed.reverse();
    assert_eq!(partition(&reversed).labels(), vec![0, 2, 9, 11]);
}

#[test]
fn test_partition_empty() {
    let parts = partition(&[]);
    assert!(parts.is_empty());
    assert_eq!(parts.cluster_count(), 0);
    assert!(aggregate(&parts.clusters).is_empty());
}

#[test]
fn test_centroid_is_member_mean() {
    let members = vec![p(1.5, -2.0, 3), p(2.5, 4.0, 3), p(-0.5, 1.0, 3)];
    let (cx, cy) = compute_centroid(&members);
    assert!((cx - 3.5 / 3.0).abs() < 1e-9);
    assert!((cy - 1.0).abs() < 1e-9);
}

#[test]
fn test_centroid_ignores_other_clusters() {
    let records = vec![p(0.0, 0.0, 0), p(2.0, 2.0, 0), p(100.0, -100.0, 1), p(50.0, 50.0, -1)];
    let aggs = aggregate(&partition(&records).clusters);
    assert!((aggs[&0].centroid.0 - 1.0).abs() < 1e-9);
    assert!((aggs[&0].centroid.1 - 1.0).abs() < 1e-9);
    assert_eq!(aggs[&1].centroid, (100.0, -100.0));
}

#[test]
fn test_spread_uses_sample_variance() {
    // x = [0, 2], y = [0, 0]: sample var(x) = 2, var(y) = 0 -> sqrt(2)
    let members = vec![p(0.0, 0.0, 0), p(2.0, 0.0, 0)];
    let aggs = aggregate(&partition(&members).clusters);
    assert!((aggs[&0].spread - 2f64.sqrt()).abs() < 1e-9);
}

#[test]
fn test_spread_two_axes() {
    // x = [1, 2, 3, 4] -> var 5/3, y = [2, 4, 6, 8] -> var 20/3
    let members: Vec<PointRecord> = (1..=4).map(|i| p(i as f64, 2.0 * i as f64, 0)).collect();
    let spread = compute_spread(&members, compute_centroid(&members));
    assert!((spread - (25.0f64 / 3.0).sqrt()).abs() < 1e-9);
}

#[test]
fn test_single_member_spread_is_zero() {
    let members = vec![p(3.0, 4.0, 7)];
    let spread = compute_spread(&members, compute_centroid(&members));
    assert_eq!(spread, 0.0);
}

#[test]
fn test_sample_variance_small_inputs() {
    assert_eq!(sample_variance(std::iter::empty(), 0.0), 0.0);
    assert_eq!(sample_variance([5.0].into_iter(), 5.0), 0.0);
    assert!((sample_variance([1.0, 3.0].into_iter(), 2.0) - 2.0).abs() < 1e-12);
}

#[test]
fn test_summary_percentages() {
    let records = worked_example();
    let parts = partition(&records);
    let aggs = aggregate(&parts.clusters);
    let summary = summarize(&records, &parts, &aggs);

    assert_eq!(summary.total, 4);
    assert_eq!(summary.noise, 1);
    assert_eq!(summary.cluster_count(), 2);
    assert!((summary.noise_percent() - 25.0).abs() < 1e-9);
    assert!((summary.percent_of_total(2) - 50.0).abs() < 1e-9);
    assert_eq!(summary.clusters[0].label, 0);
    assert_eq!(summary.clusters[1].label, 1);
}

#[test]
fn test_summary_empty_dataset() {
    let parts = partition(&[]);
    let summary = summarize(&[], &parts, &aggregate(&parts.clusters));
    assert_eq!(summary.noise_percent(), 0.0);
}
