use super::*;
use std::path::Path;

const SAMPLE: &str = "x,y,label\n0,0,0\n1,1,0\n5,5,1\n-1,-1,-1\n";

#[test]
fn test_parse_skips_header() {
    let records = parse_records(SAMPLE).unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0], PointRecord::new(0.0, 0.0, 0));
    assert_eq!(records[3], PointRecord::new(-1.0, -1.0, -1));
    assert!(records[3].is_noise());
}

#[test]
fn test_parse_preserves_row_order() {
    let records = parse_records("header\n3,3,2\n1,1,0\n2,2,1\n").unwrap();
    let labels: Vec<i32> = records.iter().map(|r| r.label).collect();
    assert_eq!(labels, vec![2, 0, 1]);
}

#[test]
fn test_parse_header_only() {
    let records = parse_records("x,y,label\n").unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_parse_empty_input() {
    assert!(parse_records("").unwrap().is_empty());
}

#[test]
fn test_parse_any_header_is_skipped() {
    // The producer writes data from the first line; that row is still dropped.
    let records = parse_records("0.5,0.5,0\n1.5,2.5,1\n").unwrap();
    assert_eq!(records, vec![PointRecord::new(1.5, 2.5, 1)]);
}

#[test]
fn test_parse_tolerates_whitespace_and_blank_lines() {
    let records = parse_records("x,y,label\r\n 1.5 , 2.5 , 3 \r\n\r\n4,5,-1\r\n").unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], PointRecord::new(1.5, 2.5, 3));
}

#[test]
fn test_parse_scientific_notation() {
    let records = parse_records("x,y,label\n1e-3,-2.5E2,0\n").unwrap();
    assert!((records[0].x - 0.001).abs() < 1e-12);
    assert!((records[0].y + 250.0).abs() < 1e-12);
}

#[test]
fn test_parse_rejects_wrong_column_count() {
    let err = parse_records("x,y,label\n1,2\n").unwrap_err();
    match err {
        LoadError::Malformed { line, reason } => {
            assert_eq!(line, 2);
            assert!(reason.contains("found 2"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_parse_rejects_non_numeric() {
    let err = parse_records("x,y,label\n1,2,0\nfoo,2,0\n").unwrap_err();
    assert!(matches!(err, LoadError::Malformed { line: 3, .. }));
    assert!(err.to_string().contains("foo"));
}

#[test]
fn test_parse_rejects_fractional_label() {
    let err = parse_records("x,y,label\n1,2,0.5\n").unwrap_err();
    assert!(err.to_string().contains("not an integer"));
}

#[test]
fn test_parse_rejects_label_below_noise() {
    let err = parse_records("x,y,label\n1,2,-2\n").unwrap_err();
    assert!(err.to_string().contains("below the noise label"));
}

#[test]
fn test_parse_rejects_nan() {
    let err = parse_records("x,y,label\nNaN,2,0\n").unwrap_err();
    assert!(err.to_string().contains("not finite"));
}

#[test]
fn test_load_missing_file() {
    let err = load("definitely/missing.csv").unwrap_err();
    assert!(matches!(err, LoadError::FileNotFound { .. }));
    assert!(err.to_string().contains("not found"));
}

#[test]
fn test_output_path_replaces_csv_extension() {
    assert_eq!(
        output_path_for("data.csv"),
        Path::new("data_comprehensive.png")
    );
    assert_eq!(
        output_path_for("runs/dbscan_results.csv"),
        Path::new("runs/dbscan_results_comprehensive.png")
    );
}

#[test]
fn test_output_path_only_touches_extension() {
    assert_eq!(
        output_path_for("my.csv.data.csv"),
        Path::new("my.csv.data_comprehensive.png")
    );
    assert_eq!(output_path_for("DATA.CSV"), Path::new("DATA_comprehensive.png"));
}

#[test]
fn test_output_path_without_csv_extension() {
    assert_eq!(output_path_for("points"), Path::new("points_comprehensive.png"));
    assert_eq!(
        output_path_for("points.txt"),
        Path::new("points.txt_comprehensive.png")
    );
}
