//! End-to-end checks of the load -> partition -> aggregate -> render pipeline.

use clusterplot::{LoadError, aggregate, load, output_path_for, partition};
use std::fs;
use std::process::Command;

fn write_csv(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path
}

fn clusterplot() -> Command {
    Command::new(env!("CARGO_BIN_EXE_clusterplot"))
}

#[test]
fn test_worked_example_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "data.csv", "x,y,label\n0,0,0\n1,1,0\n5,5,1\n-1,-1,-1\n");

    let records = load(&path).unwrap();
    let parts = partition(&records);
    let aggs = aggregate(&parts.clusters);

    assert_eq!(records.len(), 4);
    assert_eq!(parts.noise.len(), 1);
    assert_eq!(aggs[&0].count, 2);
    assert!((aggs[&0].centroid.0 - 0.5).abs() < 1e-9);
    assert!((aggs[&0].centroid.1 - 0.5).abs() < 1e-9);
    assert_eq!(aggs[&1].count, 1);
    assert_eq!(aggs[&1].centroid, (5.0, 5.0));
    assert_eq!(aggs[&1].spread, 0.0);

    assert_eq!(
        output_path_for(&path),
        dir.path().join("data_comprehensive.png")
    );
}

#[test]
fn test_load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load(dir.path().join("missing.csv")).unwrap_err();
    assert!(matches!(err, LoadError::FileNotFound { .. }));
}

#[test]
fn test_load_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load(dir.path()).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn test_cli_missing_file_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.csv");

    let out = clusterplot().arg(&input).output().unwrap();

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("not found"), "stderr was: {}", stderr);
    assert!(!dir.path().join("missing_comprehensive.png").exists());
}

#[test]
fn test_cli_default_input_when_missing() {
    let dir = tempfile::tempdir().unwrap();

    let out = clusterplot().current_dir(dir.path()).output().unwrap();

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("dbscan_results.csv"));
    assert!(!dir.path().join("dbscan_results_comprehensive.png").exists());
}

#[test]
fn test_cli_malformed_csv_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(&dir, "bad.csv", "x,y,label\n1,2,0\nnot,a,row\n");

    let out = clusterplot().arg(&input).output().unwrap();

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("line 3"), "stderr was: {}", stderr);
    assert!(!dir.path().join("bad_comprehensive.png").exists());
}

#[test]
fn test_cli_renders_figure() {
    let dir = tempfile::tempdir().unwrap();
    let mut body = String::from("x,y,label\n");
    for i in 0..200 {
        let label = (i % 4) as i32 - 1;
        body.push_str(&format!("{},{},{}\n", label * 10 + i % 3, i % 5, label));
    }
    let input = write_csv(&dir, "run.csv", &body);

    let out = clusterplot().arg(&input).output().unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Loaded 200 points"));
    assert!(stdout.contains("Saved comprehensive plot to:"));
    assert!(stdout.contains("run_comprehensive.png"));

    let png = fs::read(dir.path().join("run_comprehensive.png")).unwrap();
    assert_eq!(&png[1..4], b"PNG");
}
