//! Integration tests for cplot-graphs crate.
//!
//! End-to-end pipeline scenarios over real temp files.

use cplot_graphs::{compose_chart, loader, Layer, MovingAverage, PlotPipeline};
use std::path::PathBuf;
use tempfile::tempdir;

fn write_csv(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_linear_series_with_default_window() {
    // Rows (1,10), (2,20), ..., (60,600) with the default window of 50.
    let dir = tempdir().unwrap();
    let rows: String = (1..=60).map(|i| format!("{},{}\n", i, i * 10)).collect();
    let csv_path = write_csv(&dir, "linear.csv", &rows);

    let mut dataset = loader::load_csv(&csv_path).unwrap();
    dataset.sort_by_aggregate_count();
    let smoothed = MovingAverage::default().smooth(&dataset.computations());

    let defined: Vec<(usize, f64)> = smoothed
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|v| (i, v)))
        .collect();

    assert_eq!(defined.len(), 11);
    // First defined value: mean of computations at counts 1..=50.
    assert_eq!(defined[0], (49, 255.0));
    // Last defined value: mean of computations at counts 11..=60.
    assert_eq!(defined[10], (59, 355.0));

    let output = PlotPipeline::new().run(&csv_path).unwrap();
    assert_eq!(output, dir.path().join("linear.png"));
    assert!(output.exists());
    assert!(std::fs::metadata(&output).unwrap().len() > 0);
}

#[test]
fn test_short_dataset_renders_without_trend_line() {
    // Three rows are fewer than the default window, so the smoothed series
    // is entirely undefined; the chart must still render with the max rule.
    let dir = tempdir().unwrap();
    let csv_path = write_csv(&dir, "short.csv", "10,5.0\n20,8.5\n30,7.0\n");

    let mut dataset = loader::load_csv(&csv_path).unwrap();
    let max = dataset.max_computation().unwrap();
    dataset.sort_by_aggregate_count();
    let smoothed = MovingAverage::default().smooth(&dataset.computations());
    assert!(smoothed.iter().all(Option::is_none));

    let spec = compose_chart(&dataset, &smoothed, max);
    match &spec.layers[1] {
        Layer::Line { points, .. } => assert!(points.is_empty()),
        other => panic!("expected Line, got {other:?}"),
    }
    match &spec.layers[2] {
        Layer::HorizontalRule { y, .. } => assert_eq!(*y, 8.5),
        other => panic!("expected HorizontalRule, got {other:?}"),
    }

    let output = PlotPipeline::new().run(&csv_path).unwrap();
    assert!(output.exists());
}

#[test]
fn test_sort_properties_from_file() {
    let dir = tempdir().unwrap();
    let csv_path = write_csv(&dir, "ties.csv", "5,1\n3,9\n5,2\n1,4\n5,3\n");

    let mut dataset = loader::load_csv(&csv_path).unwrap();
    let original = dataset.observations().to_vec();
    dataset.sort_by_aggregate_count();

    // Non-decreasing in aggregate_count.
    let counts: Vec<f64> = dataset
        .observations()
        .iter()
        .map(|obs| obs.aggregate_count)
        .collect();
    assert_eq!(counts, vec![1.0, 3.0, 5.0, 5.0, 5.0]);

    // Permutation of the input.
    assert_eq!(dataset.len(), original.len());
    for obs in &original {
        assert!(dataset.observations().contains(obs));
    }

    // Tied keys keep file order.
    let tied: Vec<f64> = dataset
        .observations()
        .iter()
        .filter(|obs| obs.aggregate_count == 5.0)
        .map(|obs| obs.computation)
        .collect();
    assert_eq!(tied, vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_rerun_produces_identical_layers() {
    let dir = tempdir().unwrap();
    let rows: String = (1..=30).map(|i| format!("{},{}\n", 31 - i, i * 3)).collect();
    let csv_path = write_csv(&dir, "stable.csv", &rows);

    let compose_once = || {
        let mut dataset = loader::load_csv(&csv_path).unwrap();
        let max = dataset.max_computation().unwrap();
        dataset.sort_by_aggregate_count();
        let smoothed = MovingAverage::new(10).unwrap().smooth(&dataset.computations());
        compose_chart(&dataset, &smoothed, max)
    };

    assert_eq!(compose_once(), compose_once());
}

#[test]
fn test_malformed_row_aborts_without_output() {
    let dir = tempdir().unwrap();
    let csv_path = write_csv(&dir, "bad.csv", "1,10\n\"abc\",5\n3,30\n");

    let result = PlotPipeline::new().run(&csv_path);
    assert!(result.is_err());
    assert!(!dir.path().join("bad.png").exists());
}

#[test]
fn test_empty_input_aborts_without_output() {
    let dir = tempdir().unwrap();
    let csv_path = write_csv(&dir, "empty.csv", "");

    let result = PlotPipeline::new().run(&csv_path);
    assert!(result.is_err());
    assert!(!dir.path().join("empty.png").exists());
}

#[test]
fn test_existing_output_is_overwritten() {
    let dir = tempdir().unwrap();
    let csv_path = write_csv(&dir, "bench.csv", "1,10\n2,20\n3,30\n4,40\n");
    let output_path = dir.path().join("bench.png");
    std::fs::write(&output_path, b"old").unwrap();

    let output = PlotPipeline::with_window_size(2).unwrap().run(&csv_path).unwrap();
    assert_eq!(output, output_path);
    // The stale placeholder is gone; a real image took its place.
    assert!(std::fs::metadata(&output).unwrap().len() > 3);
}
