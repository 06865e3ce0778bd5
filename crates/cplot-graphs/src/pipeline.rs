//! End-to-end plotting pipeline: load, sort, smooth, compose, render, export

use crate::loader;
use crate::renderer::{BitmapRenderer, ChartRenderer};
use crate::smoothing::MovingAverage;
use crate::types::{ChartSpec, Dataset, Layer, LineStyle, MarkerStyle};
use cplot_common::{CplotError, Result};
use std::path::{Path, PathBuf};

const CHART_TITLE: &str =
    "Computation Used Per Batch (n=100) Insertion vs Aggregate Stored Instance Count";
const X_LABEL: &str = "Aggregate Stored Instance Count";
const Y_LABEL: &str = "Computation Used Per Batch (n=100)";

/// Color of the max-computation reference rule
const RULE_COLOR: &str = "#008000";

/// Single-pass batch pipeline. One CSV in, one PNG out, no retries and no
/// partial output: any stage failure aborts the run.
#[derive(Debug, Clone)]
pub struct PlotPipeline {
    smoother: MovingAverage,
}

impl PlotPipeline {
    /// Pipeline with the default smoothing window.
    pub fn new() -> Self {
        Self {
            smoother: MovingAverage::default(),
        }
    }

    /// Pipeline with a custom smoothing window.
    pub fn with_window_size(window_size: usize) -> Result<Self> {
        Ok(Self {
            smoother: MovingAverage::new(window_size)?,
        })
    }

    pub fn window_size(&self) -> usize {
        self.smoother.window_size()
    }

    /// Run the full pipeline on one input file and return the written path.
    pub fn run(&self, csv_path: &Path) -> Result<PathBuf> {
        let mut dataset = loader::load_csv(csv_path)?;

        // The max over computation is order independent; take it before
        // the sort, matching the rest of the pipeline's left-to-right flow.
        let max_computation = dataset
            .max_computation()
            .ok_or_else(|| CplotError::empty_dataset("no computation values to chart"))?;

        dataset.sort_by_aggregate_count();
        let smoothed = self.smoother.smooth(&dataset.computations());
        tracing::debug!(
            rows = dataset.len(),
            window = self.smoother.window_size(),
            "smoothed computation series"
        );

        let spec = compose_chart(&dataset, &smoothed, max_computation);
        let output_path = output_path_for(csv_path);
        BitmapRenderer::new().render_to_file(&spec, &output_path)?;

        tracing::info!("plot saved to {}", output_path.display());
        Ok(output_path)
    }
}

impl Default for PlotPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Output path derivation: same directory, same base name, `png` extension.
/// An existing file at that path is overwritten.
pub fn output_path_for(csv_path: &Path) -> PathBuf {
    csv_path.with_extension("png")
}

/// Compose the three-layer chart from the sorted dataset.
///
/// Z-order, back to front: raw scatter, smoothed line (only where the
/// series is defined), dashed rule at the dataset-wide maximum. This is a
/// pure function of its inputs, so identical inputs give identical layers.
pub fn compose_chart(
    dataset: &Dataset,
    smoothed: &[Option<f64>],
    max_computation: f64,
) -> ChartSpec {
    let scatter_points: Vec<(f64, f64)> = dataset
        .observations()
        .iter()
        .map(|obs| (obs.aggregate_count, obs.computation))
        .collect();

    let line_points: Vec<(f64, f64)> = dataset
        .observations()
        .iter()
        .zip(smoothed)
        .filter_map(|(obs, value)| value.map(|v| (obs.aggregate_count, v)))
        .collect();

    ChartSpec {
        title: CHART_TITLE.to_string(),
        x_label: X_LABEL.to_string(),
        y_label: Y_LABEL.to_string(),
        layers: vec![
            Layer::Scatter {
                points: scatter_points,
                style: MarkerStyle::default(),
            },
            Layer::Line {
                points: line_points,
                style: LineStyle::default(),
                label: "Moving Average".to_string(),
            },
            Layer::HorizontalRule {
                y: max_computation,
                color: RULE_COLOR.to_string(),
                label: format!("Max Computation: {max_computation}"),
            },
        ],
        ..ChartSpec::default()
    }
}
