//! Core data types for the plotting pipeline

use serde::{Deserialize, Serialize};

/// A single measurement row: the cumulative stored-instance count at the
/// time a batch operation was measured, paired with its computation cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub aggregate_count: f64,
    pub computation: f64,
}

impl Observation {
    pub fn new(aggregate_count: f64, computation: f64) -> Self {
        Self {
            aggregate_count,
            computation,
        }
    }
}

/// An ordered sequence of observations, owned by one pipeline run.
///
/// Duplicate `aggregate_count` values are legal and preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    observations: Vec<Observation>,
}

impl Dataset {
    pub fn new(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Sort ascending by `aggregate_count`.
    ///
    /// `sort_by` is stable: rows with equal keys keep their original
    /// relative order, which decides how ties fall into rolling windows.
    pub fn sort_by_aggregate_count(&mut self) {
        self.observations
            .sort_by(|a, b| a.aggregate_count.total_cmp(&b.aggregate_count));
    }

    /// Maximum `computation` over the whole dataset, independent of order.
    pub fn max_computation(&self) -> Option<f64> {
        self.observations
            .iter()
            .map(|obs| obs.computation)
            .reduce(f64::max)
    }

    /// The `computation` column in current row order.
    pub fn computations(&self) -> Vec<f64> {
        self.observations.iter().map(|obs| obs.computation).collect()
    }
}

/// Style for scatter markers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    /// Hex color string, e.g. "#1f77b4"
    pub color: String,
    /// Marker radius in pixels
    pub size: u32,
    /// Opacity in [0, 1]
    pub alpha: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            color: "#0000FF".to_string(),
            size: 3,
            alpha: 0.5,
        }
    }
}

/// Style for line series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Hex color string
    pub color: String,
    /// Stroke width in pixels
    pub width: u32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: "#FF0000".to_string(),
            width: 2,
        }
    }
}

/// One visual layer of a chart. Layers draw in list order, back to front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Layer {
    /// Individual `(x, y)` points
    Scatter {
        points: Vec<(f64, f64)>,
        style: MarkerStyle,
    },
    /// A connected polyline with a legend entry
    Line {
        points: Vec<(f64, f64)>,
        style: LineStyle,
        label: String,
    },
    /// A dashed horizontal rule spanning the full x range, with a legend entry
    HorizontalRule {
        y: f64,
        color: String,
        label: String,
    },
}

/// Immutable description of a complete chart: dimensions, text, and an
/// ordered list of layers carrying their own data and style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub width: u32,
    pub height: u32,
    pub layers: Vec<Layer>,
}

impl Default for ChartSpec {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            width: 1200,
            height: 800,
            layers: Vec::new(),
        }
    }
}
