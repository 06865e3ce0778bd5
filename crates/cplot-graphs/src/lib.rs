//! Data loading, smoothing, and chart rendering pipeline for cplot

pub mod loader;
pub mod pipeline;
pub mod renderer;
pub mod smoothing;
pub mod types;

pub use pipeline::{compose_chart, output_path_for, PlotPipeline};
pub use renderer::{BitmapRenderer, ChartRenderer};
pub use smoothing::{MovingAverage, DEFAULT_WINDOW_SIZE};
pub use types::*;
