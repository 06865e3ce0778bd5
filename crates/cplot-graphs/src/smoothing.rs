//! Trailing moving-average smoothing for noisy per-batch measurements

use cplot_common::{CplotError, Result};

/// Default trailing window width for the smoothed trend line.
pub const DEFAULT_WINDOW_SIZE: usize = 50;

/// Trailing (not centered) moving average over a value series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovingAverage {
    window_size: usize,
}

impl MovingAverage {
    /// Create a smoother with the given window width. Zero is rejected.
    pub fn new(window_size: usize) -> Result<Self> {
        if window_size == 0 {
            return Err(CplotError::validation_field(
                "must be non-zero",
                "window_size",
            ));
        }
        Ok(Self { window_size })
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Smooth `values` into a series aligned index-for-index with the input.
    ///
    /// Position `i` is `None` for `i < window_size - 1`, and otherwise the
    /// arithmetic mean of `values[i - window_size + 1..=i]`. A series
    /// shorter than the window comes back entirely `None`.
    pub fn smooth(&self, values: &[f64]) -> Vec<Option<f64>> {
        let mut smoothed = vec![None; values.len()];
        if values.len() < self.window_size {
            return smoothed;
        }

        // Sliding accumulator: each value enters the sum once and leaves
        // once, so the full pass is O(n) regardless of window width.
        let mut sum = 0.0;
        for (i, &value) in values.iter().enumerate() {
            sum += value;
            if i >= self.window_size {
                sum -= values[i - self.window_size];
            }
            if i + 1 >= self.window_size {
                smoothed[i] = Some(sum / self.window_size as f64);
            }
        }

        smoothed
    }
}

impl Default for MovingAverage {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}
