//! Chart rendering onto raster backends

use crate::types::{ChartSpec, Layer};
use cplot_common::{CplotError, Result};
use plotters::prelude::*;
use std::path::Path;

/// Trait for rendering an immutable chart specification to a file.
pub trait ChartRenderer {
    fn render_to_file(&self, spec: &ChartSpec, path: &Path) -> Result<()>;
}

/// Renderer producing PNG output via plotters' bitmap backend.
#[derive(Debug)]
pub struct BitmapRenderer;

impl BitmapRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BitmapRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartRenderer for BitmapRenderer {
    fn render_to_file(&self, spec: &ChartSpec, path: &Path) -> Result<()> {
        if spec.layers.is_empty() {
            return Err(CplotError::graph("chart spec has no layers"));
        }

        let root = BitMapBackend::new(path, (spec.width, spec.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let (x_min, x_max, y_min, y_max) = data_ranges(spec);

        let mut chart = ChartBuilder::on(&root)
            .caption(&spec.title, ("sans-serif", 24))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

        chart
            .configure_mesh()
            .x_desc(spec.x_label.as_str())
            .y_desc(spec.y_label.as_str())
            .draw()?;

        // Layers draw in list order, so earlier entries sit behind later ones.
        for layer in &spec.layers {
            match layer {
                Layer::Scatter { points, style } => {
                    let color = parse_color(&style.color).mix(style.alpha);
                    let size = style.size as i32;
                    chart.draw_series(
                        points
                            .iter()
                            .map(|&(x, y)| Circle::new((x, y), size, color.filled())),
                    )?;
                }
                Layer::Line { points, style, label } => {
                    let color = parse_color(&style.color);
                    let width = style.width;
                    chart
                        .draw_series(LineSeries::new(
                            points.iter().copied(),
                            color.stroke_width(width),
                        ))?
                        .label(label.as_str())
                        .legend(move |(x, y)| {
                            PathElement::new(vec![(x, y), (x + 10, y)], color.stroke_width(width))
                        });
                }
                Layer::HorizontalRule { y, color, label } => {
                    let rule_color = parse_color(color);
                    chart
                        .draw_series(DashedLineSeries::new(
                            [(x_min, *y), (x_max, *y)],
                            6,
                            4,
                            rule_color.stroke_width(1),
                        ))?
                        .label(label.as_str())
                        .legend(move |(x, y)| {
                            PathElement::new(vec![(x, y), (x + 10, y)], rule_color)
                        });
                }
            }
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        root.present()?;
        tracing::info!("rendered chart to {}", path.display());
        Ok(())
    }
}

/// Parse a `#RRGGBB` color string, defaulting to black on any mismatch.
fn parse_color(color_str: &str) -> RGBColor {
    if let Some(hex) = color_str.strip_prefix('#') {
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return RGBColor(r, g, b);
            }
        }
    }
    RGBColor(0, 0, 0)
}

/// Axis ranges covering every layer's data, padded by 5% on each side.
///
/// A degenerate (zero-width) axis gets a unit pad instead, so a single
/// point or an all-equal column still produces a drawable range.
fn data_ranges(spec: &ChartSpec) -> (f64, f64, f64, f64) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for layer in &spec.layers {
        match layer {
            Layer::Scatter { points, .. } | Layer::Line { points, .. } => {
                for &(x, y) in points {
                    x_min = x_min.min(x);
                    x_max = x_max.max(x);
                    y_min = y_min.min(y);
                    y_max = y_max.max(y);
                }
            }
            Layer::HorizontalRule { y, .. } => {
                y_min = y_min.min(*y);
                y_max = y_max.max(*y);
            }
        }
    }

    if !x_min.is_finite() || !y_min.is_finite() {
        return (0.0, 1.0, 0.0, 1.0);
    }

    let x_padding = pad_for(x_max - x_min);
    let y_padding = pad_for(y_max - y_min);

    (
        x_min - x_padding,
        x_max + x_padding,
        y_min - y_padding,
        y_max + y_padding,
    )
}

fn pad_for(span: f64) -> f64 {
    if span > 0.0 {
        span * 0.05
    } else {
        1.0
    }
}
