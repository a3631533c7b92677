//! Static plots of functions, interpolants and ODE trajectories
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **functions**: Straight lines and parabolas
//! - **interpolation**: Interpolant vs true function, spline plots
//! - **trajectory**: One curve per ODE component against time
//!
//! The backend follows the file extension: `.svg` writes an SVG document,
//! anything else a PNG bitmap.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use numlab_rs::grid::SampleRange;
//! use numlab_rs::output::visualization::plot_linear;
//!
//! plot_linear(2.0, 1.0, SampleRange::linear_default(), "linear.png", None)?;
//! # Ok::<(), numlab_rs::error::OutputError>(())
//! ```
//!
//! # When to Use Which Function
//!
//! | Use Case | Function |
//! |----------|----------|
//! | y = ax + b | `plot_linear` |
//! | y = ax² + bx + c | `plot_quadratic` |
//! | Polynomial interpolant against its source function | `plot_interpolation` |
//! | Spline with its knots | `plot_splines` |
//! | ODE solution over time | `plot_trajectory` |

pub mod config;
pub mod functions;
pub mod interpolation;
pub mod trajectory;

pub use config::{IntoOptionalTitle, NO_TITLE, PlotConfig};
pub use functions::{plot_linear, plot_quadratic};
pub use interpolation::{plot_interpolation, plot_splines};
pub use trajectory::plot_trajectory;

use std::ops::Range;
use std::path::Path;

use plotters::prelude::*;

use crate::error::OutputError;

// =================================================================================================
// Series description
// =================================================================================================

/// How a series is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SeriesStyle {
    Solid,
    Dashed,
    Markers,
}

/// One curve or point cloud of a chart
#[derive(Debug, Clone)]
pub(crate) struct Series {
    pub label: Option<String>,
    pub points: Vec<(f64, f64)>,
    pub color: RGBColor,
    pub style: SeriesStyle,
}

impl Series {
    pub fn new(points: Vec<(f64, f64)>, color: RGBColor, style: SeriesStyle) -> Self {
        Self {
            label: None,
            points,
            color,
            style,
        }
    }

    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Number of sub-pieces each sample interval is cut into for dashed curves
const DASH_PIECES: usize = 4;

/// Marker radius in pixels
const MARKER_SIZE: u32 = 4;

// =================================================================================================
// Helpers
// =================================================================================================

/// Split a polyline into the visible pieces of a dashed line
///
/// Each interval between consecutive points is cut into `pieces` equal parts
/// and every other part is kept, starting with the first.
pub(crate) fn dash_segments(points: &[(f64, f64)], pieces: usize) -> Vec<Vec<(f64, f64)>> {
    let pieces = pieces.max(1);
    let lerp = |(x0, y0): (f64, f64), (x1, y1): (f64, f64), s: f64| {
        (x0 + s * (x1 - x0), y0 + s * (y1 - y0))
    };

    points
        .windows(2)
        .flat_map(|w| {
            let (p, q) = (w[0], w[1]);
            (0..pieces).step_by(2).map(move |k| {
                let s0 = k as f64 / pieces as f64;
                let s1 = (k + 1) as f64 / pieces as f64;
                vec![lerp(p, q, s0), lerp(p, q, s1)]
            })
        })
        .collect()
}

/// Smallest and largest value, `None` for empty input
pub(crate) fn bounds(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// `[lo, hi]` widened to a non-empty range, with `margin` (fraction of the
/// span) added on both sides
pub(crate) fn axis_range(lo: f64, hi: f64, margin: f64) -> Range<f64> {
    let span = hi - lo;
    if span.abs() < 1e-12 {
        let half = if lo.abs() > 1e-12 { lo.abs() * 0.5 } else { 1.0 };
        return (lo - half)..(hi + half);
    }
    (lo - margin * span)..(hi + margin * span)
}

/// Reject empty or non-finite series before drawing
pub(crate) fn check_series(what: &str, values: &[f64]) -> Result<(), OutputError> {
    if values.is_empty() {
        return Err(OutputError::EmptyData(format!("{} must not be empty", what)));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(OutputError::NonFinite(what.to_string()));
    }
    Ok(())
}

// =================================================================================================
// Rendering
// =================================================================================================

/// Draw `series` into `output_path`, backend chosen from the extension
pub(crate) fn draw_chart(
    output_path: &str,
    series: &[Series],
    x_range: Range<f64>,
    y_range: Range<f64>,
    config: &PlotConfig,
) -> Result<(), OutputError> {
    let ext = Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    log::debug!(
        "Plotting '{}' ({} series) to {}",
        config.title,
        series.len(),
        output_path
    );

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            draw_chart_impl(backend, series, x_range, y_range, config)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            draw_chart_impl(backend, series, x_range, y_range, config)
        }
    }
}

fn draw_chart_impl<DB: DrawingBackend>(
    backend: DB,
    series: &[Series],
    x_range: Range<f64>,
    y_range: Range<f64>,
    config: &PlotConfig,
) -> Result<(), OutputError>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 30).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(config.xlabel.as_str())
            .y_desc(config.ylabel.as_str())
            .y_label_formatter(&|y: &f64| format!("{:.2}", y))
            .draw()?;
    } else {
        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc(config.xlabel.as_str())
            .y_desc(config.ylabel.as_str())
            .y_label_formatter(&|y: &f64| format!("{:.2}", y))
            .draw()?;
    }

    for s in series {
        let color = s.color;
        let line = ShapeStyle::from(&color).stroke_width(config.line_width);

        let anno = match s.style {
            SeriesStyle::Solid => {
                chart.draw_series(LineSeries::new(s.points.iter().copied(), line))?
            }
            SeriesStyle::Dashed => chart.draw_series(
                dash_segments(&s.points, DASH_PIECES)
                    .into_iter()
                    .map(move |segment| PathElement::new(segment, line)),
            )?,
            SeriesStyle::Markers => chart.draw_series(
                s.points
                    .iter()
                    .map(move |&p| Circle::new(p, MARKER_SIZE, color.filled())),
            )?,
        };

        if let Some(label) = &s.label {
            match s.style {
                SeriesStyle::Markers => anno.label(label.as_str()).legend(move |(x, y)| {
                    Circle::new((x + 10, y), MARKER_SIZE, color.filled())
                }),
                _ => anno
                    .label(label.as_str())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color)),
            };
        }
    }

    if series.iter().any(|s| s.label.is_some()) {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&config.background.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
