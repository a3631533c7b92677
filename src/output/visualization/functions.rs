//! Plots of elementary functions
//!
//! - [`plot_linear`]    - y = ax + b
//! - [`plot_quadratic`] - y = ax² + bx + c
//!
//! Both sample the function on a [`SampleRange`] and draw a single labelled
//! curve with a grid.

use super::config::PlotConfig;
use super::{Series, SeriesStyle, axis_range, bounds, check_series, draw_chart};
use crate::error::OutputError;
use crate::functions::{linear, quadratic};
use crate::grid::SampleRange;

/// Plot the straight line y = ax + b
///
/// Legend: `y = {a}x + {b}`; default title "Linear Function Plot".
///
/// # Arguments
///
/// * `a`, `b`       - Slope and intercept
/// * `range`        - Sampling interval ([`SampleRange::linear_default`] is `[0, 10]`, 100 points)
/// * `output_path`  - Output file path (`.png` → bitmap, `.svg` → vector)
/// * `config`       - Optional plot configuration; `None` uses defaults
///
/// # Errors
///
/// Empty range, non-finite values, or a backend failure.
///
/// # Example
///
/// ```rust,no_run
/// use numlab_rs::grid::SampleRange;
/// use numlab_rs::output::visualization::plot_linear;
///
/// plot_linear(2.0, 3.0, SampleRange::linear_default(), "linear.svg", None)?;
/// # Ok::<(), numlab_rs::error::OutputError>(())
/// ```
pub fn plot_linear(
    a: f64,
    b: f64,
    range: SampleRange,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), OutputError> {
    let default_config = PlotConfig::function("Linear Function Plot");
    let config = config.unwrap_or(&default_config);

    plot_function(
        linear(a, b),
        format!("y = {}x + {}", a, b),
        range,
        output_path,
        config,
    )
}

/// Plot the parabola y = ax² + bx + c
///
/// Legend: `y = {a}x^2 + {b}x + {c}`; default title "Quadratic Function Plot".
/// [`SampleRange::quadratic_default`] samples `[-10, 10]` with 100 points.
pub fn plot_quadratic(
    a: f64,
    b: f64,
    c: f64,
    range: SampleRange,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), OutputError> {
    let default_config = PlotConfig::function("Quadratic Function Plot");
    let config = config.unwrap_or(&default_config);

    plot_function(
        quadratic(a, b, c),
        format!("y = {}x^2 + {}x + {}", a, b, c),
        range,
        output_path,
        config,
    )
}

fn plot_function<F>(
    func: F,
    label: String,
    range: SampleRange,
    output_path: &str,
    config: &PlotConfig,
) -> Result<(), OutputError>
where
    F: Fn(f64) -> f64,
{
    let x = range.values();
    let y: Vec<f64> = x.iter().map(|&v| func(v)).collect();

    check_series("function samples", &x)?;
    check_series("function values", &y)?;

    // check_series guarantees both are non-empty
    let (x_min, x_max) = bounds(x.iter().copied()).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = bounds(y.iter().copied()).unwrap_or((0.0, 1.0));

    let curve = Series::new(
        x.into_iter().zip(y).collect(),
        config.line_color,
        SeriesStyle::Solid,
    )
    .labelled(label);

    draw_chart(
        output_path,
        &[curve],
        axis_range(x_min, x_max, 0.0),
        axis_range(y_min, y_max, 0.05),
        config,
    )
}

// =================================================================================================
// Tests
// =================================================================================================
