//! Interpolation plots
//!
//! - [`plot_interpolation`] - dashed interpolant over the true function, with
//!   the support points as red markers
//! - [`plot_splines`]       - spline through given knots, with the true
//!   function for reference

use plotters::prelude::*;

use super::config::{NO_TITLE, PlotConfig};
use super::{Series, SeriesStyle, axis_range, bounds, check_series, draw_chart};
use crate::error::OutputError;
use crate::interpolation::Interpolant;

/// Scale applied to the true-function extremes for the y-axis of
/// [`plot_interpolation`]
const Y_LIMIT_SCALE: f64 = 2.8;

/// Y-axis of an interpolation plot: `[2.8·min, 2.8·max]` of the true values
///
/// The range is widened to contain the data itself (for positive minima or
/// negative maxima) and to a unit interval when all values coincide.
pub(crate) fn interpolation_y_range(true_values: &[f64]) -> std::ops::Range<f64> {
    let (lo, hi) = bounds(true_values.iter().copied()).unwrap_or((0.0, 0.0));
    let bottom = (Y_LIMIT_SCALE * lo).min(lo);
    let top = (Y_LIMIT_SCALE * hi).max(hi);
    axis_range(bottom, top, 0.0)
}

/// Plot an interpolant against the function it approximates
///
/// Draws the interpolant dashed with legend `"{title}, degree: {d}"`, the true
/// function solid with legend "True function", and the support points
/// `(x_i, func(x_i))` as red markers.
///
/// # Arguments
///
/// * `func`         - True function
/// * `interpolant`  - Any [`Interpolant`]
/// * `samples`      - Abscissae at which both curves are evaluated
/// * `output_path`  - Output file path (`.png` or `.svg`)
/// * `config`       - Optional plot configuration; its title is also the legend prefix
///
/// # Errors
///
/// Empty samples, an interpolant that cannot be evaluated at some sample,
/// non-finite values, or a backend failure.
///
/// # Example
///
/// ```rust,no_run
/// use numlab_rs::functions::logarithm_natural;
/// use numlab_rs::grid::linspace;
/// use numlab_rs::interpolation::NewtonPolynomial;
/// use numlab_rs::output::visualization::{plot_interpolation, PlotConfig};
///
/// let x = [1.0, 4.0, 5.0, 6.0];
/// let y: Vec<f64> = x.iter().map(|&v| logarithm_natural(v)).collect();
/// let newton = NewtonPolynomial::new(&x, &y)?;
///
/// let config = PlotConfig::interpolation("Newton's divided-difference interpolation");
/// plot_interpolation(logarithm_natural, &newton, &linspace(0.5, 8.0, 30), "newton_ln.png", Some(&config))?;
/// # Ok::<(), numlab_rs::error::Error>(())
/// ```
pub fn plot_interpolation<F>(
    func: F,
    interpolant: &dyn Interpolant,
    samples: &[f64],
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), OutputError>
where
    F: Fn(f64) -> f64,
{
    check_series("samples", samples)?;

    let default_config = PlotConfig::interpolation(interpolant.name().to_string());
    let config = config.unwrap_or(&default_config);

    let interpolated = interpolant.evaluate_many(samples)?;
    let true_values: Vec<f64> = samples.iter().map(|&x| func(x)).collect();

    check_series("interpolated values", &interpolated)?;
    check_series("true function values", &true_values)?;

    let support: Vec<(f64, f64)> = interpolant
        .support()
        .iter()
        .map(|&x| (x, func(x)))
        .collect();

    let (x_min, x_max) = bounds(samples.iter().copied()).unwrap_or((0.0, 1.0));
    let y_range = interpolation_y_range(&true_values);

    let series = [
        Series::new(
            samples.iter().copied().zip(interpolated).collect(),
            config.get_series_color(0),
            SeriesStyle::Dashed,
        )
        .labelled(format!("{}, degree: {}", config.title, interpolant.degree())),
        Series::new(
            samples.iter().copied().zip(true_values).collect(),
            config.get_series_color(1),
            SeriesStyle::Solid,
        )
        .labelled("True function"),
        Series::new(support, RED, SeriesStyle::Markers),
    ];

    draw_chart(
        output_path,
        &series,
        axis_range(x_min, x_max, 0.0),
        y_range,
        config,
    )
}

/// Plot a spline through known points together with the true function
///
/// Red markers "Known points", dashed "Spline (k={k})", solid "True function";
/// default title "Spline Interpolation".
///
/// `x_points`/`y_points` are drawn as given, so perturbed knots (values that
/// differ from `func`) show up off the true curve.
///
/// # Errors
///
/// Mismatched or empty inputs, a spline that cannot be evaluated at some
/// sample (e.g. a linear spline outside its support), or a backend failure.
#[allow(clippy::too_many_arguments)]
pub fn plot_splines<F>(
    x_points: &[f64],
    y_points: &[f64],
    spline: &dyn Interpolant,
    k: usize,
    samples: &[f64],
    func: F,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), OutputError>
where
    F: Fn(f64) -> f64,
{
    check_series("known x-values", x_points)?;
    check_series("known y-values", y_points)?;
    check_series("samples", samples)?;

    if x_points.len() != y_points.len() {
        return Err(OutputError::LengthMismatch(format!(
            "{} known x-values versus {} y-values",
            x_points.len(),
            y_points.len()
        )));
    }

    let default_config = PlotConfig::spline(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let spline_values = spline.evaluate_many(samples)?;
    let true_values: Vec<f64> = samples.iter().map(|&x| func(x)).collect();

    check_series("spline values", &spline_values)?;
    check_series("true function values", &true_values)?;

    let all_x = samples.iter().chain(x_points.iter()).copied();
    let all_y = spline_values
        .iter()
        .chain(true_values.iter())
        .chain(y_points.iter())
        .copied();
    let (x_min, x_max) = bounds(all_x).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = bounds(all_y).unwrap_or((0.0, 1.0));

    let series = [
        Series::new(
            x_points.iter().copied().zip(y_points.iter().copied()).collect(),
            RED,
            SeriesStyle::Markers,
        )
        .labelled("Known points"),
        Series::new(
            samples.iter().copied().zip(spline_values).collect(),
            config.get_series_color(0),
            SeriesStyle::Dashed,
        )
        .labelled(format!("Spline (k={})", k)),
        Series::new(
            samples.iter().copied().zip(true_values).collect(),
            config.get_series_color(1),
            SeriesStyle::Solid,
        )
        .labelled("True function"),
    ];

    draw_chart(
        output_path,
        &series,
        axis_range(x_min, x_max, 0.02),
        axis_range(y_min, y_max, 0.1),
        config,
    )
}

// =================================================================================================
// Tests
// =================================================================================================
