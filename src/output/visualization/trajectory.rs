//! Trajectory plots for ODE solutions
//!
//! One curve per state component against time, labelled with the component
//! names recorded in the [`Trajectory`].

use super::config::{NO_TITLE, PlotConfig};
use super::{Series, SeriesStyle, axis_range, bounds, draw_chart};
use crate::error::OutputError;
use crate::ode::Trajectory;

/// Plot every component of `trajectory` against time
///
/// Colours follow `config.series_colors` or the default palette. Default
/// configuration: [`PlotConfig::trajectory`] ("The Forward Euler method",
/// "time /s", "concentration [mol/L]").
///
/// # Errors
///
/// Empty trajectory, NaN or Inf in the states, or a backend failure.
///
/// # Example
///
/// ```rust,no_run
/// use numlab_rs::models::SemiBatchReactor;
/// use numlab_rs::ode::{EulerIntegrator, InitialValueProblem, Integrator, TimeGrid};
/// use numlab_rs::output::visualization::plot_trajectory;
///
/// let problem = InitialValueProblem::new(Box::new(SemiBatchReactor::default()));
/// let trajectory = EulerIntegrator.solve(&problem, &TimeGrid::new(0.0, 30.0, 500))?;
///
/// plot_trajectory(&trajectory, "reactor.png", None)?;
/// # Ok::<(), numlab_rs::error::Error>(())
/// ```
pub fn plot_trajectory(
    trajectory: &Trajectory,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), OutputError> {
    if trajectory.is_empty() {
        return Err(OutputError::EmptyData("trajectory has no time points".to_string()));
    }

    let default_config = PlotConfig::trajectory(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let dimension = trajectory.component_names.len();
    let mut series = Vec::with_capacity(dimension);

    for (k, name) in trajectory.component_names.iter().enumerate() {
        let values = trajectory
            .component(k)
            .ok_or_else(|| OutputError::LengthMismatch(format!("component {} missing", name)))?;

        if values.iter().any(|v| !v.is_finite()) {
            return Err(OutputError::NonFinite(format!("component {}", name)));
        }

        series.push(
            Series::new(
                trajectory.times.iter().copied().zip(values).collect(),
                config.get_series_color(k),
                SeriesStyle::Solid,
            )
            .labelled(name.as_str()),
        );
    }

    let (t_min, t_max) = bounds(trajectory.times.iter().copied()).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = bounds(
        series
            .iter()
            .flat_map(|s| s.points.iter().map(|&(_, y)| y)),
    )
    .unwrap_or((0.0, 1.0));

    draw_chart(
        output_path,
        &series,
        axis_range(t_min, t_max, 0.0),
        axis_range(y_min, y_max, 0.05),
        config,
    )
}

// =================================================================================================
// Tests
// =================================================================================================
