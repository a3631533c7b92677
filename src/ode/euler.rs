//! Forward Euler integrator
//!
//! # Mathematical Background
//!
//! For an ODE system
//!
//! ```text
//! dy/dt = f(t, y)
//! ```
//!
//! the Forward Euler method advances the solution from t_i to t_{i+1} = t_i + dt with
//!
//! ```text
//! y_{i+1} = y_i + dt * f(t_i, y_i)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: First-order accurate (global error ~ O(dt))
//! - **Stability**: Conditionally stable, |1 + λ dt| ≤ 1 for dy/dt = λy
//! - **Cost**: 1 function evaluation per step

use nalgebra::DVector;

use crate::error::SolverError;
use crate::ode::{self, InitialValueProblem, Integrator, TimeGrid, Trajectory};

/// Single Forward Euler step: `y_i + dt * f(t_i, y_i)`
///
/// # Example
///
/// ```rust
/// use nalgebra::DVector;
/// use numlab_rs::ode::forward_euler_step;
///
/// let y = DVector::from_vec(vec![1.0]);
/// let next = forward_euler_step(|_t, y: &DVector<f64>| -y, &y, 0.0, 0.1);
/// assert!((next[0] - 0.9).abs() < 1e-15);
/// ```
pub fn forward_euler_step<F>(f: F, y: &DVector<f64>, t: f64, dt: f64) -> DVector<f64>
where
    F: Fn(f64, &DVector<f64>) -> DVector<f64>,
{
    y + f(t, y) * dt
}

// =================================================================================================
// Forward Euler Integrator
// =================================================================================================

/// Forward Euler time integrator
///
/// # Algorithm
///
/// 1. Start with the problem's initial state y_0 at `grid.t_start`
/// 2. For each grid point i = 1, ..., N-1:
///    - y_i = y_{i-1} + dt * f(t_{i-1}, y_{i-1})
///    - check y_i for NaN/Inf
/// 3. Return the trajectory (N states, one per grid point)
///
/// # Example
///
/// ```rust
/// use numlab_rs::models::SemiBatchReactor;
/// use numlab_rs::ode::{EulerIntegrator, InitialValueProblem, Integrator, TimeGrid};
///
/// let problem = InitialValueProblem::new(Box::new(SemiBatchReactor::default()));
/// let trajectory = EulerIntegrator::new()
///     .solve(&problem, &TimeGrid::new(0.0, 30.0, 500))
///     .unwrap();
/// assert_eq!(trajectory.len(), 500);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerIntegrator;

impl EulerIntegrator {
    /// Create a new Forward Euler integrator
    pub fn new() -> Self {
        Self
    }
}

impl Integrator for EulerIntegrator {
    fn solve(
        &self,
        problem: &InitialValueProblem,
        grid: &TimeGrid,
    ) -> Result<Trajectory, SolverError> {
        // ====== Validation ======

        grid.validate()?;
        problem.validate()?;

        // ====== Setup ======

        let dt = grid.dt();
        let component_names = problem.system.component_names();

        log::debug!(
            "Forward Euler on '{}': {} points, dt = {}",
            problem.name(),
            grid.points,
            dt
        );

        let mut times = Vec::with_capacity(grid.points);
        let mut states = Vec::with_capacity(grid.points);

        let mut state = problem.initial_state.clone();
        times.push(grid.time_at(0));
        states.push(state.clone());

        // ====== Time Integration ======

        for step in 1..grid.points {
            // The derivative is evaluated at the previous grid point
            let t_previous = grid.time_at(step - 1);
            let derivative = problem.system.derivative(t_previous, &state);

            if derivative.len() != state.len() {
                return Err(SolverError::DimensionMismatch {
                    expected: state.len(),
                    actual: derivative.len(),
                });
            }

            // y_i = y_{i-1} + dt * f(t_{i-1}, y_{i-1})
            state.axpy(dt, &derivative, 1.0);

            ode::validate_state(&state, &component_names, step)?;

            times.push(grid.time_at(step));
            states.push(state.clone());
        }

        // ====== Result ======

        let mut trajectory = Trajectory::new(times, states, component_names);
        trajectory.add_metadata("solver", self.name());
        trajectory.add_metadata("points", &grid.points.to_string());
        trajectory.add_metadata("dt", &dt.to_string());
        trajectory.add_metadata("t_start", &grid.t_start.to_string());
        trajectory.add_metadata("t_end", &grid.t_end.to_string());

        Ok(trajectory)
    }

    fn name(&self) -> &str {
        "Forward Euler"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ode::OdeSystem;

    /// dy/dt = -k * y, exact solution y_0 * exp(-k t)
    struct ExponentialDecay {
        decay_rate: f64,
    }

    impl OdeSystem for ExponentialDecay {
        fn dimension(&self) -> usize {
            1
        }

        fn derivative(&self, _t: f64, y: &DVector<f64>) -> DVector<f64> {
            y * -self.decay_rate
        }

        fn initial_state(&self) -> DVector<f64> {
            DVector::from_vec(vec![1.0])
        }

        fn name(&self) -> &str {
            "Exponential Decay"
        }
    }

    /// dy/dt = t, exact solution y_0 + t² / 2
    struct TimeRamp;

    impl OdeSystem for TimeRamp {
        fn dimension(&self) -> usize {
            1
        }

        fn derivative(&self, t: f64, _y: &DVector<f64>) -> DVector<f64> {
            DVector::from_vec(vec![t])
        }

        fn initial_state(&self) -> DVector<f64> {
            DVector::zeros(1)
        }

        fn name(&self) -> &str {
            "Time Ramp"
        }
    }

    /// Blows up on the first step
    struct NaNSystem;

    impl OdeSystem for NaNSystem {
        fn dimension(&self) -> usize {
            2
        }

        fn derivative(&self, _t: f64, _y: &DVector<f64>) -> DVector<f64> {
            DVector::from_vec(vec![0.0, f64::NAN])
        }

        fn initial_state(&self) -> DVector<f64> {
            DVector::zeros(2)
        }

        fn component_names(&self) -> Vec<String> {
            vec!["left".to_string(), "right".to_string()]
        }

        fn name(&self) -> &str {
            "NaN System"
        }
    }

    struct InfSystem;

    impl OdeSystem for InfSystem {
        fn dimension(&self) -> usize {
            1
        }

        fn derivative(&self, _t: f64, _y: &DVector<f64>) -> DVector<f64> {
            DVector::from_vec(vec![f64::INFINITY])
        }

        fn initial_state(&self) -> DVector<f64> {
            DVector::zeros(1)
        }

        fn name(&self) -> &str {
            "Inf System"
        }
    }

    /// Declares two components but returns a single derivative
    struct ShortDerivative;

    impl OdeSystem for ShortDerivative {
        fn dimension(&self) -> usize {
            2
        }

        fn derivative(&self, _t: f64, _y: &DVector<f64>) -> DVector<f64> {
            DVector::from_vec(vec![1.0])
        }

        fn initial_state(&self) -> DVector<f64> {
            DVector::zeros(2)
        }

        fn name(&self) -> &str {
            "Short Derivative"
        }
    }

    #[test]
    fn test_single_step() {
        let y = DVector::from_vec(vec![1.0, 0.0]);
        let next = forward_euler_step(
            |_t, y: &DVector<f64>| DVector::from_vec(vec![-y[0], y[0]]),
            &y,
            0.0,
            0.5,
        );
        assert_eq!(next.as_slice(), &[0.5, 0.5]);
    }

    #[test]
    fn test_trajectory_length_matches_grid() {
        let problem = InitialValueProblem::new(Box::new(ExponentialDecay { decay_rate: 0.1 }));
        let grid = TimeGrid::new(0.0, 10.0, 101);
        let trajectory = EulerIntegrator::new().solve(&problem, &grid).unwrap();

        assert_eq!(trajectory.times.len(), 101);
        assert_eq!(trajectory.states.len(), 101);
        assert_eq!(trajectory.times[0], 0.0);
        assert_eq!(*trajectory.times.last().unwrap(), 10.0);
    }

    #[test]
    fn test_uses_time_of_previous_point() {
        // y_N = dt * Σ_{i<N} t_i = dt² * N(N-1)/2 for dy/dt = t
        let problem = InitialValueProblem::new(Box::new(TimeRamp));
        let grid = TimeGrid::new(0.0, 1.0, 11);
        let trajectory = EulerIntegrator::new().solve(&problem, &grid).unwrap();

        let expected = 0.1 * 0.1 * 10.0 * 9.0 / 2.0;
        let actual = trajectory.final_state().unwrap()[0];
        assert!((actual - expected).abs() < 1e-12, "{} vs {}", actual, expected);
    }

    #[test]
    fn test_exponential_decay_accuracy() {
        let decay_rate = 0.1;
        let problem = InitialValueProblem::new(Box::new(ExponentialDecay { decay_rate }));
        let grid = TimeGrid::new(0.0, 10.0, 1001);
        let trajectory = EulerIntegrator::new().solve(&problem, &grid).unwrap();

        let exact = (-decay_rate * 10.0).exp();
        let error = (trajectory.final_state().unwrap()[0] - exact).abs();
        assert!(error < 0.01, "Error {} too large for dt=0.01", error);
    }

    #[test]
    fn test_metadata() {
        let problem = InitialValueProblem::new(Box::new(ExponentialDecay { decay_rate: 1.0 }));
        let grid = TimeGrid::new(0.0, 100.0, 501);
        let trajectory = EulerIntegrator::new().solve(&problem, &grid).unwrap();

        assert_eq!(trajectory.metadata.get("solver"), Some(&"Forward Euler".to_string()));
        assert_eq!(trajectory.metadata.get("points"), Some(&"501".to_string()));

        let dt: f64 = trajectory.metadata.get("dt").unwrap().parse().unwrap();
        assert!((dt - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_detects_nan() {
        let problem = InitialValueProblem::new(Box::new(NaNSystem));
        let result = EulerIntegrator::new().solve(&problem, &TimeGrid::new(0.0, 1.0, 10));

        assert_eq!(
            result.unwrap_err(),
            SolverError::NumericalInstability {
                kind: "NaN",
                component: "right".to_string(),
                step: 1,
            }
        );
    }

    #[test]
    fn test_detects_inf() {
        let problem = InitialValueProblem::new(Box::new(InfSystem));
        let result = EulerIntegrator::new().solve(&problem, &TimeGrid::new(0.0, 1.0, 10));

        let error = result.unwrap_err();
        assert!(error.to_string().contains("Infinity"));
    }

    #[test]
    fn test_rejects_invalid_grid() {
        let problem = InitialValueProblem::new(Box::new(TimeRamp));
        let result = EulerIntegrator::new().solve(&problem, &TimeGrid::new(0.0, 1.0, 1));
        assert!(matches!(result, Err(SolverError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_two_point_grid_is_one_step() {
        let problem = InitialValueProblem::new(Box::new(ExponentialDecay { decay_rate: 0.5 }));
        let trajectory = EulerIntegrator::new()
            .solve(&problem, &TimeGrid::new(0.0, 1.0, 2))
            .unwrap();

        assert_eq!(trajectory.len(), 2);
        assert!((trajectory.final_state().unwrap()[0] - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_derivative_of_wrong_length() {
        let problem = InitialValueProblem::new(Box::new(ShortDerivative));
        let result = EulerIntegrator::new().solve(&problem, &TimeGrid::new(0.0, 1.0, 3));

        assert_eq!(
            result.unwrap_err(),
            SolverError::DimensionMismatch {
                expected: 2,
                actual: 1,
            }
        );
    }
}
