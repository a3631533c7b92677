//! Ordinary differential equations
//!
//! The ODE layer separates three concerns:
//!
//! 1. **System** (`OdeSystem`) - WHAT to solve: dy/dt = f(t, y)
//! 2. **Grid** (`TimeGrid`) - WHERE to solve it: uniform time points
//! 3. **Integrator** (`Integrator` trait) - HOW to solve it
//!
//! ```text
//! ┌───────────────┐     ┌──────────────────────┐
//! │  OdeSystem    │────▶│ InitialValueProblem  │
//! └───────────────┘     └──────────┬───────────┘
//!                                  │      ┌──────────┐
//!                                  ├──────│ TimeGrid │
//!                                  │      └──────────┘
//!                       ┌──────────▼───────────┐
//!                       │ Integrator (Euler)   │
//!                       └──────────┬───────────┘
//!                       ┌──────────▼───────────┐
//!                       │ Trajectory           │
//!                       └──────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use numlab_rs::models::SemiBatchReactor;
//! use numlab_rs::ode::{EulerIntegrator, InitialValueProblem, Integrator, TimeGrid};
//!
//! # fn main() -> Result<(), numlab_rs::error::SolverError> {
//! let problem = InitialValueProblem::new(Box::new(SemiBatchReactor::default()));
//! let grid = TimeGrid::new(0.0, 30.0, 500);
//!
//! let trajectory = EulerIntegrator::new().solve(&problem, &grid)?;
//! let c_b = trajectory.component_by_name("cB").unwrap();
//! assert!(c_b.last().unwrap() > &0.0);
//! # Ok(())
//! # }
//! ```

mod euler;
mod traits;

pub use euler::{EulerIntegrator, forward_euler_step};
pub use traits::{InitialValueProblem, Integrator, OdeSystem, TimeGrid, Trajectory};

use nalgebra::DVector;

use crate::error::SolverError;

/// Check a state for NaN or Inf
///
/// NaN usually comes from 0/0 or Inf - Inf in the right-hand side, Inf from
/// overflow or a division by zero. Both mean the grid is too coarse or the
/// system is ill-posed, so integration stops at the first occurrence.
pub(crate) fn validate_state(
    state: &DVector<f64>,
    component_names: &[String],
    step: usize,
) -> Result<(), SolverError> {
    for (index, value) in state.iter().enumerate() {
        let kind = if value.is_nan() {
            "NaN"
        } else if value.is_infinite() {
            "Infinity"
        } else {
            continue;
        };

        let component = component_names
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("component {}", index));

        return Err(SolverError::NumericalInstability { kind, component, step });
    }

    Ok(())
}
