//! numlab-rs: Numerical Methods Toolkit
//!
//! Small, self-contained implementations of the classic numerical methods met
//! in a first course: explicit time integration, polynomial interpolation and
//! splines, together with the plotting and CSV export used to look at the
//! results.
//!
//! # Architecture
//!
//! numlab-rs keeps the same split throughout:
//!
//! 1. **Problems and methods are separate**
//!    - An [`OdeSystem`](ode::OdeSystem) gives the right-hand side, an
//!      [`Integrator`](ode::Integrator) advances it
//!    - Every interpolation scheme implements [`Interpolant`](interpolation::Interpolant)
//!
//! 2. **Errors are values**
//!    - Invalid input is reported through the enums in [`error`], never by
//!      panicking
//!
//! # Quick Start
//!
//! ```rust
//! use numlab_rs::prelude::*;
//!
//! # fn main() -> Result<(), numlab_rs::error::Error> {
//! // 1. Reactor start-up with forward Euler
//! let problem = InitialValueProblem::new(Box::new(SemiBatchReactor::default()));
//! let trajectory = EulerIntegrator.solve(&problem, &TimeGrid::new(0.0, 30.0, 500))?;
//! let c_b = trajectory.final_state().map(|s| s[1]).unwrap_or_default();
//! assert!(c_b > 0.0);
//!
//! // 2. Cubic through four samples of ln
//! let x = [1.0, 4.0, 5.0, 6.0];
//! let y: Vec<f64> = x.iter().map(|&v| logarithm_natural(v)).collect();
//! let newton = NewtonPolynomial::new(&x, &y)?;
//! println!("P(4.5) = {:.5}", newton.evaluate(4.5)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`grid`]: `linspace` and sample ranges
//! - [`math_utils`]: Pythagoras and checked factorial
//! - [`functions`]: Reference functions (ln, sin, sign, lines, parabolas)
//! - [`ode`]: Initial value problems and the forward Euler integrator
//! - [`models`]: Concrete ODE systems
//! - [`interpolation`]: Newton, Lagrange, linear and cubic splines
//! - [`output`]: Plots (plotters) and CSV export
//!
//! # Features
//!
//! - `parallel` (default): batch interpolant evaluation with Rayon above
//!   [`interpolation::parallel_threshold`]

pub mod error;
pub mod functions;
pub mod grid;
pub mod math_utils;

pub mod interpolation;
pub mod models;
pub mod ode;
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use numlab_rs::prelude::*;
    //! ```
    pub use crate::error::{Error, InterpolationError, OutputError, SolverError};
    pub use crate::functions::{logarithm_natural, sign_fcn, sinus};
    pub use crate::grid::{SampleRange, linspace};
    pub use crate::interpolation::{
        CubicSpline, Interpolant, LagrangePolynomial, LinearSpline, NewtonPolynomial,
        SplineBoundary, make_interp_spline,
    };
    pub use crate::models::{ReactorParameters, SemiBatchReactor};
    pub use crate::ode::{
        EulerIntegrator, InitialValueProblem, Integrator, OdeSystem, TimeGrid, Trajectory,
    };
}
