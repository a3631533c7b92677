//! ODE traits and types
//!
//! - `OdeSystem`: the equations dy/dt = f(t, y) (WHAT to solve)
//! - `InitialValueProblem`: a system plus its initial state
//! - `TimeGrid`: the uniform time grid (HOW to discretize)
//! - `Integrator`: the numerical method
//! - `Trajectory`: the solution

use nalgebra::DVector;
use std::collections::HashMap;
use std::fmt;

use crate::error::SolverError;
use crate::grid::linspace;

// =================================================================================================
// ODE System
// =================================================================================================

/// Right-hand side of a system of ordinary differential equations
///
/// # Responsibility
///
/// Evaluates f(t, y) in dy/dt = f(t, y). Does NOT integrate it
/// (that's the `Integrator`'s job).
pub trait OdeSystem: Send + Sync {
    /// Number of components of the state vector
    fn dimension(&self) -> usize;

    /// Evaluate dy/dt at time `t` and state `y`
    fn derivative(&self, t: f64, y: &DVector<f64>) -> DVector<f64>;

    /// Initial state y(t_0)
    fn initial_state(&self) -> DVector<f64>;

    /// Component labels, used in plot legends and CSV headers
    fn component_names(&self) -> Vec<String> {
        (0..self.dimension()).map(|i| format!("y{}", i)).collect()
    }

    /// Name of the system (used to display and logging)
    fn name(&self) -> &str;
}

// =================================================================================================
// Initial Value Problem
// =================================================================================================

/// System of equations with its initial condition
///
/// The same problem can be solved on different grids or with different
/// integrators.
pub struct InitialValueProblem {
    /// Equations
    pub system: Box<dyn OdeSystem>,

    /// State at the first grid point
    pub initial_state: DVector<f64>,
}

impl InitialValueProblem {
    /// Create a problem starting from the system's own initial state
    pub fn new(system: Box<dyn OdeSystem>) -> Self {
        let initial_state = system.initial_state();
        Self { system, initial_state }
    }

    /// Create a problem with an explicit initial state
    pub fn with_initial_state(system: Box<dyn OdeSystem>, initial_state: DVector<f64>) -> Self {
        Self { system, initial_state }
    }

    /// Check that the initial state matches the system
    pub fn validate(&self) -> Result<(), SolverError> {
        let expected = self.system.dimension();
        if self.initial_state.len() != expected {
            return Err(SolverError::DimensionMismatch {
                expected,
                actual: self.initial_state.len(),
            });
        }
        if self.initial_state.iter().any(|v| !v.is_finite()) {
            return Err(SolverError::InvalidConfiguration(
                "Initial state contains NaN or Inf".to_string(),
            ));
        }
        Ok(())
    }

    /// Name of the underlying system
    pub fn name(&self) -> &str {
        self.system.name()
    }
}

impl fmt::Debug for InitialValueProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InitialValueProblem")
            .field("name", &self.name())
            .field("dimension", &self.system.dimension())
            .field("initial state", &self.initial_state.as_slice())
            .finish()
    }
}

// =================================================================================================
// Time Grid
// =================================================================================================

/// Uniform time grid, equivalent to `linspace(t_start, t_end, points)`
///
/// # Example
///
/// ```rust
/// use numlab_rs::ode::TimeGrid;
///
/// let grid = TimeGrid::new(0.0, 30.0, 500);
/// assert!((grid.dt() - 30.0 / 499.0).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    /// First time point
    pub t_start: f64,

    /// Last time point
    pub t_end: f64,

    /// Number of time points (initial point included)
    pub points: usize,
}

impl TimeGrid {
    /// Create a grid
    pub fn new(t_start: f64, t_end: f64, points: usize) -> Self {
        Self { t_start, t_end, points }
    }

    /// Grid spacing
    pub fn dt(&self) -> f64 {
        (self.t_end - self.t_start) / (self.points as f64 - 1.0)
    }

    /// Time point `i`, computed directly from the index
    pub fn time_at(&self, i: usize) -> f64 {
        if i + 1 == self.points {
            self.t_end
        } else {
            self.t_start + i as f64 * self.dt()
        }
    }

    /// All time points
    pub fn times(&self) -> Vec<f64> {
        linspace(self.t_start, self.t_end, self.points)
    }

    /// Validate grid parameters
    pub fn validate(&self) -> Result<(), SolverError> {
        if !self.t_start.is_finite() || !self.t_end.is_finite() {
            return Err(SolverError::InvalidConfiguration(
                "Time bounds must be finite".to_string(),
            ));
        }
        if self.t_end <= self.t_start {
            return Err(SolverError::InvalidConfiguration(format!(
                "End time {} must be greater than start time {}",
                self.t_end, self.t_start
            )));
        }
        if self.points < 2 {
            return Err(SolverError::InvalidConfiguration(
                "Time grid needs at least 2 points".to_string(),
            ));
        }
        Ok(())
    }
}

// =================================================================================================
// Trajectory
// =================================================================================================

/// Solution of an initial value problem on a time grid
#[derive(Debug, Clone)]
pub struct Trajectory {
    /// Time points
    pub times: Vec<f64>,

    /// State at every time point
    pub states: Vec<DVector<f64>>,

    /// Component labels
    pub component_names: Vec<String>,

    /// Solver diagnostics (solver name, dt, ...)
    pub metadata: HashMap<String, String>,
}

impl Trajectory {
    /// Create a trajectory
    pub fn new(times: Vec<f64>, states: Vec<DVector<f64>>, component_names: Vec<String>) -> Self {
        Self {
            times,
            states,
            component_names,
            metadata: HashMap::new(),
        }
    }

    /// Number of stored time points
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Check emptiness
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Last state, if any
    pub fn final_state(&self) -> Option<&DVector<f64>> {
        self.states.last()
    }

    /// Time series of component `index`
    pub fn component(&self, index: usize) -> Option<Vec<f64>> {
        if index >= self.component_names.len() {
            return None;
        }
        self.states.iter().map(|state| state.get(index).copied()).collect()
    }

    /// Time series of the component labelled `name`
    pub fn component_by_name(&self, name: &str) -> Option<Vec<f64>> {
        let index = self.component_names.iter().position(|n| n == name)?;
        self.component(index)
    }

    /// Record a diagnostic value
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }
}

// =================================================================================================
// Integrator
// =================================================================================================

/// Numerical time integrator
pub trait Integrator {
    /// Integrate `problem` over `grid`
    fn solve(&self, problem: &InitialValueProblem, grid: &TimeGrid)
        -> Result<Trajectory, SolverError>;

    /// Name of the method
    fn name(&self) -> &str;
}
