//! Error types
//!
//! Each concern of the crate has its own error enum so that callers can match
//! on what actually went wrong. [`Error`] wraps all of them for code that only
//! wants to propagate with `?`.

use thiserror::Error;

/// Errors raised while building or evaluating an interpolant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpolationError {
    /// Fewer support points than the method needs.
    #[error("Not enough support points: need at least {required}, got {actual}")]
    NotEnoughPoints {
        /// Minimum number of points
        required: usize,
        /// Number of points provided
        actual: usize,
    },

    /// x and y (or coefficient) slices differ in length.
    #[error("Length mismatch: {x_len} x-values versus {y_len} y-values")]
    LengthMismatch {
        /// Number of x-values
        x_len: usize,
        /// Number of y-values
        y_len: usize,
    },

    /// Two support abscissae coincide.
    #[error("Duplicate support point x = {value} at indices {first} and {second}")]
    DuplicateNodes {
        /// Repeated abscissa
        value: f64,
        /// First index
        first: usize,
        /// Second index
        second: usize,
    },

    /// Spline support points are not strictly increasing.
    #[error("Support points must be strictly increasing: x[{index}] = {value} does not exceed its predecessor")]
    NotSorted {
        /// Offending index
        index: usize,
        /// Offending value
        value: f64,
    },

    /// NaN or infinity in the input data.
    #[error("Invalid data: NaN or Inf detected in {what}")]
    NonFinite {
        /// Which input carried the value
        what: &'static str,
    },

    /// Evaluation point outside the support interval.
    #[error("Point {x} is outside the interpolation range [{min}, {max}]")]
    OutOfRange {
        /// Requested point
        x: f64,
        /// Lower end of the support
        min: f64,
        /// Upper end of the support
        max: f64,
    },

    /// Spline degree with no implementation.
    #[error("Unsupported spline degree k = {0} (supported: 1, 3)")]
    UnsupportedDegree(usize),

    /// The spline moment system could not be factorised.
    #[error("Singular spline system: {0}")]
    SingularSystem(String),
}

/// Errors raised by ODE integrators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// Time grid or problem parameters are not usable.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Initial state or derivative does not have the system's dimension.
    #[error("Dimension mismatch: expected {expected} components, got {actual}")]
    DimensionMismatch {
        /// System dimension
        expected: usize,
        /// Length of the offending vector
        actual: usize,
    },

    /// NaN or infinity appeared during integration.
    #[error("{kind} detected in {component} at step {step}. Try refining the time grid (more points).")]
    NumericalInstability {
        /// "NaN" or "Infinity"
        kind: &'static str,
        /// Component name
        component: String,
        /// Step index at which the value appeared
        step: usize,
    },
}

/// Errors raised while writing plots or CSV files.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Nothing to write.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Series lengths disagree.
    #[error("Data length mismatch: {0}")]
    LengthMismatch(String),

    /// NaN or infinity in the data.
    #[error("Invalid data: NaN or Inf detected in {0}")]
    NonFinite(String),

    /// The drawing backend failed.
    #[error("Plotting failed: {0}")]
    Plot(String),

    /// Export settings that cannot produce a readable file.
    #[error("Invalid export configuration: {0}")]
    InvalidConfiguration(String),

    /// Evaluating an interpolant for a plot failed.
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),

    /// File system error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl<E: std::error::Error + Send + Sync> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for OutputError
{
    fn from(error: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        OutputError::Plot(error.to_string())
    }
}

/// Errors raised by the small math utilities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// n! does not fit into `u64`.
    #[error("Factorial of {0} overflows u64")]
    FactorialOverflow(u64),
}

/// Any error produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),

    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error(transparent)]
    Math(#[from] MathError),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_problem() {
        let err = InterpolationError::OutOfRange { x: 9.0, min: 0.0, max: 2.0 };
        assert_eq!(err.to_string(), "Point 9 is outside the interpolation range [0, 2]");

        let err = SolverError::NumericalInstability {
            kind: "NaN",
            component: "cA".to_string(),
            step: 3,
        };
        assert!(err.to_string().starts_with("NaN detected in cA at step 3"));
    }

    #[test]
    fn test_umbrella_conversion() {
        fn fails() -> Result<()> {
            Err(MathError::FactorialOverflow(21).into())
        }
        assert!(matches!(fails(), Err(Error::Math(MathError::FactorialOverflow(21)))));
    }

    #[test]
    fn test_io_error_converts_into_output_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: OutputError = io.into();
        assert!(matches!(err, OutputError::Io(_)));
    }
}
