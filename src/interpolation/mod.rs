//! Polynomial and spline interpolation
//!
//! # Available Interpolants
//!
//! | Type | Degree | Support | Cost per point |
//! |------|--------|---------|----------------|
//! | [`NewtonPolynomial`] | n − 1 | distinct x | O(n) after O(n²) table |
//! | [`LagrangePolynomial`] | n − 1 | distinct x | O(n²) |
//! | [`LinearSpline`] | 1 (piecewise) | increasing x | O(log n) |
//! | [`CubicSpline`] | 3 (piecewise) | increasing x | O(log n) after O(n³) solve |
//!
//! All of them implement [`Interpolant`], so plots and exports accept any of
//! them through `&dyn Interpolant`.
//!
//! # Example
//!
//! ```rust
//! use numlab_rs::interpolation::{Interpolant, LagrangePolynomial, NewtonPolynomial};
//!
//! let x = [1.0, 4.0, 5.0, 6.0];
//! let y: Vec<f64> = x.iter().map(|v: &f64| v.ln()).collect();
//!
//! let newton = NewtonPolynomial::new(&x, &y).unwrap();
//! let lagrange = LagrangePolynomial::new(&x, &y).unwrap();
//!
//! let a = newton.evaluate(4.5).unwrap();
//! let b = lagrange.evaluate(4.5).unwrap();
//! assert!((a - b).abs() < 1e-12);
//! ```
//!
//! # Batch Evaluation
//!
//! [`Interpolant::evaluate_many`] keeps the order of its input. With the
//! `parallel` feature it hands inputs longer than [`parallel_threshold()`]
//! to Rayon.

mod lagrange;
mod newton;
mod spline;

pub use lagrange::{LagrangePolynomial, lagrangian_interpolation};
pub use newton::{
    DividedDifferenceTable, NewtonPolynomial, newton_divided_difference_coefficients,
    newton_divided_difference_interpolation,
};
pub use spline::{CubicSpline, LinearSpline, SplineBoundary, make_interp_spline};

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::InterpolationError;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// =================================================================================================
// Interpolant Trait
// =================================================================================================

/// Function reconstructed from support points
pub trait Interpolant: Send + Sync {
    /// Value at `x`
    fn evaluate(&self, x: f64) -> Result<f64, InterpolationError>;

    /// Values at every point of `xs`, in input order
    ///
    /// Stops at the first point that cannot be evaluated.
    fn evaluate_many(&self, xs: &[f64]) -> Result<Vec<f64>, InterpolationError> {
        map_samples(xs, |x| self.evaluate(x))
    }

    /// Polynomial degree (of each piece, for splines)
    fn degree(&self) -> usize;

    /// Support abscissae
    fn support(&self) -> &[f64];

    /// Name of the method (used in plot legends and logging)
    fn name(&self) -> &str;
}

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================

/// Default number of samples above which batch evaluation goes parallel
const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Current parallel-execution threshold
///
/// `evaluate_many` runs sequentially on inputs with at most this many
/// samples, and with Rayon above it when the `parallel` feature is enabled.
///
/// ```rust
/// use numlab_rs::interpolation::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold
///
/// # Panics
///
/// Panics when `threshold == 0`.
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// Serializes tests that change the global threshold
#[cfg(test)]
static THRESHOLD_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Restores the previous threshold on drop (test builds only)
///
/// Holds [`THRESHOLD_LOCK`] for its whole lifetime, so two guards never
/// overlap even under the multithreaded test runner.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[cfg(test)]
impl ThresholdGuard {
    pub(crate) fn save(new_value: usize) -> Self {
        // A poisoned lock only means another test panicked while holding it
        let lock = THRESHOLD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self {
            previous,
            _lock: lock,
        }
    }

    fn restore(&self) {
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        // Runs before the lock field is released
        self.restore();
    }
}

#[cfg(feature = "parallel")]
fn map_samples<F>(xs: &[f64], f: F) -> Result<Vec<f64>, InterpolationError>
where
    F: Fn(f64) -> Result<f64, InterpolationError> + Sync + Send,
{
    if xs.len() > parallel_threshold() {
        xs.par_iter().map(|&x| f(x)).collect()
    } else {
        xs.iter().map(|&x| f(x)).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn map_samples<F>(xs: &[f64], f: F) -> Result<Vec<f64>, InterpolationError>
where
    F: Fn(f64) -> Result<f64, InterpolationError> + Sync + Send,
{
    xs.iter().map(|&x| f(x)).collect()
}

// =================================================================================================
// Support Validation
// =================================================================================================

fn check_lengths(x: &[f64], y: &[f64], required: usize) -> Result<(), InterpolationError> {
    if x.len() != y.len() {
        return Err(InterpolationError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if x.len() < required {
        return Err(InterpolationError::NotEnoughPoints {
            required,
            actual: x.len(),
        });
    }
    if x.iter().any(|v| !v.is_finite()) {
        return Err(InterpolationError::NonFinite { what: "x-values" });
    }
    if y.iter().any(|v| !v.is_finite()) {
        return Err(InterpolationError::NonFinite { what: "y-values" });
    }
    Ok(())
}

/// Polynomial support: pairwise-distinct abscissae in any order
pub(crate) fn validate_polynomial_support(
    x: &[f64],
    y: &[f64],
) -> Result<(), InterpolationError> {
    check_lengths(x, y, 1)?;

    for i in 0..x.len() {
        for j in (i + 1)..x.len() {
            if x[i] == x[j] {
                return Err(InterpolationError::DuplicateNodes {
                    value: x[i],
                    first: i,
                    second: j,
                });
            }
        }
    }

    Ok(())
}

/// Spline support: strictly increasing abscissae
pub(crate) fn validate_spline_support(
    x: &[f64],
    y: &[f64],
    required: usize,
) -> Result<(), InterpolationError> {
    check_lengths(x, y, required)?;

    for (i, pair) in x.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(InterpolationError::NotSorted {
                index: i + 1,
                value: pair[1],
            });
        }
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
