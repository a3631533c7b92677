//! Lagrange interpolation
//!
//! ```text
//! P(p) = Σ_i y_i · L_i(p),    L_i(p) = Π_{j≠i} (p - x_j) / (x_i - x_j)
//! ```
//!
//! Same polynomial as the Newton form on the same data; each evaluation costs
//! O(n²) since nothing is precomputed.

use crate::error::InterpolationError;
use crate::interpolation::{Interpolant, validate_polynomial_support};

/// Interpolating polynomial in Lagrange form
#[derive(Debug, Clone, PartialEq)]
pub struct LagrangePolynomial {
    x_points: Vec<f64>,
    y_points: Vec<f64>,
}

impl LagrangePolynomial {
    /// Build from support points
    ///
    /// # Errors
    ///
    /// Length mismatch, empty or non-finite input, or repeated x-values.
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        validate_polynomial_support(x, y)?;
        Ok(Self {
            x_points: x.to_vec(),
            y_points: y.to_vec(),
        })
    }

    /// Basis polynomial L_i at `p`, `None` when `i` is not a support index
    pub fn basis(&self, i: usize, p: f64) -> Option<f64> {
        let x_i = *self.x_points.get(i)?;
        Some(self.basis_at(i, x_i, p))
    }

    fn basis_at(&self, i: usize, x_i: f64, p: f64) -> f64 {
        self.x_points
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .fold(1.0, |product, (_, &x_j)| product * (p - x_j) / (x_i - x_j))
    }
}

impl Interpolant for LagrangePolynomial {
    fn evaluate(&self, x: f64) -> Result<f64, InterpolationError> {
        Ok(self
            .y_points
            .iter()
            .zip(self.x_points.iter())
            .enumerate()
            .map(|(i, (&y_i, &x_i))| y_i * self.basis_at(i, x_i, x))
            .sum())
    }

    fn degree(&self) -> usize {
        self.x_points.len() - 1
    }

    fn support(&self) -> &[f64] {
        &self.x_points
    }

    fn name(&self) -> &str {
        "Lagrange interpolation"
    }
}

/// Lagrange interpolation of `(x_points, y_points)` at every sample
pub fn lagrangian_interpolation(
    y_points: &[f64],
    x_points: &[f64],
    x_sample: &[f64],
) -> Result<Vec<f64>, InterpolationError> {
    LagrangePolynomial::new(x_points, y_points)?.evaluate_many(x_sample)
}
