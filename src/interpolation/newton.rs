//! Newton divided-difference interpolation
//!
//! # Mathematical Background
//!
//! For support points (x_0, y_0), ..., (x_{n-1}, y_{n-1}) the divided
//! differences are defined recursively:
//!
//! ```text
//! f[x_i]               = y_i
//! f[x_i, ..., x_{i+j}] = (f[x_{i+1}, ..., x_{i+j}] - f[x_i, ..., x_{i+j-1}]) / (x_{i+j} - x_i)
//! ```
//!
//! and the interpolating polynomial of degree n - 1 in Newton form is
//!
//! ```text
//! P(p) = b_0 + b_1 (p - x_0) + b_2 (p - x_0)(p - x_1) + ... + b_{n-1} Π_{j<n-1} (p - x_j)
//! ```
//!
//! with `b_j = f[x_0, ..., x_j]`, the top row of the divided-difference table.

use ndarray::Array2;

use crate::error::InterpolationError;
use crate::interpolation::{Interpolant, validate_polynomial_support};

// =================================================================================================
// Divided-Difference Table
// =================================================================================================

/// Triangular table of divided differences
///
/// Entry `(i, j)` holds `f[x_i, ..., x_{i+j}]`. Only entries with
/// `i + j < n` are meaningful; the rest of the square array is zero.
///
/// # Example
///
/// ```rust
/// use numlab_rs::interpolation::DividedDifferenceTable;
///
/// // y = x² on 0, 1, 2 → b = [0, 1, 1]
/// let table = DividedDifferenceTable::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
/// assert_eq!(table.coefficients(), vec![0.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DividedDifferenceTable {
    table: Array2<f64>,
}

impl DividedDifferenceTable {
    /// Build the table in O(n²)
    ///
    /// # Errors
    ///
    /// Length mismatch, empty or non-finite input, or repeated x-values.
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        validate_polynomial_support(x, y)?;

        let n = x.len();
        let mut table = Array2::<f64>::zeros((n, n));

        // First column: function values
        for (i, &value) in y.iter().enumerate() {
            table[[i, 0]] = value;
        }

        // Column j from column j - 1
        for j in 1..n {
            for i in 0..(n - j) {
                table[[i, j]] =
                    (table[[i + 1, j - 1]] - table[[i, j - 1]]) / (x[i + j] - x[i]);
            }
        }

        Ok(Self { table })
    }

    /// Number of support points
    pub fn size(&self) -> usize {
        self.table.nrows()
    }

    /// Divided difference `f[x_i, ..., x_{i+j}]`, `None` outside the triangle
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i + j < self.size() {
            Some(self.table[[i, j]])
        } else {
            None
        }
    }

    /// Newton coefficients b_0, ..., b_{n-1} (top row)
    pub fn coefficients(&self) -> Vec<f64> {
        self.table.row(0).to_vec()
    }

    /// Full table, including the zero lower-right part
    pub fn as_array(&self) -> &Array2<f64> {
        &self.table
    }
}

// =================================================================================================
// Newton Polynomial
// =================================================================================================

/// Interpolating polynomial in Newton form
#[derive(Debug, Clone, PartialEq)]
pub struct NewtonPolynomial {
    x_points: Vec<f64>,
    coefficients: Vec<f64>,
}

impl NewtonPolynomial {
    /// Build from support points
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        let table = DividedDifferenceTable::new(x, y)?;
        Ok(Self {
            x_points: x.to_vec(),
            coefficients: table.coefficients(),
        })
    }

    /// Build from precomputed coefficients
    ///
    /// Fewer coefficients than x-values is allowed and truncates the
    /// polynomial to the leading terms; more is an error.
    pub fn from_coefficients(
        coefficients: &[f64],
        x: &[f64],
    ) -> Result<Self, InterpolationError> {
        if coefficients.is_empty() {
            return Err(InterpolationError::NotEnoughPoints { required: 1, actual: 0 });
        }
        if coefficients.len() > x.len() {
            return Err(InterpolationError::LengthMismatch {
                x_len: x.len(),
                y_len: coefficients.len(),
            });
        }
        Ok(Self {
            x_points: x.to_vec(),
            coefficients: coefficients.to_vec(),
        })
    }

    /// Newton coefficients b_0, ..., b_{n-1}
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    fn value_at(&self, p: f64) -> f64 {
        // b_0 + Σ b_i Π_{j<i} (p - x_j), with the product carried between terms
        let mut result = self.coefficients[0];
        let mut basis = 1.0;
        for i in 1..self.coefficients.len() {
            basis *= p - self.x_points[i - 1];
            result += self.coefficients[i] * basis;
        }
        result
    }
}

impl Interpolant for NewtonPolynomial {
    fn evaluate(&self, x: f64) -> Result<f64, InterpolationError> {
        Ok(self.value_at(x))
    }

    fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    fn support(&self) -> &[f64] {
        &self.x_points
    }

    fn name(&self) -> &str {
        "Newton's divided-difference interpolation"
    }
}

// =================================================================================================
// Free functions
// =================================================================================================

/// Newton coefficients b_0, ..., b_{n-1} for the points `(x_points, y_points)`
pub fn newton_divided_difference_coefficients(
    y_points: &[f64],
    x_points: &[f64],
) -> Result<Vec<f64>, InterpolationError> {
    Ok(DividedDifferenceTable::new(x_points, y_points)?.coefficients())
}

/// Evaluate a Newton polynomial given by `coefficients` at every sample
pub fn newton_divided_difference_interpolation(
    coefficients: &[f64],
    x_points: &[f64],
    x_sample: &[f64],
) -> Result<Vec<f64>, InterpolationError> {
    NewtonPolynomial::from_coefficients(coefficients, x_points)?.evaluate_many(x_sample)
}

// =================================================================================================
// Tests
// =================================================================================================
