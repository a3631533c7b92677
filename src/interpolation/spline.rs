//! Piecewise interpolation: linear and cubic splines
//!
//! # Linear spline
//!
//! On the interval [x_l, x_u] containing p:
//!
//! ```text
//! S(p) = y_l + (y_u - y_l) / (x_u - x_l) · (p - x_l)
//! ```
//!
//! # Cubic spline
//!
//! Piecewise cubic, twice continuously differentiable. Written in terms of the
//! moments M_i = S''(x_i), on segment i with h_i = x_{i+1} - x_i:
//!
//! ```text
//! S(p) = M_i (x_{i+1} - p)³ / (6 h_i) + M_{i+1} (p - x_i)³ / (6 h_i)
//!      + (y_i / h_i - M_i h_i / 6) (x_{i+1} - p)
//!      + (y_{i+1} / h_i - M_{i+1} h_i / 6) (p - x_i)
//! ```
//!
//! Continuity of S' at the interior knots gives n - 2 equations
//!
//! ```text
//! h_{i-1} M_{i-1} + 2 (h_{i-1} + h_i) M_i + h_i M_{i+1} = 6 (s_i - s_{i-1})
//! ```
//!
//! with s_i the secant slope of segment i. The two missing equations come from
//! the [`SplineBoundary`].

use nalgebra::{DMatrix, DVector};

use crate::error::InterpolationError;
use crate::interpolation::{Interpolant, validate_spline_support};

/// Spacing ratio above which the moment system is reported as ill-conditioned
const SPACING_RATIO_WARNING: f64 = 1e6;

// =================================================================================================
// Linear Spline
// =================================================================================================

/// Piecewise-linear interpolant
///
/// Evaluation outside `[x_0, x_{n-1}]` is an error.
///
/// # Example
///
/// ```rust
/// use numlab_rs::interpolation::{Interpolant, LinearSpline};
///
/// let spline = LinearSpline::new(&[0.0, 1.0, 3.0], &[0.0, 2.0, 0.0]).unwrap();
/// assert_eq!(spline.evaluate(0.5).unwrap(), 1.0);
/// assert_eq!(spline.evaluate(2.0).unwrap(), 1.0);
/// assert!(spline.evaluate(3.5).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSpline {
    x_points: Vec<f64>,
    y_points: Vec<f64>,
}

impl LinearSpline {
    /// Build from support values
    ///
    /// # Errors
    ///
    /// Fewer than two points, length mismatch, non-finite values, or
    /// x-values that are not strictly increasing.
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        validate_spline_support(x, y, 2)?;
        Ok(Self {
            x_points: x.to_vec(),
            y_points: y.to_vec(),
        })
    }

    /// Build by sampling `func` at the support points
    pub fn from_function<F>(func: F, x: &[f64]) -> Result<Self, InterpolationError>
    where
        F: Fn(f64) -> f64,
    {
        let y: Vec<f64> = x.iter().map(|&v| func(v)).collect();
        Self::new(x, &y)
    }

    /// Support values
    pub fn values(&self) -> &[f64] {
        &self.y_points
    }

    /// Index of the left end of the interval holding `p`
    ///
    /// Left-sided search: `p == x_k` (k > 0) belongs to `[x_{k-1}, x_k]`,
    /// `p == x_0` to the first interval.
    fn locate(&self, p: f64) -> usize {
        let k = self.x_points.partition_point(|&v| v < p);
        k.max(1) - 1
    }
}

impl Interpolant for LinearSpline {
    fn evaluate(&self, x: f64) -> Result<f64, InterpolationError> {
        let min = self.x_points[0];
        let max = self.x_points[self.x_points.len() - 1];

        // NaN fails both comparisons, so test for containment
        if !(x >= min && x <= max) {
            return Err(InterpolationError::OutOfRange { x, min, max });
        }

        let i = self.locate(x);
        let (x_l, x_u) = (self.x_points[i], self.x_points[i + 1]);
        let (y_l, y_u) = (self.y_points[i], self.y_points[i + 1]);

        Ok(y_l + (y_u - y_l) / (x_u - x_l) * (x - x_l))
    }

    fn degree(&self) -> usize {
        1
    }

    fn support(&self) -> &[f64] {
        &self.x_points
    }

    fn name(&self) -> &str {
        "Linear spline"
    }
}

// =================================================================================================
// Cubic Spline
// =================================================================================================

/// End conditions closing the cubic spline moment system
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SplineBoundary {
    /// Third derivative continuous at x_1 and x_{n-2} (needs 4 points)
    #[default]
    NotAKnot,

    /// Zero second derivative at both ends
    Natural,

    /// Prescribed first derivative at both ends
    Clamped {
        /// S'(x_0)
        start: f64,
        /// S'(x_{n-1})
        end: f64,
    },
}

impl SplineBoundary {
    fn minimum_points(&self) -> usize {
        match self {
            SplineBoundary::NotAKnot => 4,
            SplineBoundary::Natural | SplineBoundary::Clamped { .. } => 2,
        }
    }
}

/// C² piecewise-cubic interpolant
///
/// Outside the support the end pieces are extended unless extrapolation is
/// switched off with [`CubicSpline::with_extrapolation`].
///
/// # Example
///
/// ```rust
/// use numlab_rs::interpolation::{CubicSpline, Interpolant, SplineBoundary};
///
/// let x = [0.0, 1.0, 2.0, 3.0, 4.0];
/// let y: Vec<f64> = x.iter().map(|v: &f64| v.powi(3)).collect();
///
/// // Not-a-knot reproduces cubics exactly
/// let spline = CubicSpline::new(&x, &y, SplineBoundary::NotAKnot).unwrap();
/// assert!((spline.evaluate(2.5).unwrap() - 15.625).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    x_points: Vec<f64>,
    y_points: Vec<f64>,
    moments: Vec<f64>,
    boundary: SplineBoundary,
    extrapolate: bool,
}

impl CubicSpline {
    /// Build the spline by solving the moment system
    ///
    /// # Errors
    ///
    /// Invalid support (see [`LinearSpline::new`]), too few points for the
    /// boundary condition, non-finite clamped slopes, or a singular system.
    pub fn new(
        x: &[f64],
        y: &[f64],
        boundary: SplineBoundary,
    ) -> Result<Self, InterpolationError> {
        validate_spline_support(x, y, boundary.minimum_points())?;

        if let SplineBoundary::Clamped { start, end } = boundary {
            if !(start.is_finite() && end.is_finite()) {
                return Err(InterpolationError::NonFinite { what: "clamped end slopes" });
            }
        }

        let moments = solve_moments(x, y, boundary)?;

        log::debug!(
            "Cubic spline ({:?}) built on {} points over [{}, {}]",
            boundary,
            x.len(),
            x[0],
            x[x.len() - 1]
        );

        Ok(Self {
            x_points: x.to_vec(),
            y_points: y.to_vec(),
            moments,
            boundary,
            extrapolate: true,
        })
    }

    /// Enable or disable evaluation outside the support
    pub fn with_extrapolation(mut self, extrapolate: bool) -> Self {
        self.extrapolate = extrapolate;
        self
    }

    /// Boundary condition used to build the spline
    pub fn boundary(&self) -> SplineBoundary {
        self.boundary
    }

    /// Second derivatives at the knots
    pub fn moments(&self) -> &[f64] {
        &self.moments
    }

    /// Segment holding `p` (end segments for points outside the support)
    fn segment(&self, p: f64) -> usize {
        let n = self.x_points.len();
        let k = self.x_points.partition_point(|&v| v < p);
        k.clamp(1, n - 1) - 1
    }

    fn check_range(&self, x: f64) -> Result<(), InterpolationError> {
        let min = self.x_points[0];
        let max = self.x_points[self.x_points.len() - 1];

        if x.is_nan() || (!self.extrapolate && !(x >= min && x <= max)) {
            return Err(InterpolationError::OutOfRange { x, min, max });
        }
        Ok(())
    }

    /// First derivative S'(x)
    pub fn derivative(&self, x: f64) -> Result<f64, InterpolationError> {
        self.check_range(x)?;

        let i = self.segment(x);
        let h = self.x_points[i + 1] - self.x_points[i];
        let a = self.x_points[i + 1] - x;
        let b = x - self.x_points[i];
        let (m_l, m_u) = (self.moments[i], self.moments[i + 1]);
        let (y_l, y_u) = (self.y_points[i], self.y_points[i + 1]);

        Ok(-m_l * a * a / (2.0 * h) + m_u * b * b / (2.0 * h) + (y_u - y_l) / h
            - (m_u - m_l) * h / 6.0)
    }
}

impl Interpolant for CubicSpline {
    fn evaluate(&self, x: f64) -> Result<f64, InterpolationError> {
        self.check_range(x)?;

        let i = self.segment(x);
        let h = self.x_points[i + 1] - self.x_points[i];
        let a = self.x_points[i + 1] - x;
        let b = x - self.x_points[i];
        let (m_l, m_u) = (self.moments[i], self.moments[i + 1]);
        let (y_l, y_u) = (self.y_points[i], self.y_points[i + 1]);

        Ok(m_l * a.powi(3) / (6.0 * h)
            + m_u * b.powi(3) / (6.0 * h)
            + (y_l / h - m_l * h / 6.0) * a
            + (y_u / h - m_u * h / 6.0) * b)
    }

    fn degree(&self) -> usize {
        3
    }

    fn support(&self) -> &[f64] {
        &self.x_points
    }

    fn name(&self) -> &str {
        "Cubic spline"
    }
}

/// Assemble and solve the n × n moment system
fn solve_moments(
    x: &[f64],
    y: &[f64],
    boundary: SplineBoundary,
) -> Result<Vec<f64>, InterpolationError> {
    let n = x.len();
    let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
    let slopes: Vec<f64> = (0..n - 1).map(|i| (y[i + 1] - y[i]) / h[i]).collect();

    let (h_min, h_max) = h
        .iter()
        .fold((f64::INFINITY, 0.0_f64), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if h_max / h_min > SPACING_RATIO_WARNING {
        log::warn!(
            "Cubic spline knot spacing varies by a factor {:.1e}; the moment system is ill-conditioned",
            h_max / h_min
        );
    }

    let mut matrix = DMatrix::<f64>::zeros(n, n);
    let mut rhs = DVector::<f64>::zeros(n);

    // Interior rows: continuity of S'
    for i in 1..n - 1 {
        matrix[(i, i - 1)] = h[i - 1];
        matrix[(i, i)] = 2.0 * (h[i - 1] + h[i]);
        matrix[(i, i + 1)] = h[i];
        rhs[i] = 6.0 * (slopes[i] - slopes[i - 1]);
    }

    // End rows
    match boundary {
        SplineBoundary::Natural => {
            matrix[(0, 0)] = 1.0;
            matrix[(n - 1, n - 1)] = 1.0;
        }
        SplineBoundary::Clamped { start, end } => {
            matrix[(0, 0)] = 2.0 * h[0];
            matrix[(0, 1)] = h[0];
            rhs[0] = 6.0 * (slopes[0] - start);

            matrix[(n - 1, n - 2)] = h[n - 2];
            matrix[(n - 1, n - 1)] = 2.0 * h[n - 2];
            rhs[n - 1] = 6.0 * (end - slopes[n - 2]);
        }
        SplineBoundary::NotAKnot => {
            // (M_1 - M_0) / h_0 = (M_2 - M_1) / h_1
            matrix[(0, 0)] = h[1];
            matrix[(0, 1)] = -(h[0] + h[1]);
            matrix[(0, 2)] = h[0];

            // (M_{n-2} - M_{n-3}) / h_{n-3} = (M_{n-1} - M_{n-2}) / h_{n-2}
            matrix[(n - 1, n - 3)] = h[n - 2];
            matrix[(n - 1, n - 2)] = -(h[n - 3] + h[n - 2]);
            matrix[(n - 1, n - 1)] = h[n - 3];
        }
    }

    let solution = matrix.lu().solve(&rhs).ok_or_else(|| {
        InterpolationError::SingularSystem(format!(
            "{:?} moment system on {} points has no unique solution",
            boundary, n
        ))
    })?;

    if solution.iter().any(|m| !m.is_finite()) {
        return Err(InterpolationError::SingularSystem(
            "moment system produced NaN or Inf".to_string(),
        ));
    }

    Ok(solution.as_slice().to_vec())
}

// =================================================================================================
// Degree dispatch
// =================================================================================================

/// Interpolating spline of degree `k` through `(x, y)`
///
/// `k = 1` gives a [`LinearSpline`], `k = 3` a not-a-knot [`CubicSpline`].
///
/// # Errors
///
/// [`InterpolationError::UnsupportedDegree`] for any other `k`, plus the
/// construction errors of the chosen spline.
pub fn make_interp_spline(
    x: &[f64],
    y: &[f64],
    k: usize,
) -> Result<Box<dyn Interpolant>, InterpolationError> {
    match k {
        1 => Ok(Box::new(LinearSpline::new(x, y)?)),
        3 => Ok(Box::new(CubicSpline::new(x, y, SplineBoundary::NotAKnot)?)),
        other => Err(InterpolationError::UnsupportedDegree(other)),
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ====== Linear spline ======

    #[test]
    fn test_linear_at_knots() {
        let x = [0.0, 1.0, 2.5, 4.0];
        let y = [1.0, -1.0, 3.0, 0.0];
        let spline = LinearSpline::new(&x, &y).unwrap();

        for (xi, yi) in x.iter().zip(y.iter()) {
            assert_eq!(spline.evaluate(*xi).unwrap(), *yi);
        }
    }

    #[test]
    fn test_linear_left_end_uses_first_interval() {
        let spline = LinearSpline::new(&[1.0, 2.0, 3.0], &[10.0, 20.0, 0.0]).unwrap();
        assert_eq!(spline.locate(1.0), 0);
        assert_eq!(spline.locate(2.0), 0);
        assert_eq!(spline.locate(2.0001), 1);
        assert_eq!(spline.locate(3.0), 1);
        assert_eq!(spline.evaluate(1.0).unwrap(), 10.0);
    }

    #[test]
    fn test_linear_interior_values() {
        let spline = LinearSpline::from_function(|v| v * v, &[0.0, 1.0, 2.0]).unwrap();
        assert_eq!(spline.values(), &[0.0, 1.0, 4.0]);
        assert_relative_eq!(spline.evaluate(0.25).unwrap(), 0.25);
        assert_relative_eq!(spline.evaluate(1.5).unwrap(), 2.5);
    }

    #[test]
    fn test_linear_out_of_range() {
        let spline = LinearSpline::new(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
        assert_eq!(
            spline.evaluate(-0.1),
            Err(InterpolationError::OutOfRange { x: -0.1, min: 0.0, max: 1.0 })
        );
        assert!(spline.evaluate(1.1).is_err());
        assert!(spline.evaluate(f64::NAN).is_err());
    }

    #[test]
    fn test_linear_needs_two_points() {
        assert_eq!(
            LinearSpline::new(&[0.0], &[1.0]),
            Err(InterpolationError::NotEnoughPoints { required: 2, actual: 1 })
        );
    }

    #[test]
    fn test_linear_rejects_unsorted_support() {
        let result = LinearSpline::new(&[0.0, 2.0, 1.0], &[0.0, 0.0, 0.0]);
        assert!(matches!(result, Err(InterpolationError::NotSorted { index: 2, .. })));
    }

    // ====== Cubic spline ======

    #[test]
    fn test_cubic_interpolates_knots() {
        let x = [0.0, 0.7, 1.1, 2.0, 3.5, 4.0];
        let y = [0.0, 1.0, -0.5, 0.3, 2.0, 1.0];

        for boundary in [
            SplineBoundary::NotAKnot,
            SplineBoundary::Natural,
            SplineBoundary::Clamped { start: 0.0, end: 1.0 },
        ] {
            let spline = CubicSpline::new(&x, &y, boundary).unwrap();
            for (xi, yi) in x.iter().zip(y.iter()) {
                assert_relative_eq!(spline.evaluate(*xi).unwrap(), *yi, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_not_a_knot_reproduces_cubic() {
        let f = |v: f64| v.powi(3) - 2.0 * v + 1.0;
        let x = [-1.0, 0.0, 0.5, 2.0, 2.2, 3.0];
        let y: Vec<f64> = x.iter().map(|&v| f(v)).collect();
        let spline = CubicSpline::new(&x, &y, SplineBoundary::NotAKnot).unwrap();

        for p in [-0.5, 0.25, 1.3, 2.1, 2.9] {
            assert_relative_eq!(spline.evaluate(p).unwrap(), f(p), epsilon = 1e-9);
        }
        // Extrapolation continues the end pieces, exact for a cubic
        assert_relative_eq!(spline.evaluate(4.0).unwrap(), f(4.0), epsilon = 1e-8);
    }

    #[test]
    fn test_not_a_knot_four_points_is_interpolating_cubic() {
        let x = [1.0, 4.0, 5.0, 6.0];
        let y: Vec<f64> = x.iter().map(|v: &f64| v.ln()).collect();
        let spline = CubicSpline::new(&x, &y, SplineBoundary::NotAKnot).unwrap();
        let newton = crate::interpolation::NewtonPolynomial::new(&x, &y).unwrap();

        for p in [1.5, 3.0, 4.5, 5.5] {
            assert_relative_eq!(
                spline.evaluate(p).unwrap(),
                newton.evaluate(p).unwrap(),
                epsilon = 1e-10
            );
        }
    }

    #[test]
    fn test_clamped_reproduces_cubic_with_exact_slopes() {
        let f = |v: f64| 0.5 * v.powi(3) + v.powi(2);
        let df = |v: f64| 1.5 * v.powi(2) + 2.0 * v;
        let x = [0.0, 1.0, 1.5, 3.0];
        let y: Vec<f64> = x.iter().map(|&v| f(v)).collect();

        let boundary = SplineBoundary::Clamped { start: df(0.0), end: df(3.0) };
        let spline = CubicSpline::new(&x, &y, boundary).unwrap();

        for p in [0.3, 1.2, 2.4] {
            assert_relative_eq!(spline.evaluate(p).unwrap(), f(p), epsilon = 1e-10);
            assert_relative_eq!(spline.derivative(p).unwrap(), df(p), epsilon = 1e-10);
        }
    }

    #[test]
    fn test_natural_moments_vanish_at_ends() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [0.0, 1.0, 0.0, 1.0];
        let spline = CubicSpline::new(&x, &y, SplineBoundary::Natural).unwrap();

        let m = spline.moments();
        assert!(m[0].abs() < 1e-14);
        assert!(m[3].abs() < 1e-14);
        assert!(m[1].abs() > 1.0);
    }

    #[test]
    fn test_natural_two_points_is_linear() {
        let spline = CubicSpline::new(&[0.0, 2.0], &[1.0, 5.0], SplineBoundary::Natural).unwrap();
        assert_relative_eq!(spline.evaluate(0.5).unwrap(), 2.0, epsilon = 1e-14);
        assert_relative_eq!(spline.derivative(1.7).unwrap(), 2.0, epsilon = 1e-14);
    }

    #[test]
    fn test_first_derivative_continuous_at_knots() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y = [0.0, 2.0, 1.0, 3.0, 0.0];
        let spline = CubicSpline::new(&x, &y, SplineBoundary::NotAKnot).unwrap();

        for &knot in &x[1..4] {
            let left = spline.derivative(knot - 1e-9).unwrap();
            let right = spline.derivative(knot + 1e-9).unwrap();
            assert!((left - right).abs() < 1e-6, "S' jumps at {}", knot);
        }
    }

    #[test]
    fn test_not_a_knot_needs_four_points() {
        let result = CubicSpline::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0], SplineBoundary::NotAKnot);
        assert_eq!(result, Err(InterpolationError::NotEnoughPoints { required: 4, actual: 3 }));
    }

    #[test]
    fn test_clamped_rejects_nan_slope() {
        let boundary = SplineBoundary::Clamped { start: f64::NAN, end: 0.0 };
        let result = CubicSpline::new(&[0.0, 1.0], &[0.0, 1.0], boundary);
        assert!(matches!(result, Err(InterpolationError::NonFinite { .. })));
    }

    #[test]
    fn test_extrapolation_switch() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [0.0, 1.0, 4.0, 9.0];
        let spline = CubicSpline::new(&x, &y, SplineBoundary::NotAKnot).unwrap();
        assert_relative_eq!(spline.evaluate(4.0).unwrap(), 16.0, epsilon = 1e-10);

        let bounded = spline.with_extrapolation(false);
        assert!(matches!(bounded.evaluate(4.0), Err(InterpolationError::OutOfRange { .. })));
        assert!(bounded.evaluate(3.0).is_ok());
        assert!(bounded.evaluate(f64::NAN).is_err());
    }

    // ====== Degree dispatch ======

    #[test]
    fn test_make_interp_spline_degrees() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [0.0, 1.0, 8.0, 27.0];

        let linear = make_interp_spline(&x, &y, 1).unwrap();
        assert_eq!(linear.degree(), 1);
        assert_eq!(linear.evaluate(1.5).unwrap(), 4.5);

        let cubic = make_interp_spline(&x, &y, 3).unwrap();
        assert_eq!(cubic.degree(), 3);
        assert_relative_eq!(cubic.evaluate(1.5).unwrap(), 3.375, epsilon = 1e-12);

        assert!(matches!(
            make_interp_spline(&x, &y, 2),
            Err(InterpolationError::UnsupportedDegree(2))
        ));
    }
}
