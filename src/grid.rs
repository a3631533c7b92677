//! Uniform sampling grids

/// `n` evenly spaced points from `start` to `end`, both included.
///
/// Point `i` is computed as `start + i * step` rather than by repeated
/// addition, and the last point is pinned to `end`.
///
/// # Example
///
/// ```rust
/// use numlab_rs::grid::linspace;
///
/// let x = linspace(0.0, 1.0, 5);
/// assert_eq!(x, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut points: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            points[n - 1] = end;
            points
        }
    }
}

/// Closed sampling interval used by the function plots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRange {
    /// First sample
    pub start: f64,

    /// Last sample
    pub end: f64,

    /// Number of samples
    pub points: usize,
}

impl SampleRange {
    /// Create a new range
    pub fn new(start: f64, end: f64, points: usize) -> Self {
        Self { start, end, points }
    }

    /// Default range for linear plots: `[0, 10]`, 100 points
    pub fn linear_default() -> Self {
        Self::new(0.0, 10.0, 100)
    }

    /// Default range for quadratic plots: `[-10, 10]`, 100 points
    pub fn quadratic_default() -> Self {
        Self::new(-10.0, 10.0, 100)
    }

    /// Sample positions
    pub fn values(&self) -> Vec<f64> {
        linspace(self.start, self.end, self.points)
    }
}
