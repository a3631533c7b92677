//! Reference functions
//!
//! "True" functions sampled to build interpolants and drawn next to them in
//! the comparison plots.

/// Natural logarithm `ln x`
pub fn logarithm_natural(x: f64) -> f64 {
    x.ln()
}

/// Sine `sin x`
pub fn sinus(x: f64) -> f64 {
    x.sin()
}

/// Sign function: −1 for negative input, 0 at zero, +1 for positive input.
///
/// Unlike [`f64::signum`], zero maps to zero.
pub fn sign_fcn(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Linear function `y = a·x + b`
pub fn linear(a: f64, b: f64) -> impl Fn(f64) -> f64 + Copy {
    move |x| a * x + b
}

/// Quadratic function `y = a·x² + b·x + c`
pub fn quadratic(a: f64, b: f64, c: f64) -> impl Fn(f64) -> f64 + Copy {
    move |x| a * x.powi(2) + b * x + c
}
