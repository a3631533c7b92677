//! Small math utilities kept apart from the demonstrations that use them

use crate::error::MathError;

/// Length of the hypotenuse of a right triangle with legs `a` and `b`.
///
/// ```rust
/// use numlab_rs::math_utils::pythagoras;
///
/// assert_eq!(pythagoras(3.0, 4.0), 5.0);
/// ```
pub fn pythagoras(a: f64, b: f64) -> f64 {
    (a.powi(2) + b.powi(2)).sqrt()
}

/// Factorial `n! = 1 · 2 · … · n`, with `0! = 1`.
///
/// # Errors
///
/// [`MathError::FactorialOverflow`] when the product exceeds `u64::MAX`
/// (any `n > 20`).
///
/// ```rust
/// use numlab_rs::math_utils::factorial;
///
/// assert_eq!(factorial(5).unwrap(), 120);
/// assert!(factorial(21).is_err());
/// ```
pub fn factorial(n: u64) -> Result<u64, MathError> {
    (1..=n).try_fold(1u64, |product, k| {
        product.checked_mul(k).ok_or(MathError::FactorialOverflow(n))
    })
}
