//! Helper functions for integration tests

use std::path::PathBuf;

use tempfile::TempDir;

/// Relative error: |actual - expected| / |expected|
///
/// Falls back to the absolute error when `expected` is close to zero.
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// Largest pointwise |a_i - b_i|
pub fn max_abs_error(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "Series length mismatch");
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

/// Fresh temporary directory and a path named `file_name` inside it
///
/// Keep the `TempDir` alive for as long as the file is needed.
pub fn temp_output(file_name: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join(file_name);
    (dir, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }

    #[test]
    fn test_max_abs_error() {
        assert_eq!(max_abs_error(&[1.0, 2.0], &[1.5, 1.0]), 1.0);
    }
}
