//! Common utilities for integration tests

#![allow(dead_code)]

pub mod mock_systems;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_systems::{ConstantGrowth, ExponentialDecay, HarmonicOscillator};
pub use test_helpers::{max_abs_error, relative_error, temp_output};
