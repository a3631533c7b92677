//! Mock ODE systems for testing
//!
//! These systems have known analytical solutions, so integrator output can be
//! compared against the exact answer.

use nalgebra::DVector;
use numlab_rs::ode::OdeSystem;

// =================================================================================================
// Exponential Decay: dy/dt = -k*y
// =================================================================================================

/// Exponential decay: dy/dt = -k*y, y(0) = 1 in every component
///
/// Analytical solution: y(t) = exp(-k*t)
pub struct ExponentialDecay {
    pub components: usize,
    pub decay_rate: f64,
}

impl ExponentialDecay {
    pub fn new(components: usize, decay_rate: f64) -> Self {
        Self {
            components,
            decay_rate,
        }
    }

    pub fn analytical_solution(&self, t: f64) -> f64 {
        (-self.decay_rate * t).exp()
    }
}

impl OdeSystem for ExponentialDecay {
    fn dimension(&self) -> usize {
        self.components
    }

    fn derivative(&self, _t: f64, y: &DVector<f64>) -> DVector<f64> {
        y * (-self.decay_rate)
    }

    fn initial_state(&self) -> DVector<f64> {
        DVector::from_element(self.components, 1.0)
    }

    fn name(&self) -> &str {
        "Exponential Decay"
    }
}

// =================================================================================================
// Constant Growth: dy/dt = c
// =================================================================================================

/// Constant growth: dy/dt = c, y(0) = 0
///
/// Euler is exact for this problem.
pub struct ConstantGrowth {
    pub growth_rate: f64,
}

impl OdeSystem for ConstantGrowth {
    fn dimension(&self) -> usize {
        1
    }

    fn derivative(&self, _t: f64, _y: &DVector<f64>) -> DVector<f64> {
        DVector::from_element(1, self.growth_rate)
    }

    fn initial_state(&self) -> DVector<f64> {
        DVector::zeros(1)
    }

    fn name(&self) -> &str {
        "Constant Growth"
    }
}

// =================================================================================================
// Harmonic Oscillator: x'' = -ω² x
// =================================================================================================

/// Harmonic oscillator as a first-order system (x, v), x(0) = 1, v(0) = 0
///
/// Forward Euler multiplies the energy by (1 + ω²dt²) every step.
pub struct HarmonicOscillator {
    pub omega: f64,
}

impl HarmonicOscillator {
    pub fn energy(&self, state: &DVector<f64>) -> f64 {
        0.5 * (state[1] * state[1] + self.omega * self.omega * state[0] * state[0])
    }
}

impl OdeSystem for HarmonicOscillator {
    fn dimension(&self) -> usize {
        2
    }

    fn derivative(&self, _t: f64, y: &DVector<f64>) -> DVector<f64> {
        DVector::from_vec(vec![y[1], -self.omega * self.omega * y[0]])
    }

    fn initial_state(&self) -> DVector<f64> {
        DVector::from_vec(vec![1.0, 0.0])
    }

    fn component_names(&self) -> Vec<String> {
        vec!["x".to_string(), "v".to_string()]
    }

    fn name(&self) -> &str {
        "Harmonic Oscillator"
    }
}
