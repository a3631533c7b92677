//! Semi-batch reactor with a first-order reaction A → B
//!
//! # Mathematical Background
//!
//! A stirred tank starts with volume V₀ and is fed continuously with a stream
//! of A at rate V̇ and concentration c_A,in. The volume grows as
//! V(t) = V₀ + V̇·t, and A converts to B with rate constant k:
//!
//! ```text
//! dc_A/dt = V̇ / (V₀ + V̇·t) · (c_A,in − c_A) − k·c_A
//! dc_B/dt = k·c_A
//! ```
//!
//! The first term of dc_A/dt is the dilution/feed contribution, the second
//! the consumption by the reaction. B is only produced by the reaction.
//!
//! # Units
//!
//! | Symbol | Meaning | Unit | Default |
//! |--------|---------|------|---------|
//! | k | rate constant | 1/s | 0.2 |
//! | V̇ | feed rate | L/s | 0.1 |
//! | V₀ | initial volume | L | 10 |
//! | c_A,in | feed concentration | mol/L | 0.5 |
//! | c_A(0), c_B(0) | initial concentrations | mol/L | 1, 0 |

use nalgebra::DVector;

use crate::error::SolverError;
use crate::ode::OdeSystem;

/// Reactor parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactorParameters {
    /// Rate constant k [1/s]
    pub rate_constant: f64,

    /// Volumetric feed rate V̇ [L/s]
    pub feed_rate: f64,

    /// Initial volume V₀ [L]
    pub initial_volume: f64,

    /// Feed concentration of A [mol/L]
    pub feed_concentration: f64,

    /// Initial concentration of A [mol/L]
    pub initial_a: f64,

    /// Initial concentration of B [mol/L]
    pub initial_b: f64,
}

impl Default for ReactorParameters {
    fn default() -> Self {
        Self {
            rate_constant: 0.2,
            feed_rate: 0.1,
            initial_volume: 10.0,
            feed_concentration: 0.5,
            initial_a: 1.0,
            initial_b: 0.0,
        }
    }
}

impl ReactorParameters {
    /// Builder pattern: set rate constant
    pub fn rate_constant(mut self, k: f64) -> Self {
        self.rate_constant = k;
        self
    }

    /// Builder pattern: set feed rate
    pub fn feed_rate(mut self, feed_rate: f64) -> Self {
        self.feed_rate = feed_rate;
        self
    }

    /// Builder pattern: set initial volume
    pub fn initial_volume(mut self, volume: f64) -> Self {
        self.initial_volume = volume;
        self
    }

    /// Builder pattern: set feed concentration
    pub fn feed_concentration(mut self, concentration: f64) -> Self {
        self.feed_concentration = concentration;
        self
    }

    /// Builder pattern: set initial concentrations
    pub fn initial_concentrations(mut self, c_a: f64, c_b: f64) -> Self {
        self.initial_a = c_a;
        self.initial_b = c_b;
        self
    }

    /// Check the parameters describe a physical reactor
    pub fn validate(&self) -> Result<(), SolverError> {
        let values = [
            ("rate constant", self.rate_constant),
            ("feed rate", self.feed_rate),
            ("initial volume", self.initial_volume),
            ("feed concentration", self.feed_concentration),
            ("initial concentration of A", self.initial_a),
            ("initial concentration of B", self.initial_b),
        ];

        for (name, value) in values {
            if !value.is_finite() {
                return Err(SolverError::InvalidConfiguration(format!(
                    "Reactor parameter '{}' is not finite",
                    name
                )));
            }
        }

        if self.initial_volume <= 0.0 {
            return Err(SolverError::InvalidConfiguration(format!(
                "Initial volume must be positive, got {} L",
                self.initial_volume
            )));
        }
        if self.feed_rate < 0.0 {
            return Err(SolverError::InvalidConfiguration(format!(
                "Feed rate cannot be negative, got {} L/s",
                self.feed_rate
            )));
        }
        if self.rate_constant < 0.0 {
            return Err(SolverError::InvalidConfiguration(format!(
                "Rate constant cannot be negative, got {} 1/s",
                self.rate_constant
            )));
        }

        Ok(())
    }
}

/// Semi-batch reactor model, state `[c_A, c_B]`
///
/// # Example
///
/// ```rust
/// use nalgebra::DVector;
/// use numlab_rs::models::SemiBatchReactor;
/// use numlab_rs::ode::OdeSystem;
///
/// let reactor = SemiBatchReactor::default();
/// let rate = reactor.derivative(0.0, &reactor.initial_state());
///
/// // 0.1/10 * (0.5 - 1) - 0.2 * 1
/// assert!((rate[0] + 0.205).abs() < 1e-12);
/// assert!((rate[1] - 0.2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SemiBatchReactor {
    parameters: ReactorParameters,
}

impl SemiBatchReactor {
    /// Create a reactor from validated parameters
    pub fn new(parameters: ReactorParameters) -> Result<Self, SolverError> {
        parameters.validate()?;
        Ok(Self { parameters })
    }

    /// Reactor parameters
    pub fn parameters(&self) -> &ReactorParameters {
        &self.parameters
    }

    /// Liquid volume V(t) = V₀ + V̇·t [L]
    pub fn volume(&self, t: f64) -> f64 {
        self.parameters.initial_volume + self.parameters.feed_rate * t
    }
}

impl OdeSystem for SemiBatchReactor {
    fn dimension(&self) -> usize {
        2
    }

    fn derivative(&self, t: f64, y: &DVector<f64>) -> DVector<f64> {
        let p = &self.parameters;
        let c_a = y[0];

        let dilution = p.feed_rate / self.volume(t) * (p.feed_concentration - c_a);
        let reaction = p.rate_constant * c_a;

        DVector::from_vec(vec![dilution - reaction, reaction])
    }

    fn initial_state(&self) -> DVector<f64> {
        DVector::from_vec(vec![self.parameters.initial_a, self.parameters.initial_b])
    }

    fn component_names(&self) -> Vec<String> {
        vec!["cA".to_string(), "cB".to_string()]
    }

    fn name(&self) -> &str {
        "Semi-batch reactor A -> B"
    }
}
