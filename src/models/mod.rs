//! Models integrated by the ODE layer
//!
//! All models implement [`OdeSystem`](crate::ode::OdeSystem). The model gives
//! the right-hand side f(t, y), the integrator advances it in time.
//!
//! # Available Models
//!
//! ## [`SemiBatchReactor`]
//!
//! Fed-batch stirred tank where A converts to B with first-order kinetics
//! while the volume grows with the feed.

pub mod reaction;

pub use reaction::{ReactorParameters, SemiBatchReactor};
