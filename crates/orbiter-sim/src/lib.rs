//! Orbital-mechanics and game-state core of the Mars orbiter simulation.
//!
//! One [`Simulation`] owns a [`Satellite`] and a [`Planet`] and advances them
//! one fixed tick at a time: poll input, fire held thrusters, apply gravity,
//! sample the orbital radius, evaluate fail conditions and mapping
//! eligibility, integrate, and dispatch rendering through a
//! [`Presenter`](orbiter_render::Presenter). Everything here is headless and
//! deterministic for a given seed and input script.

pub mod hud;
pub mod orbit;
pub mod planet;
pub mod satellite;
pub mod sim;

pub use orbit::SampleWindow;
pub use planet::Planet;
pub use satellite::Satellite;
pub use sim::{FailStatus, Simulation};
