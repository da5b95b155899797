//! Input model for the orbiter simulation.
//!
//! The presentation adapter polls the platform for [`InputEvent`]s; the core
//! feeds them through a frame-coherent [`KeyState`] tracker and resolves
//! semantic [`Action`]s via a serializable [`InputMap`]. Thrust is sampled as
//! "currently held" every tick; mapping, trail-clear, and fullscreen are
//! keydown-edge actions.

pub mod action_map;
pub mod event;
pub mod keyboard;

pub use action_map::{Action, BindingsError, InputMap, KeyBinding, ThrustDirection};
pub use event::InputEvent;
pub use keyboard::KeyState;

/// Re-exported so adapters and tests share the key vocabulary without
/// depending on winit directly.
pub use winit::keyboard::KeyCode;
