//! Configuration for the orbiter simulation.
//!
//! Every tunable constant of the game lives here as an immutable, explicit
//! configuration struct: no module-level globals. Settings persist to disk as
//! RON files and can be overridden per run via clap CLI flags.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    AudioConfig, Config, DebugConfig, HudConfig, PlanetConfig, SatelliteConfig, SimulationConfig,
    WindowConfig,
};
pub use error::ConfigError;
