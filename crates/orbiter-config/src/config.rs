//! Configuration structs with game-balance defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level game configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window settings.
    pub window: WindowConfig,
    /// Simulation tuning constants.
    pub simulation: SimulationConfig,
    /// Satellite spawn parameters.
    pub satellite: SatelliteConfig,
    /// Planet parameters.
    pub planet: PlanetConfig,
    /// HUD colors.
    pub hud: HudConfig,
    /// Audio settings.
    pub audio: AudioConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    /// Start in fullscreen mode.
    pub fullscreen: bool,
    /// Window title.
    pub title: String,
}

/// Simulation tuning constants.
///
/// These are game-balance values, not runtime-mutable state: the core reads
/// them, it never writes them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Ticks per second; one display frame per tick.
    pub fps: u32,
    /// Gravitational constant for the game (not physical).
    pub gravitational_constant: f64,
    /// Velocity change per thruster activation, per tick.
    pub thrust_increment: f64,
    /// Fuel units consumed per thruster activation.
    pub thrust_fuel_cost: i32,
    /// Distance at or below which the satellite enters the atmosphere.
    pub atmosphere_floor: f64,
    /// Lower edge of the mapping orbit altitude band.
    pub orbit_band_min: f64,
    /// Upper edge of the mapping orbit altitude band.
    pub orbit_band_max: f64,
    /// Eccentricity below which the orbit counts as circular.
    pub eccentricity_threshold: f64,
    /// Seconds between eccentricity recomputes.
    pub eccentricity_interval_secs: u32,
    /// Seconds the intro text stays on screen after startup.
    pub intro_secs: u64,
    /// Horizontal drift velocity forced once fuel is depleted.
    pub drift_velocity: f64,
}

/// Satellite spawn parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SatelliteConfig {
    /// Spawn x range, inclusive lower bound.
    pub spawn_x_min: f64,
    /// Spawn x range, exclusive upper bound.
    pub spawn_x_max: f64,
    /// Spawn y range, inclusive lower bound.
    pub spawn_y_min: f64,
    /// Spawn y range, exclusive upper bound.
    pub spawn_y_max: f64,
    /// Magnitude of the initial tangential velocity; the sign is random.
    pub spawn_speed: f64,
    /// Fuel units in a full tank.
    pub initial_fuel: i32,
    /// Satellite mass.
    pub mass: f64,
}

/// Planet parameters. Position and mass never change after construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanetConfig {
    /// Planet center x in screen coordinates.
    pub x: f64,
    /// Planet center y in screen coordinates.
    pub y: f64,
    /// Planet mass, large relative to the satellite.
    pub mass: f64,
    /// Rotation per tick in degrees; rendering-only.
    pub rotate_step_deg: f64,
}

/// HUD colors as RGB triples.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HudConfig {
    /// Instruction-panel text.
    pub panel_text: [u8; 3],
    /// Fail-condition messages.
    pub warning: [u8; 3],
    /// Intro text.
    pub intro: [u8; 3],
    /// Mapping prompt.
    pub mapping_prompt: [u8; 3],
}

/// Audio configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    /// Master volume (0.0 - 1.0).
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0). The thruster loop is quiet.
    pub sfx_volume: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Seconds between telemetry log lines in the headless binary.
    pub telemetry_secs: u32,
}

// --- Default implementations ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 645,
            fullscreen: true,
            title: "Mars Orbiter".to_string(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            fps: 30,
            gravitational_constant: 1.0,
            thrust_increment: 0.05,
            thrust_fuel_cost: 2,
            atmosphere_floor: 68.0,
            orbit_band_min: 69.0,
            orbit_band_max: 120.0,
            eccentricity_threshold: 0.05,
            eccentricity_interval_secs: 5,
            intro_secs: 15,
            drift_velocity: 2.0,
        }
    }
}

impl Default for SatelliteConfig {
    fn default() -> Self {
        Self {
            spawn_x_min: 315.0,
            spawn_x_max: 425.0,
            spawn_y_min: 70.0,
            spawn_y_max: 180.0,
            spawn_speed: 3.0,
            initial_fuel: 100,
            mass: 1.0,
        }
    }
}

impl Default for PlanetConfig {
    fn default() -> Self {
        Self {
            x: 400.0,
            y: 320.0,
            mass: 2000.0,
            // 0.01 radians per tick, expressed in the degree convention used
            // everywhere else.
            rotate_step_deg: 0.01_f64.to_degrees(),
        }
    }
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            panel_text: [255, 255, 255],
            warning: [255, 0, 0],
            intro: [0, 255, 0],
            mapping_prompt: [173, 216, 230],
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            master_volume: 1.0,
            sfx_volume: 0.07,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            telemetry_secs: 1,
        }
    }
}

// --- Derived values / validation / load / save ---

impl SimulationConfig {
    /// Number of ticks between eccentricity recomputes.
    pub fn eccentricity_interval_ticks(&self) -> u64 {
        u64::from(self.eccentricity_interval_secs) * u64::from(self.fps)
    }
}

impl Config {
    /// Default on-disk location for `config.ron`.
    pub fn default_dir() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("orbiter"))
            .unwrap_or_else(|| PathBuf::from(".orbiter"))
    }

    /// Reject configurations the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.simulation.fps == 0 {
            return Err(ConfigError::Invalid("fps must be nonzero".to_string()));
        }
        if self.simulation.eccentricity_interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "eccentricity_interval_secs must be nonzero".to_string(),
            ));
        }
        if self.simulation.orbit_band_min > self.simulation.orbit_band_max {
            return Err(ConfigError::Invalid(
                "orbit band lower edge exceeds upper edge".to_string(),
            ));
        }
        if self.simulation.atmosphere_floor >= self.simulation.orbit_band_min {
            return Err(ConfigError::Invalid(
                "atmosphere floor must sit below the orbit band".to_string(),
            ));
        }
        if self.satellite.spawn_x_min >= self.satellite.spawn_x_max
            || self.satellite.spawn_y_min >= self.satellite.spawn_y_max
        {
            return Err(ConfigError::Invalid(
                "satellite spawn ranges must be non-empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        Config::default().validate().expect("defaults must validate");
    }

    #[test]
    fn test_default_interval_ticks() {
        // 5 seconds at 30 ticks/second.
        assert_eq!(SimulationConfig::default().eccentricity_interval_ticks(), 150);
    }

    #[test]
    fn test_rotate_step_matches_radian_increment() {
        let step = PlanetConfig::default().rotate_step_deg;
        assert!((step.to_radians() - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let mut config = Config::default();
        config.simulation.eccentricity_interval_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_band() {
        let mut config = Config::default();
        config.simulation.orbit_band_min = 130.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ron_round_trip() {
        let config = Config::default();
        let serialized = ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new())
            .expect("serialize");
        let parsed: Config = ron::from_str(&serialized).expect("parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = Config::load_or_create(dir.path()).expect("create");
        assert_eq!(config, Config::default());
        assert!(dir.path().join("config.ron").exists());

        // Second load reads the file it just wrote.
        let reloaded = Config::load_or_create(dir.path()).expect("load");
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join("config.ron"),
            "(simulation: (fps: 60))",
        )
        .expect("write");
        let config = Config::load_or_create(dir.path()).expect("load");
        assert_eq!(config.simulation.fps, 60);
        // Untouched sections keep their defaults.
        assert_eq!(config.planet, PlanetConfig::default());
    }
}
