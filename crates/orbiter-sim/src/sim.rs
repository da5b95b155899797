//! Per-tick simulation loop and game-state machine.

use std::time::Instant;

use orbiter_config::Config;
use orbiter_input::{Action, InputEvent, InputMap, KeyState};
use orbiter_render::{OverlayKind, Presenter, SoundId, SpriteVariant};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use tracing::{debug, info};

use crate::hud;
use crate::orbit::{self, SampleWindow};
use crate::planet::Planet;
use crate::satellite::Satellite;

/// Fail-condition status, recomputed every tick.
///
/// Both conditions are absorbing in practice (fuel never refills; a stopped
/// satellite stays inside the atmosphere), but neither ends the run: the
/// satellite drifts or burns until the player quits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailStatus {
    /// Orbit corrections still possible.
    Nominal,
    /// Tank empty: velocity forced to a fixed horizontal drift.
    FuelDepleted,
    /// Below the atmosphere floor: velocity forced to zero, crash visual.
    AtmosphericEntry,
}

/// The simulation: owns the satellite, planet, and orbit statistics, and
/// advances them one tick at a time against a [`Presenter`].
pub struct Simulation {
    config: Config,
    satellite: Satellite,
    planet: Planet,
    window: SampleWindow,
    keys: KeyState,
    input_map: InputMap,
    eccentricity: f64,
    mapping_enabled: bool,
    fail: FailStatus,
    tick_count: u64,
    running: bool,
    started: Instant,
}

impl Simulation {
    /// New simulation with a seeded random insertion orbit.
    pub fn new(config: Config, seed: u64) -> Self {
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        let satellite = Satellite::spawn(&config.satellite, &mut rng);
        let planet = Planet::new(&config.planet);
        info!(
            x = satellite.position.x,
            y = satellite.position.y,
            dx = satellite.velocity.x,
            fuel = satellite.fuel,
            "satellite inserted"
        );
        Self::with_bodies(config, satellite, planet)
    }

    /// New simulation from explicit body state. Used for deterministic
    /// scenarios: replays, balance experiments, tests.
    pub fn with_bodies(config: Config, satellite: Satellite, planet: Planet) -> Self {
        Self {
            config,
            satellite,
            planet,
            window: SampleWindow::new(),
            keys: KeyState::new(),
            input_map: InputMap::default(),
            // "Not yet circular" sentinel until the first recompute.
            eccentricity: 1.0,
            mapping_enabled: false,
            fail: FailStatus::Nominal,
            tick_count: 0,
            running: true,
            started: Instant::now(),
        }
    }

    /// Replace the default key bindings.
    pub fn set_input_map(&mut self, input_map: InputMap) {
        self.input_map = input_map;
    }

    /// Advance the simulation by one tick and dispatch rendering.
    pub fn tick(&mut self, presenter: &mut dyn Presenter) {
        self.tick_count += 1;

        // 1. Input: edge actions fire here, held thrust is resolved below.
        for event in presenter.poll_events() {
            if event == InputEvent::Quit {
                info!(tick = self.tick_count, "quit requested");
                self.running = false;
            }
            self.keys.apply(&event);
        }
        if self.keys.any_just_released() {
            presenter.stop_sound(SoundId::Thrust);
            self.planet.set_mapping(false);
        }
        if self.input_map.just_activated(&self.keys, Action::ToggleFullscreen) {
            presenter.toggle_fullscreen();
        }
        if self.input_map.just_activated(&self.keys, Action::ClearTrail) {
            presenter.clear_trail();
        }
        if self.mapping_enabled && self.input_map.just_activated(&self.keys, Action::MapMoisture) {
            self.planet.set_mapping(true);
        }

        // 2. At most one held thruster fires per tick, fuel permitting.
        if let Some(direction) = self.input_map.resolve_thrust(&self.keys)
            && self
                .satellite
                .fire_thruster(direction, &self.config.simulation)
        {
            presenter.play_sound(SoundId::Thrust);
        }

        // 3. Bearing, then gravity.
        self.satellite.update_bearing(self.planet.position());
        self.planet
            .apply_gravity(&mut self.satellite, self.config.simulation.gravitational_constant);

        // 4. Orbit statistics.
        self.window.push(self.satellite.distance);
        if self.tick_count % self.config.simulation.eccentricity_interval_ticks() == 0 {
            if let Some(value) = orbit::eccentricity(self.window.samples()) {
                debug!(
                    tick = self.tick_count,
                    eccentricity = value,
                    samples = self.window.len(),
                    "eccentricity recomputed"
                );
                self.eccentricity = value;
            }
            self.window.clear();
        }

        // 5. Fail conditions; fuel depletion takes precedence over the
        // atmosphere check within a tick.
        let fail = if self.satellite.fuel <= 0 {
            self.satellite.fuel = 0;
            self.satellite.velocity.x = self.config.simulation.drift_velocity;
            FailStatus::FuelDepleted
        } else if self.satellite.distance <= self.config.simulation.atmosphere_floor {
            self.satellite.velocity = glam::DVec2::ZERO;
            FailStatus::AtmosphericEntry
        } else {
            FailStatus::Nominal
        };
        if fail != self.fail {
            info!(tick = self.tick_count, status = ?fail, "fail status changed");
        }
        self.fail = fail;

        // 6. Mapping eligibility: circular enough and inside the band.
        self.mapping_enabled = self.eccentricity < self.config.simulation.eccentricity_threshold
            && self.satellite.distance >= self.config.simulation.orbit_band_min
            && self.satellite.distance <= self.config.simulation.orbit_band_max;

        // 7. Entity updates.
        self.planet.rotate();
        let (from, to) = self.satellite.integrate();

        // 8. Render dispatch.
        presenter.draw_trail_segment(from, to);
        presenter.draw_entity(
            self.planet.position(),
            self.planet.angle_deg,
            self.planet.sprite_variant(),
        );
        presenter.draw_entity(
            self.satellite.position,
            self.satellite.heading_deg,
            self.satellite_variant(),
        );
        let frame = hud::build_frame(
            &self.satellite,
            self.eccentricity,
            self.fail,
            self.mapping_enabled,
            self.intro_visible(),
            &self.config.hud,
        );
        for label in &frame.labels {
            presenter.render_label(label);
        }
        for boxed in &frame.boxes {
            presenter.render_boxed_label(boxed);
        }
        presenter.draw_overlay(OverlayKind::Terminator);
        presenter.draw_overlay(OverlayKind::Border);

        // 9. Present and close out the tick.
        presenter.present_frame();
        self.keys.clear_transients();
    }

    fn satellite_variant(&self) -> SpriteVariant {
        if self.satellite.is_crashed() {
            SpriteVariant::SatelliteCrashed
        } else {
            SpriteVariant::Satellite
        }
    }

    /// Whether the intro text is still inside its wall-clock display window.
    pub fn intro_visible(&self) -> bool {
        self.started.elapsed().as_secs() < self.config.simulation.intro_secs
    }

    pub fn satellite(&self) -> &Satellite {
        &self.satellite
    }

    pub fn planet(&self) -> &Planet {
        &self.planet
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn mapping_enabled(&self) -> bool {
        self.mapping_enabled
    }

    pub fn fail_status(&self) -> FailStatus {
        self.fail
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
