//! Satellite entity: thrusters, fuel, bearing, and crash state.

use glam::DVec2;
use orbiter_config::{SatelliteConfig, SimulationConfig};
use orbiter_input::ThrustDirection;
use rand::Rng;

/// Runtime satellite state.
///
/// Position and velocity are screen-space (+y down). Heading and distance are
/// derived each tick from the planet's position. The crash state is not a
/// separate flag: a satellite whose velocity is exactly zero has been stopped
/// by atmospheric entry and renders as burning.
#[derive(Debug, Clone)]
pub struct Satellite {
    /// Position in screen coordinates.
    pub position: DVec2,
    /// Velocity per tick.
    pub velocity: DVec2,
    /// Remaining fuel units; clamped at 0, never negative.
    pub fuel: i32,
    /// Satellite mass.
    pub mass: f64,
    /// Dish orientation toward the planet, degrees in `[-180, 180)`.
    pub heading_deg: f64,
    /// Distance to the planet center.
    pub distance: f64,
}

impl Satellite {
    /// Spawn with a randomized insertion state: position inside the spawn
    /// box, full tangential velocity in a random direction, full tank.
    pub fn spawn(config: &SatelliteConfig, rng: &mut impl Rng) -> Self {
        let speed = if rng.gen_bool(0.5) {
            config.spawn_speed
        } else {
            -config.spawn_speed
        };
        Self {
            position: DVec2::new(
                rng.gen_range(config.spawn_x_min..config.spawn_x_max),
                rng.gen_range(config.spawn_y_min..config.spawn_y_max),
            ),
            velocity: DVec2::new(speed, 0.0),
            fuel: config.initial_fuel,
            mass: config.mass,
            heading_deg: 0.0,
            distance: 0.0,
        }
    }

    /// Fire one thruster for this tick.
    ///
    /// Fuel-gated: with an empty tank this is a no-op returning `false`.
    /// Otherwise the velocity changes by the thrust increment along the
    /// chosen axis, fuel drops by the per-activation cost (clamped at 0),
    /// and the caller should play the thrust sound.
    pub fn fire_thruster(&mut self, direction: ThrustDirection, config: &SimulationConfig) -> bool {
        if self.fuel <= 0 {
            return false;
        }
        self.velocity += thrust_delta(direction, config.thrust_increment);
        self.fuel = (self.fuel - config.thrust_fuel_cost).max(0);
        true
    }

    /// Recompute heading and distance to the planet.
    pub fn update_bearing(&mut self, planet_position: DVec2) {
        let (heading, distance) = orbiter_math::heading_and_distance(self.position, planet_position);
        self.heading_deg = heading;
        self.distance = distance;
    }

    /// Advance position by one tick of velocity.
    ///
    /// Returns the traversed `(from, to)` segment for trail rendering.
    pub fn integrate(&mut self) -> (DVec2, DVec2) {
        let from = self.position;
        self.position += self.velocity;
        (from, self.position)
    }

    /// A satellite stopped dead has burned up in the atmosphere.
    pub fn is_crashed(&self) -> bool {
        self.velocity == DVec2::ZERO
    }
}

/// Velocity change for one thruster activation.
///
/// Screen coordinates: up is −y.
fn thrust_delta(direction: ThrustDirection, increment: f64) -> DVec2 {
    match direction {
        ThrustDirection::Right => DVec2::new(increment, 0.0),
        ThrustDirection::Left => DVec2::new(-increment, 0.0),
        ThrustDirection::Up => DVec2::new(0.0, -increment),
        ThrustDirection::Down => DVec2::new(0.0, increment),
    }
}
