//! Planet entity: fixed body, cosmetic rotation, gravity field.

use glam::DVec2;
use orbiter_config::PlanetConfig;
use orbiter_render::SpriteVariant;

use crate::satellite::Satellite;

/// The planet. Position and mass never change after construction; the
/// rotation angle and mapping flag only affect rendering.
#[derive(Debug, Clone)]
pub struct Planet {
    position: DVec2,
    mass: f64,
    /// Unbounded rotation angle; the renderer wraps it periodically.
    pub angle_deg: f64,
    rotate_step_deg: f64,
    mapping: bool,
}

impl Planet {
    pub fn new(config: &PlanetConfig) -> Self {
        Self {
            position: DVec2::new(config.x, config.y),
            mass: config.mass,
            angle_deg: 0.0,
            rotate_step_deg: config.rotate_step_deg,
            mapping: false,
        }
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Advance the cosmetic rotation by one tick.
    pub fn rotate(&mut self) {
        self.angle_deg += self.rotate_step_deg;
    }

    /// Pull the satellite: add this tick's gravitational force to its
    /// velocity.
    pub fn apply_gravity(&self, satellite: &mut Satellite, g: f64) {
        let force = orbiter_math::gravity_force(
            satellite.position,
            satellite.mass,
            self.position,
            self.mass,
            g,
        );
        satellite.velocity += force;
    }

    /// Switch between the normal and soil-moisture textures. Cosmetic only.
    pub fn set_mapping(&mut self, enabled: bool) {
        self.mapping = enabled;
    }

    pub fn is_mapping(&self) -> bool {
        self.mapping
    }

    /// Which texture the renderer should draw this tick.
    pub fn sprite_variant(&self) -> SpriteVariant {
        if self.mapping {
            SpriteVariant::PlanetMoisture
        } else {
            SpriteVariant::Planet
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_planet() -> Planet {
        Planet::new(&PlanetConfig::default())
    }

    fn test_satellite(position: DVec2) -> Satellite {
        Satellite {
            position,
            velocity: DVec2::ZERO,
            fuel: 100,
            mass: 1.0,
            heading_deg: 0.0,
            distance: 0.0,
        }
    }

    #[test]
    fn test_rotation_accumulates() {
        let mut planet = test_planet();
        let step = planet.rotate_step_deg;
        for _ in 0..10 {
            planet.rotate();
        }
        assert!((planet.angle_deg - 10.0 * step).abs() < 1e-9);
    }

    #[test]
    fn test_gravity_accelerates_toward_planet() {
        let planet = test_planet();
        // Satellite straight above the planet center.
        let mut sat = test_satellite(DVec2::new(400.0, 200.0));
        planet.apply_gravity(&mut sat, 1.0);
        assert_eq!(sat.velocity.x, 0.0);
        assert!(sat.velocity.y > 0.0, "pull is toward +y");
        // d = 120: expected magnitude G·m·M/d².
        let expected = 2000.0 / (120.0 * 120.0);
        assert!((sat.velocity.y - expected).abs() < 1e-12);
    }

    #[test]
    fn test_gravity_has_no_other_side_effects() {
        let planet = test_planet();
        let mut sat = test_satellite(DVec2::new(300.0, 300.0));
        let position_before = sat.position;
        let fuel_before = sat.fuel;
        planet.apply_gravity(&mut sat, 1.0);
        assert_eq!(sat.position, position_before);
        assert_eq!(sat.fuel, fuel_before);
    }

    #[test]
    fn test_mapping_flag_drives_sprite_variant() {
        let mut planet = test_planet();
        assert_eq!(planet.sprite_variant(), SpriteVariant::Planet);
        planet.set_mapping(true);
        assert_eq!(planet.sprite_variant(), SpriteVariant::PlanetMoisture);
        planet.set_mapping(false);
        assert_eq!(planet.sprite_variant(), SpriteVariant::Planet);
    }
}
