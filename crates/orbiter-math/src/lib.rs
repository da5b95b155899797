//! 2D orbital math shared by the simulation core.
//!
//! All positions are screen-space: +x right, +y down, distances in the game's
//! altitude units ("miles"). Angles are degrees under the sprite convention
//! that a heading of 0° leaves the satellite dish facing its default
//! direction; [`heading_and_distance`] bakes in the −90° offset that points
//! the dish at the planet.

use glam::DVec2;

/// Minimum separation used by the gravity calculation.
///
/// The atmosphere floor ends a run long before two bodies can overlap, so a
/// distance at or below this value is a broken invariant upstream. Clamping
/// keeps the inverse-square term finite instead of producing NaN velocities.
pub const MIN_GRAVITY_DISTANCE: f64 = 1e-6;

/// Wrap an angle in degrees into `[-180, 180)`.
pub fn normalize_heading(degrees: f64) -> f64 {
    (degrees + 180.0).rem_euclid(360.0) - 180.0
}

/// Heading and distance from a satellite to the planet it orbits.
///
/// Distance is the Euclidean norm of the separation. Heading is
/// `atan2(dx, dy)` of the satellite-minus-planet offset in degrees, rotated
/// −90° so the rendered dish faces the planet, normalized to `[-180, 180)`.
pub fn heading_and_distance(satellite: DVec2, planet: DVec2) -> (f64, f64) {
    let offset = satellite - planet;
    let distance = offset.length();
    let heading = normalize_heading(offset.x.atan2(offset.y).to_degrees() - 90.0);
    (heading, distance)
}

/// Gravitational force on the satellite, pointing toward the planet.
///
/// Inverse-square law: `g · m_sat · m_planet / d²` along the unit vector from
/// satellite to planet. `g` is the game's balance constant, not a physical
/// one. A degenerate (near-zero) separation is clamped to
/// [`MIN_GRAVITY_DISTANCE`]; it cannot occur while the atmosphere-floor check
/// runs every tick.
pub fn gravity_force(
    satellite: DVec2,
    satellite_mass: f64,
    planet: DVec2,
    planet_mass: f64,
    g: f64,
) -> DVec2 {
    let offset = planet - satellite;
    let distance = offset.length();
    debug_assert!(
        distance > MIN_GRAVITY_DISTANCE,
        "degenerate satellite/planet separation: {distance}"
    );
    let distance = distance.max(MIN_GRAVITY_DISTANCE);
    let direction = offset / distance;
    direction * (g * satellite_mass * planet_mass / (distance * distance))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_euclidean_norm() {
        let (_, distance) = heading_and_distance(DVec2::new(403.0, 324.0), DVec2::new(400.0, 320.0));
        assert!((distance - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_heading_always_in_half_open_range() {
        let planet = DVec2::new(400.0, 320.0);
        for i in 0..360 {
            let angle = f64::from(i).to_radians();
            let satellite = planet + DVec2::new(angle.cos(), angle.sin()) * 150.0;
            let (heading, _) = heading_and_distance(satellite, planet);
            assert!(
                (-180.0..180.0).contains(&heading),
                "heading {heading} out of range at sample {i}"
            );
        }
    }

    #[test]
    fn test_heading_matches_dish_convention() {
        let planet = DVec2::new(400.0, 320.0);
        // Satellite directly above the planet (smaller y on a y-down screen):
        // offset (0, -d), atan2(0, -d) = 180°, minus the dish offset = 90°.
        let (heading, _) = heading_and_distance(DVec2::new(400.0, 200.0), planet);
        assert!((heading - 90.0).abs() < 1e-9);

        // Directly to the right: offset (d, 0), atan2(d, 0) = 90°, dish at 0°.
        let (heading, _) = heading_and_distance(DVec2::new(520.0, 320.0), planet);
        assert!(heading.abs() < 1e-9);
    }

    #[test]
    fn test_normalize_heading_wraps_both_directions() {
        assert!((normalize_heading(-270.0) - 90.0).abs() < 1e-12);
        assert_eq!(normalize_heading(540.0), -180.0);
        assert_eq!(normalize_heading(180.0), -180.0);
        assert_eq!(normalize_heading(-180.0), -180.0);
    }

    #[test]
    fn test_gravity_points_toward_planet() {
        let force = gravity_force(
            DVec2::new(400.0, 200.0),
            1.0,
            DVec2::new(400.0, 320.0),
            2000.0,
            1.0,
        );
        assert!(force.x.abs() < 1e-12);
        assert!(force.y > 0.0, "planet below the satellite pulls +y");
    }

    #[test]
    fn test_gravity_inverse_square_falloff() {
        let planet = DVec2::ZERO;
        let near = gravity_force(DVec2::new(100.0, 0.0), 1.0, planet, 2000.0, 1.0);
        let far = gravity_force(DVec2::new(200.0, 0.0), 1.0, planet, 2000.0, 1.0);
        // Doubling the distance quarters the magnitude.
        assert!((near.length() / far.length() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_gravity_magnitude_formula() {
        let force = gravity_force(DVec2::new(120.0, 0.0), 1.0, DVec2::ZERO, 2000.0, 1.0);
        let expected = 1.0 * 1.0 * 2000.0 / (120.0 * 120.0);
        assert!((force.length() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_zero_planet_mass_disables_gravity() {
        let force = gravity_force(DVec2::new(100.0, 50.0), 1.0, DVec2::ZERO, 0.0, 1.0);
        assert_eq!(force, DVec2::ZERO);
    }
}
