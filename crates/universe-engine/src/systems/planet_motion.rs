//! Planets circle the shared center at their own fixed speed and distance.

use std::f64::consts::PI;
use glam::DVec2;
use crate::components::planet::{CircularPath, Planet};

/// Divisor turning a planet's speed factor into radians per tick.
pub const ANGLE_SCALE: f64 = 20000.0;

/// Speed factor of the first planet.
pub const BASE_PLANET_SPEED: f64 = 6.43;

/// Extra speed factor for each planet created after the first.
pub const PLANET_SPEED_STEP: f64 = 5.0;

/// Speed factor for the planet with the given creation ordinal.
/// Later planets move faster.
pub fn speed_for_ordinal(ordinal: usize) -> f64 {
    BASE_PLANET_SPEED + ordinal as f64 * PLANET_SPEED_STEP
}

/// World position on a path for the given center.
pub fn position_on_path(path: &CircularPath, center: DVec2) -> DVec2 {
    center - DVec2::new(path.angle.cos(), path.angle.sin()) * path.radius
}

/// Step every moving planet one tick along its path.
/// Positions are recomputed from the angle, never accumulated.
pub fn move_planets(planets: &mut [Planet], center: DVec2) {
    for planet in planets.iter_mut() {
        if let Some(path) = planet.path.as_mut() {
            path.angle += PI * path.speed / ANGLE_SCALE;
            planet.pos = position_on_path(path, center);
        }
    }
}
