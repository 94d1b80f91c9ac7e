//! Planet size feedback: planets swell towards the number of satellites they own.

use crate::components::planet::{Planet, MIN_PLANET_RADIUS};
use crate::components::satellite::Satellite;

/// Fraction of the gap between radius and satellite count closed per tick.
pub const GROWTH_RATE: f64 = 0.025;

/// Number of satellites owned by each planet, indexed by planet arena index.
pub fn satellite_counts(planet_count: usize, satellites: &[Satellite]) -> Vec<usize> {
    let mut counts = vec![0; planet_count];
    for sat in satellites {
        if let Some(count) = counts.get_mut(sat.owner.index()) {
            *count += 1;
        }
    }
    counts
}

/// Ease each planet's radius towards its satellite count, never below the minimum.
pub fn update_planet_radii(planets: &mut [Planet], satellites: &[Satellite]) {
    let counts = satellite_counts(planets.len(), satellites);
    for planet in planets.iter_mut() {
        let neighbors = counts[planet.id.index()] as f64;
        planet.radius += (neighbors - planet.radius) * GROWTH_RATE;
        planet.radius = planet.radius.max(MIN_PLANET_RADIUS);
    }
}
