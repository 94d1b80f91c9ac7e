//! Satellite motion and capture.
//!
//! Each tick a satellite spins its phase, drags its anchor towards the owning
//! planet, places itself on a circle around that anchor and then checks whether
//! another planet is close enough to steal it.

use glam::DVec2;
use crate::api::types::PlanetId;
use crate::components::planet::Planet;
use crate::components::satellite::Satellite;
use crate::systems::geometry::{approach, distance, point_on_circle};

/// Advance every satellite by one tick.
///
/// `planets` is only read. The satellite's index in the slice offsets its phase
/// so satellites with identical parameters do not overlap.
pub fn update_satellites(satellites: &mut [Satellite], planets: &[Planet], threshold: f64) {
    for (i, sat) in satellites.iter_mut().enumerate() {
        let owner_pos = planets[sat.owner.index()].pos;

        sat.offset += DVec2::splat(sat.speed);
        sat.anchor = approach(sat.anchor, owner_pos, sat.speed);
        sat.pos = point_on_circle(sat.anchor, DVec2::splat(i as f64) + sat.offset, sat.orbit);

        reassign_owner(sat, planets, threshold);
    }
}

/// Hand the satellite to any other planet that is nearer than its owner and
/// inside `threshold`.
///
/// Planets are scanned in arena order without stopping at the first hit, and the
/// owner distance is re-read after every switch, so the last planet to qualify
/// keeps the satellite. Returns the new owner if ownership changed.
pub fn reassign_owner(sat: &mut Satellite, planets: &[Planet], threshold: f64) -> Option<PlanetId> {
    let previous = sat.owner;

    for candidate in planets {
        if candidate.id == sat.owner {
            continue;
        }
        let d1 = distance(candidate.pos, sat.pos);
        let d2 = distance(planets[sat.owner.index()].pos, sat.pos);

        if d1 < d2 && d1 < threshold {
            sat.owner = candidate.id;
        }
    }

    if sat.owner != previous {
        log::trace!("satellite captured: planet {} -> {}", previous.0, sat.owner.0);
        Some(sat.owner)
    } else {
        None
    }
}
