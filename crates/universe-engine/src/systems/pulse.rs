//! Nebula size oscillation: a triangle wave between each nebula's bounds.

use crate::components::nebula::Nebula;

/// Grow or shrink every nebula by its scale speed, reflecting at the bounds.
pub fn pulse_nebulas(nebulas: &mut [Nebula]) {
    for n in nebulas.iter_mut() {
        n.radius += n.scale_speed;

        if n.radius >= n.max_radius || n.radius <= n.min_radius {
            n.scale_speed = -n.scale_speed;
            n.radius = n.radius.clamp(n.min_radius, n.max_radius);
        }
    }
}
