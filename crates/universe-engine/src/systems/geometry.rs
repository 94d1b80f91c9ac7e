//! Distance and position helpers shared by the systems.

use glam::DVec2;

/// Euclidean distance between two points.
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    a.distance(b)
}

/// Point on a circle of `radius` around `center`, with independent phases per axis.
/// Equal phases give a circle; the orbit engine relies on that.
pub fn point_on_circle(center: DVec2, phase: DVec2, radius: f64) -> DVec2 {
    center + DVec2::new(phase.x.cos(), phase.y.sin()) * radius
}

/// Move `current` towards `target` by `gain` of the remaining gap.
pub fn approach(current: DVec2, target: DVec2, gain: f64) -> DVec2 {
    current + (target - current) * gain
}
