use glam::DVec2;
use crate::api::types::PlanetId;

/// Smallest radius a planet can shrink to.
pub const MIN_PLANET_RADIUS: f64 = 2.0;

/// Circular path around the shared center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularPath {
    /// Angular position in radians. Grows without bound.
    pub angle: f64,
    /// Angular speed factor, fixed at creation.
    pub speed: f64,
    /// Distance from the shared center, fixed at creation.
    pub radius: f64,
}

impl CircularPath {
    /// Path whose angle puts the body exactly at `pos` for the given center.
    /// Positions are derived as `center - (cos, sin) * radius`, so the angle
    /// is measured from the body towards the center.
    pub fn through(pos: DVec2, center: DVec2, speed: f64) -> Self {
        let to_center = center - pos;
        Self {
            angle: to_center.y.atan2(to_center.x),
            speed,
            radius: to_center.length(),
        }
    }
}

/// An orbiting body that satellites attach to.
#[derive(Debug, Clone)]
pub struct Planet {
    pub id: PlanetId,
    /// Position in world space.
    pub pos: DVec2,
    /// Rendered radius, driven by how many satellites the planet owns.
    pub radius: f64,
    /// Circular motion; `None` keeps the planet where it was placed.
    pub path: Option<CircularPath>,
}

impl Planet {
    pub fn new(id: PlanetId) -> Self {
        Self {
            id,
            pos: DVec2::ZERO,
            radius: MIN_PLANET_RADIUS,
            path: None,
        }
    }

    // -- Builder pattern --

    pub fn with_pos(mut self, pos: DVec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius.max(MIN_PLANET_RADIUS);
        self
    }

    pub fn with_path(mut self, path: CircularPath) -> Self {
        self.path = Some(path);
        self
    }
}
