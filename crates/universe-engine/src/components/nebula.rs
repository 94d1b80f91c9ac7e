use glam::DVec2;

/// Background particle pulsing between two radii.
#[derive(Debug, Clone)]
pub struct Nebula {
    pub pos: DVec2,
    pub radius: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    /// Signed growth per tick. Flips at the bounds.
    pub scale_speed: f64,
}

impl Nebula {
    /// Create a nebula; `radius` is clamped into `[min_radius, max_radius]`.
    pub fn new(pos: DVec2, min_radius: f64, max_radius: f64, radius: f64, scale_speed: f64) -> Self {
        let max_radius = max_radius.max(min_radius);
        Self {
            pos,
            radius: radius.clamp(min_radius, max_radius),
            min_radius,
            max_radius,
            scale_speed,
        }
    }
}
