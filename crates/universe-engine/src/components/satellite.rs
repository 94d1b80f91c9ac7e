use glam::DVec2;
use crate::api::types::PlanetId;

/// A particle circling whichever planet currently owns it.
#[derive(Debug, Clone)]
pub struct Satellite {
    /// Owning planet. Always a live planet.
    pub owner: PlanetId,
    /// Distance from the anchor.
    pub orbit: f64,
    /// Angular speed per tick; also the gain pulling the anchor to the owner.
    pub speed: f64,
    /// Phase accumulators, one per axis.
    pub offset: DVec2,
    /// Smoothed point trailing the owner's position.
    pub anchor: DVec2,
    /// Displayed position, recomputed every tick.
    pub pos: DVec2,
    /// Display radius.
    pub size: f64,
}

impl Satellite {
    /// A satellite owned by `owner`, resting at `at` until its first tick.
    pub fn new(owner: PlanetId, at: DVec2) -> Self {
        Self {
            owner,
            orbit: 0.0,
            speed: 0.0,
            offset: DVec2::ZERO,
            anchor: at,
            pos: at,
            size: 1.0,
        }
    }

    pub fn with_orbit(mut self, orbit: f64) -> Self {
        self.orbit = orbit;
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }
}
