/// Identity of a planet in the planet arena.
///
/// Planets are never removed, so the wrapped value is also the planet's
/// index in `SimulationState::planets()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlanetId(pub u32);

impl PlanetId {
    /// Index into the planet arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// What kind of body a render instance describes.
/// Stored as an f32 in the instance buffer so the renderer can pick a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BodyKind {
    Planet = 0,
    Satellite = 1,
    Nebula = 2,
}

impl BodyKind {
    pub fn as_f32(self) -> f32 {
        self as u8 as f32
    }
}
