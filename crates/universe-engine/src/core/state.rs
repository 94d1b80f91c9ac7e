use glam::DVec2;
use crate::api::types::PlanetId;
use crate::components::nebula::Nebula;
use crate::components::planet::{CircularPath, Planet};
use crate::components::satellite::Satellite;

/// All simulated bodies, stored in flat Vecs.
///
/// Planets form an arena: a planet's `PlanetId` is its index and planets are
/// never removed, so every id handed out stays valid for the whole run.
pub struct SimulationState {
    planets: Vec<Planet>,
    satellites: Vec<Satellite>,
    nebulas: Vec<Nebula>,
}

impl SimulationState {
    pub fn new() -> Self {
        Self::with_capacity(8, 64, 64)
    }

    /// Create a state with room for the given entity counts.
    pub fn with_capacity(planets: usize, satellites: usize, nebulas: usize) -> Self {
        Self {
            planets: Vec::with_capacity(planets),
            satellites: Vec::with_capacity(satellites),
            nebulas: Vec::with_capacity(nebulas),
        }
    }

    /// Add a planet at `pos`. Returns its id.
    pub fn add_planet(&mut self, pos: DVec2, radius: f64, path: Option<CircularPath>) -> PlanetId {
        let id = PlanetId(self.planets.len() as u32);
        let mut planet = Planet::new(id).with_pos(pos).with_radius(radius);
        planet.path = path;
        self.planets.push(planet);
        id
    }

    /// Add a satellite. Returns its index, or `None` if its owner is not a
    /// live planet (the satellite is dropped).
    pub fn add_satellite(&mut self, satellite: Satellite) -> Option<usize> {
        if !self.contains_planet(satellite.owner) {
            log::warn!("rejected satellite owned by unknown planet {}", satellite.owner.0);
            return None;
        }
        self.satellites.push(satellite);
        Some(self.satellites.len() - 1)
    }

    pub fn add_nebula(&mut self, nebula: Nebula) {
        self.nebulas.push(nebula);
    }

    /// Whether `id` names a planet in this state.
    pub fn contains_planet(&self, id: PlanetId) -> bool {
        id.index() < self.planets.len()
    }

    /// Get a planet by id.
    pub fn planet(&self, id: PlanetId) -> Option<&Planet> {
        self.planets.get(id.index())
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn satellites(&self) -> &[Satellite] {
        &self.satellites
    }

    pub fn nebulas(&self) -> &[Nebula] {
        &self.nebulas
    }

    /// Satellites currently owned by `id`.
    pub fn satellites_of(&self, id: PlanetId) -> impl Iterator<Item = &Satellite> {
        self.satellites.iter().filter(move |s| s.owner == id)
    }

    /// Mutable views of all three collections at once, for the tick systems.
    /// The Vecs themselves stay private so nothing can remove a planet.
    pub fn split_mut(&mut self) -> (&mut [Planet], &mut [Satellite], &mut [Nebula]) {
        (&mut self.planets, &mut self.satellites, &mut self.nebulas)
    }

    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }

    pub fn satellite_count(&self) -> usize {
        self.satellites.len()
    }

    pub fn nebula_count(&self) -> usize {
        self.nebulas.len()
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}
