use glam::DVec2;
use crate::api::config::UniverseConfig;
use crate::api::error::ConfigError;
use crate::api::types::PlanetId;
use crate::core::state::SimulationState;
use crate::systems::growth::update_planet_radii;
use crate::systems::orbit::update_satellites;
use crate::systems::planet_motion::move_planets;
use crate::systems::pulse::pulse_nebulas;
use crate::systems::rng::Rng;
use crate::systems::spawn::{self, OwnerRule};

/// A running simulation: configuration, bodies and the random source.
///
/// Everything the tick touches lives here; there is no global state.
pub struct Universe {
    config: UniverseConfig,
    state: SimulationState,
    rng: Rng,
    ticks: u64,
}

impl Universe {
    /// Validate `config` and populate the initial planets, satellites and nebulas.
    pub fn new(config: UniverseConfig) -> Result<Self, ConfigError> {
        let mut universe = Self::empty(config)?;
        universe.populate();
        log::info!(
            "universe ready: {} planets, {} satellites, {} nebulas (seed {})",
            universe.state.planet_count(),
            universe.state.satellite_count(),
            universe.state.nebula_count(),
            universe.config.seed,
        );
        Ok(universe)
    }

    /// Parse a JSON config and build the universe from it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::new(UniverseConfig::from_json(json)?)
    }

    /// Validate `config` but start with no bodies at all.
    pub fn empty(config: UniverseConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = SimulationState::with_capacity(
            config.initial_planets.max(8),
            config.initial_satellites.max(64),
            config.nebula_count(),
        );
        Ok(Self {
            rng: Rng::new(config.seed),
            config,
            state,
            ticks: 0,
        })
    }

    fn populate(&mut self) {
        spawn::populate_planets(&mut self.state, &self.config, &mut self.rng);
        spawn::add_satellites(
            &mut self.state,
            self.config.initial_satellites,
            OwnerRule::InitialSpread,
            self.config.center(),
            self.config.radius_unit,
            &mut self.rng,
        );
        spawn::populate_nebulas(&mut self.state, &self.config, &mut self.rng);
    }

    /// Run one tick: satellites, nebulas, planet sizes, planet motion.
    pub fn advance(&mut self) {
        let center = self.config.center();
        let threshold = self.config.gravitation_threshold;
        let (planets, satellites, nebulas) = self.state.split_mut();

        update_satellites(satellites, planets, threshold);
        pulse_nebulas(nebulas);
        update_planet_radii(planets, satellites);
        move_planets(planets, center);

        self.ticks += 1;
    }

    /// Add a planet at (x, y) with its own satellites. Returns the new planet's id,
    /// or `None` (and changes nothing) for a non-finite point.
    pub fn create_planet_at(&mut self, x: f64, y: f64) -> Option<PlanetId> {
        if !x.is_finite() || !y.is_finite() {
            log::warn!("ignoring planet at ({x}, {y})");
            return None;
        }
        Some(spawn::create_planet(&mut self.state, &self.config, &mut self.rng, DVec2::new(x, y)))
    }

    /// Change the viewport. Planets re-center on the next tick.
    /// Returns false (and changes nothing) for non-positive or non-finite sizes.
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            log::warn!("ignoring resize to {width}x{height}");
            return false;
        }
        self.config.width = width;
        self.config.height = height;
        log::debug!("viewport resized to {width}x{height}");
        true
    }

    /// Shared center the planets circle.
    pub fn center(&self) -> DVec2 {
        self.config.center()
    }

    pub fn config(&self) -> &UniverseConfig {
        &self.config
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Ticks run so far.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }
}
