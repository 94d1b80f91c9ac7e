//! Random placement of bodies, at init and when a planet is created at runtime.

use glam::DVec2;
use crate::api::config::UniverseConfig;
use crate::api::types::PlanetId;
use crate::components::nebula::Nebula;
use crate::components::planet::{CircularPath, MIN_PLANET_RADIUS};
use crate::components::satellite::Satellite;
use crate::core::state::SimulationState;
use crate::systems::planet_motion::speed_for_ordinal;
use crate::systems::rng::Rng;

/// Margin kept clear around the initial planet band.
const PLACEMENT_MARGIN: f64 = 100.0;

/// How new satellites pick their owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerRule {
    /// First `count / 3` (rounded down) go round-robin over the planets,
    /// the rest to a uniformly random planet.
    InitialSpread,
    /// Every satellite belongs to this planet.
    Attached(PlanetId),
}

impl OwnerRule {
    /// Owner for the satellite at position `i` of a batch of `count`.
    pub fn owner_for(self, i: usize, count: usize, planet_count: usize, rng: &mut Rng) -> PlanetId {
        match self {
            OwnerRule::Attached(id) => id,
            OwnerRule::InitialSpread if i < count / 3 => PlanetId((i % planet_count) as u32),
            OwnerRule::InitialSpread => PlanetId(rng.index_below(planet_count) as u32),
        }
    }
}

/// Draw a satellite with randomized size, speed and orbit radius.
pub fn random_satellite(owner: PlanetId, at: DVec2, radius_unit: f64, rng: &mut Rng) -> Satellite {
    Satellite::new(owner, at)
        .with_size(rng.range(0.5, 2.0))
        .with_speed(rng.range(0.01, 0.05))
        .with_orbit(rng.range(radius_unit * 0.7, radius_unit * 0.5))
}

/// Add `count` satellites resting at `at`, owners chosen by `rule`.
/// Does nothing when there is no planet to own them.
pub fn add_satellites(
    state: &mut SimulationState,
    count: usize,
    rule: OwnerRule,
    at: DVec2,
    radius_unit: f64,
    rng: &mut Rng,
) {
    let planet_count = state.planet_count();
    if planet_count == 0 {
        log::warn!("no planets to attach {count} satellites to");
        return;
    }
    for i in 0..count {
        let owner = rule.owner_for(i, count, planet_count, rng);
        state.add_satellite(random_satellite(owner, at, radius_unit, rng));
    }
}

/// Place the init planets in a diagonal band up and left of the center,
/// each on its own circular path.
pub fn populate_planets(state: &mut SimulationState, config: &UniverseConfig, rng: &mut Rng) {
    if config.initial_planets == 0 {
        return;
    }
    let center = config.center();
    let band = (config.width.min(config.height) - PLACEMENT_MARGIN).max(0.0);
    let sep = band / 2.0 / config.initial_planets as f64;

    for i in 0..config.initial_planets {
        let step = i as f64 * sep;
        let offset = DVec2::new(rng.range(step, sep), rng.range(step, sep));
        let pos = center - offset;
        let path = CircularPath::through(pos, center, speed_for_ordinal(i));
        state.add_planet(pos, config.initial_planet_radius, Some(path));
    }
}

/// Scatter nebulas over the viewport according to the configured density.
pub fn populate_nebulas(state: &mut SimulationState, config: &UniverseConfig, rng: &mut Rng) {
    for _ in 0..config.nebula_count() {
        let pos = DVec2::new(rng.range(0.0, config.width), rng.range(0.0, config.height));
        let min = 0.5;
        let max = rng.range(1.0, 0.6);
        let radius = rng.range(min, max - min);
        let scale_speed = rng.range(0.0, 0.04);
        state.add_nebula(Nebula::new(pos, min, max, radius, scale_speed));
    }
}

/// Create a planet at `pos` together with its attached satellites.
pub fn create_planet(
    state: &mut SimulationState,
    config: &UniverseConfig,
    rng: &mut Rng,
    pos: DVec2,
) -> PlanetId {
    let path = config.created_planets_orbit.then(|| {
        CircularPath::through(pos, config.center(), speed_for_ordinal(state.planet_count()))
    });
    let id = state.add_planet(pos, MIN_PLANET_RADIUS, path);
    add_satellites(
        state,
        config.satellites_per_planet,
        OwnerRule::Attached(id),
        pos,
        config.radius_unit,
        rng,
    );
    log::debug!("planet {} created at ({:.1}, {:.1})", id.0, pos.x, pos.y);
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_planets(n: usize) -> SimulationState {
        let mut state = SimulationState::new();
        for _ in 0..n {
            state.add_planet(DVec2::ZERO, 10.0, None);
        }
        state
    }

    #[test]
    fn first_third_round_robin() {
        let mut state = state_with_planets(3);
        let mut rng = Rng::new(1);
        add_satellites(&mut state, 20, OwnerRule::InitialSpread, DVec2::ZERO, 70.0, &mut rng);

        assert_eq!(state.satellite_count(), 20);
        let owners: Vec<u32> = state.satellites()[..6].iter().map(|s| s.owner.0).collect();
        assert_eq!(owners, vec![0, 1, 2, 0, 1, 2]);
        assert!(state.satellites().iter().all(|s| s.owner.index() < 3));
    }

    #[test]
    fn random_rest_uses_every_planet() {
        let mut state = state_with_planets(3);
        let mut rng = Rng::new(5);
        add_satellites(&mut state, 300, OwnerRule::InitialSpread, DVec2::ZERO, 70.0, &mut rng);

        for id in 0..3 {
            let owned = state.satellites()[100..]
                .iter()
                .filter(|s| s.owner == PlanetId(id))
                .count();
            assert!(owned > 30, "planet {id} only got {owned}");
        }
    }

    #[test]
    fn attached_rule_uses_one_planet() {
        let mut state = state_with_planets(4);
        let mut rng = Rng::new(3);
        add_satellites(&mut state, 5, OwnerRule::Attached(PlanetId(2)), DVec2::ZERO, 70.0, &mut rng);

        assert!(state.satellites().iter().all(|s| s.owner == PlanetId(2)));
    }

    #[test]
    fn no_planets_means_no_satellites() {
        let mut state = SimulationState::new();
        let mut rng = Rng::new(3);
        add_satellites(&mut state, 5, OwnerRule::InitialSpread, DVec2::ZERO, 70.0, &mut rng);
        assert_eq!(state.satellite_count(), 0);
    }

    #[test]
    fn satellite_parameters_in_range() {
        let mut rng = Rng::new(11);
        for _ in 0..500 {
            let s = random_satellite(PlanetId(0), DVec2::ZERO, 70.0, &mut rng);
            assert!(s.size >= 0.5 && s.size <= 2.5);
            assert!(s.speed >= 0.01 && s.speed <= 0.06);
            assert!(s.orbit >= 49.0 && s.orbit <= 84.0);
        }
    }

    #[test]
    fn init_planets_sit_on_their_paths() {
        let config = UniverseConfig::default();
        let mut state = SimulationState::new();
        let mut rng = Rng::new(config.seed);
        populate_planets(&mut state, &config, &mut rng);

        assert_eq!(state.planet_count(), 3);
        for (i, p) in state.planets().iter().enumerate() {
            let path = p.path.expect("init planets move");
            assert_eq!(path.speed, speed_for_ordinal(i));
            assert!((p.pos.distance(config.center()) - path.radius).abs() < 1e-9);
            assert_eq!(p.radius, config.initial_planet_radius);
        }
    }

    #[test]
    fn nebulas_start_inside_bounds() {
        let config = UniverseConfig::default();
        let mut state = SimulationState::new();
        let mut rng = Rng::new(config.seed);
        populate_nebulas(&mut state, &config, &mut rng);

        assert_eq!(state.nebula_count(), config.nebula_count());
        for n in state.nebulas() {
            assert!(n.radius >= n.min_radius && n.radius <= n.max_radius);
            assert!(n.pos.x >= 0.0 && n.pos.x <= config.width);
            assert!(n.scale_speed >= 0.0 && n.scale_speed <= 0.04);
        }
    }

    #[test]
    fn created_planet_brings_its_satellites() {
        let config = UniverseConfig::default();
        let mut state = state_with_planets(3);
        let mut rng = Rng::new(8);
        let pos = DVec2::new(120.0, 90.0);
        let id = create_planet(&mut state, &config, &mut rng, pos);

        assert_eq!(id, PlanetId(3));
        assert_eq!(state.satellites_of(id).count(), config.satellites_per_planet);
        let planet = state.planet(id).unwrap();
        assert_eq!(planet.radius, MIN_PLANET_RADIUS);
        assert_eq!(planet.path.map(|p| p.speed), Some(speed_for_ordinal(3)));
        assert!(state.satellites().iter().all(|s| s.anchor == pos));
    }

    #[test]
    fn created_planet_can_stay_put() {
        let config = UniverseConfig {
            created_planets_orbit: false,
            ..Default::default()
        };
        let mut state = SimulationState::new();
        let mut rng = Rng::new(8);
        let id = create_planet(&mut state, &config, &mut rng, DVec2::new(5.0, 5.0));
        assert!(state.planet(id).unwrap().path.is_none());
    }
}
