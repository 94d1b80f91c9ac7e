use glam::DVec2;
use serde::Deserialize;

use crate::api::error::ConfigError;

/// Upper bound on any entity count a config may ask for.
pub const MAX_BODIES: usize = 100_000;

/// Configuration for a universe run.
///
/// Every field has a default, so a JSON document only needs to carry the
/// values it overrides: `{"width": 1280, "height": 720}` is a complete config.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UniverseConfig {
    /// Viewport width in world units (default: 800).
    pub width: f64,
    /// Viewport height in world units (default: 600).
    pub height: f64,
    /// Base unit for satellite orbit radii (default: 70).
    /// Satellites orbit at `0.7 * unit .. 1.2 * unit`.
    pub radius_unit: f64,
    /// Wall-clock milliseconds between ticks (default: 20).
    pub tick_interval_ms: f64,
    /// Satellites spawned at init (default: 20).
    pub initial_satellites: usize,
    /// Planets spawned at init (default: 3).
    pub initial_planets: usize,
    /// Viewport area per nebula (default: 20000).
    pub nebula_density: f64,
    /// A satellite can only be captured by a planet closer than this (default: 40).
    pub gravitation_threshold: f64,
    /// Satellites attached to each planet created with `create_planet_at` (default: 5).
    pub satellites_per_planet: usize,
    /// Starting radius of init planets (default: 10).
    pub initial_planet_radius: f64,
    /// Whether planets created at runtime follow a circular path (default: true).
    pub created_planets_orbit: bool,
    /// RNG seed (default: 42).
    pub seed: u64,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            radius_unit: 70.0,
            tick_interval_ms: 20.0,
            initial_satellites: 20,
            initial_planets: 3,
            nebula_density: 20000.0,
            gravitation_threshold: 40.0,
            satellites_per_planet: 5,
            initial_planet_radius: 10.0,
            created_planets_orbit: true,
            seed: 42,
        }
    }
}

impl UniverseConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: UniverseConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every numeric field. Called by `Universe::new`, so a bad config
    /// never reaches the tick loop.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("radius_unit", self.radius_unit)?;
        positive("tick_interval_ms", self.tick_interval_ms)?;
        positive("nebula_density", self.nebula_density)?;
        non_negative("gravitation_threshold", self.gravitation_threshold)?;
        non_negative("initial_planet_radius", self.initial_planet_radius)?;

        if self.initial_planets == 0 && self.initial_satellites > 0 {
            return Err(ConfigError::NoPlanetsForSatellites {
                satellites: self.initial_satellites,
            });
        }

        at_most("initial_planets", self.initial_planets as f64)?;
        at_most("initial_satellites", self.initial_satellites as f64)?;
        at_most("satellites_per_planet", self.satellites_per_planet as f64)?;
        let nebulas = self.width * self.height / self.nebula_density;
        if !nebulas.is_finite() {
            return Err(ConfigError::NotFinite { field: "nebula count" });
        }
        at_most("nebula count", nebulas.floor())?;
        Ok(())
    }

    /// Shared center every planet circles around.
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Number of nebulas for the current viewport.
    pub fn nebula_count(&self) -> usize {
        (self.width * self.height / self.nebula_density).floor() as usize
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn at_most(field: &'static str, count: f64) -> Result<(), ConfigError> {
    if count <= MAX_BODIES as f64 {
        Ok(())
    } else {
        Err(ConfigError::TooMany { field, count, max: MAX_BODIES })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(UniverseConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = UniverseConfig::from_json(r#"{ "width": 1280, "height": 720 }"#).unwrap();
        assert_eq!(config.width, 1280.0);
        assert_eq!(config.initial_planets, 3);
        assert_eq!(config.gravitation_threshold, 40.0);
    }

    #[test]
    fn rejects_zero_tick_interval() {
        let err = UniverseConfig::from_json(r#"{ "tick_interval_ms": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonPositive { field: "tick_interval_ms", .. }
        ));
    }

    #[test]
    fn rejects_negative_threshold() {
        let config = UniverseConfig {
            gravitation_threshold: -5.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative { field: "gravitation_threshold", .. })
        ));
    }

    #[test]
    fn rejects_nan() {
        let config = UniverseConfig {
            radius_unit: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite { field: "radius_unit" })
        ));
    }

    #[test]
    fn satellites_need_a_planet() {
        let config = UniverseConfig {
            initial_planets: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NoPlanetsForSatellites { satellites: 20 })
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = UniverseConfig::from_json("{ width: }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn nebula_count_follows_density() {
        let config = UniverseConfig {
            width: 1000.0,
            height: 500.0,
            nebula_density: 20000.0,
            ..Default::default()
        };
        assert_eq!(config.nebula_count(), 25);
    }

    #[test]
    fn huge_viewport_is_rejected() {
        let config = UniverseConfig {
            width: 1e200,
            height: 1e200,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite { field: "nebula count" })
        ));
    }

    #[test]
    fn tiny_density_is_rejected() {
        let config = UniverseConfig {
            nebula_density: 1e-6,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooMany { field: "nebula count", .. })
        ));
    }

    #[test]
    fn satellite_count_is_capped() {
        let config = UniverseConfig {
            initial_satellites: MAX_BODIES + 1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooMany { field: "initial_satellites", max: MAX_BODIES, .. })
        ));
        let config = UniverseConfig {
            initial_satellites: MAX_BODIES,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
