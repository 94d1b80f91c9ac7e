use std::fmt;

/// Reasons a `UniverseConfig` is rejected at construction time.
#[derive(Debug)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    Parse(serde_json::Error),
    /// A field that must be strictly positive was zero or negative.
    NonPositive { field: &'static str, value: f64 },
    /// A field that must be zero or greater was negative.
    Negative { field: &'static str, value: f64 },
    /// A field was NaN or infinite.
    NotFinite { field: &'static str },
    /// A count (given or derived) is over the allowed maximum.
    TooMany { field: &'static str, count: f64, max: usize },
    /// Satellites were requested but there is no planet to own them.
    NoPlanetsForSatellites { satellites: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(err) => write!(f, "invalid universe config: {err}"),
            ConfigError::NonPositive { field, value } => {
                write!(f, "`{field}` must be greater than zero (got {value})")
            }
            ConfigError::Negative { field, value } => {
                write!(f, "`{field}` must not be negative (got {value})")
            }
            ConfigError::TooMany { field, count, max } => {
                write!(f, "`{field}` is {count}, more than the limit of {max}")
            }
            ConfigError::NotFinite { field } => write!(f, "`{field}` must be a finite number"),
            ConfigError::NoPlanetsForSatellites { satellites } => write!(
                f,
                "{satellites} initial satellites requested but `initial_planets` is 0"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}
