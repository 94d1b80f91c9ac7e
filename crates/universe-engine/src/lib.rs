pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use api::config::UniverseConfig;
pub use api::error::ConfigError;
pub use api::types::{PlanetId, BodyKind};
pub use api::universe::Universe;
pub use components::planet::{Planet, CircularPath, MIN_PLANET_RADIUS};
pub use components::satellite::Satellite;
pub use components::nebula::Nebula;
pub use crate::core::scheduler::Scheduler;
pub use crate::core::state::SimulationState;
pub use renderer::instance::{BodyInstance, RenderBuffer};
pub use systems::render::build_render_buffer;
pub use systems::spawn::OwnerRule;
