pub mod geometry;
pub mod rng;
pub mod orbit;
pub mod pulse;
pub mod growth;
pub mod planet_motion;
pub mod spawn;
pub mod render;
