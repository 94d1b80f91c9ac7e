pub mod planet;
pub mod satellite;
pub mod nebula;
