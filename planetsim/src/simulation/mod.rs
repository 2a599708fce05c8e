pub mod states;
pub mod params;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod collision;
pub mod input;
pub mod scenario;
