pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Body, BodyRegistry, Drawable, NVec2, Rgb};
pub use simulation::params::{BoundaryMode, Bounds, SimulationConfig, SpawnSettings};
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::engine::Stepper;
pub use simulation::integrator::euler_integrator;
pub use simulation::input::{Key, MouseButton, SandboxEvent};
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, PhysicsConfig, ScenarioConfig, SpawnConfig, WindowConfig};

pub use error::{Result, SimError};

pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::bench_step;
