//! The physics stepper
//!
//! One `step` runs the fixed pipeline:
//! 1. accumulate accelerations for all pairs (`AccelSet`)
//! 2. integrate and apply the boundary mode per body
//! 3. impulse response for all touching pairs
//! 4. positional correction for all overlapping pairs

use super::collision::{correct_positions, resolve_impulses};
use super::forces::{AccelSet, NewtonianGravity};
use super::integrator::euler_integrator;
use super::params::{Bounds, SimulationConfig};
use super::states::{BodyRegistry, NVec2};

pub struct Stepper {
    config: SimulationConfig,
    forces: AccelSet,
}

impl Stepper {
    /// Stepper with direct Newtonian gravity built from `config`
    pub fn new(config: SimulationConfig) -> Self {
        let forces = AccelSet::new().with(NewtonianGravity {
            g: config.gravitational_constant,
            eps2: config.softening,
        });
        Self::with_forces(config, forces)
    }

    /// Stepper with a caller supplied force pass
    pub fn with_forces(config: SimulationConfig, forces: AccelSet) -> Self {
        Self { config, forces }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Advance `reg` by `dt` inside `bounds`
    pub fn step(&self, reg: &mut BodyRegistry, dt: f64, bounds: Bounds) {
        // Scratch buffer, lives for this step only
        let mut accels = vec![NVec2::zeros(); reg.len()];
        self.forces.accumulate_accels(reg, &mut accels);

        euler_integrator(reg, &accels, dt, bounds, self.config.boundary_mode);

        resolve_impulses(reg, &self.config);
        correct_positions(reg, &self.config);
    }
}
