//! Configuration types for loading sandbox scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. Every section is optional and falls back to the defaults of the
//! interactive sandbox:
//!
//! - [`PhysicsConfig`]  – gravitational constant, boundary mode, collision constants
//! - [`SpawnConfig`]    – template for bodies created by mouse clicks
//! - [`WindowConfig`]   – initial simulation area / window size
//! - [`BodyConfig`]     – optional initial bodies
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! simulation:
//!   gravitational_constant: 6.674e-11
//!   softening: 0.0                    # eps2 added to d^2, 0 = plain Newton
//!   boundary_mode: "reflect"          # or "wrap", "none"
//!   restitution: 0.8
//!   positional_correction_percent: 0.8
//!   positional_slop: 0.01
//!   time_scale: 1000.0                # wall-clock seconds -> simulation time
//!
//! spawn:
//!   mass: 1.0e10
//!   radius: 40.0
//!   color: [255, 255, 255]            # omit for random colors
//!   seed: 42                          # omit for a random seed
//!
//! window:
//!   width: 800.0
//!   height: 600.0
//!
//! bodies:
//!   - x: [ 300.0, 300.0 ]
//!     v: [ 0.0, 0.0 ]
//!     m: 1.0e10
//!     radius: 50.0
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SimError};
use crate::simulation::params::{BoundaryMode, Bounds, SimulationConfig, SpawnSettings};
use crate::simulation::states::{Body, NVec2, Rgb};

/// Physical and numerical constants of the stepper
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravitational_constant: f64,
    pub softening: f64,
    pub boundary_mode: BoundaryMode,
    pub restitution: f64,
    pub positional_correction_percent: f64,
    pub positional_slop: f64,
    pub time_scale: f64, // multiplies wall-clock seconds, 1000 = milliseconds
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        let sim = SimulationConfig::default();
        Self {
            gravitational_constant: sim.gravitational_constant,
            softening: sim.softening,
            boundary_mode: sim.boundary_mode,
            restitution: sim.restitution,
            positional_correction_percent: sim.positional_correction_percent,
            positional_slop: sim.positional_slop,
            time_scale: 1000.0,
        }
    }
}

impl PhysicsConfig {
    pub fn simulation_config(&self) -> SimulationConfig {
        SimulationConfig {
            gravitational_constant: self.gravitational_constant,
            softening: self.softening,
            boundary_mode: self.boundary_mode,
            restitution: self.restitution,
            positional_correction_percent: self.positional_correction_percent,
            positional_slop: self.positional_slop,
        }
    }
}

/// Bodies created from mouse clicks
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SpawnConfig {
    pub mass: f64,
    pub radius: f64,
    pub color: Option<Rgb>,
    pub seed: Option<u64>, // deterministic colors
}

impl Default for SpawnConfig {
    fn default() -> Self {
        let spawn = SpawnSettings::default();
        Self {
            mass: spawn.mass,
            radius: spawn.radius,
            color: spawn.color,
            seed: None,
        }
    }
}

impl SpawnConfig {
    pub fn settings(&self) -> SpawnSettings {
        SpawnSettings {
            mass: self.mass,
            radius: self.radius,
            color: self.color,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl WindowConfig {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }
}

/// Initial state of one body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: [f64; 2], // position in simulation units
    #[serde(default)]
    pub v: [f64; 2], // velocity in simulation units per time unit
    pub m: f64,
    pub radius: f64,
    #[serde(default)]
    pub color: Option<Rgb>, // white when omitted
}

impl BodyConfig {
    pub fn build(&self) -> Result<Body> {
        Body::new(
            NVec2::new(self.x[0], self.x[1]),
            NVec2::new(self.v[0], self.v[1]),
            self.m,
            self.radius,
            self.color.unwrap_or(Rgb::WHITE),
        )
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub simulation: PhysicsConfig,
    pub spawn: SpawnConfig,
    pub window: WindowConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    /// Parse and validate a scenario from YAML text
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let cfg: ScenarioConfig = serde_yaml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a scenario file
    pub fn load(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values that would break the stepper or the spawn path
    pub fn validate(&self) -> Result<()> {
        let sim = &self.simulation;
        check(sim.gravitational_constant.is_finite(), "gravitational_constant must be finite")?;
        check(sim.softening >= 0.0, "softening must not be negative")?;
        check((0.0..=1.0).contains(&sim.restitution), "restitution must be within [0, 1]")?;
        check(
            (0.0..=1.0).contains(&sim.positional_correction_percent),
            "positional_correction_percent must be within [0, 1]",
        )?;
        check(sim.positional_slop >= 0.0, "positional_slop must not be negative")?;
        check(sim.time_scale > 0.0, "time_scale must be positive")?;
        check(self.window.width > 0.0 && self.window.height > 0.0, "window extents must be positive")?;

        // Same rule as bodies themselves
        Body::new(NVec2::zeros(), NVec2::zeros(), self.spawn.mass, self.spawn.radius, Rgb::WHITE)?;
        for body in &self.bodies {
            body.build()?;
        }
        Ok(())
    }
}

fn check(ok: bool, msg: &str) -> Result<()> {
    if ok { Ok(()) } else { Err(SimError::InvalidConfig(msg.to_string())) }
}
