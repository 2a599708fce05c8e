//! Physical and numerical parameters for the simulation
//!
//! `SimulationConfig` holds the stepper settings:
//! - gravitational constant and optional softening (`G`, `eps2`),
//! - what happens at the edges of the simulation area,
//! - restitution and positional correction constants for collisions
//!
//! `SpawnSettings` describes bodies created by clicks, `Bounds` is the
//! current simulation area handed to every step.

use serde::Deserialize;

use crate::simulation::states::Rgb;

/// Edge behavior of the simulation area
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryMode {
    #[serde(rename = "reflect")] // clamp inside and flip the velocity component
    #[default]
    Reflect,

    #[serde(rename = "wrap")] // leave one edge, come back on the opposite one
    Wrap,

    #[serde(rename = "none")] // unbounded plane
    None,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub gravitational_constant: f64,
    pub softening: f64, // eps2, added to d^2 in the force law
    pub boundary_mode: BoundaryMode,
    pub restitution: f64, // velocity kept after an impulse
    pub positional_correction_percent: f64, // share of penetration removed per pass
    pub positional_slop: f64, // tolerated penetration
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: 6.674e-11,
            softening: 0.0,
            boundary_mode: BoundaryMode::Reflect,
            restitution: 0.8,
            positional_correction_percent: 0.8,
            positional_slop: 0.01,
        }
    }
}

/// Template for bodies spawned from input
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnSettings {
    pub mass: f64,
    pub radius: f64,
    pub color: Option<Rgb>, // None = pseudo-random per body
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            mass: 1.0e10,
            radius: 40.0,
            color: None,
        }
    }
}

/// Current simulation area, `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
