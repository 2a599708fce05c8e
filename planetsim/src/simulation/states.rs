//! Core state types for the sandbox.
//!
//! - `Body`: one circular planet (position, velocity, mass, radius, color)
//! - `BodyRegistry`: the ordered, append-only collection of bodies plus the
//!   accumulated simulation time `t`
//!
//! Positions use window-style coordinates: origin at the top-left corner,
//! y grows downward.

use nalgebra::Vector2;
use rand::Rng;
use serde::Deserialize;

use crate::error::{Result, SimError};
use crate::simulation::params::SpawnSettings;

pub type NVec2 = Vector2<f64>;

/// Display color of a body, 8 bits per channel.
/// Deserializes from a three element list: `[r, g, b]`.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Bright, saturated color so planets stay visible on a black background
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut channel = || rng.gen_range(64..=255u8);
        Rgb(channel(), channel(), channel())
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass
    pub radius: f64, // collision and render radius
    color: Rgb, // fixed at creation
}

impl Body {
    /// Build a body, rejecting non-positive or non-finite mass and radius
    pub fn new(x: NVec2, v: NVec2, m: f64, radius: f64, color: Rgb) -> Result<Self> {
        if !(m.is_finite() && m > 0.0 && radius.is_finite() && radius > 0.0) {
            return Err(SimError::InvalidBody { mass: m, radius });
        }
        Ok(Self { x, v, m, radius, color })
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Inverse mass, zero for non-positive mass (treated as immovable)
    pub fn inv_mass(&self) -> f64 {
        if self.m > 0.0 { self.m.recip() } else { 0.0 }
    }
}

/// What the renderer gets to see of a body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drawable {
    pub position: NVec2,
    pub radius: f64,
    pub color: Rgb,
}

#[derive(Debug, Clone, Default)]
pub struct BodyRegistry {
    bodies: Vec<Body>, // insertion ordered, never shrinks
    pub t: f64, // simulation time
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a body at the end and return its index
    pub fn append(&mut self, body: Body) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    /// Create a resting body at `position` from the spawn settings.
    /// Uses the configured color, or draws one from `rng` when none is set.
    pub fn spawn<R: Rng>(&mut self, position: NVec2, spawn: &SpawnSettings, rng: &mut R) -> Result<usize> {
        let color = spawn.color.unwrap_or_else(|| Rgb::random(rng));
        let body = Body::new(position, NVec2::zeros(), spawn.mass, spawn.radius, color)?;
        Ok(self.append(body))
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&Body> {
        self.bodies.get(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Mutable view for one step. The slice cannot grow, so indices stay valid.
    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    /// Per body `(position, radius, color)` in index order
    pub fn drawables(&self) -> impl Iterator<Item = Drawable> + '_ {
        self.bodies.iter().map(|b| Drawable {
            position: b.x,
            radius: b.radius,
            color: b.color,
        })
    }

    /// Total linear momentum, sum of m * v
    pub fn momentum(&self) -> NVec2 {
        self.bodies.iter().fold(NVec2::zeros(), |p, b| p + b.m * b.v)
    }
}
