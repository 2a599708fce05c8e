//! Force / acceleration contributors for the sandbox
//!
//! Defines the acceleration trait, the set that sums contributions, and
//! direct pairwise Newtonian gravity

use crate::simulation::states::{BodyRegistry, NVec2};

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all bodies in `reg`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, reg: &BodyRegistry, out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        for term in &self.terms {
            term.acceleration(reg, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Acceleration source operating on a [`BodyRegistry`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, reg: &BodyRegistry, out: &mut [NVec2]);
}

/// Direct O(N^2) Newtonian gravity
///
/// With `eps2 == 0` this is the plain inverse-square law. A positive `eps2`
/// is added to the squared distance to soften close encounters.
/// Coincident bodies never interact.
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
    pub eps2: f64, // softening
}

impl NewtonianGravity {
    /// Scalar force magnitude between two masses at distance `d`
    pub fn force(&self, mi: f64, mj: f64, d: f64) -> f64 {
        self.g * mi * mj / (d * d + self.eps2)
    }
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, reg: &BodyRegistry, out: &mut [NVec2]) {
        let bodies = reg.bodies();
        let n = bodies.len();

        // Each unordered pair (i, j) with i < j exactly once
        for i in 0..n {
            let bi = &bodies[i];

            for j in (i + 1)..n {
                let bj = &bodies[j];

                // r points from i to j: i is pulled along +r, j along -r
                let r = bj.x - bi.x;
                let d = r.norm();
                if d == 0.0 {
                    continue;
                }

                let force = self.force(bi.m, bj.m, d);
                let u = r / d;

                out[i] += (force / bi.m) * u;
                out[j] -= (force / bj.m) * u;
            }
        }
    }
}
