//! Explicit Euler integration and edge handling
//!
//! Velocities are kicked with the accumulated accelerations first, then the
//! new velocity drifts the position. The drifted position is run through the
//! boundary mode before it is written back.

use super::params::{BoundaryMode, Bounds};
use super::states::{Body, BodyRegistry, NVec2};

/// Advance every body by `dt` using semi-implicit Euler
/// `accels[i]` must hold the acceleration of body i for this step
pub fn euler_integrator(reg: &mut BodyRegistry, accels: &[NVec2], dt: f64, bounds: Bounds, mode: BoundaryMode) {
    for (b, a) in reg.bodies_mut().iter_mut().zip(accels.iter()) {
        // v_n+1 = v_n + dt a_n
        b.v += dt * *a;

        // x_n+1 = x_n + dt v_n+1, before edge handling
        let candidate = b.x + dt * b.v;
        apply_boundary(b, candidate, bounds, mode);
    }
    reg.t += dt;
}

/// Write `candidate` into `b.x`, resolving the edges of `bounds` per axis
pub fn apply_boundary(b: &mut Body, candidate: NVec2, bounds: Bounds, mode: BoundaryMode) {
    let extents = [bounds.width, bounds.height];

    for axis in 0..2 {
        let extent = extents[axis];
        let (x, v) = match mode {
            BoundaryMode::Reflect => reflect_axis(candidate[axis], b.v[axis], b.radius, extent),
            BoundaryMode::Wrap => (wrap_axis(candidate[axis], extent), b.v[axis]),
            BoundaryMode::None => (candidate[axis], b.v[axis]),
        };
        b.x[axis] = x;
        b.v[axis] = v;
    }
}

/// Clamp a circle of `radius` inside `[0, extent]`, flipping the velocity on contact.
/// No restitution is applied at the edges.
fn reflect_axis(x: f64, v: f64, radius: f64, extent: f64) -> (f64, f64) {
    if x + radius > extent {
        (extent - radius, -v)
    } else if x - radius < 0.0 {
        (radius, -v)
    } else {
        (x, v)
    }
}

/// Toroidal wrap of the centre into `[0, extent)`
fn wrap_axis(x: f64, extent: f64) -> f64 {
    if extent > 0.0 { x.rem_euclid(extent) } else { x }
}
