//! Pairwise collision handling between circular bodies
//!
//! Two independent passes over every unordered pair:
//! 1. `resolve_impulses`: velocity exchange along the contact normal, with the
//!    whole post-impulse velocity scaled by the restitution factor
//! 2. `correct_positions`: push overlapping bodies apart by a share of the
//!    penetration (weighted by inverse mass) and cancel any closing speed left
//!    along the normal, so bodies do not sink into each other over many frames

use super::params::SimulationConfig;
use super::states::{Body, BodyRegistry, NVec2};

/// Mutable references to two distinct bodies, `i < j`
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert!(i < j);
    let (left, right) = bodies.split_at_mut(j);
    (&mut left[i], &mut right[0])
}

/// Contact between two bodies: normal from a to b and the two distances.
/// `None` when the centres coincide (no usable normal).
fn contact(a: &Body, b: &Body) -> Option<(NVec2, f64, f64)> {
    let delta = b.x - a.x;
    let center_distance = delta.norm();
    if center_distance == 0.0 {
        return None;
    }
    Some((delta / center_distance, center_distance, a.radius + b.radius))
}

/// Velocity response for every touching or overlapping pair
pub fn resolve_impulses(reg: &mut BodyRegistry, config: &SimulationConfig) {
    let bodies = reg.bodies_mut();
    let n = bodies.len();

    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = pair_mut(bodies, i, j);
            let Some((normal, center_distance, min_distance)) = contact(a, b) else {
                continue;
            };
            if center_distance > min_distance {
                continue;
            }

            let p = 2.0 * (a.v - b.v).dot(&normal) / (a.m + b.m);
            a.v = (a.v - p * a.m * normal) * config.restitution;
            b.v = (b.v + p * b.m * normal) * config.restitution;
        }
    }
}

/// Positional correction ("anti-sinking") for every overlapping pair
pub fn correct_positions(reg: &mut BodyRegistry, config: &SimulationConfig) {
    let bodies = reg.bodies_mut();
    let n = bodies.len();

    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = pair_mut(bodies, i, j);
            let Some((normal, center_distance, min_distance)) = contact(a, b) else {
                continue;
            };
            if center_distance >= min_distance {
                continue;
            }

            let inv_a = a.inv_mass();
            let inv_b = b.inv_mass();
            let inv_sum = inv_a + inv_b;
            if inv_sum == 0.0 {
                continue;
            }

            let penetration = min_distance - center_distance;
            let correction = (penetration - config.positional_slop).max(0.0) / inv_sum
                * config.positional_correction_percent;

            // Heavier bodies move less
            a.x -= normal * (correction * inv_a);
            b.x += normal * (correction * inv_b);

            // Remove what is left of the closing speed along the normal
            let rv = b.v - a.v;
            let closing = rv.dot(&normal);
            if closing < 0.0 {
                let impulse = -closing / inv_sum;
                a.v -= normal * (impulse * inv_a);
                b.v += normal * (impulse * inv_b);
            }
        }
    }
}
