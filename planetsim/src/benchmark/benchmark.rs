use std::time::Instant;

use crate::simulation::engine::Stepper;
use crate::simulation::params::{Bounds, SimulationConfig};
use crate::simulation::states::{Body, BodyRegistry, NVec2, Rgb};

/// Time one full `Stepper::step` (gravity, integration, both collision passes)
/// for growing body counts and print the per-step cost
pub fn bench_step() {
    let ns = [50, 100, 200, 400, 800, 1600];
    let steps = 10; // integrator steps per N
    let dt = 16.0; // one 60 Hz frame in milliseconds

    let stepper = Stepper::new(SimulationConfig::default());
    println!("bench_step: {:?}, dt = {} per step", stepper.config(), dt);

    for n in ns {
        let (mut reg, bounds) = make_registry(n);

        // Warm-up
        stepper.step(&mut reg, dt, bounds);

        let t0 = Instant::now();
        for _ in 0..steps {
            stepper.step(&mut reg, dt, bounds);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {:5}, step = {:10.6} ms", n, per_step * 1000.0);
    }
}

/// Deterministic spread of spawn-sized bodies, with an area big enough
/// that most of them start apart
fn make_registry(n: usize) -> (BodyRegistry, Bounds) {
    let side = (n as f64).sqrt().ceil() * 100.0;
    let bounds = Bounds::new(side, side);
    let mut reg = BodyRegistry::new();

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec2::new(
            (0.5 + 0.45 * (i_f * 0.37).sin()) * side,
            (0.5 + 0.45 * (i_f * 0.13).cos()) * side,
        );
        // Fixed literals satisfy the body invariants
        if let Ok(body) = Body::new(x, NVec2::zeros(), 1.0e10, 10.0, Rgb::WHITE) {
            reg.append(body);
        }
    }

    (reg, bounds)
}
