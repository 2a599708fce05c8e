//! Build a fully-initialized sandbox from configuration and drive it per frame
//!
//! `Scenario` is the runtime bundle constructed from a `ScenarioConfig`:
//! - the stepper with its `SimulationConfig`
//! - the body registry (initial bodies from the file, plus clicks)
//! - spawn settings and the color rng
//! - the current bounds, pause and running flags
//!
//! It is inserted into Bevy as a `Resource`; the window layer feeds it events
//! and elapsed time once per frame through [`Scenario::frame`].

use bevy::log::{debug, info, warn};
use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::configuration::config::ScenarioConfig;
use crate::error::Result;
use crate::simulation::engine::Stepper;
use crate::simulation::input::{Key, MouseButton, SandboxEvent};
use crate::simulation::params::{Bounds, SpawnSettings};
use crate::simulation::states::{BodyRegistry, Drawable};

#[derive(Resource)]
pub struct Scenario {
    pub stepper: Stepper,
    pub registry: BodyRegistry,
    pub spawn: SpawnSettings,
    pub bounds: Bounds,
    pub time_scale: f64, // wall-clock seconds -> simulation time
    paused: bool,
    running: bool,
    rng: StdRng,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        cfg.validate()?;

        let mut registry = BodyRegistry::new();
        for bc in &cfg.bodies {
            registry.append(bc.build()?);
        }

        let rng = match cfg.spawn.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        info!(
            "scenario: {} initial bodies, {:?} boundary, {}x{} area",
            registry.len(),
            cfg.simulation.boundary_mode,
            cfg.window.width,
            cfg.window.height
        );

        Ok(Self {
            stepper: Stepper::new(cfg.simulation.simulation_config()),
            registry,
            spawn: cfg.spawn.settings(),
            bounds: cfg.window.bounds(),
            time_scale: cfg.simulation.time_scale,
            paused: false,
            running: true,
            rng,
        })
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// React to one input transition
    pub fn handle_event(&mut self, event: &SandboxEvent) {
        match *event {
            SandboxEvent::Closed | SandboxEvent::KeyReleased(Key::Escape) => {
                info!(
                    "scenario: closing with {} bodies after {:.1} time units",
                    self.registry.len(),
                    self.registry.t
                );
                self.running = false;
            }
            // Minimized windows report 0x0; keep the last usable area
            SandboxEvent::Resized { width, height } if !(width > 0.0 && height > 0.0) => {
                debug!("scenario: ignoring resize to {}x{}", width, height);
            }
            SandboxEvent::Resized { width, height } => {
                info!("scenario: resized to {}x{}", width, height);
                self.bounds = Bounds::new(width, height);
            }
            SandboxEvent::MouseReleased { button: MouseButton::Left, position } => {
                match self.registry.spawn(position, &self.spawn, &mut self.rng) {
                    Ok(i) => debug!("spawned body {} at ({:.1}, {:.1})", i, position.x, position.y),
                    Err(e) => warn!("spawn rejected: {}", e),
                }
            }
            SandboxEvent::KeyReleased(Key::Space) => {
                self.paused = !self.paused;
                info!("scenario: {}", if self.paused { "paused" } else { "resumed" });
            }
            // Presses only arm the matching release
            _ => {}
        }
    }

    /// One frame: apply the events in order, then step once unless paused or closed.
    /// `dt` is already in simulation time units. Returns whether the loop should continue.
    pub fn frame<'a, I>(&mut self, events: I, dt: f64) -> bool
    where
        I: IntoIterator<Item = &'a SandboxEvent>,
    {
        for event in events {
            self.handle_event(event);
        }
        if self.running && !self.paused {
            self.stepper.step(&mut self.registry, dt, self.bounds);
        }
        self.running
    }

    /// Convert wall-clock seconds to simulation time units
    pub fn sim_dt(&self, seconds: f64) -> f64 {
        seconds * self.time_scale
    }

    pub fn drawables(&self) -> impl Iterator<Item = Drawable> + '_ {
        self.registry.drawables()
    }
}
