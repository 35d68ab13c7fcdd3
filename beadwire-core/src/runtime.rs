use crate::collision::resolve_collisions;
use crate::config::{validate_scene, ConfigError, SimulationConfig};
use crate::constraint::keep_on_wire;
use crate::engine::Scene;
use crate::integrator::{begin_substep, end_substep};
use crate::layout::build_scene;
use crate::trace::{TraceError, TraceSink};
use rand::Rng;

/// Position and size of one body at a frame boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// The wire at a frame boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireState {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub frame: u32,
    pub bodies: Vec<BodyState>,
    pub wire: WireState,
}

/// Owns a scene and advances it on a fixed frame/substep schedule
#[derive(Debug, Clone)]
pub struct Simulation {
    pub scene: Scene,
    config: SimulationConfig,
    substep_dt: f64,
}

impl Simulation {
    /// Wrap an already-built scene. Its wire must be the configured one and
    /// every body needs a positive radius.
    pub fn new(scene: Scene, config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        validate_scene(&config, &scene)?;
        let substep_dt = config.substep_dt();
        Ok(Self {
            scene,
            config,
            substep_dt,
        })
    }

    /// Validate `config` and lay out its beads using `rng`
    pub fn from_config<R: Rng + ?Sized>(
        config: SimulationConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let scene = build_scene(&config, rng);
        Self::new(scene, config)
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn substep_dt(&self) -> f64 {
        self.substep_dt
    }

    /// One substep. The phase order is fixed: predict every body, project every
    /// body onto the wire, recover every velocity, then resolve contacts.
    pub fn substep(&mut self) {
        let dt = self.substep_dt;
        let gravity = self.config.gravity;
        let wire = self.scene.wire;
        let bodies = &mut self.scene.bodies;

        for body in bodies.iter_mut() {
            begin_substep(body, gravity, dt);
        }
        for body in bodies.iter_mut() {
            keep_on_wire(body, &wire);
        }
        for body in bodies.iter_mut() {
            end_substep(body, dt);
        }
        resolve_collisions(bodies);
    }

    /// Advance one output frame
    pub fn step_frame(&mut self) {
        for _ in 0..self.config.substeps {
            self.substep();
        }
    }

    pub fn snapshot(&self, frame: u32) -> Snapshot {
        let bodies = self
            .scene
            .bodies
            .iter()
            .map(|b| BodyState {
                x: b.pos.x,
                y: b.pos.y,
                radius: b.radius,
            })
            .collect();
        let wire = self.scene.wire;
        Snapshot {
            frame,
            bodies,
            wire: WireState {
                x: wire.center.x,
                y: wire.center.y,
                radius: wire.radius,
            },
        }
    }

    /// Run every configured frame, recording a snapshot before each frame and
    /// one after the last, `frames + 1` in total.
    pub fn run<S: TraceSink + ?Sized>(&mut self, sink: &mut S) -> Result<(), TraceError> {
        let frames = self.config.frames;
        tracing::info!(
            bodies = self.scene.bodies.len(),
            frames,
            substeps = self.config.substeps,
            substep_dt = self.substep_dt,
            "starting simulation"
        );

        for frame in 0..frames {
            sink.record(&self.snapshot(frame))?;
            tracing::debug!(frame, "frame recorded");
            self.step_frame();
        }
        sink.record(&self.snapshot(frames))?;

        tracing::info!(frames, "simulation finished");
        Ok(())
    }
}
