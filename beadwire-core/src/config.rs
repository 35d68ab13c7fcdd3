//! Simulation parameters
//!
//! Every constant the driver and the scene layout depend on, with the
//! defaults of the reference scene: five beads on a 0.8 radius wire,
//! 60 output frames per second, 100 substeps per frame, 10 seconds.

use crate::engine::{Scene, Wire};
use glam::DVec2;
use thiserror::Error;

/// Invalid simulation parameters, reported before the run starts
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("fps must be greater than zero")]
    ZeroFps,
    #[error("substeps per frame must be greater than zero")]
    ZeroSubsteps,
    #[error("{name} must be a positive finite number, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("{name} must be finite")]
    NonFinite { name: &'static str },
    #[error("body {index} radius must be a positive finite number, got {value}")]
    BodyRadius { index: usize, value: f64 },
    #[error("scene wire {scene:?} differs from configured wire {config:?}")]
    WireMismatch { scene: Wire, config: Wire },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Output frames per simulated second
    pub fps: u32,
    /// Integrator substeps per output frame
    pub substeps: u32,
    pub bead_count: usize,
    pub gravity: DVec2,
    pub wire: Wire,
    /// Number of frames to simulate
    pub frames: u32,
    /// Radius of the first bead
    pub first_radius: f64,
    /// Later beads draw their radius from `[min_radius, min_radius + radius_spread)`
    pub min_radius: f64,
    pub radius_spread: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            substeps: 100,
            bead_count: 5,
            gravity: DVec2::new(0.0, -10.0),
            wire: Wire::default(),
            frames: 60 * 10,
            first_radius: 0.1,
            min_radius: 0.05,
            radius_spread: 0.1,
        }
    }
}

impl SimulationConfig {
    pub fn frame_dt(&self) -> f64 {
        1.0 / self.fps as f64
    }

    pub fn substep_dt(&self) -> f64 {
        self.frame_dt() / self.substeps as f64
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        if self.substeps == 0 {
            return Err(ConfigError::ZeroSubsteps);
        }
        if !self.gravity.is_finite() {
            return Err(ConfigError::NonFinite { name: "gravity" });
        }
        if !self.wire.center.is_finite() {
            return Err(ConfigError::NonFinite { name: "wire center" });
        }
        positive("wire radius", self.wire.radius)?;
        positive("first radius", self.first_radius)?;
        positive("min radius", self.min_radius)?;
        if !(self.radius_spread.is_finite() && self.radius_spread >= 0.0) {
            return Err(ConfigError::NonPositive {
                name: "radius spread",
                value: self.radius_spread,
            });
        }
        Ok(())
    }
}

/// Check a hand-built scene against `config`
pub fn validate_scene(config: &SimulationConfig, scene: &Scene) -> Result<(), ConfigError> {
    if scene.wire != config.wire {
        return Err(ConfigError::WireMismatch {
            scene: scene.wire,
            config: config.wire,
        });
    }
    for (index, body) in scene.bodies.iter().enumerate() {
        if !(body.radius.is_finite() && body.radius > 0.0) {
            return Err(ConfigError::BodyRadius {
                index,
                value: body.radius,
            });
        }
        if !body.pos.is_finite() || !body.vel.is_finite() {
            return Err(ConfigError::NonFinite { name: "body state" });
        }
    }
    Ok(())
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}
