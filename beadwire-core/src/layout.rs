//! Initial bead placement

use crate::config::SimulationConfig;
use crate::engine::{Body, Scene};
use rand::Rng;
use std::f64::consts::PI;

/// Spread `bead_count` resting beads over the upper half of the wire.
///
/// The first bead gets `first_radius`; each later one draws its radius from
/// `rng`. The generator is not used anywhere else in the simulation.
pub fn build_scene<R: Rng + ?Sized>(config: &SimulationConfig, rng: &mut R) -> Scene {
    let wire = config.wire;
    let step = PI / config.bead_count.max(1) as f64;

    let mut bodies = Vec::with_capacity(config.bead_count);
    let mut radius = config.first_radius;
    for i in 0..config.bead_count {
        bodies.push(Body::new(radius, wire.point_at(i as f64 * step)));
        radius = config.min_radius + rng.gen::<f64>() * config.radius_spread;
    }

    Scene::with_bodies(wire, bodies)
}
