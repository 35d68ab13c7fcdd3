//! Tests for initial bead placement

use beadwire_core::config::SimulationConfig;
use beadwire_core::layout::build_scene;
use beadwire_core::tests::test_helpers::{approx_eq, approx_vec};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::PI;

fn layout(seed: u64) -> beadwire_core::Scene {
    let mut rng = StdRng::seed_from_u64(seed);
    build_scene(&SimulationConfig::default(), &mut rng)
}

#[test]
fn test_layout_places_every_bead_on_wire() {
    let config = SimulationConfig::default();
    let scene = layout(7);

    assert_eq!(scene.bodies.len(), config.bead_count);
    assert_eq!(scene.wire, config.wire);
    for (i, body) in scene.bodies.iter().enumerate() {
        let dist = (body.pos - scene.wire.center).length();
        assert!(approx_eq(dist, 0.8, 1e-12), "bead {} at distance {}", i, dist);
    }
}

#[test]
fn test_layout_spreads_over_upper_half() {
    let scene = layout(7);
    let n = scene.bodies.len() as f64;

    for (i, body) in scene.bodies.iter().enumerate() {
        let angle = i as f64 * PI / n;
        let expected = DVec2::new(0.8 * angle.cos(), 0.8 * angle.sin());
        assert!(approx_vec(body.pos, expected, 1e-12));
        assert!(body.pos.y >= 0.0);
    }
}

#[test]
fn test_layout_radii_and_masses() {
    let scene = layout(99);

    assert_eq!(scene.bodies[0].radius, 0.1);
    for body in &scene.bodies[1..] {
        assert!(body.radius >= 0.05 && body.radius < 0.15, "radius {}", body.radius);
    }
    for body in &scene.bodies {
        assert!(approx_eq(body.mass, PI * body.radius * body.radius, 1e-15));
    }
}

#[test]
fn test_layout_starts_at_rest() {
    let scene = layout(3);
    for body in &scene.bodies {
        assert_eq!(body.vel, DVec2::ZERO);
        assert_eq!(body.prev_pos, body.pos);
    }
}

#[test]
fn test_layout_is_reproducible_per_seed() {
    let a = layout(42);
    let b = layout(42);
    let c = layout(43);

    let radii = |s: &beadwire_core::Scene| s.bodies.iter().map(|b| b.radius).collect::<Vec<_>>();
    assert_eq!(radii(&a), radii(&b));
    assert_ne!(radii(&a), radii(&c));
}

#[test]
fn test_layout_with_no_beads() {
    let config = SimulationConfig {
        bead_count: 0,
        ..SimulationConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(1);
    let scene = build_scene(&config, &mut rng);
    assert!(scene.bodies.is_empty());
}
