//! Determinism tests - identical scenes produce identical traces

use beadwire_core::config::SimulationConfig;
use beadwire_core::engine::{Body, Scene, Wire};
use beadwire_core::runtime::Simulation;
use beadwire_core::tests::test_helpers::{run_to_string, seeded_simulation};
use glam::DVec2;

fn short_config() -> SimulationConfig {
    SimulationConfig {
        frames: 90,
        ..SimulationConfig::default()
    }
}

fn hand_built_scene() -> Scene {
    let wire = Wire::default();
    let bodies = vec![
        Body::new(0.1, wire.point_at(0.0)),
        Body::new(0.07, wire.point_at(0.4)),
        Body::new(0.12, wire.point_at(1.1)),
        Body::new(0.09, wire.point_at(2.9)).with_velocity(DVec2::new(0.0, -1.0)),
    ];
    Scene::with_bodies(wire, bodies)
}

#[test]
fn test_hand_built_scene_determinism() {
    let mut first = Simulation::new(hand_built_scene(), short_config()).unwrap();
    let mut second = Simulation::new(hand_built_scene(), short_config()).unwrap();

    assert_eq!(run_to_string(&mut first), run_to_string(&mut second));
    assert_eq!(first.scene.bodies, second.scene.bodies);
}

#[test]
fn test_seeded_layout_determinism() {
    let mut first = seeded_simulation(short_config(), 1234);
    let mut second = seeded_simulation(short_config(), 1234);

    assert_eq!(run_to_string(&mut first), run_to_string(&mut second));
}

#[test]
fn test_different_seeds_diverge() {
    let mut first = seeded_simulation(short_config(), 1);
    let mut second = seeded_simulation(short_config(), 2);

    assert_ne!(run_to_string(&mut first), run_to_string(&mut second));
}
