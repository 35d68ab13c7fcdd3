use glam::DVec2;
use std::f64::consts::PI;

/// A bead threaded on the wire
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub radius: f64,
    pub mass: f64,
    pub pos: DVec2,
    pub prev_pos: DVec2,
    pub vel: DVec2,
}

impl Body {
    /// Create a resting body. Mass is that of a unit-density disk and is never recomputed.
    pub fn new(radius: f64, pos: DVec2) -> Self {
        Self {
            radius,
            mass: PI * radius * radius,
            pos,
            prev_pos: pos,
            vel: DVec2::ZERO,
        }
    }

    pub fn with_velocity(mut self, vel: DVec2) -> Self {
        self.vel = vel;
        self
    }
}

/// The circular wire every body is confined to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wire {
    pub center: DVec2,
    pub radius: f64,
}

impl Wire {
    pub fn new(center: DVec2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Point on the wire at `angle` radians, measured from +x
    pub fn point_at(&self, angle: f64) -> DVec2 {
        self.center + DVec2::new(angle.cos(), angle.sin()) * self.radius
    }
}

impl Default for Wire {
    fn default() -> Self {
        Self::new(DVec2::ZERO, 0.8)
    }
}

/// All bodies plus the wire. Body order is fixed and decides collision order.
#[derive(Debug, Clone)]
pub struct Scene {
    pub bodies: Vec<Body>,
    pub wire: Wire,
}

impl Scene {
    pub fn with_bodies(wire: Wire, bodies: Vec<Body>) -> Self {
        Self { bodies, wire }
    }
}
