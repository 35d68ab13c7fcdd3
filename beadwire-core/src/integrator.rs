use crate::engine::Body;
use crate::math::add_scaled;
use glam::DVec2;

/// Apply gravity and predict the unconstrained position (semi-implicit Euler: v += g*dt, then x += v*dt)
pub fn begin_substep(body: &mut Body, gravity: DVec2, dt: f64) {
    body.vel = add_scaled(body.vel, gravity, dt);
    body.prev_pos = body.pos;
    body.pos = add_scaled(body.pos, body.vel, dt);
}

/// Recover velocity from the constrained displacement.
/// Must run after every positional constraint of the substep.
pub fn end_substep(body: &mut Body, dt: f64) {
    body.vel = (body.pos - body.prev_pos) / dt;
}
