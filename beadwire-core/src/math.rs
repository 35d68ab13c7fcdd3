//! Vector helpers on top of `glam::DVec2`
//!
//! glam already provides subtraction, dot product, length and scalar
//! division; the scaled forms used by the integrator and solvers live here.

use glam::DVec2;

/// `a + b * s`
#[inline]
pub fn add_scaled(a: DVec2, b: DVec2, s: f64) -> DVec2 {
    DVec2::new(a.x + b.x * s, a.y + b.y * s)
}

/// `a - b * s`
#[inline]
pub fn sub_scaled(a: DVec2, b: DVec2, s: f64) -> DVec2 {
    DVec2::new(a.x - b.x * s, a.y - b.y * s)
}
