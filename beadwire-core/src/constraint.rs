//! Wire confinement as a positional projection

use crate::engine::{Body, Wire};
use crate::math::add_scaled;

/// Pull `body` straight back onto the wire circle.
///
/// A body sitting exactly on the wire center has no defined direction and is
/// left where it is.
pub fn keep_on_wire(body: &mut Body, wire: &Wire) {
    let dir = body.pos - wire.center;
    let len = dir.length();
    if len == 0.0 {
        return;
    }
    let dir = dir / len;
    let lambda = wire.radius - len;
    body.pos = add_scaled(body.pos, dir, lambda);
}
