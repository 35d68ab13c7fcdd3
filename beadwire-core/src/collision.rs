//! Pairwise bead collisions
//!
//! Overlap is removed by moving both beads half the penetration depth apart,
//! regardless of mass. The velocity response along the contact normal is the
//! mass-weighted 1D elastic collision; tangential velocity is untouched.

use crate::engine::Body;
use crate::math::{add_scaled, sub_scaled};

/// Resolve a single contact between `a` and `b`. Returns whether they touched.
pub fn resolve_pair(a: &mut Body, b: &mut Body) -> bool {
    let dir = b.pos - a.pos;
    let d = dir.length();
    if d == 0.0 || d > a.radius + b.radius {
        return false;
    }
    let dir = dir / d;

    let corr = (a.radius + b.radius - d) / 2.0;
    a.pos = sub_scaled(a.pos, dir, corr);
    b.pos = add_scaled(b.pos, dir, corr);

    let v0a = a.vel.dot(dir);
    let v0b = b.vel.dot(dir);
    let ma = a.mass;
    let mb = b.mass;
    let mt = ma + mb;
    let vc = ma * v0a + mb * v0b;
    let v1a = (vc - mb * (v0a - v0b)) / mt;
    let v1b = (vc - ma * (v0b - v0a)) / mt;
    a.vel = add_scaled(a.vel, dir, v1a - v0a);
    b.vel = add_scaled(b.vel, dir, v1b - v0b);

    true
}

/// Single pass over every unordered pair, `i` outer and `j < i` inner, with
/// body `i` as the first participant. Contacts resolved earlier in the pass
/// are not revisited, so three or more touching beads give order-dependent
/// results. Returns the number of contacts resolved.
pub fn resolve_collisions(bodies: &mut [Body]) -> usize {
    let mut contacts = 0;
    for i in 0..bodies.len() {
        for j in 0..i {
            let (head, tail) = bodies.split_at_mut(i);
            if resolve_pair(&mut tail[0], &mut head[j]) {
                tracing::trace!(i, j, "resolved contact");
                contacts += 1;
            }
        }
    }
    contacts
}
