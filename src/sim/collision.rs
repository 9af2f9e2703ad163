//! Collision and fragmentation geometry
//!
//! Pure predicates over circles plus the 3-way fan-out rule for breaking an
//! asteroid. No entity bookkeeping happens here; [`super::tick`] owns the
//! deletion flags and collection mutation.

use glam::Vec2;
use std::f32::consts::TAU;

use super::state::Asteroid;
use crate::config::WaveConfig;
use crate::rotate;

/// Angular separation between fragment directions (120 degrees)
const FAN_ANGLE: f32 = TAU / 3.0;

/// Strict circle overlap: true iff the centers are closer than the sum of
/// the radii. Exactly-touching circles do not collide.
#[inline]
pub fn circles_collide(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    a_pos.distance(b_pos) < a_radius + b_radius
}

/// Break an asteroid struck along `impact` into its fragments.
///
/// `Small` asteroids just die: the result is empty. Anything larger yields
/// exactly three children one size class down, fanned out at 120° steps
/// around the normalized impact direction, each spawned one child-radius
/// from the parent's center and cruising at the child class speed. Parent
/// momentum is deliberately not carried over.
///
/// Callers resolve a degenerate impact before calling: a ship that is
/// sitting still substitutes its facing for its velocity.
pub fn fragment_asteroid(parent: &Asteroid, impact: Vec2, config: &WaveConfig) -> Vec<Asteroid> {
    let Some(child_size) = parent.size.child() else {
        return Vec::new();
    };
    let cv = impact.normalize_or_zero();
    let child_radius = config.radius_of(child_size);

    [cv, rotate(cv, FAN_ANGLE), rotate(cv, -FAN_ANGLE)]
        .into_iter()
        .map(|dir| Asteroid::new(child_size, parent.pos + dir * child_radius, dir, config))
        .collect()
}
