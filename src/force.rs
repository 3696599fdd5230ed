//! Point impulses with distance falloff.
//!
//! Every vertex feels every impulse. The strength at a vertex is
//! `magnitude / (1 + d²)` where `d` is the distance from the impulse origin,
//! so the falloff is inverse-square-like but finite at the origin.

use crate::float::Float;
use crate::surface::Surface;
use crate::vec::Point3;

/// Force felt at squared distance `distance_sq` from an impulse of `magnitude`.
pub fn attenuated_force<F: Float>(magnitude: F, distance_sq: F) -> F {
    magnitude / (F::one() + distance_sq)
}

/// Push every vertex of `surface` away from `origin` (or pull, for a negative
/// `magnitude`), then clamp each velocity axis to `[-ceiling, ceiling]`.
///
/// A vertex sitting exactly on `origin` has no direction to move in and
/// receives no velocity change. NaN or infinite arguments give undefined
/// (but non-panicking) results.
pub fn apply_point_force<F: Float>(
    surface: &mut Surface<F>,
    origin: Point3<F>,
    magnitude: F,
    mass: F,
    dt: F,
    ceiling: F,
) {
    let (_, positions, velocities) = surface.state_mut();
    for (pos, vel) in positions.iter().zip(velocities.iter_mut()) {
        let offset = *pos - origin;
        let acceleration = attenuated_force(magnitude, offset.length_sq()) / mass;
        let delta_speed = acceleration * dt;
        *vel = (*vel + offset.normalize().scale(delta_speed)).clamp_axes(ceiling);
    }
}
