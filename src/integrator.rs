//! Explicit Euler spring-damper integration toward rest.
//!
//! Each vertex has its own implicit spring to its own rest position; vertices
//! are not connected to each other.

use crate::float::Float;
use crate::surface::Surface;

/// Advance every vertex of `surface` by one timestep `dt`.
///
/// Stable only while `damping * dt < 1` and `spring_k * dt` is small; larger
/// steps overshoot and eventually diverge. See [`stability_hint`].
pub fn integrate<F: Float>(surface: &mut Surface<F>, spring_k: F, damping: F, dt: F) {
    let (rest, positions, velocities) = surface.state_mut();
    let decay = F::one() - damping * dt;
    for ((pos, vel), &anchor) in positions.iter_mut().zip(velocities.iter_mut()).zip(rest.iter()) {
        let displacement = *pos - anchor;
        let velocity = (*vel - displacement.scale(spring_k * dt)).scale(decay);
        *vel = velocity;
        *pos += velocity.scale(dt);
    }
}

/// Coarse stability classification for a fixed step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stability {
    /// Displacement and velocity shrink every step.
    Stable,
    /// The state does not decay and will eventually blow up.
    Divergent,
}

/// Classify `(spring_k, damping, dt)` without changing how [`integrate`] behaves.
///
/// The per-vertex update is the linear map
/// `[x, v] -> [x + dt*v', v']` with `v' = (1 - c*dt) * (v - k*dt*x)`. Its
/// determinant is `1 - c*dt` and its trace `1 + (1 - c*dt) * (1 - k*dt*dt)`;
/// both eigenvalues lie inside the unit circle iff `|det| < 1` and
/// `|trace| < 1 + det`. For any `k > 0` this fails once `c*dt >= 1`.
pub fn stability_hint<F: Float>(spring_k: F, damping: F, dt: F) -> Stability {
    let det = F::one() - damping * dt;
    let trace = F::one() + det * (F::one() - spring_k * dt * dt);
    if det.abs() < F::one() && trace.abs() < F::one() + det {
        Stability::Stable
    } else {
        Stability::Divergent
    }
}
