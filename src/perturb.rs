//! Impulse sources: pointer hits, the autonomous wiggle timer, and gravity.

use crate::float::Float;
use crate::surface::Surface;
use crate::vec::{Point3, Vec3};
use rand::Rng;

/// A pointer hit on the surface, as reported by the host's raycaster.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hit<F: Float> {
    pub point: Point3<F>,
    pub normal: Vec3<F>,
}

impl<F: Float> Hit<F> {
    pub fn new(point: Point3<F>, normal: Vec3<F>) -> Self {
        Hit { point, normal }
    }

    /// Impulse origin: the hit point nudged `offset` along the hit normal.
    pub fn force_origin(&self, offset: F) -> Point3<F> {
        self.point + self.normal.scale(offset)
    }

    pub fn is_finite(&self) -> bool {
        self.point.is_finite() && self.normal.is_finite()
    }
}

/// A one-shot impulse waiting for the next step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Impulse<F: Float> {
    pub origin: Point3<F>,
    pub magnitude: F,
}

/// Countdown that periodically picks a random vertex to perturb.
///
/// Inert while wiggle is disabled. While armed it counts down by `dt` every
/// tick; once the remaining time reaches zero it fires and rearms in the
/// same tick with a fresh delay from `[min_delay, max_delay]`. "Zero" allows
/// a sliver of `dt` so rounding in the countdown cannot push a firing one
/// tick late.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum WiggleTimer<F: Float> {
    Inert,
    Armed { remaining: F },
}

impl<F: Float> WiggleTimer<F> {
    /// Armed with a sampled delay when `enabled`, inert otherwise.
    pub fn new<R: Rng>(enabled: bool, min_delay: F, max_delay: F, rng: &mut R) -> Self {
        if enabled {
            Self::armed(min_delay, max_delay, rng)
        } else {
            WiggleTimer::Inert
        }
    }

    fn armed<R: Rng>(min_delay: F, max_delay: F, rng: &mut R) -> Self {
        WiggleTimer::Armed { remaining: sample_delay(min_delay, max_delay, rng) }
    }

    pub fn is_armed(&self) -> bool {
        matches!(self, WiggleTimer::Armed { .. })
    }

    /// Time left before the next wiggle, if armed.
    pub fn remaining(&self) -> Option<F> {
        match *self {
            WiggleTimer::Armed { remaining } => Some(remaining),
            WiggleTimer::Inert => None,
        }
    }

    /// Advance by `dt`. Returns the index of the vertex to perturb when the timer fires.
    ///
    /// Enabling a previously inert timer arms it without firing; disabling
    /// an armed timer makes it inert.
    pub fn tick<R: Rng>(
        &mut self,
        dt: F,
        enabled: bool,
        min_delay: F,
        max_delay: F,
        vertex_count: usize,
        rng: &mut R,
    ) -> Option<usize> {
        match (*self, enabled) {
            (_, false) => {
                *self = WiggleTimer::Inert;
                None
            }
            (WiggleTimer::Inert, true) => {
                *self = Self::armed(min_delay, max_delay, rng);
                None
            }
            (WiggleTimer::Armed { remaining }, true) => {
                let remaining = remaining - dt;
                if remaining <= dt * F::from_f32(1e-3) && vertex_count > 0 {
                    let vertex = rng.gen_range(0..vertex_count);
                    *self = Self::armed(min_delay, max_delay, rng);
                    Some(vertex)
                } else {
                    *self = WiggleTimer::Armed { remaining };
                    None
                }
            }
        }
    }
}

fn sample_delay<F: Float, R: Rng>(min_delay: F, max_delay: F, rng: &mut R) -> F {
    if min_delay >= max_delay {
        min_delay
    } else {
        rng.gen_range(min_delay..=max_delay)
    }
}

/// Add `-gravitational_constant * dt` along `up` to every vertex velocity.
///
/// Unlike impulses, gravity is not attenuated and not clamped.
pub fn apply_gravity<F: Float>(surface: &mut Surface<F>, up: Vec3<F>, gravitational_constant: F, dt: F) {
    let delta = up.normalize().scale(-gravitational_constant * dt);
    for i in 0..surface.vertex_count() {
        surface.add_velocity(i, delta);
    }
}
