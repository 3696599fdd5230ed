//! Step observer trait for monitoring deformation steps.

use crate::float::Float;
use crate::vec::Point3;

/// Trait for observing deformer steps.
///
/// Implement this trait to monitor what a step did (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver<F: Float> {
    /// Called for every impulse applied during a step, queued or wiggle.
    fn on_impulse(&mut self, _origin: Point3<F>, _magnitude: F) {}

    /// Called when the wiggle timer fires, before its impulse is applied.
    fn on_wiggle(&mut self, _vertex: usize) {}

    /// Called after gravity has been added to every velocity.
    fn on_gravity(&mut self) {}

    /// Called after all vertices have been integrated.
    fn on_integrate(&mut self) {}

    /// Called when a step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl<F: Float> StepObserver<F> for NoOpStepObserver {}

/// Forwards every callback to the [`log`] facade.
///
/// Per-stage events go to `trace`, wiggles to `debug`. Nothing is emitted
/// unless the host installs a logger.
#[derive(Debug, Default)]
pub struct LogStepObserver {
    steps: u64,
}

impl LogStepObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completed steps observed so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl<F: Float> StepObserver<F> for LogStepObserver {
    fn on_impulse(&mut self, origin: Point3<F>, magnitude: F) {
        log::trace!(
            "step {}: impulse {} at ({}, {}, {})",
            self.steps, magnitude, origin.x, origin.y, origin.z
        );
    }

    fn on_wiggle(&mut self, vertex: usize) {
        log::debug!("step {}: wiggle fired at vertex {}", self.steps, vertex);
    }

    fn on_gravity(&mut self) {
        log::trace!("step {}: gravity applied", self.steps);
    }

    fn on_integrate(&mut self) {
        log::trace!("step {}: integrated", self.steps);
    }

    fn on_step_complete(&mut self) {
        self.steps += 1;
    }
}
