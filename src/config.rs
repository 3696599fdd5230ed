//! Configuration for the mesh deformer.

use crate::error::ConfigError;
use crate::float::Float;
use crate::vec::Vec3;

/// Tunable parameters for a [`MeshDeformer`](crate::deformer::MeshDeformer).
///
/// All values may be edited between steps; changes take effect on the next
/// [`step`](crate::deformer::MeshDeformer::step).
///
/// # Builder Pattern
/// ```
/// use squish::config::DeformerConfig;
///
/// let config: DeformerConfig<f32> = DeformerConfig::new()
///     .with_spring_force(40.0)
///     .with_damping(6.0)
///     .with_wiggle(0.5, 1.5)
///     .with_gravity(9.81);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct DeformerConfig<F: Float> {
    /// Magnitude of pointer impulses. Default: 10.
    pub force: F,
    /// Stiffness of each vertex's spring back to rest. Default: 20.
    pub spring_force: F,
    /// Velocity damping per second. Keep `damping * dt < 1`. Default: 5.
    pub damping: F,
    /// Magnitude of autonomous wiggle impulses. Default: 1.
    pub wiggle_force: F,
    /// Distance the pointer impulse origin is pushed off the surface along the hit normal. Default: 0.1.
    pub force_offset: F,
    /// Mass of every vertex. Default: 1.
    pub vertex_mass: F,
    pub min_wiggle_delay: F,
    pub max_wiggle_delay: F,
    /// Downward acceleration when gravity is enabled. Default: 1.
    pub gravitational_constant: F,
    /// Per-axis velocity ceiling applied after every impulse. Default: 2000.
    pub max_velocity: F,
    /// Gravity pulls along `-up`. Default: +Y.
    pub up: Vec3<F>,
    pub wiggle_enabled: bool,
    pub gravity_enabled: bool,
    /// Track the centroid of the displaced vertices after every step.
    #[cfg_attr(feature = "serde", serde(rename = "autoRecalculateCenterEnabled"))]
    pub auto_recalculate_center: bool,
}

impl<F: Float> DeformerConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        DeformerConfig {
            force: F::from_f32(10.0),
            spring_force: F::from_f32(20.0),
            damping: F::from_f32(5.0),
            wiggle_force: F::one(),
            force_offset: F::from_f32(0.1),
            vertex_mass: F::one(),
            min_wiggle_delay: F::one(),
            max_wiggle_delay: F::two(),
            gravitational_constant: F::one(),
            max_velocity: F::from_f32(2000.0),
            up: Vec3::unit_y(),
            wiggle_enabled: false,
            gravity_enabled: false,
            auto_recalculate_center: false,
        }
    }

    /// Set the pointer impulse magnitude.
    pub fn with_force(mut self, force: F) -> Self {
        self.force = force;
        self
    }

    /// Set the spring stiffness.
    pub fn with_spring_force(mut self, spring_force: F) -> Self {
        self.spring_force = spring_force;
        self
    }

    /// Set the damping coefficient.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Set the per-vertex mass.
    pub fn with_vertex_mass(mut self, vertex_mass: F) -> Self {
        self.vertex_mass = vertex_mass;
        self
    }

    /// Set the pointer impulse surface offset.
    pub fn with_force_offset(mut self, force_offset: F) -> Self {
        self.force_offset = force_offset;
        self
    }

    /// Set the per-axis velocity ceiling.
    pub fn with_max_velocity(mut self, max_velocity: F) -> Self {
        self.max_velocity = max_velocity;
        self
    }

    /// Enable wiggle with delays sampled from `[min_delay, max_delay]`.
    pub fn with_wiggle(mut self, min_delay: F, max_delay: F) -> Self {
        self.wiggle_enabled = true;
        self.min_wiggle_delay = min_delay;
        self.max_wiggle_delay = max_delay;
        self
    }

    /// Set the wiggle impulse magnitude.
    pub fn with_wiggle_force(mut self, wiggle_force: F) -> Self {
        self.wiggle_force = wiggle_force;
        self
    }

    /// Enable gravity with the given acceleration.
    pub fn with_gravity(mut self, gravitational_constant: F) -> Self {
        self.gravity_enabled = true;
        self.gravitational_constant = gravitational_constant;
        self
    }

    /// Set the up axis; gravity pulls along its negation.
    pub fn with_up(mut self, up: Vec3<F>) -> Self {
        self.up = up;
        self
    }

    /// Enable or disable centroid tracking.
    pub fn with_auto_recalculate_center(mut self, enabled: bool) -> Self {
        self.auto_recalculate_center = enabled;
        self
    }

    /// Check every parameter against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            self.force,
            self.spring_force,
            self.damping,
            self.wiggle_force,
            self.force_offset,
            self.vertex_mass,
            self.min_wiggle_delay,
            self.max_wiggle_delay,
            self.gravitational_constant,
            self.max_velocity,
        ];
        if !scalars.iter().all(|s| s.is_finite()) || !self.up.is_finite() {
            return Err(ConfigError::NonFinite);
        }
        let zero = F::zero();
        if self.vertex_mass <= zero {
            return Err(ConfigError::NonPositiveMass);
        }
        if self.spring_force < zero {
            return Err(ConfigError::NegativeSpringForce);
        }
        if self.damping < zero {
            return Err(ConfigError::NegativeDamping);
        }
        if self.gravitational_constant < zero {
            return Err(ConfigError::NegativeGravity);
        }
        if self.max_velocity <= zero {
            return Err(ConfigError::NonPositiveMaxVelocity);
        }
        if self.min_wiggle_delay <= zero || self.max_wiggle_delay <= zero {
            return Err(ConfigError::NonPositiveWiggleDelay);
        }
        if self.min_wiggle_delay > self.max_wiggle_delay {
            return Err(ConfigError::WiggleDelayOrder);
        }
        if self.up.normalize() == Vec3::zero() {
            return Err(ConfigError::ZeroUpAxis);
        }
        Ok(())
    }
}

impl<F: Float> Default for DeformerConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
