//! Error types for surface construction, configuration and stepping.

use thiserror::Error;

/// Errors that can occur while building or driving a deformable surface.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeformError {
    /// A surface needs at least one vertex.
    #[error("surface must have at least one vertex")]
    EmptySurface,
    /// Rest, displaced and velocity arrays must have the same length.
    #[error("vertex arrays disagree in length (rest: {rest}, positions: {positions}, velocities: {velocities})")]
    LengthMismatch {
        rest: usize,
        positions: usize,
        velocities: usize,
    },
    /// A triangle references a vertex that does not exist.
    #[error("triangle {triangle} references vertex {index} (count: {count})")]
    TriangleOutOfBounds {
        triangle: usize,
        index: usize,
        count: usize,
    },
    /// A simulation parameter is outside its allowed range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    /// The timestep must be positive and finite.
    #[error("timestep must be positive and finite")]
    InvalidTimestep,
    /// A hit point, normal or force magnitude was NaN or infinite.
    #[error("input contains NaN or infinite values")]
    NonFiniteInput,
}

/// Reasons a [`DeformerConfig`](crate::config::DeformerConfig) is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a parameter is NaN or infinite")]
    NonFinite,
    #[error("vertex mass must be positive")]
    NonPositiveMass,
    #[error("spring force must not be negative")]
    NegativeSpringForce,
    #[error("damping must not be negative")]
    NegativeDamping,
    #[error("gravitational constant must not be negative")]
    NegativeGravity,
    #[error("max velocity must be positive")]
    NonPositiveMaxVelocity,
    #[error("wiggle delays must be positive")]
    NonPositiveWiggleDelay,
    #[error("min wiggle delay exceeds max wiggle delay")]
    WiggleDelayOrder,
    #[error("up axis must not be the zero vector")]
    ZeroUpAxis,
}
