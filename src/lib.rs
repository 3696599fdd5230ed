//! Mass-spring mesh deformation for games.
//!
//! `squish` keeps a damped spring-mass state for every vertex of a
//! triangulated surface. Point impulses push vertices away from (or pull them
//! toward) an origin with distance falloff, and every fixed timestep each
//! vertex springs back toward its rest position. Designed for game use:
//! squishy props, jelly, clickable blobs.
//!
//! # Features
//!
//! - **Point impulses**: `magnitude / (1 + d²)` falloff, per-axis velocity ceiling
//! - **Spring-to-rest integration**: explicit Euler, one spring per vertex
//! - **Wiggle**: seeded random self-perturbation on a jittered timer
//! - **Gravity bias**: constant acceleration along a configurable axis
//! - **Derived geometry**: normals, bounds and centroid on demand
//! - **Observable**: Monitor steps via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! # Example
//! ```
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//! use squish::{DeformerConfig, Hit, MeshDeformer, NoOpStepObserver, Surface, Vec3};
//!
//! let surface = Surface::new(
//!     vec![
//!         Vec3::new(0.0f32, 0.0, 0.0),
//!         Vec3::new(1.0, 0.0, 0.0),
//!         Vec3::new(0.0, 1.0, 0.0),
//!         Vec3::new(1.0, 1.0, 0.0),
//!     ],
//!     vec![[0, 1, 2], [2, 1, 3]],
//! )?;
//! let mut deformer = MeshDeformer::new(surface, DeformerConfig::new(), SmallRng::seed_from_u64(0))?;
//!
//! deformer.press(Hit::new(Vec3::new(0.5, 0.5, 0.0), Vec3::new(0.0, 0.0, 1.0)))?;
//! for _ in 0..10 {
//!     deformer.step(0.02, &mut NoOpStepObserver)?;
//! }
//! assert!(deformer.surface().max_displacement() > 0.0);
//! # Ok::<(), squish::DeformError>(())
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod surface;
pub mod force;
pub mod integrator;
pub mod perturb;
pub mod geometry;
pub mod deformer;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Point3, Vec3};
pub use surface::Surface;
pub use force::{apply_point_force, attenuated_force};
pub use integrator::{integrate, stability_hint, Stability};
pub use perturb::{apply_gravity, Hit, Impulse, WiggleTimer};
pub use geometry::{centroid, face_normal, vertex_normals, Aabb};
pub use deformer::{CollisionProxy, MeshDeformer};
pub use config::DeformerConfig;
pub use observer::{LogStepObserver, NoOpStepObserver, StepObserver};
pub use error::{ConfigError, DeformError};
