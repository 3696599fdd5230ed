//! The mesh deformer: a surface, its parameters, and its impulse sources.

use crate::config::DeformerConfig;
use crate::error::DeformError;
use crate::float::Float;
use crate::force::apply_point_force;
use crate::geometry::{centroid, vertex_normals, Aabb};
use crate::integrator::integrate;
use crate::observer::StepObserver;
use crate::perturb::{apply_gravity, Hit, Impulse, WiggleTimer};
use crate::surface::Surface;
use crate::vec::{Point3, Vec3};
use alloc::vec::Vec as AllocVec;
use rand::Rng;

/// Receives updated geometry when the host asks for a collider resync.
///
/// Rebuilding a collision shape is expensive, so the deformer never does it
/// on its own; call [`MeshDeformer::sync_collider`] when needed.
pub trait CollisionProxy<F: Float> {
    fn resync(&mut self, positions: &[Point3<F>], triangles: &[[usize; 3]]);
}

/// A deformable surface driven by pointer impulses, wiggle and gravity.
///
/// Call [`step`](Self::step) once per fixed timestep. Pointer hits queued
/// with [`press`](Self::press) are applied at the start of the next step.
pub struct MeshDeformer<F: Float, R: Rng> {
    surface: Surface<F>,
    config: DeformerConfig<F>,
    wiggle: WiggleTimer<F>,
    pending: AllocVec<Impulse<F>>,
    center: Option<Point3<F>>,
    rng: R,
}

impl<F: Float, R: Rng> MeshDeformer<F, R> {
    /// Wrap `surface`, arming the wiggle timer if `config` enables it.
    pub fn new(surface: Surface<F>, config: DeformerConfig<F>, mut rng: R) -> Result<Self, DeformError> {
        config.validate()?;
        let wiggle = WiggleTimer::new(
            config.wiggle_enabled,
            config.min_wiggle_delay,
            config.max_wiggle_delay,
            &mut rng,
        );
        log::debug!(
            "deformer created: {} vertices, {} triangles, wiggle {}",
            surface.vertex_count(),
            surface.triangles().len(),
            if wiggle.is_armed() { "armed" } else { "inert" },
        );
        Ok(MeshDeformer {
            surface,
            config,
            wiggle,
            pending: AllocVec::new(),
            center: None,
            rng,
        })
    }

    /// Queue an impulse of `config.force` at `hit`, offset along its normal.
    pub fn press(&mut self, hit: Hit<F>) -> Result<(), DeformError> {
        self.press_with(hit, self.config.force)
    }

    /// Queue an impulse of `magnitude` at `hit`, offset along its normal.
    pub fn press_with(&mut self, hit: Hit<F>, magnitude: F) -> Result<(), DeformError> {
        if !hit.is_finite() || !magnitude.is_finite() {
            return Err(DeformError::NonFiniteInput);
        }
        self.pending.push(Impulse {
            origin: hit.force_origin(self.config.force_offset),
            magnitude,
        });
        Ok(())
    }

    /// Apply an impulse right away, outside of [`step`](Self::step).
    pub fn apply_impulse(&mut self, origin: Point3<F>, magnitude: F, dt: F) -> Result<(), DeformError> {
        if !origin.is_finite() || !magnitude.is_finite() {
            return Err(DeformError::NonFiniteInput);
        }
        check_timestep(dt)?;
        apply_point_force(
            &mut self.surface,
            origin,
            magnitude,
            self.config.vertex_mass,
            dt,
            self.config.max_velocity,
        );
        Ok(())
    }

    /// Advance the simulation by one fixed timestep.
    ///
    /// Order: queued impulses, wiggle, gravity, integration, centre tracking.
    pub fn step<O: StepObserver<F>>(&mut self, dt: F, observer: &mut O) -> Result<(), DeformError> {
        check_timestep(dt)?;
        let mass = self.config.vertex_mass;
        let ceiling = self.config.max_velocity;

        for impulse in self.pending.drain(..) {
            apply_point_force(&mut self.surface, impulse.origin, impulse.magnitude, mass, dt, ceiling);
            observer.on_impulse(impulse.origin, impulse.magnitude);
        }

        let fired = self.wiggle.tick(
            dt,
            self.config.wiggle_enabled,
            self.config.min_wiggle_delay,
            self.config.max_wiggle_delay,
            self.surface.vertex_count(),
            &mut self.rng,
        );
        if let Some(vertex) = fired {
            observer.on_wiggle(vertex);
            let origin = self.surface.position(vertex);
            let magnitude = self.config.wiggle_force;
            apply_point_force(&mut self.surface, origin, magnitude, mass, dt, ceiling);
            observer.on_impulse(origin, magnitude);
        }

        if self.config.gravity_enabled {
            apply_gravity(&mut self.surface, self.config.up, self.config.gravitational_constant, dt);
            observer.on_gravity();
        }

        integrate(&mut self.surface, self.config.spring_force, self.config.damping, dt);
        observer.on_integrate();

        if self.config.auto_recalculate_center {
            self.center = centroid(self.surface.positions());
        }

        observer.on_step_complete();
        Ok(())
    }

    /// Replace the parameters. Wiggle arming follows on the next step.
    ///
    /// An armed wiggle timer is resampled when the delay bounds change.
    pub fn set_config(&mut self, config: DeformerConfig<F>) -> Result<(), DeformError> {
        config.validate()?;
        if !config.auto_recalculate_center {
            self.center = None;
        }
        let bounds_changed = config.min_wiggle_delay != self.config.min_wiggle_delay
            || config.max_wiggle_delay != self.config.max_wiggle_delay;
        if self.wiggle.is_armed() && bounds_changed {
            self.wiggle = WiggleTimer::new(
                config.wiggle_enabled,
                config.min_wiggle_delay,
                config.max_wiggle_delay,
                &mut self.rng,
            );
        }
        log::debug!("deformer config updated");
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &DeformerConfig<F> {
        &self.config
    }

    pub fn surface(&self) -> &Surface<F> {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surface<F> {
        &mut self.surface
    }

    pub fn wiggle(&self) -> &WiggleTimer<F> {
        &self.wiggle
    }

    pub fn pending_impulses(&self) -> &[Impulse<F>] {
        &self.pending
    }

    pub fn positions(&self) -> &[Point3<F>] {
        self.surface.positions()
    }

    /// Vertex normals of the displaced surface, computed on demand.
    pub fn normals(&self) -> AllocVec<Vec3<F>> {
        vertex_normals(self.surface.positions(), self.surface.triangles())
    }

    pub fn bounds(&self) -> Option<Aabb<F>> {
        Aabb::from_points(self.surface.positions())
    }

    pub fn centroid(&self) -> Option<Point3<F>> {
        centroid(self.surface.positions())
    }

    /// Centroid recorded by the last step, when centre tracking is enabled.
    pub fn center(&self) -> Option<Point3<F>> {
        self.center
    }

    /// Hand the current geometry to a collision proxy.
    pub fn sync_collider<C: CollisionProxy<F>>(&self, proxy: &mut C) {
        proxy.resync(self.surface.positions(), self.surface.triangles());
    }

    /// Drop queued impulses and return every vertex to rest.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.surface.reset();
        self.center = None;
    }

    pub fn into_surface(self) -> Surface<F> {
        self.surface
    }
}

fn check_timestep<F: Float>(dt: F) -> Result<(), DeformError> {
    if dt.is_finite() && dt > F::zero() {
        Ok(())
    } else {
        Err(DeformError::InvalidTimestep)
    }
}
