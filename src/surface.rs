//! Per-vertex spring-mass state for a triangulated surface.

use crate::error::DeformError;
use crate::float::Float;
use crate::vec::{Point3, Vec3};
use alloc::vec::Vec as AllocVec;

/// A deformable surface: rest positions, displaced positions, velocities
/// and a fixed triangulation.
///
/// The three vertex arrays always have the same, non-zero length, and that
/// length never changes after construction.
#[derive(Clone, Debug)]
pub struct Surface<F: Float> {
    rest: AllocVec<Point3<F>>,
    positions: AllocVec<Point3<F>>,
    velocities: AllocVec<Vec3<F>>,
    triangles: AllocVec<[usize; 3]>,
}

impl<F: Float> Surface<F> {
    /// Build a surface at rest from a vertex list and its triangles.
    pub fn new(
        rest_positions: AllocVec<Point3<F>>,
        triangles: AllocVec<[usize; 3]>,
    ) -> Result<Self, DeformError> {
        if rest_positions.is_empty() {
            return Err(DeformError::EmptySurface);
        }
        check_triangles(&triangles, rest_positions.len())?;
        let velocities = alloc::vec![Vec3::zero(); rest_positions.len()];
        Ok(Surface {
            positions: rest_positions.clone(),
            rest: rest_positions,
            velocities,
            triangles,
        })
    }

    /// Build a surface with no triangles (a point cloud).
    pub fn from_positions(rest_positions: AllocVec<Point3<F>>) -> Result<Self, DeformError> {
        Self::new(rest_positions, AllocVec::new())
    }

    /// Rebuild a surface from a previously captured state.
    pub fn from_state(
        rest_positions: AllocVec<Point3<F>>,
        positions: AllocVec<Point3<F>>,
        velocities: AllocVec<Vec3<F>>,
        triangles: AllocVec<[usize; 3]>,
    ) -> Result<Self, DeformError> {
        let n = rest_positions.len();
        if n != positions.len() || n != velocities.len() {
            return Err(DeformError::LengthMismatch {
                rest: n,
                positions: positions.len(),
                velocities: velocities.len(),
            });
        }
        if n == 0 {
            return Err(DeformError::EmptySurface);
        }
        check_triangles(&triangles, n)?;
        Ok(Surface { rest: rest_positions, positions, velocities, triangles })
    }

    pub fn vertex_count(&self) -> usize {
        self.rest.len()
    }

    pub fn positions(&self) -> &[Point3<F>] {
        &self.positions
    }

    /// Owned snapshot of the displaced positions.
    pub fn current_positions(&self) -> AllocVec<Point3<F>> {
        self.positions.clone()
    }

    pub fn rest_positions(&self) -> &[Point3<F>] {
        &self.rest
    }

    pub fn velocities(&self) -> &[Vec3<F>] {
        &self.velocities
    }

    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    pub fn position(&self, index: usize) -> Point3<F> {
        self.positions[index]
    }

    pub fn velocity(&self, index: usize) -> Vec3<F> {
        self.velocities[index]
    }

    pub fn reset_velocity(&mut self, index: usize) {
        self.velocities[index] = Vec3::zero();
    }

    pub fn add_velocity(&mut self, index: usize, delta: Vec3<F>) {
        self.velocities[index] += delta;
    }

    /// Clamp each axis of vertex `index`'s velocity to `[-ceiling, ceiling]`.
    pub fn clamp_velocity(&mut self, index: usize, ceiling: F) {
        self.velocities[index] = self.velocities[index].clamp_axes(ceiling);
    }

    /// Offset of vertex `index` from its rest position.
    pub fn displacement(&self, index: usize) -> Vec3<F> {
        self.positions[index] - self.rest[index]
    }

    /// Largest distance of any vertex from its rest position.
    pub fn max_displacement(&self) -> F {
        self.positions
            .iter()
            .zip(self.rest.iter())
            .map(|(&p, &r)| p.distance(r))
            .fold(F::zero(), |acc, d| acc.max(d))
    }

    /// True when every vertex is within `eps_pos` of rest and moving slower than `eps_vel`.
    pub fn is_settled(&self, eps_pos: F, eps_vel: F) -> bool {
        let pos_sq = eps_pos * eps_pos;
        let vel_sq = eps_vel * eps_vel;
        self.positions
            .iter()
            .zip(self.rest.iter())
            .zip(self.velocities.iter())
            .all(|((&p, &r), &v)| p.distance_sq(r) < pos_sq && v.length_sq() < vel_sq)
    }

    /// Snap every vertex back to rest and stop it.
    pub fn reset(&mut self) {
        self.positions.copy_from_slice(&self.rest);
        for v in self.velocities.iter_mut() {
            *v = Vec3::zero();
        }
    }

    /// Split borrow used by the integrator: (rest, positions, velocities).
    pub(crate) fn state_mut(&mut self) -> (&[Point3<F>], &mut [Point3<F>], &mut [Vec3<F>]) {
        (&self.rest, &mut self.positions, &mut self.velocities)
    }
}

fn check_triangles(triangles: &[[usize; 3]], count: usize) -> Result<(), DeformError> {
    for (triangle, indices) in triangles.iter().enumerate() {
        if let Some(&index) = indices.iter().find(|&&i| i >= count) {
            return Err(DeformError::TriangleOutOfBounds { triangle, index, count });
        }
    }
    Ok(())
}
