//! Geometry derived from displaced positions: normals, bounds, centroid.
//!
//! None of this feeds back into the simulation. Hosts call it when they
//! need to render or resync a collider.

use crate::float::Float;
use crate::vec::{Point3, Vec3};
use alloc::vec::Vec as AllocVec;

/// Area-weighted vertex normals.
///
/// Each vertex normal is the normalized sum of the (unnormalized) face
/// normals of its incident triangles, so larger faces weigh more. Winding is
/// counter-clockwise. Vertices with no incident triangle, or whose incident
/// faces are degenerate, get the zero vector.
pub fn vertex_normals<F: Float>(positions: &[Point3<F>], triangles: &[[usize; 3]]) -> AllocVec<Vec3<F>> {
    let mut normals = alloc::vec![Vec3::zero(); positions.len()];
    for &[a, b, c] in triangles {
        let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }
    for n in normals.iter_mut() {
        *n = n.normalize();
    }
    normals
}

/// Unit normal of a single triangle, or zero when degenerate.
pub fn face_normal<F: Float>(a: Point3<F>, b: Point3<F>, c: Point3<F>) -> Vec3<F> {
    (b - a).cross(c - a).normalize()
}

/// Mean of `points`, or `None` for an empty slice.
pub fn centroid<F: Float>(points: &[Point3<F>]) -> Option<Point3<F>> {
    if points.is_empty() {
        return None;
    }
    let mut sum = Vec3::zero();
    for &p in points {
        sum += p;
    }
    Some(sum.scale(F::one() / F::from_usize(points.len())))
}

/// Axis-aligned bounding box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb<F: Float> {
    pub min: Point3<F>,
    pub max: Point3<F>,
}

impl<F: Float> Aabb<F> {
    /// Smallest box containing every point, or `None` for an empty slice.
    pub fn from_points(points: &[Point3<F>]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;
        let mut aabb = Aabb { min: first, max: first };
        for &p in rest {
            aabb.min = aabb.min.min(p);
            aabb.max = aabb.max.max(p);
        }
        Some(aabb)
    }

    pub fn center(&self) -> Point3<F> {
        (self.min + self.max).scale(F::one() / F::two())
    }

    pub fn size(&self) -> Vec3<F> {
        self.max - self.min
    }

    pub fn contains(&self, p: Point3<F>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x
            && p.y >= self.min.y && p.y <= self.max.y
            && p.z >= self.min.z && p.z <= self.max.z
    }
}
