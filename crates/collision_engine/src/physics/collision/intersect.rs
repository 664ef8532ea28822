//! Geometric intersection predicates
//!
//! Pure functions with no side effects, safe to call concurrently from any
//! number of readers. The boolean predicates are total over well-formed
//! volumes and never take a square root; penetration depth computation is
//! where the square roots live.

use super::volume::{Aabb, BoundingVolume, Sphere};
use crate::scene::Frustum;
use thiserror::Error;

/// Raised by the generic dispatch when a volume pairing has no defined test
///
/// Unsupported pairings must fail loudly rather than silently report "no
/// intersection"; integrators either extend this module or filter the
/// offending volume kind before registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntersectError {
    /// No pairwise test is defined for the two volume kinds
    #[error("no pairwise test for {a}/{b} volumes")]
    UnsupportedPair {
        /// Variant name of the left operand
        a: &'static str,
        /// Variant name of the right operand
        b: &'static str,
    },
}

/// Test two axis-aligned boxes for overlap
///
/// Separating-axis test on each of the three coordinate axes; the boxes
/// intersect iff their projections overlap on all of them.
pub fn aabb_aabb(a: &Aabb, b: &Aabb) -> bool {
    let delta = b.center - a.center;
    let reach = a.half_extents + b.half_extents;
    delta.x.abs() <= reach.x && delta.y.abs() <= reach.y && delta.z.abs() <= reach.z
}

/// Test two spheres for overlap using squared distances
pub fn sphere_sphere(a: &Sphere, b: &Sphere) -> bool {
    let radius_sum = a.radius + b.radius;
    (b.center - a.center).magnitude_squared() <= radius_sum * radius_sum
}

/// Test a box and a sphere for overlap
///
/// The sphere intersects the box iff its center lies within `radius` of the
/// closest point on the box.
pub fn aabb_sphere(aabb: &Aabb, sphere: &Sphere) -> bool {
    let closest = aabb.closest_point(sphere.center);
    (sphere.center - closest).magnitude_squared() <= sphere.radius * sphere.radius
}

/// Test a sphere against a view frustum
///
/// The sphere is culled only when it lies entirely on the outside of at
/// least one plane; the loop short-circuits on the first such plane.
pub fn sphere_frustum(sphere: &Sphere, frustum: &Frustum) -> bool {
    frustum
        .planes
        .iter()
        .all(|plane| plane.distance_to_point(sphere.center) >= -sphere.radius)
}

/// Whether the pairwise narrow phase defines tests for this volume kind
pub fn narrow_phase_supported(volume: &BoundingVolume) -> bool {
    !matches!(volume, BoundingVolume::Capsule(_))
}

/// Generic dispatch over the runtime variants of both operands
///
/// Box/sphere is symmetric: both argument orders resolve to the same
/// predicate.
pub fn intersects(a: &BoundingVolume, b: &BoundingVolume) -> Result<bool, IntersectError> {
    use BoundingVolume as V;
    match (a, b) {
        (V::Aabb(x), V::Aabb(y)) => Ok(aabb_aabb(x, y)),
        (V::Sphere(x), V::Sphere(y)) => Ok(sphere_sphere(x, y)),
        (V::Aabb(x), V::Sphere(y)) | (V::Sphere(y), V::Aabb(x)) => Ok(aabb_sphere(x, y)),
        (V::Capsule(_), _) | (_, V::Capsule(_)) => Err(IntersectError::UnsupportedPair {
            a: a.kind(),
            b: b.kind(),
        }),
    }
}

/// Compute the penetration depth of an intersecting pair
///
/// Returns `Ok(Some(depth))` with a non-negative depth when the volumes
/// intersect (exactly `0.0` when merely touching), `Ok(None)` when they are
/// separated, and the same error as [`intersects`] for unsupported pairings.
pub fn contact(a: &BoundingVolume, b: &BoundingVolume) -> Result<Option<f32>, IntersectError> {
    use BoundingVolume as V;
    match (a, b) {
        (V::Aabb(x), V::Aabb(y)) => Ok(aabb_aabb_depth(x, y)),
        (V::Sphere(x), V::Sphere(y)) => Ok(sphere_sphere_depth(x, y)),
        (V::Aabb(x), V::Sphere(y)) | (V::Sphere(y), V::Aabb(x)) => Ok(aabb_sphere_depth(x, y)),
        (V::Capsule(_), _) | (_, V::Capsule(_)) => Err(IntersectError::UnsupportedPair {
            a: a.kind(),
            b: b.kind(),
        }),
    }
}

/// Penetration depth of two spheres, `None` when separated
pub fn sphere_sphere_depth(a: &Sphere, b: &Sphere) -> Option<f32> {
    let radius_sum = a.radius + b.radius;
    let distance_squared = (b.center - a.center).magnitude_squared();
    if distance_squared <= radius_sum * radius_sum {
        Some(radius_sum - distance_squared.sqrt())
    } else {
        None
    }
}

/// Penetration depth of two boxes, the minimum per-axis overlap
pub fn aabb_aabb_depth(a: &Aabb, b: &Aabb) -> Option<f32> {
    let delta = b.center - a.center;
    let reach = a.half_extents + b.half_extents;
    let overlap_x = reach.x - delta.x.abs();
    let overlap_y = reach.y - delta.y.abs();
    let overlap_z = reach.z - delta.z.abs();
    if overlap_x >= 0.0 && overlap_y >= 0.0 && overlap_z >= 0.0 {
        Some(overlap_x.min(overlap_y).min(overlap_z))
    } else {
        None
    }
}

/// Penetration depth of a box and a sphere
///
/// Estimated as how far the sphere surface reaches past the closest point
/// on the box; a sphere whose center sits inside the box reports its full
/// radius.
pub fn aabb_sphere_depth(aabb: &Aabb, sphere: &Sphere) -> Option<f32> {
    let closest = aabb.closest_point(sphere.center);
    let distance_squared = (sphere.center - closest).magnitude_squared();
    if distance_squared <= sphere.radius * sphere.radius {
        Some(sphere.radius - distance_squared.sqrt())
    } else {
        None
    }
}
