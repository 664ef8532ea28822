//! Bounding volume variants attached to rigid components
//!
//! Volumes are world-space value types. When a body moves, its owner
//! replaces the whole volume through the registry instead of mutating the
//! stored one, so a sweep in progress never observes stale geometry.

use crate::foundation::math::Vec3;

/// Axis-aligned box described by its center and half-extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Center point in world space
    pub center: Vec3,
    /// Half-extent along each axis; all components must be non-negative
    pub half_extents: Vec3,
}

impl Aabb {
    /// Create a box from center and half-extents
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        debug_assert!(
            half_extents.x >= 0.0 && half_extents.y >= 0.0 && half_extents.z >= 0.0,
            "half-extents must be non-negative"
        );
        Self {
            center,
            half_extents,
        }
    }

    /// Minimum corner of the box
    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents
    }

    /// Maximum corner of the box
    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents
    }

    /// Closest point on or inside the box to the given point, clamped per axis
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        let min = self.min();
        let max = self.max();
        Vec3::new(
            point.x.clamp(min.x, max.x),
            point.y.clamp(min.y, max.y),
            point.z.clamp(min.z, max.z),
        )
    }
}

/// Sphere described by its center and radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center point in world space
    pub center: Vec3,
    /// Radius; must be non-negative
    pub radius: f32,
}

impl Sphere {
    /// Create a sphere from center and radius
    pub fn new(center: Vec3, radius: f32) -> Self {
        debug_assert!(radius >= 0.0, "radius must be non-negative");
        Self { center, radius }
    }
}

/// Upright capsule described by its center, half-height and radius
///
/// Data-only shape: no pairwise narrow-phase test is defined for it, so the
/// detector rejects registered capsules with an unsupported-volume error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capsule {
    /// Center point in world space
    pub center: Vec3,
    /// Half the distance between the two hemisphere centers, along +Y
    pub half_height: f32,
    /// Radius of the cylindrical body and end caps
    pub radius: f32,
}

impl Capsule {
    /// Create a capsule from center, half-height and radius
    pub fn new(center: Vec3, half_height: f32, radius: f32) -> Self {
        debug_assert!(half_height >= 0.0 && radius >= 0.0);
        Self {
            center,
            half_height,
            radius,
        }
    }
}

/// Collision volume variants understood by the registry
///
/// The set of shapes is closed; the pairwise tests live in
/// [`intersect`](super::intersect) and an exhaustive match there keeps the
/// two in sync at compile time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundingVolume {
    /// Axis-aligned bounding box
    Aabb(Aabb),
    /// Bounding sphere
    Sphere(Sphere),
    /// Upright capsule
    Capsule(Capsule),
}

impl BoundingVolume {
    /// Center point of the volume
    pub fn center(&self) -> Vec3 {
        match self {
            Self::Aabb(aabb) => aabb.center,
            Self::Sphere(sphere) => sphere.center,
            Self::Capsule(capsule) => capsule.center,
        }
    }

    /// Short variant name for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Aabb(_) => "aabb",
            Self::Sphere(_) => "sphere",
            Self::Capsule(_) => "capsule",
        }
    }
}
