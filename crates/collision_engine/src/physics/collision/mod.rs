//! Collision volumes and intersection testing
//!
//! The intersection predicates are shared infrastructure: the detector uses
//! them for the pairwise narrow phase and the renderer uses the
//! sphere/frustum test for visibility culling.
//!
//! # Module Organization
//!
//! - [`volume`] - Bounding volume variants (box, sphere, capsule)
//! - [`intersect`] - Stateless pairwise and frustum predicates

pub mod intersect;
pub mod volume;

// Re-export commonly used types
pub use intersect::IntersectError;
pub use volume::{Aabb, BoundingVolume, Capsule, Sphere};
