//! Physics module for collision detection and re-update notification
//!
//! The per-step cycle is Snapshot -> Detect -> Notify: entities register
//! rigid components into a [`CollisionRegistry`], the [`CollisionDetector`]
//! sweeps a snapshot of it, and the [`ReUpdateDriver`] maps each resulting
//! record back to its two entities through the engine-provided
//! [`PhysicsWorld`] lookup.

pub mod actor;
pub mod collision;
pub mod collision_layers;
pub mod detector;
pub mod driver;
pub mod registry;

pub use actor::ActorId;
pub use collision::{Aabb, BoundingVolume, Capsule, IntersectError, Sphere};
pub use collision_layers::CollisionLayers;
pub use detector::{CollisionDetector, CollisionInfo, DetectError};
pub use driver::{PhysicsWorld, ReUpdateDriver, RigidBodyHandle, StepError, StepSummary};
pub use registry::{BodySnapshot, CollisionRegistry, RegistryError, RigidComponent};
