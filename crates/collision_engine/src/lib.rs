//! # Collision Engine
//!
//! Collision detection and physics re-update core for a real-time
//! simulation engine.
//!
//! ## Features
//!
//! - **Bounding Volumes**: Box and sphere value types with a closed variant
//!   set checked exhaustively at compile time
//! - **Intersection Library**: Stateless pairwise predicates, shared with
//!   view-frustum culling
//! - **Collision Registry**: Explicitly owned body membership with
//!   deterministic, step-local snapshots
//! - **Re-update Driver**: Exactly-once-per-pair notification back to the
//!   owning entities through a resolve/re-update capability interface
//!
//! ## Quick Start
//!
//! ```rust
//! use collision_engine::prelude::*;
//!
//! struct Ball {
//!     transform: Transform,
//! }
//!
//! impl RigidBodyHandle for Ball {
//!     fn transform(&self) -> &Transform {
//!         &self.transform
//!     }
//!
//!     fn re_update(&mut self, info: &CollisionInfo) {
//!         println!("hit, depth {}", info.penetration);
//!     }
//! }
//!
//! struct World {
//!     balls: std::collections::HashMap<ActorId, Ball>,
//! }
//!
//! impl PhysicsWorld for World {
//!     fn resolve(&mut self, id: ActorId) -> Option<&mut dyn RigidBodyHandle> {
//!         self.balls.get_mut(&id).map(|ball| ball as &mut dyn RigidBodyHandle)
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut registry = CollisionRegistry::new();
//!     let mut world = World {
//!         balls: std::collections::HashMap::new(),
//!     };
//!
//!     for (raw, x) in [(1u32, 0.0f32), (2, 1.5)] {
//!         let id = ActorId::new(raw);
//!         let center = Vec3::new(x, 0.0, 0.0);
//!         let volume = BoundingVolume::Sphere(Sphere::new(center, 1.0));
//!         registry.register(
//!             RigidComponent::new(id, volume).with_transform(Transform::from_position(center)),
//!         )?;
//!         world.balls.insert(id, Ball {
//!             transform: Transform::from_position(center),
//!         });
//!     }
//!
//!     let summary = ReUpdateDriver::new().step(&registry, &mut world)?;
//!     assert_eq!(summary.collisions, 1);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod physics;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::config::{Config, PhysicsConfig};
    pub use crate::foundation::math::{Transform, Vec3};
    pub use crate::physics::{
        Aabb, ActorId, BodySnapshot, BoundingVolume, Capsule, CollisionDetector, CollisionInfo,
        CollisionLayers, CollisionRegistry, PhysicsWorld, ReUpdateDriver, RegistryError,
        RigidBodyHandle, RigidComponent, Sphere, StepError, StepSummary,
    };
    pub use crate::scene::{Frustum, Plane};
}
