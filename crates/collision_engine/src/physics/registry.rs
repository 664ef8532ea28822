//! Registry of rigid bodies eligible for collision testing
//!
//! Entities register a rigid component when they opt into physics and must
//! deregister it when they are destroyed; the registry never polls for
//! liveness itself. Membership is keyed by actor id in a sorted map so the
//! per-step snapshot is deterministic regardless of registration order.

use crate::foundation::math::{Transform, Vec3};
use crate::physics::actor::ActorId;
use crate::physics::collision::BoundingVolume;
use crate::physics::collision_layers::CollisionLayers;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised by registry operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A rigid component is already registered under this actor id
    ///
    /// Surfaced rather than resolved by overwriting: a duplicate id almost
    /// always means an entity lifecycle bug in the caller.
    #[error("rigid component already registered for actor {0}")]
    DuplicateKey(ActorId),
}

/// Rigid body data owned by one entity
///
/// The component owns its bounding volume and a copy of the owning entity's
/// pose; both are replaced through [`CollisionRegistry::update_pose`] when
/// the entity moves. The optional velocity and mass are advisory inputs for
/// the collision records handed to resolvers.
#[derive(Debug, Clone)]
pub struct RigidComponent {
    /// Identity of the owning actor
    pub actor_id: ActorId,

    /// World-space bounding volume
    pub volume: BoundingVolume,

    /// World-space pose of the owning entity
    pub transform: Transform,

    /// Collision layer bitmask (what layer is this body on?)
    pub layer: u32,

    /// Collision mask (what layers can this body collide with?)
    pub mask: u32,

    /// Advisory linear velocity
    pub velocity: Option<Vec3>,

    /// Advisory mass
    pub mass: Option<f32>,
}

impl RigidComponent {
    /// Create a rigid component with default layers and no advisory data
    pub fn new(actor_id: ActorId, volume: BoundingVolume) -> Self {
        Self {
            actor_id,
            volume,
            transform: Transform::identity(),
            layer: CollisionLayers::ALL,
            mask: CollisionLayers::ALL,
            velocity: None,
            mass: None,
        }
    }

    /// Set the initial pose
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Restrict which layers this body is on and collides with
    pub fn with_layers(mut self, layer: u32, mask: u32) -> Self {
        self.layer = layer;
        self.mask = mask;
        self
    }

    /// Attach an advisory velocity
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = Some(velocity);
        self
    }

    /// Attach an advisory mass
    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = Some(mass);
        self
    }
}

/// Step-local copy of one registered body
///
/// Rows are value copies: mutating the registry after a snapshot is taken
/// cannot corrupt a sweep in progress.
#[derive(Debug, Clone)]
pub struct BodySnapshot {
    /// Identity of the owning actor
    pub actor_id: ActorId,
    /// Bounding volume at snapshot time
    pub volume: BoundingVolume,
    /// Pose at snapshot time
    pub transform: Transform,
    /// Collision layer bitmask
    pub layer: u32,
    /// Collision mask
    pub mask: u32,
    /// Advisory linear velocity
    pub velocity: Option<Vec3>,
    /// Advisory mass
    pub mass: Option<f32>,
}

/// Set of rigid bodies currently eligible for pairwise testing
///
/// Owned explicitly by the surrounding engine and passed into the step
/// driver, so independent simulations and tests never share state.
#[derive(Debug, Default)]
pub struct CollisionRegistry {
    bodies: BTreeMap<ActorId, RigidComponent>,
}

impl CollisionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            bodies: BTreeMap::new(),
        }
    }

    /// Register a rigid component under its actor id
    ///
    /// Fails with [`RegistryError::DuplicateKey`] when the id is already
    /// present; the registry is left untouched in that case.
    pub fn register(&mut self, component: RigidComponent) -> Result<(), RegistryError> {
        match self.bodies.entry(component.actor_id) {
            Entry::Occupied(_) => Err(RegistryError::DuplicateKey(component.actor_id)),
            Entry::Vacant(slot) => {
                log::trace!("registered rigid component for actor {}", component.actor_id);
                slot.insert(component);
                Ok(())
            }
        }
    }

    /// Remove the component registered under an actor id
    ///
    /// A no-op when the id is absent: deregistration may race with natural
    /// step boundaries and must stay idempotent.
    pub fn deregister(&mut self, actor_id: ActorId) {
        if self.bodies.remove(&actor_id).is_some() {
            log::trace!("deregistered rigid component for actor {actor_id}");
        }
    }

    /// Replace a body's pose and volume after its entity moved
    ///
    /// A no-op when the id is absent.
    pub fn update_pose(&mut self, actor_id: ActorId, transform: Transform, volume: BoundingVolume) {
        if let Some(body) = self.bodies.get_mut(&actor_id) {
            body.transform = transform;
            body.volume = volume;
        }
    }

    /// Whether a component is registered under this actor id
    pub fn contains(&self, actor_id: ActorId) -> bool {
        self.bodies.contains_key(&actor_id)
    }

    /// Number of registered bodies
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Take a stable, step-local copy of the current membership
    ///
    /// Rows come out in ascending actor-id order. The detector sweeps this
    /// copy, so registration changes made while a step is running take
    /// effect at the next step.
    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.bodies
            .values()
            .map(|body| BodySnapshot {
                actor_id: body.actor_id,
                volume: body.volume,
                transform: body.transform.clone(),
                layer: body.layer,
                mask: body.mask,
                velocity: body.velocity,
                mass: body.mass,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::collision::Sphere;

    fn sphere_component(raw_id: u32, x: f32, radius: f32) -> RigidComponent {
        let center = Vec3::new(x, 0.0, 0.0);
        RigidComponent::new(
            ActorId::new(raw_id),
            BoundingVolume::Sphere(Sphere::new(center, radius)),
        )
        .with_transform(Transform::from_position(center))
    }

    #[test]
    fn register_rejects_duplicate_ids() {
        let mut registry = CollisionRegistry::new();
        registry.register(sphere_component(7, 0.0, 1.0)).unwrap();

        let err = registry.register(sphere_component(7, 5.0, 1.0)).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateKey(ActorId::new(7)));

        // The original entry survives the failed insert.
        assert_eq!(registry.len(), 1);
        let snapshot = registry.snapshot();
        assert_eq!(snapshot[0].volume.center().x, 0.0);
    }

    #[test]
    fn deregister_is_idempotent() {
        let mut registry = CollisionRegistry::new();
        registry.register(sphere_component(1, 0.0, 1.0)).unwrap();

        registry.deregister(ActorId::new(1));
        assert!(registry.is_empty());

        // Absent id: no error, no effect.
        registry.deregister(ActorId::new(1));
        registry.deregister(ActorId::new(99));
    }

    #[test]
    fn snapshot_is_ordered_by_actor_id_not_registration_order() {
        let mut registry = CollisionRegistry::new();
        for raw in [42, 3, 17, 1] {
            registry.register(sphere_component(raw, 0.0, 1.0)).unwrap();
        }

        let ids: Vec<u32> = registry.snapshot().iter().map(|b| b.actor_id.raw()).collect();
        assert_eq!(ids, vec![1, 3, 17, 42]);
    }

    #[test]
    fn snapshot_is_isolated_from_later_mutation() {
        let mut registry = CollisionRegistry::new();
        registry.register(sphere_component(1, 0.0, 1.0)).unwrap();

        let snapshot = registry.snapshot();
        registry.update_pose(
            ActorId::new(1),
            Transform::from_position(Vec3::new(100.0, 0.0, 0.0)),
            BoundingVolume::Sphere(Sphere::new(Vec3::new(100.0, 0.0, 0.0), 1.0)),
        );
        registry.deregister(ActorId::new(1));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].volume.center().x, 0.0);
    }

    #[test]
    fn update_pose_replaces_the_stored_volume() {
        let mut registry = CollisionRegistry::new();
        registry.register(sphere_component(1, 0.0, 1.0)).unwrap();

        let moved = Vec3::new(2.5, 0.0, 0.0);
        registry.update_pose(
            ActorId::new(1),
            Transform::from_position(moved),
            BoundingVolume::Sphere(Sphere::new(moved, 1.0)),
        );

        let snapshot = registry.snapshot();
        assert_eq!(snapshot[0].volume.center(), moved);
        assert_eq!(snapshot[0].transform.position, moved);
    }
}
