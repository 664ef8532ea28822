//! Physics re-update driver
//!
//! Runs one Snapshot -> Detect -> Notify cycle per simulation step. The
//! surrounding engine owns the clock and calls [`ReUpdateDriver::step`]
//! once per timestep; nothing here suspends, blocks, or persists state
//! across steps beyond what the registry itself holds.
//!
//! Notification is one-way message passing: collision records flow from
//! physics to entities, and entities mutate their own transform and
//! velocity inside their re-update handler. The driver never writes entity
//! state.

use crate::config::PhysicsConfig;
use crate::foundation::math::Transform;
use crate::physics::actor::ActorId;
use crate::physics::detector::{CollisionDetector, CollisionInfo, DetectError};
use crate::physics::registry::CollisionRegistry;
use thiserror::Error;

/// Errors that abort a simulation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepError {
    /// Detection failed; no notifications were delivered
    #[error(transparent)]
    Detect(#[from] DetectError),
}

/// Re-update capability of one live entity
///
/// Implemented by the entity framework's body representation. Handlers run
/// synchronously inside the step and may destroy entities as a side effect;
/// the driver re-checks liveness through [`PhysicsWorld::resolve`] before
/// every delivery.
pub trait RigidBodyHandle {
    /// Read-only access to the entity's pose
    fn transform(&self) -> &Transform;

    /// React to one collision record implicating this entity
    fn re_update(&mut self, info: &CollisionInfo);
}

/// Entity lookup capability provided by the surrounding engine
pub trait PhysicsWorld {
    /// Resolve an actor id to its live entity, or `None` once destroyed
    fn resolve(&mut self, id: ActorId) -> Option<&mut dyn RigidBodyHandle>;
}

/// Step-local accounting returned to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepSummary {
    /// Bodies present in the snapshot
    pub bodies: usize,
    /// Collision records produced by detection
    pub collisions: usize,
    /// Re-update notifications delivered
    pub notified: usize,
    /// Records dropped whole because one side no longer resolved
    pub dropped: usize,
}

/// Drives the per-step collision cycle against an external world
#[derive(Debug, Default)]
pub struct ReUpdateDriver {
    detector: CollisionDetector,
}

impl ReUpdateDriver {
    /// Create a driver with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a driver with explicit settings
    pub fn with_config(config: PhysicsConfig) -> Self {
        Self {
            detector: CollisionDetector::with_config(config),
        }
    }

    /// Run one simulation step: Snapshot -> Detect -> Notify
    ///
    /// The registry is read once at the start; membership changes made by
    /// re-update handlers take effect at the next step. Each implicated
    /// entity is notified once per record, in emission order. A record is
    /// dropped silently when either of its actors fails to resolve, and a
    /// single delivery is skipped when a handler destroyed the partner
    /// moments earlier in the same record.
    pub fn step(
        &self,
        registry: &CollisionRegistry,
        world: &mut dyn PhysicsWorld,
    ) -> Result<StepSummary, StepError> {
        let snapshot = registry.snapshot();
        let records = self.detector.detect(&snapshot)?;

        let mut notified = 0usize;
        let mut dropped = 0usize;
        for info in &records {
            if world.resolve(info.a).is_none() || world.resolve(info.b).is_none() {
                dropped += 1;
                continue;
            }
            if let Some(handle) = world.resolve(info.a) {
                handle.re_update(info);
                notified += 1;
            }
            if let Some(handle) = world.resolve(info.b) {
                handle.re_update(info);
                notified += 1;
            }
        }

        let summary = StepSummary {
            bodies: snapshot.len(),
            collisions: records.len(),
            notified,
            dropped,
        };
        log::trace!(
            "physics step: {} bodies, {} collisions, {} notified, {} dropped",
            summary.bodies,
            summary.collisions,
            summary.notified,
            summary.dropped
        );
        Ok(summary)
    }
}
