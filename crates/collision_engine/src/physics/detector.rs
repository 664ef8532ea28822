//! Pairwise collision detection over a registry snapshot
//!
//! One sweep per simulation step: every unordered pair of snapshot rows is
//! tested exactly once and each intersecting pair yields one immutable
//! [`CollisionInfo`] record. Detection is read-only; records flow onward to
//! the re-update driver and are discarded at the step boundary.

use crate::config::PhysicsConfig;
use crate::foundation::math::Vec3;
use crate::physics::actor::ActorId;
use crate::physics::collision::intersect;
use crate::physics::collision_layers::CollisionLayers;
use crate::physics::registry::BodySnapshot;
use thiserror::Error;

/// Errors raised while detecting collisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DetectError {
    /// A registered body carries a volume kind with no pairwise test
    ///
    /// Fatal to the current step: either extend the intersection library or
    /// filter the volume kind out before registration. No partial record
    /// list is produced.
    #[error("no narrow-phase support for {kind} volume of actor {id}")]
    UnsupportedVolume {
        /// Actor owning the offending volume
        id: ActorId,
        /// Variant name of the offending volume
        kind: &'static str,
    },
}

/// Immutable record of one intersecting pair for one step
///
/// `a < b` always holds, fixing a canonical orientation so a pair is never
/// reported twice under swapped ids.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionInfo {
    /// Smaller actor id of the pair
    pub a: ActorId,
    /// Larger actor id of the pair
    pub b: ActorId,
    /// Estimated penetration depth; `0.0` when the volumes are touching
    pub penetration: f32,
    /// Velocity of `a` relative to `b`, when both bodies supplied one
    pub relative_velocity: Option<Vec3>,
    /// Masses of `a` and `b`, when both bodies supplied one
    pub masses: Option<(f32, f32)>,
}

impl CollisionInfo {
    /// Build a record from two snapshot rows, normalizing id order
    fn from_pair(x: &BodySnapshot, y: &BodySnapshot, penetration: f32) -> Self {
        let (lo, hi) = if x.actor_id <= y.actor_id { (x, y) } else { (y, x) };
        Self {
            a: lo.actor_id,
            b: hi.actor_id,
            penetration,
            relative_velocity: match (lo.velocity, hi.velocity) {
                (Some(va), Some(vb)) => Some(va - vb),
                _ => None,
            },
            masses: match (lo.mass, hi.mass) {
                (Some(ma), Some(mb)) => Some((ma, mb)),
                _ => None,
            },
        }
    }
}

/// Pairwise sweep producing the step's collision records
///
/// The sweep is the simplest correct O(N^2) form; a spatial partition may
/// replace it later provided the reported pairs and their ordering stay
/// identical.
#[derive(Debug, Default)]
pub struct CollisionDetector {
    config: PhysicsConfig,
}

impl CollisionDetector {
    /// Create a detector with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with explicit settings
    pub fn with_config(config: PhysicsConfig) -> Self {
        Self { config }
    }

    /// Produce the full set of intersecting pairs for one snapshot
    ///
    /// Records come out in ascending `(a, b)` lexicographic order; callers
    /// may rely on the exact sequence. Output is all-or-nothing: an
    /// unsupported volume aborts the sweep with no records.
    pub fn detect(&self, snapshot: &[BodySnapshot]) -> Result<Vec<CollisionInfo>, DetectError> {
        if let Some(body) = snapshot
            .iter()
            .find(|body| !intersect::narrow_phase_supported(&body.volume))
        {
            return Err(DetectError::UnsupportedVolume {
                id: body.actor_id,
                kind: body.volume.kind(),
            });
        }

        // Registry snapshots arrive sorted already; re-sorting here keeps
        // the ordering contract independent of how the slice was built.
        let mut ordered: Vec<&BodySnapshot> = snapshot.iter().collect();
        ordered.sort_by_key(|body| body.actor_id);

        let mut records = Vec::with_capacity(self.config.pair_capacity);
        for i in 0..ordered.len() {
            for j in (i + 1)..ordered.len() {
                let (x, y) = (ordered[i], ordered[j]);
                if !CollisionLayers::should_collide(x.layer, x.mask, y.layer, y.mask) {
                    continue;
                }
                let contact = intersect::contact(&x.volume, &y.volume).map_err(|_| {
                    let offender = if intersect::narrow_phase_supported(&x.volume) { y } else { x };
                    DetectError::UnsupportedVolume {
                        id: offender.actor_id,
                        kind: offender.volume.kind(),
                    }
                })?;
                if let Some(penetration) = contact {
                    let info = CollisionInfo::from_pair(x, y, penetration);
                    if self.config.log_collisions {
                        log::debug!(
                            "collision: actors {} and {}, depth {:.4}",
                            info.a,
                            info.b,
                            info.penetration
                        );
                    }
                    records.push(info);
                }
            }
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Transform;
    use crate::physics::collision::{Aabb, BoundingVolume, Capsule, Sphere};
    use crate::physics::registry::{CollisionRegistry, RigidComponent};
    use approx::assert_relative_eq;

    fn sphere_body(raw_id: u32, x: f32, radius: f32) -> RigidComponent {
        let center = Vec3::new(x, 0.0, 0.0);
        RigidComponent::new(
            ActorId::new(raw_id),
            BoundingVolume::Sphere(Sphere::new(center, radius)),
        )
        .with_transform(Transform::from_position(center))
    }

    fn pairs(records: &[CollisionInfo]) -> Vec<(u32, u32)> {
        records.iter().map(|r| (r.a.raw(), r.b.raw())).collect()
    }

    /// Three bodies in a row: 1-2 and 2-3 overlap, 1-3 do not.
    fn chain_registry(order: &[u32]) -> CollisionRegistry {
        let mut registry = CollisionRegistry::new();
        for &raw in order {
            let x = match raw {
                1 => 0.0,
                2 => 1.5,
                3 => 3.0,
                _ => unreachable!(),
            };
            registry.register(sphere_body(raw, x, 1.0)).unwrap();
        }
        registry
    }

    #[test]
    fn emission_follows_canonical_pair_order() {
        let registry = chain_registry(&[1, 2, 3]);
        let records = CollisionDetector::new().detect(&registry.snapshot()).unwrap();
        assert_eq!(pairs(&records), vec![(1, 2), (2, 3)]);
    }

    #[test]
    fn emission_is_independent_of_registration_order() {
        let forward = chain_registry(&[1, 2, 3]);
        let shuffled = chain_registry(&[3, 1, 2]);

        let detector = CollisionDetector::new();
        let a = detector.detect(&forward.snapshot()).unwrap();
        let b = detector.detect(&shuffled.snapshot()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn no_self_pairs_and_no_duplicates() {
        // A tight cluster where every pair overlaps.
        let mut registry = CollisionRegistry::new();
        for raw in 1..=5 {
            registry.register(sphere_body(raw, raw as f32 * 0.1, 2.0)).unwrap();
        }

        let records = CollisionDetector::new().detect(&registry.snapshot()).unwrap();
        assert_eq!(records.len(), 10);

        let mut seen = std::collections::HashSet::new();
        for record in &records {
            assert_ne!(record.a, record.b);
            assert!(record.a < record.b);
            assert!(seen.insert((record.a, record.b)));
        }
    }

    #[test]
    fn mixed_volume_pairs_are_detected() {
        let mut registry = CollisionRegistry::new();
        registry
            .register(RigidComponent::new(
                ActorId::new(1),
                BoundingVolume::Aabb(Aabb::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0))),
            ))
            .unwrap();
        registry.register(sphere_body(2, 1.5, 1.0)).unwrap();

        let records = CollisionDetector::new().detect(&registry.snapshot()).unwrap();
        assert_eq!(pairs(&records), vec![(1, 2)]);
        assert_relative_eq!(records[0].penetration, 0.5);
    }

    #[test]
    fn unsupported_volume_aborts_with_no_records() {
        let mut registry = chain_registry(&[1, 2, 3]);
        registry
            .register(RigidComponent::new(
                ActorId::new(4),
                BoundingVolume::Capsule(Capsule::new(Vec3::zeros(), 1.0, 0.5)),
            ))
            .unwrap();

        let err = CollisionDetector::new()
            .detect(&registry.snapshot())
            .unwrap_err();
        assert_eq!(
            err,
            DetectError::UnsupportedVolume {
                id: ActorId::new(4),
                kind: "capsule"
            }
        );
    }

    #[test]
    fn layer_filtering_suppresses_pairs() {
        let mut registry = CollisionRegistry::new();
        registry
            .register(
                sphere_body(1, 0.0, 1.0)
                    .with_layers(CollisionLayers::DYNAMIC, CollisionLayers::STATIC),
            )
            .unwrap();
        registry
            .register(
                sphere_body(2, 1.0, 1.0)
                    .with_layers(CollisionLayers::DEBRIS, CollisionLayers::ALL),
            )
            .unwrap();

        let records = CollisionDetector::new().detect(&registry.snapshot()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn advisory_fields_require_both_sides() {
        let mut registry = CollisionRegistry::new();
        registry
            .register(
                sphere_body(1, 0.0, 1.0)
                    .with_velocity(Vec3::new(2.0, 0.0, 0.0))
                    .with_mass(4.0),
            )
            .unwrap();
        registry
            .register(
                sphere_body(2, 1.0, 1.0)
                    .with_velocity(Vec3::new(-1.0, 0.0, 0.0))
                    .with_mass(2.0),
            )
            .unwrap();
        registry.register(sphere_body(3, 2.0, 1.0)).unwrap();

        let records = CollisionDetector::new().detect(&registry.snapshot()).unwrap();
        assert_eq!(pairs(&records), vec![(1, 2), (2, 3)]);

        assert_eq!(records[0].relative_velocity, Some(Vec3::new(3.0, 0.0, 0.0)));
        assert_eq!(records[0].masses, Some((4.0, 2.0)));

        // Body 3 supplied no advisory data, so the (2, 3) record has none.
        assert_eq!(records[1].relative_velocity, None);
        assert_eq!(records[1].masses, None);
    }

    #[test]
    fn empty_snapshot_emits_nothing() {
        let registry = CollisionRegistry::new();
        let records = CollisionDetector::new().detect(&registry.snapshot()).unwrap();
        assert!(records.is_empty());
    }
}
