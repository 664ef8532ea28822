//! Collision arena demo
//!
//! Spawns a handful of rigid bodies drifting through a shared space, steps
//! the collision core at a fixed cadence and lets each body react to its
//! re-update notifications by reversing direction. Run with
//! `RUST_LOG=debug` to watch individual collision records.

use collision_engine::foundation::logging;
use collision_engine::foundation::math::{Transform, Vec3};
use collision_engine::physics::{
    ActorId, BoundingVolume, CollisionInfo, CollisionRegistry, PhysicsWorld, ReUpdateDriver,
    RigidBodyHandle, RigidComponent, Sphere,
};
use rand::Rng;
use std::collections::HashMap;

const BODY_COUNT: u32 = 8;
const BODY_RADIUS: f32 = 1.0;
const STEP_SECONDS: f32 = 1.0 / 60.0;
const FRAME_COUNT: u32 = 600;

/// One drifting body owned by the demo, outside the collision core
struct Ball {
    transform: Transform,
    velocity: Vec3,
    bounces: u32,
}

impl RigidBodyHandle for Ball {
    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn re_update(&mut self, info: &CollisionInfo) {
        // Toy response: back out of the overlap and turn around.
        let direction = self.velocity.normalize();
        self.transform.position -= direction * info.penetration;
        self.velocity = -self.velocity;
        self.bounces += 1;
    }
}

struct Arena {
    balls: HashMap<ActorId, Ball>,
}

impl PhysicsWorld for Arena {
    fn resolve(&mut self, id: ActorId) -> Option<&mut dyn RigidBodyHandle> {
        self.balls.get_mut(&id).map(|ball| ball as &mut dyn RigidBodyHandle)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    log::info!("starting collision arena demo with {BODY_COUNT} bodies");

    let mut rng = rand::thread_rng();
    let mut registry = CollisionRegistry::new();
    let mut arena = Arena {
        balls: HashMap::new(),
    };

    for raw in 0..BODY_COUNT {
        let id = ActorId::new(raw);
        let position = Vec3::new(rng.gen_range(-6.0..6.0), rng.gen_range(-6.0..6.0), 0.0);
        let velocity = Vec3::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0), 0.0);

        registry.register(
            RigidComponent::new(id, BoundingVolume::Sphere(Sphere::new(position, BODY_RADIUS)))
                .with_transform(Transform::from_position(position))
                .with_velocity(velocity)
                .with_mass(1.0),
        )?;
        arena.balls.insert(
            id,
            Ball {
                transform: Transform::from_position(position),
                velocity,
                bounces: 0,
            },
        );
    }

    let driver = ReUpdateDriver::new();
    for frame in 0..FRAME_COUNT {
        // Integrate positions outside the core, then hand the new poses in.
        for (id, ball) in &mut arena.balls {
            ball.transform.position += ball.velocity * STEP_SECONDS;
            registry.update_pose(
                *id,
                ball.transform.clone(),
                BoundingVolume::Sphere(Sphere::new(ball.transform.position, BODY_RADIUS)),
            );
        }

        let summary = driver.step(&registry, &mut arena)?;
        if summary.collisions > 0 {
            log::debug!(
                "frame {frame}: {} collisions, {} notifications",
                summary.collisions,
                summary.notified
            );
        }
    }

    let total_bounces: u32 = arena.balls.values().map(|ball| ball.bounces).sum();
    log::info!(
        "arena demo complete: {total_bounces} bounces across {} bodies",
        arena.balls.len()
    );
    Ok(())
}
