//! Collision layer system for filtering collision detection
//!
//! Bodies carry a layer word (what the body is) and a mask word (what it
//! collides with); a pair is tested only when each body's layer is present
//! in the other's mask.

/// Collision layer definitions using bit words for efficient filtering
pub struct CollisionLayers;

impl CollisionLayers {
    /// No collision layer
    pub const NONE: u32 = 0;

    /// All collision layers
    pub const ALL: u32 = 0xFFFF_FFFF;

    /// Default layer for bodies that do not opt into filtering
    pub const DEFAULT: u32 = 1 << 0;

    /// Static environment geometry
    pub const STATIC: u32 = 1 << 1;

    /// Moving simulation bodies
    pub const DYNAMIC: u32 = 1 << 2;

    /// Projectiles and other short-lived fast movers
    pub const PROJECTILE: u32 = 1 << 3;

    /// Trigger volumes that detect overlap without a physical response
    pub const TRIGGER: u32 = 1 << 4;

    /// Debris and cosmetic physics objects
    pub const DEBRIS: u32 = 1 << 5;

    /// Check if two bodies should collide based on their layers and masks
    ///
    /// A's layer must be in B's mask and B's layer must be in A's mask;
    /// filtering is mutual.
    pub fn should_collide(layer_a: u32, mask_a: u32, layer_b: u32, mask_b: u32) -> bool {
        (layer_a & mask_b) != 0 && (layer_b & mask_a) != 0
    }

    /// Helper to create a mask from multiple layers
    pub fn mask(layers: &[u32]) -> u32 {
        layers.iter().fold(0, |acc, &layer| acc | layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutual_interest_collides() {
        assert!(CollisionLayers::should_collide(
            CollisionLayers::DYNAMIC,
            CollisionLayers::STATIC,
            CollisionLayers::STATIC,
            CollisionLayers::DYNAMIC,
        ));
    }

    #[test]
    fn one_way_interest_does_not_collide() {
        // Projectile wants to hit debris, but debris masks out projectiles.
        assert!(!CollisionLayers::should_collide(
            CollisionLayers::PROJECTILE,
            CollisionLayers::DEBRIS,
            CollisionLayers::DEBRIS,
            CollisionLayers::STATIC,
        ));
    }

    #[test]
    fn mask_combines_layers() {
        let mask = CollisionLayers::mask(&[
            CollisionLayers::STATIC,
            CollisionLayers::DYNAMIC,
            CollisionLayers::TRIGGER,
        ]);
        assert_eq!(
            mask,
            CollisionLayers::STATIC | CollisionLayers::DYNAMIC | CollisionLayers::TRIGGER
        );
    }
}
