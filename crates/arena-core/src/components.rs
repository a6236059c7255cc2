//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Game logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::{CollisionLayer, Material};

/// Per-enemy combat and steering state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    /// Remaining health. An enemy at or below 0 is removed in the same update.
    pub hp: i32,
    /// Movement per reference frame (scaled by `60 * dt`).
    pub speed: f32,
    /// Seconds until this enemy may deal contact damage again.
    pub hit_cooldown: f32,
}

/// Collision volume centered on the entity's `Position`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Axis-aligned box with the given half extents. A zero extent is a flat slab.
    Aabb { half_extents: Vec3 },
    Sphere { radius: f32 },
}

/// Makes an entity visible to spatial queries on one layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    pub shape: Shape,
    pub layer: CollisionLayer,
}

/// Visual material handle of a world object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    pub material: Material,
}

/// Point light that blinks when the weapon fires and follows the camera.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MuzzleFlash {
    pub intensity: f32,
    pub range: f32,
}

/// Marks an entity as part of the static obstacle field (ground or cover).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle;

impl Collider {
    pub fn solid_box(half_extents: Vec3) -> Self {
        Self {
            shape: Shape::Aabb { half_extents },
            layer: CollisionLayer::Solid,
        }
    }

    pub fn enemy_sphere(radius: f32) -> Self {
        Self {
            shape: Shape::Sphere { radius },
            layer: CollisionLayer::Enemy,
        }
    }
}
