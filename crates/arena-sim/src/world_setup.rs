//! Entity spawn factories for setting up the arena.
//!
//! Creates the static obstacle field (ground slab and cover boxes), the
//! muzzle flash emitter, and enemy entities with their component bundles.

use glam::Vec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use arena_core::components::*;
use arena_core::constants::*;
use arena_core::enums::Material;
use arena_core::types::Position;

/// Handles to the fixed entities of an arena.
#[derive(Debug, Clone, Copy)]
pub struct Arena {
    pub ground: Entity,
    pub muzzle: Entity,
}

/// Build the static arena: ground, scattered cover, and the muzzle light.
pub fn setup_arena(world: &mut World, rng: &mut ChaCha8Rng, camera: Vec3) -> Arena {
    let ground = spawn_ground(world);
    for _ in 0..COVER_COUNT {
        spawn_cover(world, rng);
    }
    let muzzle = spawn_muzzle(world, camera);
    Arena { ground, muzzle }
}

/// Flat, zero-thickness ground slab at y = 0.
pub fn spawn_ground(world: &mut World) -> Entity {
    let half = GROUND_SIZE / 2.0;
    world.spawn((
        Obstacle,
        Position::new(0.0, 0.0, 0.0),
        Collider::solid_box(Vec3::new(half, 0.0, half)),
        Appearance {
            material: Material::Ground,
        },
    ))
}

/// A cover box of edge `COVER_SIZE`, stretched vertically by a random factor
/// in [1, 3) about a center one unit above the ground.
pub fn spawn_cover(world: &mut World, rng: &mut ChaCha8Rng) -> Entity {
    let x = rng.gen_range(-COVER_SCATTER_HALF_EXTENT..COVER_SCATTER_HALF_EXTENT);
    let z = rng.gen_range(-COVER_SCATTER_HALF_EXTENT..COVER_SCATTER_HALF_EXTENT);
    let scale_y = rng.gen_range(1.0..3.0);
    let half = COVER_SIZE / 2.0;

    world.spawn((
        Obstacle,
        Position::new(x, 1.0, z),
        Collider::solid_box(Vec3::new(half, half * scale_y, half)),
        Appearance {
            material: Material::Cover,
        },
    ))
}

pub fn spawn_muzzle(world: &mut World, camera: Vec3) -> Entity {
    world.spawn((
        Position(camera),
        MuzzleFlash {
            intensity: 0.0,
            range: MUZZLE_FLASH_RANGE,
        },
    ))
}

/// Spawn an enemy body. Roster membership is the caller's business.
pub fn spawn_enemy(world: &mut World, position: Position, hp: i32, speed: f32) -> Entity {
    world.spawn((
        position,
        Enemy {
            hp,
            speed,
            hit_cooldown: 0.0,
        },
        Collider::enemy_sphere(ENEMY_RADIUS),
        Appearance {
            material: Material::Enemy,
        },
    ))
}
