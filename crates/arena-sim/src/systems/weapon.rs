//! Hit-scan weapon: shot resolution and the muzzle flash emitter.
//!
//! Fire gating (cooldown) lives in `PlayerState`; the engine only calls
//! `shoot` when the player can fire.

use glam::Vec3;
use hecs::{Entity, World};

use arena_core::components::{Appearance, Enemy, MuzzleFlash};
use arena_core::constants::{HIT_FLASH_SECS, MUZZLE_FLASH_INTENSITY, MUZZLE_FLASH_SECS};
use arena_core::enums::Material;
use arena_core::events::DisplayEvent;
use arena_core::types::Position;

use crate::config::Tuning;
use crate::effects::{CosmeticAction, CosmeticScheduler};
use crate::player::PlayerState;
use crate::spatial::{QueryFilter, Ray, SpatialQuery};
use crate::systems::enemies::EnemyManager;

/// What a single shot did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    Miss,
    Hit { entity: Entity, remaining_hp: i32 },
    Kill { entity: Entity },
}

/// Fire one hit-scan shot along `ray`.
///
/// The muzzle always flashes. A struck enemy loses `player.damage()` hp and
/// briefly shows the hit material; at or below zero hp it leaves the roster,
/// is despawned, and the player scores.
#[allow(clippy::too_many_arguments)]
pub fn shoot(
    world: &mut World,
    enemies: &mut EnemyManager,
    player: &mut PlayerState,
    cosmetics: &mut CosmeticScheduler,
    muzzle: Entity,
    ray: Ray,
    tuning: &Tuning,
    events: &mut Vec<DisplayEvent>,
) -> ShotOutcome {
    flash_muzzle(world, cosmetics, muzzle);

    let Some(hit) = world.cast(&ray, tuning.weapon_range, QueryFilter::Enemies) else {
        return ShotOutcome::Miss;
    };
    if !enemies.contains(hit.entity) {
        return ShotOutcome::Miss;
    }

    let remaining_hp = match world.get::<&mut Enemy>(hit.entity) {
        Ok(mut enemy) => {
            enemy.hp = enemy.hp.saturating_sub(player.damage());
            enemy.hp
        }
        Err(_) => return ShotOutcome::Miss,
    };

    if let Ok(mut appearance) = world.get::<&mut Appearance>(hit.entity) {
        // A flash still showing reverts to the enemy's own material.
        let prior = match appearance.material {
            Material::HitFlash => Material::Enemy,
            material => material,
        };
        appearance.material = Material::HitFlash;
        cosmetics.schedule(HIT_FLASH_SECS, hit.entity, CosmeticAction::RestoreMaterial(prior));
    }

    if remaining_hp > 0 {
        tracing::debug!(entity = ?hit.entity, remaining_hp, distance = hit.distance, "hit");
        return ShotOutcome::Hit {
            entity: hit.entity,
            remaining_hp,
        };
    }

    enemies.remove(hit.entity);
    let _ = world.despawn(hit.entity);
    player.add_score(tuning.kill_score, events);
    events.push(DisplayEvent::EnemyCountChanged {
        count: enemies.len(),
    });
    tracing::debug!(entity = ?hit.entity, score = player.score(), "kill");

    ShotOutcome::Kill { entity: hit.entity }
}

/// Keep the muzzle flash light at the camera.
pub fn update(world: &mut World, muzzle: Entity, camera: Vec3) {
    if let Ok(mut pos) = world.get::<&mut Position>(muzzle) {
        pos.0 = camera;
    }
}

fn flash_muzzle(world: &mut World, cosmetics: &mut CosmeticScheduler, muzzle: Entity) {
    if let Ok(mut flash) = world.get::<&mut MuzzleFlash>(muzzle) {
        flash.intensity = MUZZLE_FLASH_INTENSITY;
        cosmetics.schedule(MUZZLE_FLASH_SECS, muzzle, CosmeticAction::DimMuzzle);
    }
}
