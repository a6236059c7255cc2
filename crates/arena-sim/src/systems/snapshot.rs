//! Snapshot system: reads the session state and builds a `SessionSnapshot`.
//!
//! This system is read-only. It never modifies the world.

use hecs::{Entity, World};

use arena_core::components::{Appearance, Enemy, MuzzleFlash};
use arena_core::enums::SessionPhase;
use arena_core::events::DisplayEvent;
use arena_core::state::*;
use arena_core::types::{Position, SimTime};

use crate::controller::Controller;
use crate::player::PlayerState;
use crate::systems::enemies::EnemyManager;

/// Build a complete snapshot of the session.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: SessionPhase,
    player: &PlayerState,
    controller: &Controller,
    enemies: &EnemyManager,
    muzzle: Entity,
    display_events: Vec<DisplayEvent>,
) -> SessionSnapshot {
    SessionSnapshot {
        time: *time,
        phase,
        player: build_player(player, controller),
        enemies: build_enemies(world, enemies),
        muzzle: build_muzzle(world, muzzle),
        display_events,
    }
}

fn build_player(player: &PlayerState, controller: &Controller) -> PlayerView {
    PlayerView {
        hp: player.hp(),
        max_hp: player.max_hp(),
        score: player.score(),
        fire_cooldown: player.fire_cooldown(),
        position: Position(controller.position),
        yaw: controller.yaw,
        pitch: controller.pitch,
        vertical_velocity: controller.motion.vertical_velocity,
        grounded: controller.motion.grounded,
    }
}

/// Enemies in roster (spawn) order. Stale roster entries are left out.
fn build_enemies(world: &World, enemies: &EnemyManager) -> Vec<EnemyView> {
    enemies
        .roster()
        .iter()
        .filter_map(|&entity| {
            let pos = world.get::<&Position>(entity).ok()?;
            let enemy = world.get::<&Enemy>(entity).ok()?;
            let material = world
                .get::<&Appearance>(entity)
                .map(|a| a.material)
                .unwrap_or_default();
            Some(EnemyView {
                id: entity.to_bits().get(),
                position: *pos,
                hp: enemy.hp,
                material,
            })
        })
        .collect()
}

fn build_muzzle(world: &World, muzzle: Entity) -> MuzzleView {
    let position = world
        .get::<&Position>(muzzle)
        .map(|p| *p)
        .unwrap_or_default();
    let intensity = world
        .get::<&MuzzleFlash>(muzzle)
        .map(|f| f.intensity)
        .unwrap_or_default();
    MuzzleView {
        position,
        intensity,
    }
}
