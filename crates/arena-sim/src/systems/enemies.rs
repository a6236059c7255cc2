//! Enemy roster: spawning, steering toward the player, and contact damage.

use glam::Vec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use arena_core::components::Enemy;
use arena_core::constants::{
    ENEMY_SPAWN_HALF_EXTENT, ENEMY_SPAWN_HEIGHT, REFERENCE_FPS, STEERING_EPSILON,
};
use arena_core::events::DisplayEvent;
use arena_core::types::Position;

use crate::config::Tuning;
use crate::player::PlayerState;
use crate::world_setup;

/// Owns the identities of every live enemy, in spawn order.
#[derive(Debug, Default)]
pub struct EnemyManager {
    roster: Vec<Entity>,
}

impl EnemyManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roster(&self) -> &[Entity] {
        &self.roster
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.roster.contains(&entity)
    }

    /// Spawn one enemy at a random spot in the arena and add it to the roster.
    ///
    /// Does not check the population cap: callers must only spawn while
    /// `len() < tuning.population_cap`.
    pub fn spawn(
        &mut self,
        world: &mut World,
        rng: &mut ChaCha8Rng,
        tuning: &Tuning,
        events: &mut Vec<DisplayEvent>,
    ) -> Entity {
        let position = Position::new(
            rng.gen_range(-ENEMY_SPAWN_HALF_EXTENT..ENEMY_SPAWN_HALF_EXTENT),
            ENEMY_SPAWN_HEIGHT,
            rng.gen_range(-ENEMY_SPAWN_HALF_EXTENT..ENEMY_SPAWN_HALF_EXTENT),
        );
        let speed = tuning.enemy_speed_min + rng.gen::<f32>() * tuning.enemy_speed_range;
        let entity = world_setup::spawn_enemy(world, position, tuning.enemy_hp, speed);
        self.enlist(entity, events);

        tracing::debug!(?entity, x = position.0.x, z = position.0.z, speed, "enemy spawned");
        entity
    }

    /// Add an already spawned enemy entity to the roster.
    pub(crate) fn enlist(&mut self, entity: Entity, events: &mut Vec<DisplayEvent>) {
        self.roster.push(entity);
        events.push(DisplayEvent::EnemyCountChanged {
            count: self.roster.len(),
        });
    }

    /// Steer every enemy toward `target` along the ground plane and apply
    /// contact damage. Each enemy hits on its own cooldown.
    pub fn update(
        &mut self,
        world: &mut World,
        player: &mut PlayerState,
        target: Vec3,
        tuning: &Tuning,
        dt: f32,
        events: &mut Vec<DisplayEvent>,
    ) {
        let target = Position(target);

        for &entity in &self.roster {
            // Destroyed earlier this frame: nothing to steer.
            let Ok((pos, enemy)) = world.query_one_mut::<(&mut Position, &mut Enemy)>(entity)
            else {
                continue;
            };

            let offset = pos.planar_offset_to(&target);
            let distance = offset.length();

            if distance > STEERING_EPSILON {
                pos.0 += offset / distance * (enemy.speed * REFERENCE_FPS * dt);
            }

            enemy.hit_cooldown -= dt;
            if distance < tuning.contact_range && enemy.hit_cooldown <= 0.0 {
                let hp = player.set_health(
                    player.hp().saturating_sub(tuning.contact_damage),
                    events,
                );
                enemy.hit_cooldown = tuning.hit_cooldown;
                tracing::debug!(?entity, hp, "contact damage");
            }
        }
    }

    /// Remove `entity` from the roster. Returns false if it was not there.
    pub fn remove(&mut self, entity: Entity) -> bool {
        match self.roster.iter().position(|&e| e == entity) {
            Some(index) => {
                self.roster.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;

    #[test]
    fn test_spawn_within_region_and_speed_band() {
        let tuning = Tuning::default();
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut manager = EnemyManager::new();
        let mut events = Vec::new();

        for _ in 0..50 {
            manager.spawn(&mut world, &mut rng, &tuning, &mut events);
        }
        assert_eq!(manager.len(), 50);
        assert_eq!(events.last(), Some(&DisplayEvent::EnemyCountChanged { count: 50 }));

        for &e in manager.roster() {
            let pos = world.get::<&Position>(e).unwrap();
            assert!(pos.0.x >= -25.0 && pos.0.x < 25.0);
            assert!(pos.0.z >= -25.0 && pos.0.z < 25.0);
            assert_eq!(pos.0.y, ENEMY_SPAWN_HEIGHT);

            let enemy = world.get::<&Enemy>(e).unwrap();
            assert_eq!(enemy.hp, 70);
            assert!(enemy.speed >= 0.04 && enemy.speed <= 0.07);
        }
    }

    #[test]
    fn test_remove_is_idempotent() {
        let tuning = Tuning::default();
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut manager = EnemyManager::new();
        let mut events = Vec::new();
        let a = manager.spawn(&mut world, &mut rng, &tuning, &mut events);
        let b = manager.spawn(&mut world, &mut rng, &tuning, &mut events);

        assert!(manager.remove(a));
        assert!(!manager.remove(a));
        assert_eq!(manager.roster(), &[b]);

        world.despawn(b).unwrap();
        assert!(manager.remove(b));
        assert!(!manager.remove(b));
        assert!(manager.is_empty());
    }

    #[test]
    fn test_steering_is_planar_and_dt_scaled() {
        let tuning = Tuning::default();
        let mut world = World::new();
        let mut manager = EnemyManager::new();
        let mut events = Vec::new();
        let mut player = PlayerState::new(&tuning);

        let e = world_setup::spawn_enemy(&mut world, Position::new(10.0, 0.8, 0.0), 70, 0.05);
        manager.enlist(e, &mut events);

        // Player is high above and to the -x side: only x should change.
        manager.update(&mut world, &mut player, Vec3::new(0.0, 50.0, 0.0), &tuning, 0.5, &mut events);
        let pos = world.get::<&Position>(e).unwrap().0;
        assert!((pos.x - (10.0 - 0.05 * 60.0 * 0.5)).abs() < 1e-5);
        assert_eq!(pos.y, 0.8);
        assert_eq!(pos.z, 0.0);
    }

    #[test]
    fn test_stale_roster_entry_is_skipped() {
        let tuning = Tuning::default();
        let mut world = World::new();
        let mut manager = EnemyManager::new();
        let mut events = Vec::new();
        let mut player = PlayerState::new(&tuning);

        let e = world_setup::spawn_enemy(&mut world, Position::new(0.0, 0.8, 0.0), 70, 0.05);
        manager.enlist(e, &mut events);
        world.despawn(e).unwrap();

        manager.update(&mut world, &mut player, Vec3::new(0.0, 1.7, 0.0), &tuning, 0.1, &mut events);
        assert_eq!(player.hp(), 100);
    }

    #[test]
    fn test_simultaneous_contacts_each_deal_damage() {
        let tuning = Tuning::default();
        let mut world = World::new();
        let mut manager = EnemyManager::new();
        let mut events = Vec::new();
        let mut player = PlayerState::new(&tuning);

        for x in [0.5, -0.5, 0.0] {
            let e = world_setup::spawn_enemy(&mut world, Position::new(x, 0.8, 0.5), 70, 0.0);
            manager.enlist(e, &mut events);
        }
        manager.update(&mut world, &mut player, Vec3::new(0.0, 1.7, 0.0), &tuning, 0.1, &mut events);
        assert_eq!(player.hp(), 70);

        // All three are now cooling down.
        manager.update(&mut world, &mut player, Vec3::new(0.0, 1.7, 0.0), &tuning, 0.1, &mut events);
        assert_eq!(player.hp(), 70);
    }

    #[test]
    fn test_extreme_contact_damage_saturates() {
        let mut tuning = Tuning::default();
        let mut world = World::new();
        let mut manager = EnemyManager::new();
        let mut events = Vec::new();
        let mut player = PlayerState::new(&tuning);

        let e = world_setup::spawn_enemy(&mut world, Position::new(0.5, 0.8, 0.0), 70, 0.0);
        manager.enlist(e, &mut events);

        tuning.contact_damage = i32::MIN;
        manager.update(&mut world, &mut player, Vec3::new(0.0, 1.7, 0.0), &tuning, 1.0, &mut events);
        assert_eq!(player.hp(), 100);

        tuning.contact_damage = i32::MAX;
        manager.update(&mut world, &mut player, Vec3::new(0.0, 1.7, 0.0), &tuning, 1.0, &mut events);
        assert_eq!(player.hp(), 0);
    }
}
