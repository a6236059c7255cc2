//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs world and every piece of session state
//! (player stats, enemy roster, controller, timers). Each call to `tick`
//! applies queued input, runs all systems once in a fixed order with the
//! frame's `dt`, and produces a `SessionSnapshot`. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec3;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use arena_core::commands::PlayerCommand;
use arena_core::constants::DEFEAT_MESSAGE;
use arena_core::enums::SessionPhase;
use arena_core::events::DisplayEvent;
use arena_core::state::SessionSnapshot;
use arena_core::types::SimTime;

use crate::config::{SimConfig, Tuning};
use crate::controller::Controller;
use crate::display::{DisplaySink, NullDisplay};
use crate::effects::CosmeticScheduler;
use crate::player::PlayerState;
use crate::spatial::{MotionResolver, Ray};
use crate::systems;
use crate::systems::enemies::EnemyManager;
use crate::systems::spawner::SpawnTimer;
use crate::systems::weapon::ShotOutcome;
use crate::world_setup::{self, Arena};

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: SessionPhase,
    tuning: Tuning,
    rng: ChaCha8Rng,
    player: PlayerState,
    controller: Controller,
    enemies: EnemyManager,
    spawn_timer: SpawnTimer,
    cosmetics: CosmeticScheduler,
    arena: Arena,
    command_queue: VecDeque<PlayerCommand>,
    display_events: Vec<DisplayEvent>,
    display: Box<dyn DisplaySink>,
    last_shot: Option<ShotOutcome>,
}

impl SimulationEngine {
    /// Start a new session: build the arena and spawn the initial enemies.
    pub fn new(config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut world = World::new();
        let controller = Controller::default();
        let arena = world_setup::setup_arena(&mut world, &mut rng, controller.position);
        let player = PlayerState::new(&config.tuning);

        let mut display_events = vec![
            player.health_event(),
            DisplayEvent::ScoreChanged {
                total: player.score(),
            },
        ];

        let mut enemies = EnemyManager::new();
        for _ in 0..config.initial_enemies {
            enemies.spawn(&mut world, &mut rng, &config.tuning, &mut display_events);
        }
        if config.initial_enemies == 0 {
            display_events.push(DisplayEvent::EnemyCountChanged { count: 0 });
        }

        tracing::info!(
            seed = config.seed,
            enemies = enemies.len(),
            "session started"
        );

        Self {
            world,
            time: SimTime::default(),
            phase: SessionPhase::default(),
            tuning: config.tuning,
            rng,
            player,
            controller,
            enemies,
            spawn_timer: SpawnTimer::default(),
            cosmetics: CosmeticScheduler::new(),
            arena,
            command_queue: VecDeque::new(),
            display_events,
            display: Box::new(NullDisplay),
            last_shot: None,
        }
    }

    /// Attach the sink that receives display updates after each frame.
    pub fn with_display(mut self, display: Box<dyn DisplaySink>) -> Self {
        self.display = display;
        self
    }

    /// Queue a player command for processing at the next frame.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the session by one frame of `dt` seconds and return the
    /// resulting snapshot. Once defeated, input is discarded and nothing
    /// but cosmetic effects moves.
    pub fn tick(&mut self, dt: f32) -> SessionSnapshot {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let _span = tracing::trace_span!("frame", frame = self.time.frame).entered();

        self.cosmetics.advance(&mut self.world, dt as f64);

        if self.phase == SessionPhase::Running {
            self.process_commands();
            self.run_systems(dt);
            self.time.advance(dt);
        } else {
            self.command_queue.clear();
        }

        let display_events = std::mem::take(&mut self.display_events);
        for event in &display_events {
            self.display.dispatch(event);
        }

        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.player,
            &self.controller,
            &self.enemies,
            self.arena.muzzle,
            display_events,
        )
    }

    /// Run cosmetic effects that came due, without stepping the simulation.
    /// Hosts may call this between frames.
    pub fn run_cosmetics(&mut self, dt: f64) -> usize {
        self.cosmetics.advance(&mut self.world, dt)
    }

    /// Snapshot of the current state without advancing. Carries no events.
    pub fn snapshot(&self) -> SessionSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.player,
            &self.controller,
            &self.enemies,
            self.arena.muzzle,
            Vec::new(),
        )
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn enemies(&self) -> &EnemyManager {
        &self.enemies
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Outcome of the most recent shot fired, if any.
    pub fn last_shot(&self) -> Option<ShotOutcome> {
        self.last_shot
    }

    /// Spawn a rostered enemy at a fixed spot (for tests).
    #[cfg(test)]
    pub fn spawn_test_enemy(&mut self, position: Vec3, speed: f32) -> hecs::Entity {
        let entity = world_setup::spawn_enemy(
            &mut self.world,
            arena_core::types::Position(position),
            self.tuning.enemy_hp,
            speed,
        );
        self.enemies.enlist(entity, &mut self.display_events);
        entity
    }

    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    #[cfg(test)]
    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    #[cfg(test)]
    pub fn spawn_timer(&self) -> SpawnTimer {
        self.spawn_timer
    }

    /// Remove every cover box, leaving only the ground (for tests).
    #[cfg(test)]
    pub fn clear_cover(&mut self) {
        let ground = self.arena.ground;
        let covers: Vec<hecs::Entity> = self
            .world
            .query::<&arena_core::components::Obstacle>()
            .iter()
            .map(|(e, _)| e)
            .filter(|&e| e != ground)
            .collect();
        for entity in covers {
            let _ = self.world.despawn(entity);
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Fire => {
                if !self.player.can_fire() {
                    return;
                }
                let ray = Ray::new(self.controller.position, self.controller.forward());
                let outcome = systems::weapon::shoot(
                    &mut self.world,
                    &mut self.enemies,
                    &mut self.player,
                    &mut self.cosmetics,
                    self.arena.muzzle,
                    ray,
                    &self.tuning,
                    &mut self.display_events,
                );
                self.player.consume_fire_slot();
                self.last_shot = Some(outcome);
            }
            PlayerCommand::Jump => {
                self.controller.motion.jump(&self.tuning);
            }
            PlayerCommand::Move { strafe, forward } => {
                self.controller.set_move_intent(strafe, forward);
            }
            PlayerCommand::Look { yaw, pitch } => {
                self.controller.set_look(yaw, pitch);
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        // 1. Grounding probe, vertical integration, collision-resolved move
        let feet = self.controller.feet();
        let dy = systems::grounded_motion::run(
            &mut self.controller.motion,
            feet,
            &self.world,
            &self.tuning,
        );
        let displacement =
            self.controller.walk_displacement(self.tuning.move_speed) + Vec3::Y * dy;
        self.controller.position = self.world.resolve(
            self.controller.position,
            self.controller.ellipsoid,
            displacement,
        );

        // 2. Weapon cooldown
        self.player.tick_cooldown(dt);

        // 3. Enemy steering and contact damage
        self.enemies.update(
            &mut self.world,
            &mut self.player,
            self.controller.position,
            &self.tuning,
            dt,
            &mut self.display_events,
        );

        // 4. Weapon bookkeeping (muzzle light follows the camera)
        systems::weapon::update(&mut self.world, self.arena.muzzle, self.controller.position);

        // 5. Timed spawning under the population cap
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.enemies,
            &mut self.spawn_timer,
            &self.tuning,
            dt,
            &mut self.display_events,
        );

        // 6. Defeat
        if self.player.is_dead() {
            self.phase = SessionPhase::Defeated;
            self.display_events.push(DisplayEvent::SessionEnded {
                message: DEFEAT_MESSAGE.to_string(),
            });
            tracing::info!(
                score = self.player.score(),
                elapsed = self.time.elapsed_secs,
                "player defeated"
            );
        }

        tracing::trace!(
            hp = self.player.hp(),
            enemies = self.enemies.len(),
            grounded = self.controller.motion.grounded,
            "frame done"
        );
    }
}
