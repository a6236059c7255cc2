//! Timed enemy spawning under the population cap.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use arena_core::events::DisplayEvent;

use crate::config::Tuning;
use crate::systems::enemies::EnemyManager;

/// Seconds accumulated toward the next spawn.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpawnTimer {
    pub elapsed_secs: f32,
}

/// Accumulate `dt`; once past the interval and below the cap, spawn exactly
/// one enemy and restart the timer. While capped the timer keeps running,
/// so the first frame with room spawns immediately.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    enemies: &mut EnemyManager,
    timer: &mut SpawnTimer,
    tuning: &Tuning,
    dt: f32,
    events: &mut Vec<DisplayEvent>,
) -> bool {
    timer.elapsed_secs += dt;

    if timer.elapsed_secs > tuning.spawn_interval_secs && enemies.len() < tuning.population_cap {
        timer.elapsed_secs = 0.0;
        enemies.spawn(world, rng, tuning, events);
        return true;
    }
    false
}
