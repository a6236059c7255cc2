//! Input sources that drive the player without a human at the controls.

use arena_core::commands::PlayerCommand;
use arena_core::state::{EnemyView, SessionSnapshot};
use arena_core::types::Position;
use arena_sim::controller::yaw_pitch_towards;

/// Frames between strafe direction changes.
const STRAFE_PERIOD: u64 = 90;
/// Back off from enemies closer than this.
const RETREAT_DISTANCE: f32 = 4.0;

/// Produces the commands for the next frame from the latest snapshot.
pub trait InputSource: Send {
    fn poll(&mut self, snapshot: &SessionSnapshot) -> Vec<PlayerCommand>;
}

/// Aims at the nearest enemy, strafes back and forth, and fires whenever
/// the weapon is ready.
#[derive(Debug, Default)]
pub struct Autopilot {
    frame: u64,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, snapshot: &SessionSnapshot) -> Vec<PlayerCommand> {
        self.frame += 1;
        let eye = snapshot.player.position;

        let Some(target) = nearest_enemy(&eye, &snapshot.enemies) else {
            return vec![PlayerCommand::Move {
                strafe: 0.0,
                forward: 0.0,
            }];
        };

        let (yaw, pitch) = yaw_pitch_towards(eye.0, target.position.0);
        let strafe = if (self.frame / STRAFE_PERIOD) % 2 == 0 {
            1.0
        } else {
            -1.0
        };
        let forward = if eye.horizontal_range_to(&target.position) < RETREAT_DISTANCE {
            -1.0
        } else {
            0.0
        };

        let mut commands = vec![
            PlayerCommand::Look { yaw, pitch },
            PlayerCommand::Move { strafe, forward },
        ];
        if snapshot.player.fire_cooldown <= 0.0 {
            commands.push(PlayerCommand::Fire);
        }
        commands
    }
}

fn nearest_enemy<'a>(eye: &Position, enemies: &'a [EnemyView]) -> Option<&'a EnemyView> {
    enemies
        .iter()
        .min_by(|a, b| eye.range_to(&a.position).total_cmp(&eye.range_to(&b.position)))
}
