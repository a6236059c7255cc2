//! Session snapshot: the complete visible state handed to the host each frame.

use serde::{Deserialize, Serialize};

use crate::enums::{Material, SessionPhase};
use crate::events::DisplayEvent;
use crate::types::{Position, SimTime};

/// Complete session state produced after each frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub time: SimTime,
    pub phase: SessionPhase,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub muzzle: MuzzleView,
    /// Display events emitted during this frame, in order.
    pub display_events: Vec<DisplayEvent>,
}

/// Player stats and controller state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub hp: i32,
    pub max_hp: i32,
    pub score: u32,
    pub fire_cooldown: f32,
    pub position: Position,
    pub yaw: f32,
    pub pitch: f32,
    pub vertical_velocity: f32,
    pub grounded: bool,
}

/// A live enemy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    /// Stable identity for the enemy's lifetime.
    pub id: u64,
    pub position: Position,
    pub hp: i32,
    pub material: Material,
}

/// Muzzle flash light state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MuzzleView {
    pub position: Position,
    pub intensity: f32,
}
