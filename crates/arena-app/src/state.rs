//! Types shared between the host and the game loop thread.

use std::time::Duration;

use serde::Serialize;

use arena_core::commands::PlayerCommand;
use arena_core::enums::SessionPhase;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// How the game loop steps the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopSettings {
    /// Frames per simulated second. Every frame advances `1 / fps` seconds.
    pub fps: u32,
    /// Stop after this many frames. `None` runs until shutdown or defeat.
    pub max_frames: Option<u64>,
    /// Sleep between frames to match wall-clock time.
    pub realtime: bool,
}

impl Default for LoopSettings {
    fn default() -> Self {
        Self {
            fps: 60,
            max_frames: None,
            realtime: false,
        }
    }
}

impl LoopSettings {
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.fps.max(1) as f32
    }

    /// Wall-clock duration of one frame when running in realtime.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / self.fps.max(1) as u64)
    }
}

/// Why the game loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    Shutdown,
    Disconnected,
    FrameBudget,
    Defeated,
}

/// Printed by the host when a session ends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub seed: u64,
    pub frames: u64,
    pub elapsed_secs: f64,
    pub phase: SessionPhase,
    pub reason: EndReason,
    pub score: u32,
    pub hp: i32,
    pub enemies_remaining: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_timing() {
        let settings = LoopSettings::default();
        assert_eq!(settings.frame_duration().as_nanos(), 1_000_000_000u128 / 60);
        assert!((settings.frame_dt() - 1.0 / 60.0).abs() < f32::EPSILON);

        // A zero rate is treated as one frame per second.
        let settings = LoopSettings {
            fps: 0,
            ..Default::default()
        };
        assert_eq!(settings.frame_dt(), 1.0);
    }

    #[test]
    fn test_summary_serializes_reason_in_snake_case() {
        let summary = SessionSummary {
            seed: 1,
            frames: 10,
            elapsed_secs: 0.5,
            phase: SessionPhase::Running,
            reason: EndReason::FrameBudget,
            score: 20,
            hp: 90,
            enemies_remaining: 4,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["reason"], "frame_budget");
        assert_eq!(json["score"], 20);
    }
}
