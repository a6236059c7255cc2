//! Player input sent from the host to the simulation.
//!
//! Commands are queued and applied at the start of the next frame.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Pull the trigger. Ignored while the weapon is cooling down.
    Fire,
    /// Jump. Ignored while airborne.
    Jump,
    /// Set the continuous movement intent (each axis clamped to [-1, 1]).
    /// The intent stays in effect until replaced.
    Move { strafe: f32, forward: f32 },
    /// Set the absolute view orientation in radians. Yaw 0 faces +z,
    /// positive pitch looks up.
    Look { yaw: f32, pitch: f32 },
}
