//! Events emitted by the simulation for the on-screen display.

use serde::{Deserialize, Serialize};

use crate::enums::HealthTier;

/// A change the display should reflect. Emitted in simulation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DisplayEvent {
    HealthChanged {
        current: i32,
        max: i32,
        tier: HealthTier,
    },
    ScoreChanged {
        total: u32,
    },
    EnemyCountChanged {
        count: usize,
    },
    /// The session reached its terminal state.
    SessionEnded {
        message: String,
    },
}
