//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Session state machine. `Defeated` is absorbing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionPhase {
    #[default]
    Running,
    Defeated,
}

/// Visual tier of the health bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthTier {
    #[default]
    Healthy,
    Critical,
}

/// Collision layer a collider belongs to. Spatial queries filter on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollisionLayer {
    /// Static geometry the controller stands on and collides with.
    Solid,
    /// Enemy bodies: shootable, not walkable.
    Enemy,
}

/// Material shown by a world object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    #[default]
    Ground,
    Cover,
    Enemy,
    /// Transient emissive override applied to a struck enemy.
    HitFlash,
}
