//! Simulation constants and default tuning parameters.
//!
//! Values marked "per frame" are fixed increments applied once per
//! simulation step regardless of `dt`.

/// Reference frame rate the per-frame tunings were calibrated against (Hz).
pub const REFERENCE_FPS: f32 = 60.0;

// --- Player ---

/// Maximum (and starting) player health.
pub const PLAYER_MAX_HP: i32 = 100;

/// Weapon fire rate (shots per second).
pub const PLAYER_FIRE_RATE: f32 = 8.0;

/// Damage dealt per weapon hit.
pub const PLAYER_DAMAGE: i32 = 35;

/// Health fraction above which the display shows the healthy tier.
pub const HEALTH_HEALTHY_FRACTION: f32 = 0.4;

// --- Controller ---

/// Controller (camera) spawn position.
pub const CONTROLLER_START: [f32; 3] = [0.0, 1.7, -10.0];

/// Collision ellipsoid half-extents around the camera.
pub const CONTROLLER_ELLIPSOID: [f32; 3] = [0.45, 0.9, 0.45];

/// Horizontal walking distance per frame at full intent.
pub const MOVE_SPEED: f32 = 0.15;

/// Maximum look pitch magnitude (radians), just short of straight up/down.
pub const MAX_PITCH: f32 = 1.5;

// --- Grounded motion ---

/// Downward velocity change per airborne frame.
pub const GRAVITY: f32 = -0.002;

/// Vertical velocity set by a grounded jump.
pub const JUMP_FORCE: f32 = 0.05;

/// Length of the downward grounding probe cast from the feet.
pub const GROUND_PROBE_LENGTH: f32 = 1.0;

// --- Enemies ---

/// Starting enemy health.
pub const ENEMY_HP: i32 = 70;

/// Lower bound of the randomized enemy speed (units per reference frame).
pub const ENEMY_SPEED_MIN: f32 = 0.04;

/// Width of the randomized enemy speed band.
pub const ENEMY_SPEED_RANGE: f32 = 0.03;

/// Enemy sphere radius (diameter 1.2).
pub const ENEMY_RADIUS: f32 = 0.6;

/// Height at which enemies hover.
pub const ENEMY_SPAWN_HEIGHT: f32 = 0.8;

/// Half-width of the square spawn region centered on the origin.
pub const ENEMY_SPAWN_HALF_EXTENT: f32 = 25.0;

/// Planar distance below which an enemy touches the player.
pub const ENEMY_CONTACT_RANGE: f32 = 1.6;

/// Damage per contact hit.
pub const ENEMY_CONTACT_DAMAGE: i32 = 10;

/// Seconds between contact hits from the same enemy.
pub const ENEMY_HIT_COOLDOWN: f32 = 1.0;

/// Planar distance under which an enemy stops steering.
pub const STEERING_EPSILON: f32 = 0.001;

// --- Spawning ---

/// Maximum number of live enemies.
pub const POPULATION_CAP: usize = 10;

/// Seconds that must accumulate before another enemy spawns.
pub const SPAWN_INTERVAL_SECS: f32 = 2.0;

/// Enemies present when a session starts.
pub const INITIAL_ENEMY_COUNT: usize = 6;

// --- Weapon ---

/// Maximum hit-scan distance.
pub const WEAPON_RANGE: f32 = 80.0;

/// Score awarded per kill.
pub const KILL_SCORE: u32 = 10;

/// Muzzle flash light intensity while lit.
pub const MUZZLE_FLASH_INTENSITY: f32 = 2.2;

/// Muzzle flash light range.
pub const MUZZLE_FLASH_RANGE: f32 = 6.0;

/// Seconds before the muzzle flash goes dark again.
pub const MUZZLE_FLASH_SECS: f64 = 0.05;

/// Seconds a struck enemy shows the hit material.
pub const HIT_FLASH_SECS: f64 = 0.06;

// --- Arena ---

/// Side length of the square ground slab.
pub const GROUND_SIZE: f32 = 80.0;

/// Number of cover boxes scattered over the ground.
pub const COVER_COUNT: usize = 14;

/// Edge length of a cover box before vertical scaling.
pub const COVER_SIZE: f32 = 2.0;

/// Half-width of the square region cover boxes are scattered in.
pub const COVER_SCATTER_HALF_EXTENT: f32 = 30.0;

// --- Session ---

/// Message surfaced when the player is defeated.
pub const DEFEAT_MESSAGE: &str = "You died. Restart the session to play again.";
