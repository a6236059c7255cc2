//! Systems that advance the session each frame.
//!
//! Systems are free functions over borrowed state; they own nothing.
//! `enemies` is the exception: `EnemyManager` owns the roster.

pub mod enemies;
pub mod grounded_motion;
pub mod snapshot;
pub mod spawner;
pub mod weapon;
