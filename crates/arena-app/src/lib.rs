//! Headless session host for the arena shooter.
//!
//! Runs the simulation engine on its own thread, feeds it commands from an
//! input source or a channel, and reports how the session went.

pub mod autopilot;
pub mod display;
pub mod game_loop;
pub mod state;

pub use arena_core as core;
