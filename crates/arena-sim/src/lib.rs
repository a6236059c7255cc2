//! Simulation engine for the arena shooter.
//!
//! Owns the hecs ECS world, runs the per-frame systems (grounded motion,
//! enemy steering, hit-scan weapon, spawning) and produces
//! `SessionSnapshot`s for the host.

pub mod config;
pub mod controller;
pub mod display;
pub mod effects;
pub mod engine;
pub mod player;
pub mod spatial;
pub mod systems;
pub mod world_setup;

pub use arena_core as core;
pub use config::{ConfigError, SimConfig, Tuning};
pub use engine::SimulationEngine;
