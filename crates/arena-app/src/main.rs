use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use arena_app::autopilot::{Autopilot, InputSource};
use arena_app::game_loop;
use arena_app::state::LoopSettings;
use arena_sim::{SimConfig, Tuning};

#[derive(Parser)]
#[command(name = "arena", about = "Run a headless arena shooter session")]
struct Cli {
    /// RNG seed for enemy and cover placement
    #[arg(short, long, default_value = "42")]
    seed: u64,
    /// Frames to simulate (0 runs until defeat)
    #[arg(short, long, default_value = "3600")]
    frames: u64,
    /// Simulated frames per second
    #[arg(long, default_value = "60")]
    fps: u32,
    /// Enemies present when the session starts
    #[arg(long, default_value = "6")]
    enemies: usize,
    /// JSON file with tuning overrides
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Pace frames to wall-clock time
    #[arg(long)]
    realtime: bool,
    /// Leave the player without input instead of running the autopilot
    #[arg(long)]
    idle: bool,
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    anyhow::ensure!(cli.fps > 0, "--fps must be positive");

    let tuning = match &cli.config {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => Tuning::default(),
    };
    let config = SimConfig {
        seed: cli.seed,
        initial_enemies: cli.enemies,
        tuning,
    };
    let settings = LoopSettings {
        fps: cli.fps,
        max_frames: (cli.frames > 0).then_some(cli.frames),
        realtime: cli.realtime,
    };
    let input: Option<Box<dyn InputSource>> = if cli.idle {
        None
    } else {
        Some(Box::new(Autopilot::new()))
    };

    tracing::info!(seed = cli.seed, fps = cli.fps, autopilot = !cli.idle, "arena starting");

    let latest_snapshot = Arc::new(Mutex::new(None));
    let (_command_tx, handle) =
        game_loop::spawn_game_loop(config, settings, input, latest_snapshot)
            .context("spawning game loop thread")?;
    let summary = handle
        .join()
        .map_err(|_| anyhow::anyhow!("game loop thread panicked"))?;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
