//! Game loop thread: runs the simulation engine frame by frame.
//!
//! The engine is created inside this thread because it's cleaner for ownership.
//! Commands arrive via `mpsc` channel; an optional `InputSource` adds its own
//! commands each frame from the previous snapshot. The latest snapshot is
//! kept in shared state for polling, and a `SessionSummary` is returned
//! through the join handle when the loop stops.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Instant;

use arena_core::enums::SessionPhase;
use arena_core::state::SessionSnapshot;
use arena_sim::{SimConfig, SimulationEngine};

use crate::autopilot::InputSource;
use crate::display::TracingDisplay;
use crate::state::{EndReason, GameLoopCommand, LoopSettings, SessionSummary};

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the handle yielding the session summary.
pub fn spawn_game_loop(
    config: SimConfig,
    settings: LoopSettings,
    input: Option<Box<dyn InputSource>>,
    latest_snapshot: Arc<Mutex<Option<SessionSnapshot>>>,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<SessionSummary>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("arena-game-loop".into())
        .spawn(move || run_game_loop(config, settings, input, cmd_rx, &latest_snapshot))?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until shutdown, channel disconnect, the frame budget
/// runs out, or the player is defeated.
fn run_game_loop(
    config: SimConfig,
    settings: LoopSettings,
    mut input: Option<Box<dyn InputSource>>,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<SessionSnapshot>>,
) -> SessionSummary {
    let seed = config.seed;
    let mut engine = SimulationEngine::new(config).with_display(Box::new(TracingDisplay));
    let dt = settings.frame_dt();
    let frame_duration = settings.frame_duration();
    let mut snapshot = engine.snapshot();
    let mut frames = 0u64;
    let mut next_tick_time = Instant::now();

    let reason = 'frames: loop {
        if settings.max_frames.is_some_and(|max| frames >= max) {
            break EndReason::FrameBudget;
        }

        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => break 'frames EndReason::Shutdown,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => break 'frames EndReason::Disconnected,
            }
        }

        // 2. Input source reacts to what it saw last frame
        if let Some(source) = input.as_mut() {
            engine.queue_commands(source.poll(&snapshot));
        }

        // 3. Advance one frame
        snapshot = engine.tick(dt);
        frames += 1;

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }

        if snapshot.phase == SessionPhase::Defeated {
            break EndReason::Defeated;
        }

        // 5. Sleep until next frame
        if settings.realtime {
            next_tick_time += frame_duration;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > frame_duration * 2 {
                // Too far behind; reset to avoid catch-up spiral
                next_tick_time = now;
            }
        }
    };

    tracing::info!(?reason, frames, score = snapshot.player.score, "game loop stopped");

    SessionSummary {
        seed,
        frames,
        elapsed_secs: snapshot.time.elapsed_secs,
        phase: snapshot.phase,
        reason,
        score: snapshot.player.score,
        hp: snapshot.player.hp,
        enemies_remaining: snapshot.enemies.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::commands::PlayerCommand;
    use std::time::Duration;

    use crate::autopilot::Autopilot;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Jump))
            .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Fire))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::Jump)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::PlayerCommand(PlayerCommand::Fire)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    fn busy_snapshot() -> SessionSnapshot {
        let mut engine = SimulationEngine::new(SimConfig::default());
        for _ in 0..600 {
            engine.tick(1.0 / 60.0);
        }
        engine.tick(1.0 / 60.0)
    }

    #[test]
    fn test_snapshot_json_round_trip() {
        let snapshot = busy_snapshot();
        assert!(!snapshot.enemies.is_empty());

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    /// Wall-clock bound; run with `--ignored` on an idle machine.
    #[test]
    #[ignore]
    fn test_snapshot_serialization_under_3ms() {
        let snapshot = busy_snapshot();
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_stops_at_frame_budget() {
        let latest = Arc::new(Mutex::new(None));
        let settings = LoopSettings {
            max_frames: Some(30),
            ..Default::default()
        };
        let (tx, handle) =
            spawn_game_loop(SimConfig::default(), settings, None, latest.clone()).unwrap();

        let summary = handle.join().unwrap();
        drop(tx);

        assert_eq!(summary.reason, EndReason::FrameBudget);
        assert_eq!(summary.frames, 30);
        assert_eq!(summary.seed, 42);
        let stored = latest.lock().unwrap().clone().unwrap();
        assert_eq!(stored.time.frame, 30);
    }

    #[test]
    fn test_shutdown_stops_loop() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(
            SimConfig::default(),
            LoopSettings::default(),
            None,
            latest,
        )
        .unwrap();

        tx.send(GameLoopCommand::Shutdown).unwrap();
        let summary = handle.join().unwrap();
        assert_eq!(summary.reason, EndReason::Shutdown);
        assert_eq!(summary.phase, SessionPhase::Running);
    }

    #[test]
    fn test_disconnect_stops_loop() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(
            SimConfig::default(),
            LoopSettings::default(),
            None,
            latest,
        )
        .unwrap();

        drop(tx);
        let summary = handle.join().unwrap();
        assert_eq!(summary.reason, EndReason::Disconnected);
    }

    #[test]
    fn test_autopilot_sessions_are_deterministic() {
        let run = || {
            let settings = LoopSettings {
                max_frames: Some(900),
                ..Default::default()
            };
            let (_tx, handle) = spawn_game_loop(
                SimConfig::default(),
                settings,
                Some(Box::new(Autopilot::new())),
                Arc::new(Mutex::new(None)),
            )
            .unwrap();
            handle.join().unwrap()
        };

        let first = run();
        let second = run();
        assert_eq!(first, second);
        assert!(first.frames <= 900);
    }
}
