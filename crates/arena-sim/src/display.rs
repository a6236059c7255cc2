//! Display sink: the boundary to whatever shows health, score and counters.
//!
//! The engine never draws anything. It collects `DisplayEvent`s while a
//! frame runs and hands them to the installed sink once the frame is done.

use arena_core::enums::HealthTier;
use arena_core::events::DisplayEvent;

/// Receiver of display updates.
pub trait DisplaySink: Send {
    fn on_health_changed(&mut self, current: i32, max: i32, tier: HealthTier);
    fn on_score_changed(&mut self, total: u32);
    fn on_enemy_count_changed(&mut self, count: usize);
    fn on_session_ended(&mut self, message: &str);

    /// Route one event to the matching callback.
    fn dispatch(&mut self, event: &DisplayEvent) {
        match event {
            DisplayEvent::HealthChanged { current, max, tier } => {
                self.on_health_changed(*current, *max, *tier)
            }
            DisplayEvent::ScoreChanged { total } => self.on_score_changed(*total),
            DisplayEvent::EnemyCountChanged { count } => self.on_enemy_count_changed(*count),
            DisplayEvent::SessionEnded { message } => self.on_session_ended(message),
        }
    }
}

/// Sink that ignores everything. Used when no display is attached.
#[derive(Debug, Default)]
pub struct NullDisplay;

impl DisplaySink for NullDisplay {
    fn on_health_changed(&mut self, _current: i32, _max: i32, _tier: HealthTier) {}
    fn on_score_changed(&mut self, _total: u32) {}
    fn on_enemy_count_changed(&mut self, _count: usize) {}
    fn on_session_ended(&mut self, _message: &str) {}
}
