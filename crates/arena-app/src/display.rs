//! Display sink that writes every display update to the log.

use arena_core::enums::HealthTier;
use arena_sim::display::DisplaySink;

#[derive(Debug, Default)]
pub struct TracingDisplay;

impl DisplaySink for TracingDisplay {
    fn on_health_changed(&mut self, current: i32, max: i32, tier: HealthTier) {
        tracing::info!(current, max, ?tier, "health");
    }

    fn on_score_changed(&mut self, total: u32) {
        tracing::info!(total, "score");
    }

    fn on_enemy_count_changed(&mut self, count: usize) {
        tracing::debug!(count, "enemies");
    }

    fn on_session_ended(&mut self, message: &str) {
        tracing::warn!("{message}");
    }
}
