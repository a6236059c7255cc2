//! Player stats: health, score, and the weapon's fire cooldown.
//!
//! Every mutator that changes something the display shows pushes a
//! `DisplayEvent` into the caller's event buffer.

use arena_core::enums::HealthTier;
use arena_core::events::DisplayEvent;

use crate::config::Tuning;

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    hp: i32,
    max_hp: i32,
    fire_cooldown: f32,
    fire_rate: f32,
    damage: i32,
    score: u32,
}

impl PlayerState {
    /// Full health, no score, weapon ready.
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            hp: tuning.max_hp,
            max_hp: tuning.max_hp,
            fire_cooldown: 0.0,
            fire_rate: tuning.fire_rate,
            damage: tuning.damage,
            score: 0,
        }
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn damage(&self) -> i32 {
        self.damage
    }

    pub fn fire_rate(&self) -> f32 {
        self.fire_rate
    }

    pub fn fire_cooldown(&self) -> f32 {
        self.fire_cooldown
    }

    pub fn is_dead(&self) -> bool {
        self.hp == 0
    }

    /// Current health bar tier: healthy strictly above 40% of max.
    pub fn tier(&self) -> HealthTier {
        health_tier(self.hp, self.max_hp)
    }

    /// Clamp `value` into `[0, max_hp]`, store it, and notify the display.
    /// Returns the stored health.
    pub fn set_health(&mut self, value: i32, events: &mut Vec<DisplayEvent>) -> i32 {
        self.hp = value.clamp(0, self.max_hp);
        events.push(self.health_event());
        self.hp
    }

    pub fn add_score(&mut self, value: u32, events: &mut Vec<DisplayEvent>) {
        self.score = self.score.saturating_add(value);
        events.push(DisplayEvent::ScoreChanged { total: self.score });
    }

    /// Let `dt` seconds of cooldown elapse. Never goes below zero.
    pub fn tick_cooldown(&mut self, dt: f32) {
        self.fire_cooldown = (self.fire_cooldown - dt).max(0.0);
    }

    pub fn can_fire(&self) -> bool {
        self.fire_cooldown <= 0.0
    }

    /// Start the cooldown for one shot.
    pub fn consume_fire_slot(&mut self) {
        self.fire_cooldown = 1.0 / self.fire_rate;
    }

    pub(crate) fn health_event(&self) -> DisplayEvent {
        DisplayEvent::HealthChanged {
            current: self.hp,
            max: self.max_hp,
            tier: self.tier(),
        }
    }
}

fn health_tier(hp: i32, max_hp: i32) -> HealthTier {
    if hp as f32 > max_hp as f32 * arena_core::constants::HEALTH_HEALTHY_FRACTION {
        HealthTier::Healthy
    } else {
        HealthTier::Critical
    }
}
