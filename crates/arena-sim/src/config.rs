//! Session configuration and gameplay tuning.
//!
//! `Tuning` carries every gameplay constant so a host can override them
//! from JSON. Missing fields fall back to the defaults in
//! `arena_core::constants`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use arena_core::constants::*;

/// Errors raised while loading or validating a tuning file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid tuning: {field} {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Gameplay tuning parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub max_hp: i32,
    pub fire_rate: f32,
    pub damage: i32,
    pub move_speed: f32,
    pub gravity: f32,
    pub jump_force: f32,
    pub ground_probe_length: f32,
    pub enemy_hp: i32,
    pub enemy_speed_min: f32,
    pub enemy_speed_range: f32,
    pub contact_range: f32,
    pub contact_damage: i32,
    pub hit_cooldown: f32,
    pub population_cap: usize,
    pub spawn_interval_secs: f32,
    pub weapon_range: f32,
    pub kill_score: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            max_hp: PLAYER_MAX_HP,
            fire_rate: PLAYER_FIRE_RATE,
            damage: PLAYER_DAMAGE,
            move_speed: MOVE_SPEED,
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            ground_probe_length: GROUND_PROBE_LENGTH,
            enemy_hp: ENEMY_HP,
            enemy_speed_min: ENEMY_SPEED_MIN,
            enemy_speed_range: ENEMY_SPEED_RANGE,
            contact_range: ENEMY_CONTACT_RANGE,
            contact_damage: ENEMY_CONTACT_DAMAGE,
            hit_cooldown: ENEMY_HIT_COOLDOWN,
            population_cap: POPULATION_CAP,
            spawn_interval_secs: SPAWN_INTERVAL_SECS,
            weapon_range: WEAPON_RANGE,
            kill_score: KILL_SCORE,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning overrides from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate a JSON tuning file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let floats = [
            ("fire_rate", self.fire_rate),
            ("move_speed", self.move_speed),
            ("gravity", self.gravity),
            ("jump_force", self.jump_force),
            ("ground_probe_length", self.ground_probe_length),
            ("enemy_speed_min", self.enemy_speed_min),
            ("enemy_speed_range", self.enemy_speed_range),
            ("contact_range", self.contact_range),
            ("hit_cooldown", self.hit_cooldown),
            ("spawn_interval_secs", self.spawn_interval_secs),
            ("weapon_range", self.weapon_range),
        ];
        for (field, value) in floats {
            if !value.is_finite() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be finite",
                });
            }
        }

        let positive = [
            ("fire_rate", self.fire_rate),
            ("ground_probe_length", self.ground_probe_length),
            ("spawn_interval_secs", self.spawn_interval_secs),
            ("weapon_range", self.weapon_range),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be positive",
                });
            }
        }

        let positive_ints = [
            ("max_hp", self.max_hp),
            ("damage", self.damage),
            ("enemy_hp", self.enemy_hp),
        ];
        for (field, value) in positive_ints {
            if value <= 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be positive",
                });
            }
        }
        if self.contact_damage < 0 {
            return Err(ConfigError::Invalid {
                field: "contact_damage",
                reason: "must not be negative",
            });
        }
        for (field, value) in [
            ("hit_cooldown", self.hit_cooldown),
            ("contact_range", self.contact_range),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must not be negative",
                });
            }
        }
        if self.population_cap == 0 {
            return Err(ConfigError::Invalid {
                field: "population_cap",
                reason: "must be positive",
            });
        }
        if self.enemy_speed_min < 0.0 || self.enemy_speed_range < 0.0 {
            return Err(ConfigError::Invalid {
                field: "enemy_speed",
                reason: "must not be negative",
            });
        }
        Ok(())
    }
}

/// Configuration for starting a new session.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same spawns.
    pub seed: u64,
    /// Enemies spawned when the session starts.
    pub initial_enemies: usize,
    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            initial_enemies: INITIAL_ENEMY_COUNT,
            tuning: Tuning::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        Tuning::default().validate().unwrap();
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let tuning = Tuning::from_json_str(r#"{ "fire_rate": 4.0, "population_cap": 3 }"#).unwrap();
        assert_eq!(tuning.fire_rate, 4.0);
        assert_eq!(tuning.population_cap, 3);
        assert_eq!(tuning.damage, PLAYER_DAMAGE);
        assert_eq!(tuning.enemy_hp, ENEMY_HP);
    }

    #[test]
    fn test_zero_fire_rate_rejected() {
        let err = Tuning::from_json_str(r#"{ "fire_rate": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "fire_rate",
                ..
            }
        ));
    }

    #[test]
    fn test_negative_damage_rejected() {
        let err = Tuning::from_json_str(r#"{ "damage": -35 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "damage", .. }));

        let err = Tuning::from_json_str(r#"{ "enemy_hp": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "enemy_hp", .. }));
    }

    #[test]
    fn test_extreme_contact_damage_rejected() {
        let err = Tuning::from_json_str(r#"{ "contact_damage": -2147483648 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "contact_damage",
                ..
            }
        ));

        // Zero contact damage is a valid way to turn contact off.
        Tuning::from_json_str(r#"{ "contact_damage": 0 }"#).unwrap();
    }

    #[test]
    fn test_negative_contact_timing_rejected() {
        let err = Tuning::from_json_str(r#"{ "hit_cooldown": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "hit_cooldown", .. }));

        let err = Tuning::from_json_str(r#"{ "contact_range": -0.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "contact_range", .. }));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = Tuning::from_json_str("{ fire_rate: ").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Tuning::load("/definitely/not/here/tuning.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
