#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::events::DisplayEvent;
    use crate::state::SessionSnapshot;
    use crate::types::{Position, SimTime};

    #[test]
    fn test_horizontal_range_ignores_height() {
        let a = Position::new(0.0, 1.7, 0.0);
        let b = Position::new(3.0, 0.8, 4.0);
        assert!((a.horizontal_range_to(&b) - 5.0).abs() < 1e-6);
        assert!(a.range_to(&b) > 5.0);

        let offset = a.planar_offset_to(&b);
        assert_eq!(offset.y, 0.0);
        assert_eq!(offset.x, 3.0);
        assert_eq!(offset.z, 4.0);
    }

    #[test]
    fn test_sim_time_accumulates_variable_dt() {
        let mut time = SimTime::default();
        time.advance(0.5);
        time.advance(0.25);
        time.advance(0.25);
        assert_eq!(time.frame, 3);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_command_json_is_tagged() {
        let json = serde_json::to_string(&PlayerCommand::Move {
            strafe: 0.0,
            forward: 1.0,
        })
        .unwrap();
        assert!(json.contains("\"type\":\"Move\""), "got {json}");

        let back: PlayerCommand = serde_json::from_str(r#"{"type":"Fire"}"#).unwrap();
        assert_eq!(back, PlayerCommand::Fire);

        let look: PlayerCommand =
            serde_json::from_str(r#"{"type":"Look","yaw":1.0,"pitch":-0.25}"#).unwrap();
        assert_eq!(
            look,
            PlayerCommand::Look {
                yaw: 1.0,
                pitch: -0.25
            }
        );
    }

    #[test]
    fn test_display_event_serde() {
        let event = DisplayEvent::HealthChanged {
            current: 40,
            max: 100,
            tier: HealthTier::Critical,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"HealthChanged\""));
        let back: DisplayEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_default_snapshot_is_running() {
        let snapshot = SessionSnapshot::default();
        assert_eq!(snapshot.phase, SessionPhase::Running);
        assert!(snapshot.enemies.is_empty());
        assert!(snapshot.display_events.is_empty());

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
