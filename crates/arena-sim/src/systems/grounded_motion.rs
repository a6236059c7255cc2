//! Vertical motion of the controller: gravity, jump impulse, and grounding.
//!
//! Gravity and the jump impulse are per-frame increments, not scaled by
//! `dt`; the feel is calibrated to the reference frame rate.

use glam::Vec3;

use crate::config::Tuning;
use crate::spatial::{QueryFilter, Ray, SpatialQuery};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GroundedMotion {
    pub vertical_velocity: f32,
    /// Result of the most recent grounding probe.
    pub grounded: bool,
}

impl GroundedMotion {
    /// Start a jump if standing on something. Returns whether it took.
    pub fn jump(&mut self, tuning: &Tuning) -> bool {
        if !self.grounded {
            return false;
        }
        self.vertical_velocity = tuning.jump_force;
        true
    }
}

/// Probe for ground below `feet`, integrate vertical velocity, and return
/// this frame's vertical displacement.
pub fn run(motion: &mut GroundedMotion, feet: Vec3, spatial: &impl SpatialQuery, tuning: &Tuning) -> f32 {
    motion.grounded = spatial
        .cast(&Ray::down(feet), tuning.ground_probe_length, QueryFilter::Collidable)
        .is_some();

    if !motion.grounded {
        motion.vertical_velocity += tuning.gravity;
    }
    if motion.grounded && motion.vertical_velocity < 0.0 {
        motion.vertical_velocity = 0.0;
    }

    motion.vertical_velocity
}
