//! First-person controller: camera pose, movement intent, and vertical motion.

use glam::{Vec2, Vec3};

use arena_core::constants::{CONTROLLER_ELLIPSOID, CONTROLLER_START, MAX_PITCH};

use crate::systems::grounded_motion::GroundedMotion;

/// The player's body in the world. `position` is the camera (eye) position.
#[derive(Debug, Clone, PartialEq)]
pub struct Controller {
    pub position: Vec3,
    /// Radians; 0 faces +z, positive turns toward +x.
    pub yaw: f32,
    /// Radians; positive looks up.
    pub pitch: f32,
    /// Half extents of the collision body around `position`.
    pub ellipsoid: Vec3,
    /// x = strafe, y = forward; each in [-1, 1].
    pub move_intent: Vec2,
    pub motion: GroundedMotion,
}

impl Default for Controller {
    fn default() -> Self {
        Self {
            position: Vec3::from(CONTROLLER_START),
            yaw: 0.0,
            pitch: 0.0,
            ellipsoid: Vec3::from(CONTROLLER_ELLIPSOID),
            move_intent: Vec2::ZERO,
            motion: GroundedMotion::default(),
        }
    }
}

impl Controller {
    /// Unit view direction.
    pub fn forward(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(sin_yaw * cos_pitch, sin_pitch, cos_yaw * cos_pitch)
    }

    /// Bottom of the collision body, where the grounding probe starts.
    pub fn feet(&self) -> Vec3 {
        self.position - Vec3::Y * self.ellipsoid.y
    }

    pub fn set_look(&mut self, yaw: f32, pitch: f32) {
        if yaw.is_finite() {
            self.yaw = yaw.rem_euclid(std::f32::consts::TAU);
        }
        if pitch.is_finite() {
            self.pitch = pitch.clamp(-MAX_PITCH, MAX_PITCH);
        }
    }

    pub fn set_move_intent(&mut self, strafe: f32, forward: f32) {
        let clamp = |v: f32| if v.is_finite() { v.clamp(-1.0, 1.0) } else { 0.0 };
        self.move_intent = Vec2::new(clamp(strafe), clamp(forward));
    }

    /// Horizontal displacement for one frame, rotated into world space.
    pub fn walk_displacement(&self, move_speed: f32) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let ahead = Vec3::new(sin_yaw, 0.0, cos_yaw);
        let right = Vec3::new(cos_yaw, 0.0, -sin_yaw);
        (ahead * self.move_intent.y + right * self.move_intent.x) * move_speed
    }
}

/// Yaw and pitch that point a camera at `from` toward `to`.
pub fn yaw_pitch_towards(from: Vec3, to: Vec3) -> (f32, f32) {
    let d = to - from;
    let yaw = d.x.atan2(d.z);
    let pitch = d.y.atan2(Vec2::new(d.x, d.z).length());
    (yaw, pitch)
}
