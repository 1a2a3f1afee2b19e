//! Orbit camera rig around the cube.
//!
//! The plugin does not own a camera. It keeps the numbers an orbit camera
//! needs (target, yaw, pitch, arm length) and updates them from pointer
//! drags on empty space; the host turns them into a real camera via
//! [`CameraRig::eye`].

use bevy_ecs::prelude::Resource;
use glam::Vec3;

/// Pitch limit in degrees, both up and down.
pub const CAMERA_PITCH_LIMIT: f32 = 65.0;
/// Pitch after a build, in degrees (looking down on the cube).
pub const DEFAULT_PITCH: f32 = -30.0;
/// Yaw after a build, in degrees.
pub const DEFAULT_YAW: f32 = -45.0;

/// Spring-arm style orbit camera.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    /// Point the camera looks at.
    pub target: Vec3,
    /// Heading in degrees around +Z.
    pub yaw: f32,
    /// Elevation in degrees; negative looks down.
    pub pitch: f32,
    /// Arm length in world units.
    pub distance: f32,
    /// Absolute pitch limit in degrees.
    pub pitch_limit: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        CameraRig {
            target: Vec3::ZERO,
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            distance: 600.0,
            pitch_limit: CAMERA_PITCH_LIMIT,
        }
    }
}

impl CameraRig {
    /// Re-aim at a freshly built cube.
    pub fn reset_for(&mut self, center: Vec3, side_width: f32) {
        self.target = center;
        self.yaw = DEFAULT_YAW;
        self.pitch = DEFAULT_PITCH.clamp(-self.pitch_limit, self.pitch_limit);
        self.distance = side_width * 2.0;
    }

    /// Add yaw and pitch (degrees). Pitch stays within the limit.
    pub fn orbit(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.yaw = (self.yaw + yaw_delta).rem_euclid(360.0);
        self.pitch = (self.pitch + pitch_delta).clamp(-self.pitch_limit, self.pitch_limit);
    }

    /// Direction the camera looks in.
    pub fn forward(&self) -> Vec3 {
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        let (sp, cp) = self.pitch.to_radians().sin_cos();
        Vec3::new(cp * cy, cp * sy, sp)
    }

    /// Camera position at the end of the arm.
    pub fn eye(&self) -> Vec3 {
        self.target - self.forward() * self.distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_orbit_clamps_pitch() {
        let mut rig = CameraRig::default();
        rig.orbit(0.0, 500.0);
        assert!(approx_eq(rig.pitch, CAMERA_PITCH_LIMIT));
        rig.orbit(0.0, -500.0);
        assert!(approx_eq(rig.pitch, -CAMERA_PITCH_LIMIT));
    }

    #[test]
    fn test_orbit_wraps_yaw() {
        let mut rig = CameraRig::default();
        rig.yaw = 350.0;
        rig.orbit(20.0, 0.0);
        assert!(approx_eq(rig.yaw, 10.0));
    }

    #[test]
    fn test_reset_for_cube() {
        let mut rig = CameraRig::default();
        rig.orbit(33.0, 20.0);
        rig.reset_for(Vec3::splat(100.0), 300.0);
        assert_eq!(rig.target, Vec3::splat(100.0));
        assert!(approx_eq(rig.distance, 600.0));
        assert!(approx_eq(rig.pitch, DEFAULT_PITCH));
        assert!(approx_eq(rig.yaw, DEFAULT_YAW));
    }

    #[test]
    fn test_eye_is_above_when_looking_down() {
        let rig = CameraRig::default();
        let eye = rig.eye();
        assert!(eye.z > rig.target.z);
        assert!(approx_eq((eye - rig.target).length(), rig.distance));
    }
}
