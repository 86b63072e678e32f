//! Camera configuration

use capstone_core::Rotator;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Spring arm that holds the camera away from the character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraBoomConfig {
    /// Boom rotation relative to the character
    pub relative_rotation: Rotator,
    /// Follow the controller's control rotation instead of the relative rotation
    pub use_pawn_control_rotation: bool,
    /// Add the character's pitch to the boom
    pub inherit_pitch: bool,
    /// Add the character's yaw to the boom
    pub inherit_yaw: bool,
    /// Add the character's roll to the boom
    pub inherit_roll: bool,
    /// Pull the camera in when the arm hits geometry (handled by the host)
    pub do_collision_test: bool,
    /// Distance from the pivot to the camera
    pub target_arm_length: f32,
    /// Offset at the camera end of the arm, in boom space
    pub socket_offset: Vec3,
    /// Offset of the pivot from the character, in world space
    pub target_offset: Vec3,
}

impl Default for CameraBoomConfig {
    fn default() -> Self {
        Self {
            // Looking down at the character from behind and to the side
            relative_rotation: Rotator::new(-45.0, 45.0, 0.0),
            use_pawn_control_rotation: false,
            inherit_pitch: false,
            inherit_yaw: false,
            inherit_roll: false,
            do_collision_test: false,
            target_arm_length: 4000.0,
            socket_offset: Vec3::ZERO,
            target_offset: Vec3::ZERO,
        }
    }
}

/// Camera projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CameraProjection {
    /// Perspective projection with a horizontal field of view in degrees
    Perspective { fov_degrees: f32 },
    /// Orthographic projection; `ortho_width` world units fit across the view
    Orthographic { ortho_width: f32 },
}

impl CameraProjection {
    pub fn is_orthographic(&self) -> bool {
        matches!(self, CameraProjection::Orthographic { .. })
    }
}

/// Camera attached to the end of the boom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowCameraConfig {
    /// Follow the controller's control rotation instead of the boom
    pub use_pawn_control_rotation: bool,
    pub projection: CameraProjection,
    pub near_clip: f32,
    pub far_clip: f32,
}

impl Default for FollowCameraConfig {
    fn default() -> Self {
        Self {
            use_pawn_control_rotation: false,
            // Wide enough to keep the surrounding scene visible
            projection: CameraProjection::Orthographic { ortho_width: 2048.0 },
            near_clip: 10.0,
            far_clip: 100_000.0,
        }
    }
}

impl CameraBoomConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.target_arm_length >= 0.0) {
            return Err(ConfigError::InvalidArmLength(self.target_arm_length));
        }
        Ok(())
    }
}

impl FollowCameraConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.projection {
            CameraProjection::Orthographic { ortho_width } if !(ortho_width > 0.0) => {
                Err(ConfigError::InvalidOrthoWidth(ortho_width))
            }
            CameraProjection::Perspective { fov_degrees }
                if !(fov_degrees > 0.0 && fov_degrees < 180.0) =>
            {
                Err(ConfigError::InvalidFieldOfView(fov_degrees))
            }
            _ => Ok(()),
        }
    }
}
