//! Full character setup: collision capsule, rotation flags, camera, input and aim

use serde::{Deserialize, Serialize};

use crate::aim::AimConfig;
use crate::camera::{CameraBoomConfig, FollowCameraConfig};
use crate::error::ConfigError;
use crate::input::InputMappingContext;

use super::MovementConfig;

/// Collision capsule size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapsuleConfig {
    pub radius: f32,
    pub half_height: f32,
}

impl Default for CapsuleConfig {
    fn default() -> Self {
        Self {
            radius: 42.0,
            half_height: 96.0,
        }
    }
}

impl CapsuleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.radius > 0.0) {
            return Err(ConfigError::InvalidCapsuleRadius(self.radius));
        }
        if !(self.half_height >= self.radius) {
            return Err(ConfigError::InvalidCapsuleHalfHeight {
                radius: self.radius,
                half_height: self.half_height,
            });
        }
        Ok(())
    }
}

/// Which controller rotation axes drive the character directly.
///
/// All off: controller rotation only affects the camera.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerRotationConfig {
    pub use_pitch: bool,
    pub use_yaw: bool,
    pub use_roll: bool,
}

/// Cursor behaviour applied to the player controller on begin play
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    pub show_mouse_cursor: bool,
    pub enable_click_events: bool,
    pub enable_mouse_over_events: bool,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            show_mouse_cursor: true,
            enable_click_events: true,
            enable_mouse_over_events: true,
        }
    }
}

/// Everything needed to build a [`PlayerCharacter`](super::PlayerCharacter)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterConfig {
    pub capsule: CapsuleConfig,
    pub controller_rotation: ControllerRotationConfig,
    pub movement: MovementConfig,
    pub camera_boom: CameraBoomConfig,
    pub follow_camera: FollowCameraConfig,
    pub cursor: CursorConfig,
    pub aim: AimConfig,
    /// Forward look input to controller yaw/pitch
    pub enable_look: bool,
    /// Mapping context added on begin play
    pub mapping_context: InputMappingContext,
    pub mapping_priority: i32,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            capsule: CapsuleConfig::default(),
            controller_rotation: ControllerRotationConfig::default(),
            movement: MovementConfig::default(),
            camera_boom: CameraBoomConfig::default(),
            follow_camera: FollowCameraConfig::default(),
            cursor: CursorConfig::default(),
            aim: AimConfig::default(),
            enable_look: false,
            mapping_context: InputMappingContext::default(),
            mapping_priority: 0,
        }
    }
}

impl CharacterConfig {
    /// Check every section, reporting the first invalid value
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.capsule.validate()?;
        self.movement.validate()?;
        self.camera_boom.validate()?;
        self.follow_camera.validate()?;
        self.aim.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{CameraProjection, FollowCameraConfig};
    use capstone_core::Rotator;

    #[test]
    fn test_defaults() {
        let config = CharacterConfig::default();
        assert_eq!(config.capsule.radius, 42.0);
        assert_eq!(config.capsule.half_height, 96.0);
        assert!(!config.controller_rotation.use_yaw);
        assert!(config.movement.orient_rotation_to_movement);
        assert_eq!(config.movement.rotation_rate, Rotator::new(0.0, 500.0, 0.0));
        assert_eq!(config.camera_boom.target_arm_length, 4000.0);
        assert!(!config.camera_boom.do_collision_test);
        assert_eq!(
            config.follow_camera.projection,
            CameraProjection::Orthographic { ortho_width: 2048.0 }
        );
        assert!(config.cursor.show_mouse_cursor);
        assert!(!config.enable_look);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_capsule() {
        let mut config = CharacterConfig {
            capsule: CapsuleConfig {
                radius: 0.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidCapsuleRadius(0.0)));

        config.capsule = CapsuleConfig {
            radius: 50.0,
            half_height: 40.0,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidCapsuleHalfHeight { .. })
        ));
    }

    #[test]
    fn test_invalid_camera() {
        let mut config = CharacterConfig {
            follow_camera: FollowCameraConfig {
                projection: CameraProjection::Orthographic { ortho_width: -1.0 },
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidOrthoWidth(-1.0)));

        config.follow_camera.projection = CameraProjection::Perspective { fov_degrees: 190.0 };
        assert_eq!(config.validate(), Err(ConfigError::InvalidFieldOfView(190.0)));

        config.follow_camera.projection = CameraProjection::Perspective { fov_degrees: 90.0 };
        config.camera_boom.target_arm_length = -10.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidArmLength(-10.0)));
    }
}
