//! Boom and follow camera placement for a character pose

use capstone_core::{ActorPose, Rotator};
use glam::{Mat4, Vec3};

use super::{CameraBoomConfig, CameraProjection, FollowCameraConfig};

/// Spring-arm boom with a camera at its end
#[derive(Debug, Clone, Default)]
pub struct CameraRig {
    pub boom: CameraBoomConfig,
    pub camera: FollowCameraConfig,
}

impl CameraRig {
    /// Create a rig with the default top-down orthographic setup
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(boom: CameraBoomConfig, camera: FollowCameraConfig) -> Self {
        Self { boom, camera }
    }

    /// World rotation of the boom.
    ///
    /// Axes that are not inherited take the relative rotation as-is, so the
    /// camera keeps its angle however the character turns.
    pub fn boom_rotation(&self, actor_rotation: Rotator, control_rotation: Option<Rotator>) -> Rotator {
        if self.boom.use_pawn_control_rotation {
            if let Some(control) = control_rotation {
                return control;
            }
        }

        let relative = self.boom.relative_rotation;
        Rotator::new(
            if self.boom.inherit_pitch {
                relative.pitch + actor_rotation.pitch
            } else {
                relative.pitch
            },
            if self.boom.inherit_yaw {
                relative.yaw + actor_rotation.yaw
            } else {
                relative.yaw
            },
            if self.boom.inherit_roll {
                relative.roll + actor_rotation.roll
            } else {
                relative.roll
            },
        )
        .normalized()
    }

    /// World rotation of the follow camera
    pub fn camera_rotation(&self, actor_rotation: Rotator, control_rotation: Option<Rotator>) -> Rotator {
        match control_rotation {
            Some(control) if self.camera.use_pawn_control_rotation => control,
            _ => self.boom_rotation(actor_rotation, control_rotation),
        }
    }

    /// Point the boom pivots around
    pub fn pivot(&self, actor_location: Vec3) -> Vec3 {
        actor_location + self.boom.target_offset
    }

    /// World position of the follow camera
    pub fn camera_location(&self, pose: &ActorPose, control_rotation: Option<Rotator>) -> Vec3 {
        let boom_rotation = self.boom_rotation(pose.rotation, control_rotation);
        self.pivot(pose.position) - boom_rotation.forward() * self.boom.target_arm_length
            + boom_rotation.rotate_vector(self.boom.socket_offset)
    }

    /// Yaw-only forward and right vectors for camera-relative movement
    pub fn movement_basis(camera_rotation: Rotator) -> (Vec3, Vec3) {
        let yaw = camera_rotation.yaw_only();
        (yaw.forward(), yaw.right())
    }

    /// View matrix for hosts that render through glam
    pub fn view_matrix(&self, pose: &ActorPose, control_rotation: Option<Rotator>) -> Mat4 {
        let rotation = self.camera_rotation(pose.rotation, control_rotation);
        let eye = self.camera_location(pose, control_rotation);
        Mat4::look_to_rh(eye, rotation.forward(), rotation.up())
    }

    /// Projection matrix for the given aspect ratio (width / height)
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        let near = self.camera.near_clip;
        let far = self.camera.far_clip;
        match self.camera.projection {
            CameraProjection::Orthographic { ortho_width } => {
                let half_width = ortho_width * 0.5;
                let half_height = half_width / aspect_ratio;
                Mat4::orthographic_rh(-half_width, half_width, -half_height, half_height, near, far)
            }
            CameraProjection::Perspective { fov_degrees } => {
                // Configured FOV is horizontal; glam wants vertical
                let half_horizontal = fov_degrees.to_radians() * 0.5;
                let vertical = 2.0 * (half_horizontal.tan() / aspect_ratio).atan();
                Mat4::perspective_rh(vertical, aspect_ratio, near, far)
            }
        }
    }
}
