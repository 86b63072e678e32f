//! Seams to the host engine.
//!
//! The host owns movement integration, collision, rendering and cursor
//! deprojection. The character only reads poses and issues requests.

use capstone_core::{Ray, Rotator};
use glam::Vec3;

use crate::camera::CameraBoomConfig;
use crate::input::InputSubsystem;
use crate::player::{ControllerRotationConfig, MovementConfig};

/// The player controller possessing the character
pub trait PlayerControllerHost {
    /// World ray under the mouse cursor, if the cursor can be deprojected
    fn deproject_mouse_position(&self) -> Option<Ray>;

    fn set_show_mouse_cursor(&mut self, show: bool);

    fn set_enable_click_events(&mut self, enable: bool);

    fn set_enable_mouse_over_events(&mut self, enable: bool);

    /// Mapping contexts of the local player, if this controller has one
    fn input_subsystem(&mut self) -> Option<&mut InputSubsystem>;

    /// Rotation the controller is aiming with
    fn control_rotation(&self) -> Rotator;
}

/// The engine-side actor the character drives
pub trait CharacterHost {
    /// The possessing player controller, if any
    fn player_controller(&mut self) -> Option<&mut dyn PlayerControllerHost>;

    /// Whether any controller (player or AI) possesses the character
    fn has_controller(&self) -> bool;

    /// Size the collision capsule
    fn set_capsule_size(&mut self, radius: f32, half_height: f32);

    /// Which controller rotation axes turn the actor directly
    fn set_use_controller_rotation(&mut self, rotation: &ControllerRotationConfig);

    /// Tune the movement component
    fn configure_movement(&mut self, movement: &MovementConfig);

    /// Set up the spring arm the camera hangs from
    fn configure_camera_boom(&mut self, boom: &CameraBoomConfig);

    fn actor_location(&self) -> Vec3;

    fn actor_rotation(&self) -> Rotator;

    fn set_actor_rotation(&mut self, rotation: Rotator);

    /// Request movement along a world direction, scaled by `scale`
    fn add_movement_input(&mut self, world_direction: Vec3, scale: f32);

    fn jump(&mut self);

    fn stop_jumping(&mut self);

    fn add_controller_yaw_input(&mut self, value: f32);

    fn add_controller_pitch_input(&mut self, value: f32);
}
