//! Capstone Game - Top-down player character
//!
//! Provides the character configuration, camera rig, enhanced input, and
//! mouse aim. The host engine is reached only through the traits in [`host`].

pub mod aim;
pub mod camera;
pub mod error;
pub mod host;
pub mod input;
pub mod player;

pub use aim::{AimConfig, MouseAimResolver};
pub use camera::{CameraBoomConfig, CameraProjection, CameraRig, FollowCameraConfig};
pub use error::ConfigError;
pub use host::{CharacterHost, PlayerControllerHost};
pub use input::{
    ActionEvent, InputAction, InputActionValue, InputHandler, InputMapping, InputMappingContext,
    InputModifier, InputSource, InputSubsystem, InputValueType, TriggerEvent,
};
pub use player::{
    ActionBindings, CapsuleConfig, CharacterCommand, CharacterConfig, ControllerRotationConfig,
    CursorConfig, MovementConfig, PlayerCharacter,
};
