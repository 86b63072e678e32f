//! Player character module
//!
//! Configuration, action bindings and the character that drives a host actor.

mod bindings;
mod config;
mod controller;
mod movement;

pub use bindings::{ActionBindings, CharacterCommand};
pub use config::{CapsuleConfig, CharacterConfig, ControllerRotationConfig, CursorConfig};
pub use controller::PlayerCharacter;
pub use movement::MovementConfig;
