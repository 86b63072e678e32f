//! Input system with action-based mapping
//!
//! Raw key, button and mouse events are mapped through prioritized mapping
//! contexts into typed action values, then evaluated once per tick into
//! trigger events (`Started`, `Triggered`, `Completed`).

mod action;
mod handler;
mod mapping;

pub use action::{ActionEvent, InputAction, InputActionValue, InputValueType, TriggerEvent};
pub use handler::InputHandler;
pub use mapping::{InputMapping, InputMappingContext, InputModifier, InputSource, InputSubsystem};
