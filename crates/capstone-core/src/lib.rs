//! Capstone Core - Core types and utilities for the Capstone character controller
//!
//! This crate provides the foundational types shared by the game crate and the driver:
//! - Mathematical primitives (re-exported from glam)
//! - Rotator, ray and actor pose value types (Z-up world)
//! - Game time with a fixed-step accumulator

pub mod time;
pub mod types;

pub use glam::{Mat4, Quat, Vec2, Vec3};
pub use time::{GameTime, TimeConfig, TimeConfigError};
pub use types::{ActorPose, Ray, Rotator};
