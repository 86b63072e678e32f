//! Camera system module
//!
//! Spring-arm boom with an attached follow camera, orthographic by default.

mod config;
mod rig;

pub use config::{CameraBoomConfig, CameraProjection, FollowCameraConfig};
pub use rig::CameraRig;
