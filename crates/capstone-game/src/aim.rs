//! Mouse aim resolution
//!
//! Intersects the cursor ray with the horizontal plane at the actor's height and
//! turns the horizontal offset to that point into a yaw-only facing.

use capstone_core::{Ray, Rotator};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tolerances for mouse aim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AimConfig {
    /// Whether the character turns toward the cursor every tick
    pub enabled: bool,
    /// Horizontal offsets shorter than this produce no facing
    pub min_horizontal_distance: f32,
    /// Rays whose vertical component is smaller than this are treated as parallel
    pub parallel_epsilon: f32,
}

impl Default for AimConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_horizontal_distance: 1.0e-4,
            parallel_epsilon: 1.0e-6,
        }
    }
}

impl AimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_horizontal_distance > 0.0) {
            return Err(ConfigError::InvalidAimTolerance {
                name: "min_horizontal_distance",
                value: self.min_horizontal_distance,
            });
        }
        if !(self.parallel_epsilon > 0.0) {
            return Err(ConfigError::InvalidAimTolerance {
                name: "parallel_epsilon",
                value: self.parallel_epsilon,
            });
        }
        Ok(())
    }
}

/// Stateless resolver from a cursor ray to a facing rotation
#[derive(Debug, Clone, Default)]
pub struct MouseAimResolver {
    pub config: AimConfig,
}

impl MouseAimResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AimConfig) -> Self {
        Self { config }
    }

    /// Point where the ray crosses the horizontal plane at `height`
    pub fn plane_intersection(&self, height: f32, ray_origin: Vec3, ray_direction: Vec3) -> Option<Vec3> {
        if ray_direction.z.abs() < self.config.parallel_epsilon {
            return None;
        }

        let t = (height - ray_origin.z) / ray_direction.z;
        if !t.is_finite() {
            return None;
        }

        let point = ray_origin + ray_direction * t;
        point.is_finite().then_some(point)
    }

    /// Yaw-only rotation facing from `actor_position` toward the cursor point.
    ///
    /// Returns `None` when the ray never crosses the actor's plane or the cursor
    /// lands on the actor itself.
    pub fn resolve(&self, actor_position: Vec3, ray_origin: Vec3, ray_direction: Vec3) -> Option<Rotator> {
        let target = self.plane_intersection(actor_position.z, ray_origin, ray_direction)?;

        let mut direction = target - actor_position;
        direction.z = 0.0;

        if direction.length() < self.config.min_horizontal_distance {
            return None;
        }

        Some(Rotator::from_direction(direction))
    }

    /// Same as [`resolve`](Self::resolve) for a [`Ray`]
    pub fn resolve_ray(&self, actor_position: Vec3, ray: &Ray) -> Option<Rotator> {
        self.resolve(actor_position, ray.origin, ray.direction)
    }
}
