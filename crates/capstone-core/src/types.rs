//! Core types used throughout the controller
//!
//! The world is Z-up: X points forward, Y points right. Angles are in degrees.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Euler rotation in degrees (pitch about Y, yaw about Z, roll about X)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotator {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl Rotator {
    pub const ZERO: Rotator = Rotator::new(0.0, 0.0, 0.0);

    /// Create a rotator from pitch, yaw and roll in degrees
    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Create a rotator that only turns about the vertical axis
    pub const fn from_yaw(yaw: f32) -> Self {
        Self::new(0.0, yaw, 0.0)
    }

    /// Heading of a direction vector. Roll is always zero.
    pub fn from_direction(direction: Vec3) -> Self {
        let yaw = direction.y.atan2(direction.x).to_degrees();
        let horizontal = (direction.x * direction.x + direction.y * direction.y).sqrt();
        let pitch = direction.z.atan2(horizontal).to_degrees();
        Self::new(pitch, yaw, 0.0)
    }

    /// Drop pitch and roll, keeping only the heading
    pub fn yaw_only(&self) -> Self {
        Self::from_yaw(self.yaw)
    }

    /// Wrap each axis into (-180, 180]
    pub fn normalized(&self) -> Self {
        Self::new(
            normalize_axis(self.pitch),
            normalize_axis(self.yaw),
            normalize_axis(self.roll),
        )
    }

    fn sin_cos(&self) -> ((f32, f32), (f32, f32), (f32, f32)) {
        (
            self.pitch.to_radians().sin_cos(),
            self.yaw.to_radians().sin_cos(),
            self.roll.to_radians().sin_cos(),
        )
    }

    /// Forward axis (local X) in world space
    pub fn forward(&self) -> Vec3 {
        let ((sp, cp), (sy, cy), _) = self.sin_cos();
        Vec3::new(cp * cy, cp * sy, sp)
    }

    /// Right axis (local Y) in world space
    pub fn right(&self) -> Vec3 {
        let ((sp, cp), (sy, cy), (sr, cr)) = self.sin_cos();
        Vec3::new(sr * sp * cy - cr * sy, sr * sp * sy + cr * cy, -sr * cp)
    }

    /// Up axis (local Z) in world space
    pub fn up(&self) -> Vec3 {
        let ((sp, cp), (sy, cy), (sr, cr)) = self.sin_cos();
        Vec3::new(-(cr * sp * cy + sr * sy), cy * sr - cr * sp * sy, cr * cp)
    }

    /// Rotate a local-space vector into world space
    pub fn rotate_vector(&self, v: Vec3) -> Vec3 {
        self.forward() * v.x + self.right() * v.y + self.up() * v.z
    }

    /// Check whether every axis matches `other` within `tolerance` degrees
    pub fn equals(&self, other: &Rotator, tolerance: f32) -> bool {
        let diff = Rotator::new(
            self.pitch - other.pitch,
            self.yaw - other.yaw,
            self.roll - other.roll,
        )
        .normalized();
        diff.pitch.abs() <= tolerance && diff.yaw.abs() <= tolerance && diff.roll.abs() <= tolerance
    }
}

fn normalize_axis(angle: f32) -> f32 {
    let mut wrapped = angle.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped -= 360.0;
    }
    wrapped
}

/// A world-space ray, typically deprojected from the mouse cursor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t` along the ray
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Position and orientation of an actor in the world
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ActorPose {
    pub position: Vec3,
    pub rotation: Rotator,
}

impl ActorPose {
    /// Create a pose at the given position facing +X
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_yaw_axes() {
        let rot = Rotator::from_yaw(90.0);
        assert!(approx(rot.forward(), Vec3::new(0.0, 1.0, 0.0)));
        assert!(approx(rot.right(), Vec3::new(-1.0, 0.0, 0.0)));
        assert!(approx(rot.up(), Vec3::Z));
    }

    #[test]
    fn test_pitched_forward() {
        let rot = Rotator::new(-45.0, 45.0, 0.0);
        let half = std::f32::consts::FRAC_1_SQRT_2;
        assert!(approx(rot.forward(), Vec3::new(0.5, 0.5, -half)));
    }

    #[test]
    fn test_from_direction() {
        let rot = Rotator::from_direction(Vec3::new(0.0, 3.0, 0.0));
        assert!((rot.yaw - 90.0).abs() < 1e-4);
        assert_eq!(rot.pitch, 0.0);
        assert_eq!(rot.roll, 0.0);

        let up = Rotator::from_direction(Vec3::new(1.0, 0.0, 1.0));
        assert!((up.pitch - 45.0).abs() < 1e-4);
    }

    #[test]
    fn test_normalized() {
        let rot = Rotator::new(270.0, -190.0, 540.0).normalized();
        assert!((rot.pitch + 90.0).abs() < 1e-4);
        assert!((rot.yaw - 170.0).abs() < 1e-4);
        assert!((rot.roll - 180.0).abs() < 1e-4);
        assert!(Rotator::from_yaw(359.0).equals(&Rotator::from_yaw(-1.0), 1e-3));
    }

    #[test]
    fn test_rotate_vector_matches_axes() {
        let rot = Rotator::new(10.0, 30.0, 20.0);
        assert!(approx(rot.rotate_vector(Vec3::X), rot.forward()));
        assert!(approx(rot.rotate_vector(Vec3::Y), rot.right()));
        assert!(approx(rot.rotate_vector(Vec3::Z), rot.up()));
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 1000.0), Vec3::new(1.0, 0.0, -1.0));
        assert_eq!(ray.at(1000.0), Vec3::new(1000.0, 0.0, 0.0));
    }
}
