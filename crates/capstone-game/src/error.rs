/// Errors raised when a character configuration is rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("capsule radius must be positive, got {0}")]
    InvalidCapsuleRadius(f32),

    #[error("capsule half height {half_height} must be at least the radius {radius}")]
    InvalidCapsuleHalfHeight { radius: f32, half_height: f32 },

    #[error("camera boom arm length must not be negative, got {0}")]
    InvalidArmLength(f32),

    #[error("orthographic width must be positive, got {0}")]
    InvalidOrthoWidth(f32),

    #[error("field of view must be between 0 and 180 degrees, got {0}")]
    InvalidFieldOfView(f32),

    #[error("movement value '{name}' must not be negative, got {value}")]
    NegativeMovementValue { name: &'static str, value: f32 },

    #[error("air control must be within [0, 1], got {0}")]
    InvalidAirControl(f32),

    #[error("aim tolerance '{name}' must be positive, got {value}")]
    InvalidAimTolerance { name: &'static str, value: f32 },
}
