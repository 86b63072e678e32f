//! Character movement tuning handed to the host's movement component

use capstone_core::Rotator;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Movement configuration (engine units: centimeters, seconds, degrees)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Turn the character toward its movement direction
    pub orient_rotation_to_movement: bool,
    /// Turn rate per axis in degrees per second
    pub rotation_rate: Rotator,
    /// Initial upward velocity of a jump
    pub jump_z_velocity: f32,
    /// Fraction of lateral control available while falling
    pub air_control: f32,
    /// Top walking speed
    pub max_walk_speed: f32,
    /// Floor for analog stick speed
    pub min_analog_walk_speed: f32,
    /// Deceleration when walking with no input
    pub braking_deceleration_walking: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            orient_rotation_to_movement: true,
            rotation_rate: Rotator::new(0.0, 500.0, 0.0),
            jump_z_velocity: 700.0,
            air_control: 0.35,
            max_walk_speed: 500.0,
            min_analog_walk_speed: 20.0,
            braking_deceleration_walking: 2000.0,
        }
    }
}

impl MovementConfig {
    /// Walking speed for an input of the given magnitude
    pub fn max_analog_speed(&self, input_magnitude: f32) -> f32 {
        if input_magnitude <= 0.0 {
            return 0.0;
        }
        (self.max_walk_speed * input_magnitude.min(1.0)).max(self.min_analog_walk_speed)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("jump_z_velocity", self.jump_z_velocity),
            ("max_walk_speed", self.max_walk_speed),
            ("min_analog_walk_speed", self.min_analog_walk_speed),
            ("braking_deceleration_walking", self.braking_deceleration_walking),
        ] {
            if !(value >= 0.0) {
                return Err(ConfigError::NegativeMovementValue { name, value });
            }
        }

        if !(0.0..=1.0).contains(&self.air_control) {
            return Err(ConfigError::InvalidAirControl(self.air_control));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analog_speed() {
        let config = MovementConfig::default();
        assert_eq!(config.max_analog_speed(0.0), 0.0);
        assert_eq!(config.max_analog_speed(1.0), 500.0);
        assert_eq!(config.max_analog_speed(2.0), 500.0);
        assert_eq!(config.max_analog_speed(0.5), 250.0);
        // Tiny stick deflection still moves at the analog floor
        assert_eq!(config.max_analog_speed(0.01), 20.0);
    }

    #[test]
    fn test_validation() {
        assert!(MovementConfig::default().validate().is_ok());

        let config = MovementConfig {
            max_walk_speed: -1.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NegativeMovementValue {
                name: "max_walk_speed",
                value: -1.0
            })
        );

        let config = MovementConfig {
            air_control: 1.5,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidAirControl(1.5)));
    }
}
