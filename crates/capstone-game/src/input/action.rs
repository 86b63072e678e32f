//! Input actions, their values and trigger events

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Game actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAction {
    /// Jump (Space by default)
    Jump,
    /// Planar movement (WASD / arrows by default)
    Move,
    /// Look around (mouse XY by default)
    Look,
}

impl InputAction {
    pub const ALL: [InputAction; 3] = [InputAction::Jump, InputAction::Move, InputAction::Look];

    /// Shape of the value this action carries
    pub fn value_type(&self) -> InputValueType {
        match self {
            InputAction::Jump => InputValueType::Bool,
            InputAction::Move | InputAction::Look => InputValueType::Axis2D,
        }
    }

    /// Smallest magnitude that counts as actuated
    pub fn actuation_threshold(&self) -> f32 {
        match self {
            // Any mouse motion counts
            InputAction::Look => 0.0,
            InputAction::Jump | InputAction::Move => 0.5,
        }
    }
}

/// Shape of an action value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputValueType {
    Bool,
    Axis1D,
    Axis2D,
    Axis3D,
}

/// Value carried by an action event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputActionValue {
    Bool(bool),
    Axis1D(f32),
    Axis2D(Vec2),
    Axis3D(Vec3),
}

impl InputActionValue {
    /// Zero value of the given shape
    pub fn zero(value_type: InputValueType) -> Self {
        Self::from_vec3(value_type, Vec3::ZERO)
    }

    /// Narrow an accumulated 3D value to the given shape
    pub fn from_vec3(value_type: InputValueType, value: Vec3) -> Self {
        match value_type {
            InputValueType::Bool => InputActionValue::Bool(value.x != 0.0),
            InputValueType::Axis1D => InputActionValue::Axis1D(value.x),
            InputValueType::Axis2D => InputActionValue::Axis2D(value.truncate()),
            InputValueType::Axis3D => InputActionValue::Axis3D(value),
        }
    }

    pub fn value_type(&self) -> InputValueType {
        match self {
            InputActionValue::Bool(_) => InputValueType::Bool,
            InputActionValue::Axis1D(_) => InputValueType::Axis1D,
            InputActionValue::Axis2D(_) => InputValueType::Axis2D,
            InputActionValue::Axis3D(_) => InputValueType::Axis3D,
        }
    }

    pub fn magnitude(&self) -> f32 {
        match *self {
            InputActionValue::Bool(pressed) => {
                if pressed {
                    1.0
                } else {
                    0.0
                }
            }
            InputActionValue::Axis1D(x) => x.abs(),
            InputActionValue::Axis2D(v) => v.length(),
            InputActionValue::Axis3D(v) => v.length(),
        }
    }

    /// Non-zero and at least `threshold`
    pub fn is_actuated(&self, threshold: f32) -> bool {
        let magnitude = self.magnitude();
        magnitude > 0.0 && magnitude >= threshold
    }

    pub fn as_bool(&self) -> bool {
        self.magnitude() > 0.0
    }

    pub fn as_axis1d(&self) -> f32 {
        match *self {
            InputActionValue::Bool(pressed) => {
                if pressed {
                    1.0
                } else {
                    0.0
                }
            }
            InputActionValue::Axis1D(x) => x,
            InputActionValue::Axis2D(v) => v.x,
            InputActionValue::Axis3D(v) => v.x,
        }
    }

    pub fn as_axis2d(&self) -> Vec2 {
        match *self {
            InputActionValue::Axis2D(v) => v,
            InputActionValue::Axis3D(v) => v.truncate(),
            other => Vec2::new(other.as_axis1d(), 0.0),
        }
    }

    pub fn as_axis3d(&self) -> Vec3 {
        match *self {
            InputActionValue::Axis3D(v) => v,
            other => other.as_axis2d().extend(0.0),
        }
    }
}

/// Phase of an action within the current tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerEvent {
    /// First tick the action is actuated
    Started,
    /// Every tick the action is actuated
    Triggered,
    /// First tick after the action stops being actuated
    Completed,
}

/// An action firing with its value for this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionEvent {
    pub action: InputAction,
    pub trigger: TriggerEvent,
    pub value: InputActionValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_narrowing() {
        let value = InputActionValue::from_vec3(InputValueType::Axis2D, Vec3::new(1.0, -1.0, 3.0));
        assert_eq!(value, InputActionValue::Axis2D(Vec2::new(1.0, -1.0)));
        assert_eq!(value.as_axis3d(), Vec3::new(1.0, -1.0, 0.0));

        let pressed = InputActionValue::from_vec3(InputValueType::Bool, Vec3::X);
        assert!(pressed.as_bool());
        assert_eq!(pressed.as_axis2d(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_actuation() {
        assert!(!InputActionValue::zero(InputValueType::Axis2D).is_actuated(0.0));
        assert!(InputActionValue::Axis2D(Vec2::new(0.1, 0.0)).is_actuated(0.0));
        assert!(!InputActionValue::Axis2D(Vec2::new(0.1, 0.0)).is_actuated(0.5));
        assert!(InputActionValue::Bool(true).is_actuated(0.5));
    }
}
