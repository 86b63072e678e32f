//! Turns raw window events into per-tick action events

use std::collections::{HashMap, HashSet};

use glam::{Vec2, Vec3};
use tracing::trace;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::{ActionEvent, InputAction, InputActionValue, InputSource, InputSubsystem, TriggerEvent};

/// Input handler that tracks raw input state and evaluates actions each tick
#[derive(Debug)]
pub struct InputHandler {
    /// Sources currently held down
    held: HashSet<InputSource>,
    /// Sources pressed at any point since the last evaluation
    pressed_this_tick: HashSet<InputSource>,
    /// Mouse movement accumulated since the last evaluation
    mouse_delta: Vec2,
    /// Actions that were actuated on the previous evaluation
    actuated: HashSet<InputAction>,
    /// Mouse sensitivity multiplier
    pub mouse_sensitivity: f32,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            held: HashSet::new(),
            pressed_this_tick: HashSet::new(),
            mouse_delta: Vec2::ZERO,
            actuated: HashSet::new(),
            mouse_sensitivity: 1.0,
        }
    }

    /// Handle a keyboard event
    pub fn handle_keyboard(&mut self, physical_key: PhysicalKey, element_state: ElementState) {
        if let PhysicalKey::Code(key_code) = physical_key {
            self.handle_key(key_code, element_state);
        }
    }

    /// Handle a key by code
    pub fn handle_key(&mut self, key_code: KeyCode, element_state: ElementState) {
        self.handle_source(InputSource::Key(key_code), element_state);
    }

    /// Handle a mouse button event
    pub fn handle_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        let button_id = match button {
            MouseButton::Left => 0,
            MouseButton::Right => 1,
            MouseButton::Middle => 2,
            MouseButton::Back => 3,
            MouseButton::Forward => 4,
            MouseButton::Other(id) => id as u32,
        };
        self.handle_source(InputSource::Mouse(button_id), state);
    }

    fn handle_source(&mut self, source: InputSource, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.held.insert(source);
                self.pressed_this_tick.insert(source);
            }
            ElementState::Released => {
                self.held.remove(&source);
            }
        }
    }

    /// Handle raw mouse movement
    pub fn handle_mouse_motion(&mut self, delta: (f64, f64)) {
        self.mouse_delta += Vec2::new(
            delta.0 as f32 * self.mouse_sensitivity,
            delta.1 as f32 * self.mouse_sensitivity,
        );
    }

    pub fn is_held(&self, source: InputSource) -> bool {
        self.held.contains(&source)
    }

    fn raw_value(&self, source: InputSource) -> Vec3 {
        match source {
            InputSource::MouseXY => self.mouse_delta.extend(0.0),
            digital => {
                // A tap shorter than a tick still counts for that tick
                if self.held.contains(&digital) || self.pressed_this_tick.contains(&digital) {
                    Vec3::X
                } else {
                    Vec3::ZERO
                }
            }
        }
    }

    /// Evaluate every action against the active mappings.
    ///
    /// Emits `Started` + `Triggered` on the first actuated tick, `Triggered` while
    /// actuated, and `Completed` on the first tick after. Clears per-tick state.
    pub fn evaluate(&mut self, subsystem: &InputSubsystem) -> Vec<ActionEvent> {
        let mut totals: HashMap<InputAction, Vec3> = HashMap::new();
        for mapping in subsystem.active_mappings() {
            let raw = self.raw_value(mapping.source);
            if raw == Vec3::ZERO {
                continue;
            }
            *totals.entry(mapping.action).or_insert(Vec3::ZERO) += mapping.modify(raw);
        }

        let mut events = Vec::new();
        for action in InputAction::ALL {
            let total = totals.get(&action).copied().unwrap_or(Vec3::ZERO);
            let value = InputActionValue::from_vec3(action.value_type(), total);
            let was_actuated = self.actuated.contains(&action);

            if value.is_actuated(action.actuation_threshold()) {
                if !was_actuated {
                    events.push(ActionEvent {
                        action,
                        trigger: TriggerEvent::Started,
                        value,
                    });
                    self.actuated.insert(action);
                }
                events.push(ActionEvent {
                    action,
                    trigger: TriggerEvent::Triggered,
                    value,
                });
            } else if was_actuated {
                events.push(ActionEvent {
                    action,
                    trigger: TriggerEvent::Completed,
                    value: InputActionValue::zero(action.value_type()),
                });
                self.actuated.remove(&action);
            }
        }

        if !events.is_empty() {
            trace!("Evaluated {} action events", events.len());
        }

        self.pressed_this_tick.clear();
        self.mouse_delta = Vec2::ZERO;
        events
    }
}
