//! Mapping contexts: which physical inputs drive which actions

use std::collections::HashSet;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::info;
use winit::keyboard::KeyCode;

use super::InputAction;

/// A physical input that can drive an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputSource {
    /// Keyboard key
    Key(KeyCode),
    /// Mouse button
    Mouse(u32), // 0 = left, 1 = right, 2 = middle
    /// Mouse motion on both axes
    MouseXY,
}

impl From<KeyCode> for InputSource {
    fn from(key: KeyCode) -> Self {
        Self::Key(key)
    }
}

/// Per-mapping transform applied to the raw input value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputModifier {
    /// Flip the sign of the selected axes
    Negate { x: bool, y: bool, z: bool },
    /// Swap X and Y, turning a one-axis key into a vertical axis
    SwizzleYXZ,
    /// Multiply each axis
    Scale(Vec3),
}

impl InputModifier {
    /// Negate every axis
    pub const NEGATE: InputModifier = InputModifier::Negate {
        x: true,
        y: true,
        z: true,
    };

    pub fn apply(&self, value: Vec3) -> Vec3 {
        match *self {
            InputModifier::Negate { x, y, z } => Vec3::new(
                if x { -value.x } else { value.x },
                if y { -value.y } else { value.y },
                if z { -value.z } else { value.z },
            ),
            InputModifier::SwizzleYXZ => Vec3::new(value.y, value.x, value.z),
            InputModifier::Scale(scale) => value * scale,
        }
    }
}

/// One input driving one action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputMapping {
    pub source: InputSource,
    pub action: InputAction,
    #[serde(default)]
    pub modifiers: Vec<InputModifier>,
}

impl InputMapping {
    pub fn new(source: impl Into<InputSource>, action: InputAction) -> Self {
        Self {
            source: source.into(),
            action,
            modifiers: Vec::new(),
        }
    }

    pub fn with_modifier(mut self, modifier: InputModifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Run the raw value through every modifier in order
    pub fn modify(&self, raw: Vec3) -> Vec3 {
        self.modifiers.iter().fold(raw, |value, modifier| modifier.apply(value))
    }
}

/// Named set of mappings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputMappingContext {
    pub name: String,
    pub mappings: Vec<InputMapping>,
}

impl Default for InputMappingContext {
    fn default() -> Self {
        let mut context = Self::new("default");

        // WASD moves on a 2D axis: W/S feed Y, A/D feed X
        context.map_move_keys(KeyCode::KeyW, KeyCode::KeyS, KeyCode::KeyA, KeyCode::KeyD);
        // Arrow keys as alternative
        context.map_move_keys(
            KeyCode::ArrowUp,
            KeyCode::ArrowDown,
            KeyCode::ArrowLeft,
            KeyCode::ArrowRight,
        );

        context.map(InputMapping::new(KeyCode::Space, InputAction::Jump));

        // Mouse Y grows downward on screen
        context.map(
            InputMapping::new(InputSource::MouseXY, InputAction::Look).with_modifier(
                InputModifier::Negate {
                    x: false,
                    y: true,
                    z: false,
                },
            ),
        );

        context
    }
}

impl InputMappingContext {
    /// Create an empty context
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mappings: Vec::new(),
        }
    }

    pub fn map(&mut self, mapping: InputMapping) {
        self.mappings.push(mapping);
    }

    /// Remove every mapping for a source
    pub fn unmap(&mut self, source: InputSource) {
        self.mappings.retain(|m| m.source != source);
    }

    fn map_move_keys(&mut self, forward: KeyCode, backward: KeyCode, left: KeyCode, right: KeyCode) {
        self.map(
            InputMapping::new(forward, InputAction::Move).with_modifier(InputModifier::SwizzleYXZ),
        );
        self.map(
            InputMapping::new(backward, InputAction::Move)
                .with_modifier(InputModifier::SwizzleYXZ)
                .with_modifier(InputModifier::NEGATE),
        );
        self.map(InputMapping::new(left, InputAction::Move).with_modifier(InputModifier::NEGATE));
        self.map(InputMapping::new(right, InputAction::Move));
    }

    /// Mappings for an action
    pub fn mappings_for(&self, action: InputAction) -> impl Iterator<Item = &InputMapping> {
        self.mappings.iter().filter(move |m| m.action == action)
    }
}

/// Active mapping contexts of one local player
#[derive(Debug, Clone, Default)]
pub struct InputSubsystem {
    /// (priority, context), kept sorted by descending priority
    contexts: Vec<(i32, InputMappingContext)>,
}

impl InputSubsystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a context, replacing any context with the same name.
    ///
    /// Higher priorities win when two contexts map the same input.
    pub fn add_mapping_context(&mut self, context: InputMappingContext, priority: i32) {
        self.contexts.retain(|(_, c)| c.name != context.name);
        info!("Added input mapping context '{}' at priority {}", context.name, priority);
        // Insert after existing contexts of equal priority
        let index = self
            .contexts
            .iter()
            .position(|(p, _)| *p < priority)
            .unwrap_or(self.contexts.len());
        self.contexts.insert(index, (priority, context));
    }

    /// Remove a context by name, returning whether it was present
    pub fn remove_mapping_context(&mut self, name: &str) -> bool {
        let before = self.contexts.len();
        self.contexts.retain(|(_, c)| c.name != name);
        let removed = self.contexts.len() != before;
        if removed {
            info!("Removed input mapping context '{}'", name);
        }
        removed
    }

    pub fn clear_all_mappings(&mut self) {
        self.contexts.clear();
    }

    pub fn has_mapping_context(&self, name: &str) -> bool {
        self.contexts.iter().any(|(_, c)| c.name == name)
    }

    pub fn context_count(&self) -> usize {
        self.contexts.len()
    }

    /// Mappings that apply after priority shadowing.
    ///
    /// An input mapped by a context is unavailable to every lower-priority context.
    pub fn active_mappings(&self) -> Vec<&InputMapping> {
        let mut claimed: HashSet<InputSource> = HashSet::new();
        let mut active = Vec::new();

        for (_, context) in &self.contexts {
            active.extend(context.mappings.iter().filter(|m| !claimed.contains(&m.source)));
            claimed.extend(context.mappings.iter().map(|m| m.source));
        }

        active
    }
}
