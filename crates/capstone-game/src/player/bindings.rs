//! Action bindings: which character command runs for an action event

use tracing::debug;

use crate::input::{ActionEvent, InputAction, TriggerEvent};

/// Character callbacks an action can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterCommand {
    Jump,
    StopJumping,
    Move,
    Look,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActionBinding {
    action: InputAction,
    trigger: TriggerEvent,
    command: CharacterCommand,
}

/// Ordered table of (action, trigger) -> command bindings
#[derive(Debug, Clone, Default)]
pub struct ActionBindings {
    bindings: Vec<ActionBinding>,
}

impl ActionBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a command to an action's trigger event
    pub fn bind_action(&mut self, action: InputAction, trigger: TriggerEvent, command: CharacterCommand) {
        debug!("Binding {:?}/{:?} to {:?}", action, trigger, command);
        self.bindings.push(ActionBinding {
            action,
            trigger,
            command,
        });
    }

    /// Commands bound to an event, in binding order
    pub fn commands_for(&self, event: &ActionEvent) -> impl Iterator<Item = CharacterCommand> + '_ {
        let (action, trigger) = (event.action, event.trigger);
        self.bindings
            .iter()
            .filter(move |b| b.action == action && b.trigger == trigger)
            .map(|b| b.command)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputActionValue, InputValueType};

    #[test]
    fn test_commands_for_event() {
        let mut bindings = ActionBindings::new();
        bindings.bind_action(InputAction::Jump, TriggerEvent::Triggered, CharacterCommand::Jump);
        bindings.bind_action(InputAction::Jump, TriggerEvent::Completed, CharacterCommand::StopJumping);

        let event = ActionEvent {
            action: InputAction::Jump,
            trigger: TriggerEvent::Completed,
            value: InputActionValue::zero(InputValueType::Bool),
        };
        let commands: Vec<_> = bindings.commands_for(&event).collect();
        assert_eq!(commands, vec![CharacterCommand::StopJumping]);

        let started = ActionEvent {
            trigger: TriggerEvent::Started,
            ..event
        };
        assert_eq!(bindings.commands_for(&started).count(), 0);
    }
}
