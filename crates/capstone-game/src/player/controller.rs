//! Top-down player character: camera-relative movement and mouse aim

use capstone_core::Rotator;
use tracing::{debug, info, trace};

use crate::aim::MouseAimResolver;
use crate::camera::CameraRig;
use crate::error::ConfigError;
use crate::host::CharacterHost;
use crate::input::{ActionEvent, InputAction, InputActionValue, TriggerEvent};

use super::{ActionBindings, CharacterCommand, CharacterConfig};

/// Player character driving a host actor
pub struct PlayerCharacter {
    /// Configuration
    pub config: CharacterConfig,
    /// Boom and follow camera
    pub camera: CameraRig,
    aim: MouseAimResolver,
    bindings: ActionBindings,
}

impl PlayerCharacter {
    /// Build a character from a validated configuration
    pub fn new(config: CharacterConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let camera = CameraRig::with_config(config.camera_boom.clone(), config.follow_camera.clone());
        let aim = MouseAimResolver::with_config(config.aim.clone());

        Ok(Self {
            config,
            camera,
            aim,
            bindings: ActionBindings::new(),
        })
    }

    /// Push capsule, rotation, movement and boom settings into the host actor.
    ///
    /// Call once when the actor is created, before [`begin_play`](Self::begin_play).
    pub fn construct(&self, host: &mut dyn CharacterHost) {
        let capsule = &self.config.capsule;
        host.set_capsule_size(capsule.radius, capsule.half_height);
        host.set_use_controller_rotation(&self.config.controller_rotation);
        host.configure_movement(&self.config.movement);
        host.configure_camera_boom(&self.camera.boom);
        debug!(
            "Constructed character: capsule {}x{}, arm length {}",
            capsule.radius, capsule.half_height, self.camera.boom.target_arm_length
        );
    }

    /// Configure the possessing player controller: cursor flags and the mapping context
    pub fn begin_play(&self, host: &mut dyn CharacterHost) {
        let Some(controller) = host.player_controller() else {
            debug!("Begin play without a player controller, skipping input setup");
            return;
        };

        let cursor = &self.config.cursor;
        controller.set_show_mouse_cursor(cursor.show_mouse_cursor);
        controller.set_enable_click_events(cursor.enable_click_events);
        controller.set_enable_mouse_over_events(cursor.enable_mouse_over_events);

        if let Some(subsystem) = controller.input_subsystem() {
            subsystem.add_mapping_context(self.config.mapping_context.clone(), self.config.mapping_priority);
        }

        info!("Player character began play");
    }

    /// Install the action bindings
    pub fn setup_player_input(&mut self) {
        self.bindings.clear();

        // Jumping
        self.bindings
            .bind_action(InputAction::Jump, TriggerEvent::Triggered, CharacterCommand::Jump);
        self.bindings
            .bind_action(InputAction::Jump, TriggerEvent::Completed, CharacterCommand::StopJumping);

        // Moving
        self.bindings
            .bind_action(InputAction::Move, TriggerEvent::Triggered, CharacterCommand::Move);

        // Looking
        self.bindings
            .bind_action(InputAction::Look, TriggerEvent::Triggered, CharacterCommand::Look);
    }

    pub fn bindings(&self) -> &ActionBindings {
        &self.bindings
    }

    /// Dispatch this tick's action events
    pub fn process_input(&self, events: &[ActionEvent], host: &mut dyn CharacterHost) {
        for event in events {
            self.handle_action(event, host);
        }
    }

    /// Run every command bound to one event
    pub fn handle_action(&self, event: &ActionEvent, host: &mut dyn CharacterHost) {
        for command in self.bindings.commands_for(event) {
            match command {
                CharacterCommand::Jump => host.jump(),
                CharacterCommand::StopJumping => host.stop_jumping(),
                CharacterCommand::Move => self.move_input(event.value, host),
                CharacterCommand::Look => self.look(event.value, host),
            }
        }
    }

    /// Rotation of the follow camera for the host's current pose
    pub fn camera_rotation(&self, host: &mut dyn CharacterHost) -> Rotator {
        let actor_rotation = host.actor_rotation();
        let control_rotation = host.player_controller().map(|pc| pc.control_rotation());
        self.camera.camera_rotation(actor_rotation, control_rotation)
    }

    /// Translate a 2D move input into camera-relative movement requests.
    ///
    /// Y drives the camera's forward axis and X its right axis, both flattened to yaw.
    pub fn move_input(&self, value: InputActionValue, host: &mut dyn CharacterHost) {
        if !host.has_controller() {
            return;
        }

        let movement = value.as_axis2d();
        let (forward, right) = CameraRig::movement_basis(self.camera_rotation(host));

        host.add_movement_input(forward, movement.y);
        host.add_movement_input(right, movement.x);
    }

    /// Forward look input to the controller when looking is enabled
    pub fn look(&self, value: InputActionValue, host: &mut dyn CharacterHost) {
        if !self.config.enable_look || !host.has_controller() {
            return;
        }

        let look = value.as_axis2d();
        host.add_controller_yaw_input(look.x);
        host.add_controller_pitch_input(look.y);
    }

    /// Per-tick update
    pub fn tick(&self, delta_time: f32, host: &mut dyn CharacterHost) {
        trace!("Character tick ({:.4}s)", delta_time);
        self.aim_toward_mouse(host);
    }

    /// Turn the actor toward the point under the cursor.
    ///
    /// Skips silently when there is no player controller, the cursor cannot be
    /// deprojected, or the aim is degenerate. Returns the applied rotation.
    pub fn aim_toward_mouse(&self, host: &mut dyn CharacterHost) -> Option<Rotator> {
        if !self.config.aim.enabled {
            return None;
        }

        let ray = host.player_controller()?.deproject_mouse_position();
        let Some(ray) = ray else {
            trace!("Mouse deprojection failed, keeping current facing");
            return None;
        };

        let Some(rotation) = self.aim.resolve_ray(host.actor_location(), &ray) else {
            trace!("No aim direction this tick");
            return None;
        };

        host.set_actor_rotation(rotation);
        Some(rotation)
    }
}
