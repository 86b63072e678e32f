//! In-process host for running the character without an engine.
//!
//! Integrates movement requests kinematically on a flat floor and deprojects a
//! scripted cursor through the orthographic follow camera.

use capstone_core::{Ray, Rotator, Vec3};
use capstone_game::{
    CameraBoomConfig, CharacterHost, ControllerRotationConfig, InputSubsystem, MovementConfig,
    PlayerControllerHost,
};
use tracing::debug;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Player controller with a cursor pinned to a world point
pub struct HeadlessController {
    subsystem: InputSubsystem,
    /// Ground point under the cursor, if the cursor is over the view
    cursor_target: Option<Vec3>,
    /// Direction every orthographic view ray travels
    view_direction: Vec3,
    /// How far behind the target the view ray starts
    view_distance: f32,
    pub show_mouse_cursor: bool,
    pub click_events: bool,
    pub mouse_over_events: bool,
}

impl HeadlessController {
    pub fn new(view_direction: Vec3, view_distance: f32) -> Self {
        Self {
            subsystem: InputSubsystem::new(),
            cursor_target: None,
            view_direction: view_direction.normalize_or_zero(),
            view_distance,
            show_mouse_cursor: false,
            click_events: false,
            mouse_over_events: false,
        }
    }

    pub fn subsystem(&self) -> &InputSubsystem {
        &self.subsystem
    }

    pub fn set_cursor_target(&mut self, target: Option<Vec3>) {
        self.cursor_target = target;
    }
}

impl PlayerControllerHost for HeadlessController {
    fn deproject_mouse_position(&self) -> Option<Ray> {
        let target = self.cursor_target?;
        Some(Ray::new(
            target - self.view_direction * self.view_distance,
            self.view_direction,
        ))
    }

    fn set_show_mouse_cursor(&mut self, show: bool) {
        self.show_mouse_cursor = show;
    }

    fn set_enable_click_events(&mut self, enable: bool) {
        self.click_events = enable;
    }

    fn set_enable_mouse_over_events(&mut self, enable: bool) {
        self.mouse_over_events = enable;
    }

    fn input_subsystem(&mut self) -> Option<&mut InputSubsystem> {
        Some(&mut self.subsystem)
    }

    fn control_rotation(&self) -> Rotator {
        Rotator::ZERO
    }
}

/// Downward acceleration applied while airborne, in cm/s^2
const GRAVITY: f32 = 980.0;

/// Kinematic stand-in for the engine's character actor
pub struct HeadlessPawn {
    pub controller: HeadlessController,
    pub movement: MovementConfig,
    pub controller_rotation: ControllerRotationConfig,
    pub boom: Option<CameraBoomConfig>,
    pub location: Vec3,
    pub rotation: Rotator,
    /// Capsule half height; the capsule centre rests this far above the floor
    pub half_height: f32,
    pub vertical_velocity: f32,
    pending_input: Vec3,
    pub jump_count: u32,
    jumping: bool,
    pub controller_yaw: f32,
    pub controller_pitch: f32,
}

impl HeadlessPawn {
    pub fn new(controller: HeadlessController, location: Vec3) -> Self {
        Self {
            controller,
            movement: MovementConfig::default(),
            controller_rotation: ControllerRotationConfig::default(),
            boom: None,
            location,
            rotation: Rotator::ZERO,
            half_height: 0.0,
            vertical_velocity: 0.0,
            pending_input: Vec3::ZERO,
            jump_count: 0,
            jumping: false,
            controller_yaw: 0.0,
            controller_pitch: 0.0,
        }
    }

    pub fn is_grounded(&self) -> bool {
        self.location.z <= self.half_height && self.vertical_velocity <= 0.0
    }

    /// Consume this tick's movement requests and fall under gravity
    pub fn integrate(&mut self, dt: f32) {
        let grounded = self.is_grounded();
        let input = Vec3::new(self.pending_input.x, self.pending_input.y, 0.0);
        self.pending_input = Vec3::ZERO;

        let magnitude = input.length();
        if magnitude > 0.0 {
            let mut speed = self.movement.max_analog_speed(magnitude);
            if !grounded {
                speed *= self.movement.air_control;
            }
            self.location += input / magnitude * speed * dt;
        }

        if !grounded {
            self.vertical_velocity -= GRAVITY * dt;
            self.location.z += self.vertical_velocity * dt;
            if self.location.z <= self.half_height {
                self.location.z = self.half_height;
                self.vertical_velocity = 0.0;
                debug!("Landed at {:?}", self.location);
            }
        }
    }
}

impl CharacterHost for HeadlessPawn {
    fn player_controller(&mut self) -> Option<&mut dyn PlayerControllerHost> {
        Some(&mut self.controller)
    }

    fn has_controller(&self) -> bool {
        true
    }

    fn set_capsule_size(&mut self, _radius: f32, half_height: f32) {
        // Stand on the floor if we were resting on it
        if self.location.z <= self.half_height {
            self.location.z = half_height;
        }
        self.half_height = half_height;
    }

    fn set_use_controller_rotation(&mut self, rotation: &ControllerRotationConfig) {
        self.controller_rotation = rotation.clone();
    }

    fn configure_movement(&mut self, movement: &MovementConfig) {
        self.movement = movement.clone();
    }

    fn configure_camera_boom(&mut self, boom: &CameraBoomConfig) {
        self.boom = Some(boom.clone());
    }

    fn actor_location(&self) -> Vec3 {
        self.location
    }

    fn actor_rotation(&self) -> Rotator {
        self.rotation
    }

    fn set_actor_rotation(&mut self, rotation: Rotator) {
        self.rotation = rotation;
    }

    fn add_movement_input(&mut self, world_direction: Vec3, scale: f32) {
        self.pending_input += world_direction * scale;
    }

    fn jump(&mut self) {
        if !self.jumping && self.is_grounded() {
            self.jumping = true;
            self.jump_count += 1;
            self.vertical_velocity = self.movement.jump_z_velocity;
            debug!("Jump at {:?}", self.location);
        }
    }

    fn stop_jumping(&mut self) {
        self.jumping = false;
    }

    fn add_controller_yaw_input(&mut self, value: f32) {
        self.controller_yaw += value;
        if self.controller_rotation.use_yaw {
            self.rotation = Rotator::new(self.rotation.pitch, self.rotation.yaw + value, self.rotation.roll)
                .normalized();
        }
    }

    fn add_controller_pitch_input(&mut self, value: f32) {
        self.controller_pitch += value;
    }
}

/// One scripted input change
#[derive(Debug, Clone, Copy)]
pub enum ScriptEvent {
    Key(KeyCode, ElementState),
    Cursor(Option<Vec3>),
    MouseMotion(f64, f64),
}

/// Frame-indexed input script
pub struct InputScript {
    events: Vec<(u32, ScriptEvent)>,
}

impl InputScript {
    /// Walk diagonally, jump, then stop while the cursor sweeps around the character
    pub fn demo() -> Self {
        use winit::event::ElementState::{Pressed, Released};
        let mut events = vec![
            (0, ScriptEvent::Key(KeyCode::KeyW, Pressed)),
            (20, ScriptEvent::Key(KeyCode::KeyD, Pressed)),
            (40, ScriptEvent::Key(KeyCode::Space, Pressed)),
            (42, ScriptEvent::Key(KeyCode::Space, Released)),
            (60, ScriptEvent::Key(KeyCode::KeyW, Released)),
            (80, ScriptEvent::Key(KeyCode::KeyD, Released)),
            (90, ScriptEvent::MouseMotion(12.0, -4.0)),
            (100, ScriptEvent::Cursor(None)),
        ];
        for frame in (0..100).step_by(10) {
            let angle = (frame as f32 * 3.6).to_radians();
            let target = Vec3::new(angle.cos(), angle.sin(), 0.0) * 600.0;
            events.push((frame, ScriptEvent::Cursor(Some(target))));
        }
        events.sort_by_key(|(frame, _)| *frame);
        Self { events }
    }

    /// Events scheduled for a frame
    pub fn events_at(&self, frame: u32) -> impl Iterator<Item = ScriptEvent> + '_ {
        self.events
            .iter()
            .filter(move |(f, _)| *f == frame)
            .map(|(_, event)| *event)
    }

    /// Last frame with a scheduled event
    pub fn last_frame(&self) -> u32 {
        self.events.iter().map(|(f, _)| *f).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capstone_game::{CharacterConfig, MouseAimResolver, PlayerCharacter};

    fn pawn() -> HeadlessPawn {
        let controller = HeadlessController::new(Rotator::new(-45.0, 45.0, 0.0).forward(), 4000.0);
        HeadlessPawn::new(controller, Vec3::ZERO)
    }

    #[test]
    fn test_deprojected_ray_hits_cursor_target() {
        let mut pawn = pawn();
        let target = Vec3::new(300.0, -200.0, 0.0);
        pawn.controller.set_cursor_target(Some(target));

        let ray = pawn.controller.deproject_mouse_position().unwrap();
        let hit = MouseAimResolver::new()
            .plane_intersection(0.0, ray.origin, ray.direction)
            .unwrap();
        assert!((hit - target).length() < 0.05);
    }

    #[test]
    fn test_integrate_moves_at_walk_speed() {
        let mut pawn = pawn();
        pawn.add_movement_input(Vec3::X, 1.0);
        pawn.integrate(0.5);
        assert!((pawn.location - Vec3::new(250.0, 0.0, 0.0)).length() < 1e-3);

        // Requests are consumed each tick
        pawn.integrate(0.5);
        assert!((pawn.location.x - 250.0).abs() < 1e-3);
    }

    #[test]
    fn test_character_faces_cursor() {
        let mut character = PlayerCharacter::new(CharacterConfig::default()).unwrap();
        character.setup_player_input();
        let mut pawn = pawn();
        character.begin_play(&mut pawn);
        assert!(pawn.controller.show_mouse_cursor);

        pawn.controller.set_cursor_target(Some(Vec3::new(-100.0, 0.0, 0.0)));
        character.tick(1.0 / 60.0, &mut pawn);
        assert!((pawn.rotation.yaw.abs() - 180.0).abs() < 1e-2);
    }

    #[test]
    fn test_construct_configures_pawn() {
        let config = CharacterConfig {
            movement: MovementConfig {
                jump_z_velocity: 420.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let character = PlayerCharacter::new(config).unwrap();
        let mut pawn = pawn();
        character.construct(&mut pawn);

        assert_eq!(pawn.half_height, 96.0);
        assert_eq!(pawn.location.z, 96.0);
        assert_eq!(pawn.movement.jump_z_velocity, 420.0);
        assert_eq!(pawn.boom.as_ref().map(|b| b.target_arm_length), Some(4000.0));
        assert!(!pawn.controller_rotation.use_yaw);
    }

    #[test]
    fn test_jump_launches_at_jump_velocity() {
        let character = PlayerCharacter::new(CharacterConfig::default()).unwrap();
        let mut pawn = pawn();
        character.construct(&mut pawn);

        pawn.jump();
        assert_eq!(pawn.vertical_velocity, 700.0);
        assert!(!pawn.is_grounded());

        // Holding jump does not relaunch mid-air
        pawn.integrate(0.1);
        pawn.stop_jumping();
        pawn.jump();
        assert_eq!(pawn.jump_count, 1);
        assert!((pawn.location.z - (96.0 + 60.2)).abs() < 1e-2);

        for _ in 0..200 {
            pawn.integrate(1.0 / 60.0);
        }
        assert!(pawn.is_grounded());
        assert_eq!(pawn.location.z, 96.0);
    }

    #[test]
    fn test_air_control_limits_airborne_speed() {
        let character = PlayerCharacter::new(CharacterConfig::default()).unwrap();
        let mut pawn = pawn();
        character.construct(&mut pawn);

        pawn.jump();
        pawn.add_movement_input(Vec3::X, 1.0);
        pawn.integrate(0.1);
        // 500 cm/s walk speed scaled by 0.35 air control
        assert!((pawn.location.x - 17.5).abs() < 1e-3);
    }

    #[test]
    fn test_controller_yaw_turns_actor_when_enabled() {
        let mut pawn = pawn();
        pawn.add_controller_yaw_input(30.0);
        assert_eq!(pawn.rotation.yaw, 0.0);

        pawn.set_use_controller_rotation(&ControllerRotationConfig {
            use_yaw: true,
            ..Default::default()
        });
        pawn.add_controller_yaw_input(200.0);
        assert!((pawn.rotation.yaw - -160.0).abs() < 1e-3);
    }

    #[test]
    fn test_demo_script_is_ordered() {
        let script = InputScript::demo();
        assert_eq!(script.last_frame(), 100);
        assert!(script.events_at(0).count() >= 2);
    }
}
