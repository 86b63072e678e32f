//! Capstone - top-down mouse-aimed character
//!
//! Runs the player character against an in-process host with a scripted
//! input sequence and reports where it ended up.

mod headless;
mod settings;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use capstone_core::{GameTime, Rotator, Vec3};
use capstone_game::{CameraRig, InputHandler, PlayerCharacter};

use headless::{HeadlessController, HeadlessPawn, InputScript, ScriptEvent};
use settings::GameSettings;

/// Real time between simulated frames
const FRAME_DELTA: f32 = 1.0 / 60.0;
/// Frames to keep running after the script ends
const TRAILING_FRAMES: u32 = 30;

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")?;

    info!("Starting Capstone...");

    let settings = GameSettings::load();
    if std::env::args().any(|arg| arg == "--write-settings") {
        settings.save().context("Failed to write settings")?;
    }

    let mut character =
        PlayerCharacter::new(settings.character.clone()).context("Invalid character configuration")?;
    character.setup_player_input();

    // The orthographic camera looks along the boom for every pixel
    let view_rotation = character.camera.camera_rotation(Rotator::ZERO, None);
    let view_distance = character.camera.boom.target_arm_length;
    let controller = HeadlessController::new(view_rotation.forward(), view_distance);
    let mut pawn = HeadlessPawn::new(controller, Vec3::ZERO);

    character.construct(&mut pawn);
    character.begin_play(&mut pawn);

    let script = InputScript::demo();
    let mut input = InputHandler::new();
    let mut time = GameTime::new(settings.time.clone());
    let tick_delta = time.config.fixed_timestep;

    for frame in 0..=script.last_frame() + TRAILING_FRAMES {
        for event in script.events_at(frame) {
            match event {
                ScriptEvent::Key(key, state) => input.handle_key(key, state),
                ScriptEvent::Cursor(target) => pawn.controller.set_cursor_target(target),
                ScriptEvent::MouseMotion(dx, dy) => input.handle_mouse_motion((dx, dy)),
            }
        }

        time.update(FRAME_DELTA);
        for _ in 0..time.fixed_steps() {
            let events = input.evaluate(pawn.controller.subsystem());
            character.process_input(&events, &mut pawn);
            character.tick(tick_delta, &mut pawn);
            pawn.integrate(tick_delta);
        }
    }

    let (forward, _) = CameraRig::movement_basis(view_rotation);
    info!(
        "Finished after {} frames: location {:?}, facing yaw {:.1}, {} jump(s), camera forward {:?}",
        time.frame_count,
        pawn.location,
        pawn.rotation.yaw,
        pawn.jump_count,
        forward
    );

    Ok(())
}
