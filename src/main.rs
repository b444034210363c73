use std::time::Duration;

use anyhow::{Context, Result};
use glam::Vec2;
use log::info;

use pixel_platformer::engine::game_loop::GameLoop;
use pixel_platformer::engine::input::{Action, PlayerInput};
use pixel_platformer::engine::physics::{presets, MoveOutcome, SolidWorld};
use pixel_platformer::game::characters::{FreeFlyer, MovementSettings, PlatformerCharacter};

/// Length of the scripted run
const DEMO_FRAMES: u32 = 240;

/// Frame time the demo host pretends to render at (a little slower than the tick rate)
const FRAME_TIME: Duration = Duration::from_millis(20);

fn build_level() -> SolidWorld {
    let mut world = SolidWorld::new();
    world.add_solids([
        presets::ground(-20.0, 20.0, 0.0, 2.0),
        // One-pixel lip to walk over
        presets::ground(2.0, 20.0, 0.125, 0.125),
        presets::platform(6.0, 3.0, 4.0, 0.5),
        presets::wall(12.0, 1.0, 0.125, 6.0),
        presets::hazard(-4.0, 0.25, 2.0, 0.5),
    ]);
    world
}

/// Which buttons the scripted player holds on a given frame
fn scripted_buttons(frame: u32) -> [(Action, bool); 2] {
    let run_right = frame >= 10;
    let jump = (40..55).contains(&frame) || (120..160).contains(&frame);
    [(Action::MoveRight, run_right), (Action::Jump, jump)]
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting pixel platformer demo...");

    let world = build_level();
    info!("Level built with {} solids", world.solid_count());

    let settings = MovementSettings::default();
    let mut player = PlatformerCharacter::new(settings, Vec2::new(-8.0, 1.0))
        .context("Failed to spawn player")?;
    let mut flyer = FreeFlyer::new(settings.grid()?, Vec2::new(-8.0, 8.0), Vec2::ONE)
        .context("Failed to spawn flyer")?;
    let mut input = PlayerInput::new();
    let mut game_loop = GameLoop::new();

    for frame in 0..DEMO_FRAMES {
        for (action, held) in scripted_buttons(frame) {
            input.set_held(action, held);
        }

        let ticks = game_loop.advance(FRAME_TIME);
        let dt = game_loop.fixed_timestep();

        for _ in 0..ticks {
            let tick_input = input.frame();
            let report = player.update(&world, &tick_input, dt);
            // Edges belong to the first tick that sees them
            input.update();

            if report.jumped {
                info!("Jumped at {}", player.position());
            }
            if report.landed {
                info!("Landed at {}", player.position());
            }
            if let Some(MoveOutcome::Slipped { offset }) = report.horizontal {
                info!("Slipped over a lip by {}", offset);
            }
            if let Some(MoveOutcome::Blocked(hit)) = report.horizontal {
                info!("Ran into {:?} at {}", hit, player.position());
            }

            // The flyer follows the same buttons, drifting down as well
            flyer.update(&world, tick_input.direction() + Vec2::new(0.0, -0.5), dt);
        }
    }

    info!(
        "Finished after {} frames / {} ticks: player at {} ({}), flyer at {}",
        game_loop.frame_count(),
        game_loop.update_count(),
        player.position(),
        player.state().name(),
        flyer.position()
    );

    Ok(())
}
