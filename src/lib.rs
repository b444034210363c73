//! Pixel-perfect kinematic platformer movement
//!
//! Actors move on a fixed pixel grid, one grid unit at a time, against
//! static solids held in a [`SolidWorld`]. On top of that sits a
//! platforming character with acceleration, variable-height jumps, coyote
//! time and jump buffering.
//!
//! ```no_run
//! use glam::Vec2;
//! use pixel_platformer::engine::input::InputFrame;
//! use pixel_platformer::engine::physics::{presets, SolidWorld};
//! use pixel_platformer::game::characters::{MovementSettings, PlatformerCharacter};
//!
//! let mut world = SolidWorld::new();
//! world.add_solid(presets::ground(-20.0, 20.0, 0.0, 1.0));
//!
//! let mut player = PlatformerCharacter::new(MovementSettings::default(), Vec2::new(0.0, 1.0))?;
//! player.update(&world, &InputFrame::horizontal(1.0).with_jump_press(), 1.0 / 60.0);
//! # Ok::<(), pixel_platformer::EngineError>(())
//! ```

pub mod core;
pub mod engine;
pub mod error;
pub mod game;

pub use engine::physics::SolidWorld;
pub use error::EngineError;
