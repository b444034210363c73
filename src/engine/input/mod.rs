// Input handling system
//
// The simulation never polls a device. Whatever owns the window or the
// network reports which actions are held; `PlayerInput` turns that into
// press/release edges once per tick and hands out an `InputFrame`.
//
// ## Usage Example
//
// ```rust
// use pixel_platformer::engine::input::{Action, PlayerInput};
//
// let mut input = PlayerInput::new();
//
// // Each tick, report held state from the host
// input.set_held(Action::Jump, true);
//
// let frame = input.frame();
// assert!(frame.jump_pressed);
//
// // After the simulation tick, clear the edges
// input.update();
// ```

pub mod action;
pub mod frame;
pub mod player;

// Re-export commonly used types
pub use action::Action;
pub use frame::InputFrame;
pub use player::PlayerInput;
