// Character system
//
// This module contains everything related to controllable actors:
// - Movement settings (the tuning surface)
// - Jump timing windows and coarse movement state
// - The platforming character controller
// - A free-flying debug actor

pub mod character;
pub mod flyer;
pub mod settings;
pub mod state;

// Re-export commonly used types
pub use character::{PlatformerCharacter, TickReport};
pub use flyer::{FlightReport, FreeFlyer, DEFAULT_FLY_SPEED};
pub use settings::{MovementSettings, DEFAULT_SETTINGS};
pub use state::{CharacterState, CharacterStateMachine, JumpWindows};
