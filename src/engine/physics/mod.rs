// Pixel-grid kinematic physics: solid geometry, overlap probing and movement

pub mod actor;
pub mod body;
mod collision;
mod grid;
mod mover;
mod probe;
mod world;

pub use actor::{ActorBody, Axis};
pub use collision::{CollisionLayer, SolidMask};
pub use grid::{PixelGrid, DEFAULT_PIXELS_PER_UNIT};
pub use mover::{AxisMover, LeniencyConfig, MoveOptions, MoveOutcome, MOVE_LENIENCY};
pub use probe::{GridProbe, OverlapQuery};
pub use world::{ColliderHandle, SolidWorld};

// Re-export for building custom solids
pub use body::{presets, SolidBuilder};
