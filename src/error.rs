// Engine error types

/// Errors raised while building the simulation.
///
/// Blocked movement is never an error: it is reported through
/// [`MoveOutcome`](crate::engine::physics::MoveOutcome).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("Invalid pixels per unit: {0} (must be a finite value greater than zero)")]
    InvalidPixelsPerUnit(f32),

    #[error("Invalid collider size: {width}x{height} (both sides must be larger than one pixel)")]
    InvalidColliderSize { width: f32, height: f32 },

    #[error("Invalid movement setting `{name}`: {value}")]
    InvalidSetting { name: &'static str, value: f32 },
}
