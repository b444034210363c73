// Movement settings - every tunable of the platforming controller

use crate::engine::physics::{
    CollisionLayer, LeniencyConfig, PixelGrid, SolidMask, DEFAULT_PIXELS_PER_UNIT,
};
use crate::error::EngineError;

/// Tuning for a platforming character
///
/// Speeds are world units per second, accelerations and gravities world
/// units per second squared, windows in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementSettings {
    // Horizontal movement
    /// Maximum horizontal speed reached from input
    pub top_speed: f32,
    /// Rate of speeding up toward the input direction
    pub acceleration: f32,
    /// Rate of slowing down with no input or opposing input
    pub deceleration: f32,
    /// Acceleration scale while faster than the current max speed
    pub past_max_acceleration_multiplier: f32,
    /// Acceleration scale while airborne (0.0 = no air control)
    pub air_control_multiplier: f32,

    // Vertical movement
    /// Upward velocity set by a jump
    pub jump_force: f32,
    /// Gravity while moving upward
    pub upwards_gravity: f32,
    /// Gravity while falling or at rest
    pub downwards_gravity: f32,
    /// Vertical speed at or below which a jump counts as being at its apex
    pub apex_velocity_threshold: f32,
    /// Max horizontal speed scale at the apex
    pub apex_velocity_multiplier: f32,
    /// Horizontal acceleration scale at the apex
    pub apex_accel_multiplier: f32,
    /// Gravity scale at the apex
    pub apex_gravity_multiplier: f32,
    /// Terminal fall speed (magnitude)
    pub max_fall_speed: f32,
    /// Rate at which a fall faster than terminal speed is slowed back to it
    pub past_max_fall_speed_deceleration: f32,

    // Leniency
    /// Grace period after leaving the ground during which a jump still works
    pub coyote_time: f32,
    /// Grace period before landing during which an early press is honoured
    pub jump_buffer: f32,
    /// Vertical velocity scale applied once when jump is released early
    pub jump_release_multiplier: f32,
    /// Which directions may slip past one-pixel lips
    pub leniency: LeniencyConfig,

    // World
    /// Grid density
    pub pixels_per_unit: f32,
    /// Layers that block the character
    pub collision_mask: SolidMask,

    // Dimensions (for the box collider)
    /// Character width in world units
    pub width: f32,
    /// Character height in world units
    pub height: f32,
}

/// Default tuning, tested at 8 pixels per unit
pub const DEFAULT_SETTINGS: MovementSettings = MovementSettings {
    top_speed: 10.0,
    acceleration: 50.0,
    deceleration: 100.0,
    past_max_acceleration_multiplier: 0.5,
    air_control_multiplier: 0.5,

    jump_force: 20.0,
    upwards_gravity: 80.0,
    downwards_gravity: 100.0,
    apex_velocity_threshold: 0.0,
    apex_velocity_multiplier: 1.0,
    apex_accel_multiplier: 1.0,
    apex_gravity_multiplier: 1.0,
    max_fall_speed: 10.0,
    past_max_fall_speed_deceleration: 150.0,

    coyote_time: 0.1,
    jump_buffer: 0.1,
    jump_release_multiplier: 0.5,
    leniency: LeniencyConfig {
        horizontal: true,
        upward: true,
        downward: false,
    },

    pixels_per_unit: DEFAULT_PIXELS_PER_UNIT,
    collision_mask: SolidMask::from_bits(
        CollisionLayer::Terrain as u32 | CollisionLayer::Platform as u32,
    ),

    width: 1.0,
    height: 2.0,
};

impl Default for MovementSettings {
    fn default() -> Self {
        DEFAULT_SETTINGS
    }
}

impl MovementSettings {
    /// Set the collider size
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the grid density
    pub fn with_pixels_per_unit(mut self, pixels_per_unit: f32) -> Self {
        self.pixels_per_unit = pixels_per_unit;
        self
    }

    /// Set the layers that block the character
    pub fn with_collision_mask(mut self, mask: SolidMask) -> Self {
        self.collision_mask = mask;
        self
    }

    /// Set which directions may slip past lips
    pub fn with_leniency(mut self, leniency: LeniencyConfig) -> Self {
        self.leniency = leniency;
        self
    }

    /// Grid described by `pixels_per_unit`
    pub fn grid(&self) -> Result<PixelGrid, EngineError> {
        PixelGrid::new(self.pixels_per_unit)
    }

    /// Terminal velocity (negative: downward)
    pub fn terminal_velocity(&self) -> f32 {
        -self.max_fall_speed
    }

    /// Check every tunable
    ///
    /// All coefficients must be finite and non-negative; the grid density
    /// must be strictly positive.
    pub fn validate(&self) -> Result<(), EngineError> {
        self.grid()?;

        let coefficients = [
            ("top_speed", self.top_speed),
            ("acceleration", self.acceleration),
            ("deceleration", self.deceleration),
            (
                "past_max_acceleration_multiplier",
                self.past_max_acceleration_multiplier,
            ),
            ("air_control_multiplier", self.air_control_multiplier),
            ("jump_force", self.jump_force),
            ("upwards_gravity", self.upwards_gravity),
            ("downwards_gravity", self.downwards_gravity),
            ("apex_velocity_threshold", self.apex_velocity_threshold),
            ("apex_velocity_multiplier", self.apex_velocity_multiplier),
            ("apex_accel_multiplier", self.apex_accel_multiplier),
            ("apex_gravity_multiplier", self.apex_gravity_multiplier),
            ("max_fall_speed", self.max_fall_speed),
            (
                "past_max_fall_speed_deceleration",
                self.past_max_fall_speed_deceleration,
            ),
            ("coyote_time", self.coyote_time),
            ("jump_buffer", self.jump_buffer),
            ("jump_release_multiplier", self.jump_release_multiplier),
        ];

        match coefficients
            .iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            Some(&(name, value)) => Err(EngineError::InvalidSetting { name, value }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = MovementSettings::default();
        assert_eq!(settings.top_speed, 10.0);
        assert_eq!(settings.jump_force, 20.0);
        assert_eq!(settings.pixels_per_unit, 8.0);
        assert_eq!(settings.collision_mask, SolidMask::default());
        assert_eq!(settings.leniency, LeniencyConfig::default());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_terminal_velocity_points_down() {
        assert_eq!(MovementSettings::default().terminal_velocity(), -10.0);
    }

    #[test]
    fn test_rejects_bad_grid() {
        let settings = MovementSettings::default().with_pixels_per_unit(0.0);
        assert_eq!(
            settings.validate(),
            Err(EngineError::InvalidPixelsPerUnit(0.0))
        );
    }

    #[test]
    fn test_rejects_negative_coefficient() {
        let settings = MovementSettings {
            coyote_time: -0.1,
            ..MovementSettings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(EngineError::InvalidSetting {
                name: "coyote_time",
                value: -0.1
            })
        );
    }

    #[test]
    fn test_rejects_non_finite_coefficient() {
        let settings = MovementSettings {
            downwards_gravity: f32::INFINITY,
            ..MovementSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(EngineError::InvalidSetting {
                name: "downwards_gravity",
                ..
            })
        ));
    }

    #[test]
    fn test_builders() {
        let settings = MovementSettings::default()
            .with_size(0.75, 1.5)
            .with_pixels_per_unit(16.0)
            .with_leniency(LeniencyConfig::NONE);
        assert_eq!(settings.width, 0.75);
        assert_eq!(settings.height, 1.5);
        assert_eq!(settings.grid().unwrap().pixel_size(), 0.0625);
        assert_eq!(settings.leniency, LeniencyConfig::NONE);
    }
}
