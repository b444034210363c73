// Pixel grid: the quantization step shared by every probe and translation

use glam::{IVec2, Vec2};

use crate::error::EngineError;

/// Pixels per world unit used when nothing else is configured
pub const DEFAULT_PIXELS_PER_UNIT: f32 = 8.0;

/// Grid quantization for movement and collision probing.
///
/// One grid unit ("pixel") is `1 / pixels_per_unit` world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelGrid {
    pixels_per_unit: f32,
    pixel_size: f32,
}

impl PixelGrid {
    /// Create a grid, rejecting zero, negative and non-finite densities
    pub fn new(pixels_per_unit: f32) -> Result<Self, EngineError> {
        if !pixels_per_unit.is_finite() || pixels_per_unit <= 0.0 {
            return Err(EngineError::InvalidPixelsPerUnit(pixels_per_unit));
        }

        Ok(Self {
            pixels_per_unit,
            pixel_size: 1.0 / pixels_per_unit,
        })
    }

    /// Number of grid units in one world unit
    pub fn pixels_per_unit(&self) -> f32 {
        self.pixels_per_unit
    }

    /// Size of one grid unit in world units
    pub fn pixel_size(&self) -> f32 {
        self.pixel_size
    }

    /// Convert a whole-unit grid offset to a world displacement
    pub fn to_world(&self, pixels: IVec2) -> Vec2 {
        pixels.as_vec2() * self.pixel_size
    }

    /// Check whether `distance` is a whole number of grid units
    pub fn is_aligned(&self, distance: f32) -> bool {
        let pixels = distance * self.pixels_per_unit;
        (pixels - pixels.round()).abs() < 1e-3
    }
}

impl Default for PixelGrid {
    fn default() -> Self {
        Self {
            pixels_per_unit: DEFAULT_PIXELS_PER_UNIT,
            pixel_size: 1.0 / DEFAULT_PIXELS_PER_UNIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_size() {
        let grid = PixelGrid::new(8.0).unwrap();
        assert_eq!(grid.pixel_size(), 0.125);
        assert_eq!(grid.pixels_per_unit(), 8.0);
    }

    #[test]
    fn test_rejects_invalid_density() {
        assert_eq!(
            PixelGrid::new(0.0),
            Err(EngineError::InvalidPixelsPerUnit(0.0))
        );
        assert!(PixelGrid::new(-4.0).is_err());
        assert!(PixelGrid::new(f32::NAN).is_err());
        assert!(PixelGrid::new(f32::INFINITY).is_err());
    }

    #[test]
    fn test_default_matches_constant() {
        let grid = PixelGrid::default();
        assert_eq!(grid, PixelGrid::new(DEFAULT_PIXELS_PER_UNIT).unwrap());
    }

    #[test]
    fn test_to_world() {
        let grid = PixelGrid::new(8.0).unwrap();
        assert_eq!(grid.to_world(IVec2::new(4, -2)), Vec2::new(0.5, -0.25));
        assert_eq!(grid.to_world(IVec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn test_alignment() {
        let grid = PixelGrid::new(8.0).unwrap();
        assert!(grid.is_aligned(0.375));
        assert!(grid.is_aligned(-2.0));
        assert!(!grid.is_aligned(0.3));
    }
}
