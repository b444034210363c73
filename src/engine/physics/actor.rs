// Actor bodies: axis-aligned boxes that move in whole grid units

use glam::{IVec2, Vec2};

use super::grid::PixelGrid;
use crate::error::EngineError;

/// Movement axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Unit grid step in the positive direction of this axis
    pub fn unit(self) -> IVec2 {
        match self {
            Axis::Horizontal => IVec2::X,
            Axis::Vertical => IVec2::Y,
        }
    }

    /// The other axis
    pub fn perpendicular(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Component of `v` along this axis
    pub fn component(self, v: Vec2) -> f32 {
        match self {
            Axis::Horizontal => v.x,
            Axis::Vertical => v.y,
        }
    }

    /// Mutable component of `v` along this axis
    pub fn component_mut(self, v: &mut Vec2) -> &mut f32 {
        match self {
            Axis::Horizontal => &mut v.x,
            Axis::Vertical => &mut v.y,
        }
    }
}

/// Box collider and transform of a kinematic actor
///
/// The position is stored as an origin plus a whole number of grid units,
/// so the actor can never drift off the grid relative to where it spawned.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorBody {
    grid: PixelGrid,
    origin: Vec2,
    offset: IVec2,
    half_extents: Vec2,
}

impl ActorBody {
    /// Create a body centred on `position` with a full `size`
    ///
    /// Both sides must be larger than one grid unit, since probes shrink the
    /// box by one unit.
    pub fn new(grid: PixelGrid, position: Vec2, size: Vec2) -> Result<Self, EngineError> {
        let pixel = grid.pixel_size();
        if !(size.x.is_finite() && size.y.is_finite()) || size.x <= pixel || size.y <= pixel {
            return Err(EngineError::InvalidColliderSize {
                width: size.x,
                height: size.y,
            });
        }

        Ok(Self {
            grid,
            origin: position,
            offset: IVec2::ZERO,
            half_extents: size / 2.0,
        })
    }

    /// Grid this body moves on
    pub fn grid(&self) -> PixelGrid {
        self.grid
    }

    /// Current centre in world units
    pub fn center(&self) -> Vec2 {
        self.origin + self.grid.to_world(self.offset)
    }

    /// Half extents of the collider
    pub fn half_extents(&self) -> Vec2 {
        self.half_extents
    }

    /// Full size of the collider
    pub fn size(&self) -> Vec2 {
        self.half_extents * 2.0
    }

    /// Grid units travelled since spawn or the last teleport
    pub fn pixel_offset(&self) -> IVec2 {
        self.offset
    }

    /// Bottom edge of the collider
    pub fn bottom(&self) -> f32 {
        self.center().y - self.half_extents.y
    }

    /// Translate by a whole number of grid units
    pub fn translate(&mut self, pixels: IVec2) {
        self.offset += pixels;
    }

    /// Place the body at a new position, making it the new origin
    pub fn teleport(&mut self, position: Vec2) {
        self.origin = position;
        self.offset = IVec2::ZERO;
    }
}
