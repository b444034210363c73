use super::collision::CollisionLayer;
use rapier2d::prelude::*;

/// Builder for static, axis-aligned box solids
///
/// Solid geometry never moves and never rotates, so only a centre,
/// half extents and a layer are needed.
#[derive(Debug, Clone)]
pub struct SolidBuilder {
    center: Vector<Real>,
    half_extents: Vector<Real>,
    layer: CollisionLayer,
    is_trigger: bool,
}

impl SolidBuilder {
    /// Create a box solid from its half extents
    pub fn box_shape(half_width: Real, half_height: Real) -> Self {
        Self {
            center: Vector::zeros(),
            half_extents: vector![half_width, half_height],
            layer: CollisionLayer::Terrain,
            is_trigger: false,
        }
    }

    /// Create a box solid spanning two corners (in any order)
    pub fn from_corners(x0: Real, y0: Real, x1: Real, y1: Real) -> Self {
        let (min_x, max_x) = (x0.min(x1), x0.max(x1));
        let (min_y, max_y) = (y0.min(y1), y0.max(y1));
        Self::box_shape((max_x - min_x) / 2.0, (max_y - min_y) / 2.0)
            .position((min_x + max_x) / 2.0, (min_y + max_y) / 2.0)
    }

    /// Set the centre of the box
    pub fn position(mut self, x: Real, y: Real) -> Self {
        self.center = vector![x, y];
        self
    }

    /// Set the collision layer
    pub fn layer(mut self, layer: CollisionLayer) -> Self {
        self.layer = layer;
        self
    }

    /// Make this a trigger volume, which overlap probes ignore
    pub fn trigger(mut self, is_trigger: bool) -> Self {
        self.is_trigger = is_trigger;
        self
    }

    /// Build the collider
    pub fn build(self) -> Collider {
        ColliderBuilder::cuboid(self.half_extents.x, self.half_extents.y)
            .translation(self.center)
            .collision_groups(self.layer.to_interaction_groups())
            .sensor(self.is_trigger)
            .build()
    }
}

/// Common solid configurations for level geometry
pub mod presets {
    use super::*;

    /// Ground slab whose top surface sits at `top`
    pub fn ground(left: Real, right: Real, top: Real, depth: Real) -> Collider {
        SolidBuilder::from_corners(left, top - depth, right, top)
            .layer(CollisionLayer::Terrain)
            .build()
    }

    /// Vertical wall occupying `[left, left + thickness]` between `bottom` and `top`
    pub fn wall(left: Real, thickness: Real, bottom: Real, top: Real) -> Collider {
        SolidBuilder::from_corners(left, bottom, left + thickness, top)
            .layer(CollisionLayer::Terrain)
            .build()
    }

    /// Floating platform (centre position, full size)
    pub fn platform(x: Real, y: Real, width: Real, height: Real) -> Collider {
        SolidBuilder::box_shape(width / 2.0, height / 2.0)
            .position(x, y)
            .layer(CollisionLayer::Platform)
            .build()
    }

    /// Square tile whose lower-left corner is `(x, y)`
    pub fn tile(x: Real, y: Real, size: Real) -> Collider {
        SolidBuilder::from_corners(x, y, x + size, y + size)
            .layer(CollisionLayer::Terrain)
            .build()
    }

    /// Hazard volume (spikes, lava)
    pub fn hazard(x: Real, y: Real, width: Real, height: Real) -> Collider {
        SolidBuilder::box_shape(width / 2.0, height / 2.0)
            .position(x, y)
            .layer(CollisionLayer::Hazard)
            .build()
    }
}
