// Grid-quantized overlap probing

use glam::{IVec2, Vec2};

use super::actor::ActorBody;
use super::collision::SolidMask;

/// Geometry backend answering "is this box occupied?"
///
/// The hit value is opaque to the movement code; it is only handed back to
/// the caller in [`MoveOutcome::Blocked`](super::MoveOutcome::Blocked).
pub trait OverlapQuery {
    /// Handle identifying what was hit
    type Hit: Copy + std::fmt::Debug;

    /// First solid selected by `mask` that overlaps the box, if any
    fn overlap(&self, center: Vec2, half_extents: Vec2, mask: SolidMask) -> Option<Self::Hit>;
}

impl<Q: OverlapQuery + ?Sized> OverlapQuery for &Q {
    type Hit = Q::Hit;

    fn overlap(&self, center: Vec2, half_extents: Vec2, mask: SolidMask) -> Option<Self::Hit> {
        (**self).overlap(center, half_extents, mask)
    }
}

/// Probe that tests an actor's box against solid geometry
///
/// The probed box is the actor's collider shrunk by one grid unit in each
/// dimension, so geometry that merely shares an edge with the actor is not
/// reported as an obstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridProbe {
    mask: SolidMask,
}

impl GridProbe {
    /// Create a probe filtered by `mask`
    pub fn new(mask: SolidMask) -> Self {
        Self { mask }
    }

    /// Mask selecting the solid layers
    pub fn mask(&self) -> SolidMask {
        self.mask
    }

    /// Half extents of the shrunk probe box for `body`
    pub fn probe_extents(&self, body: &ActorBody) -> Vec2 {
        body.half_extents() - Vec2::splat(body.grid().pixel_size() / 2.0)
    }

    /// Test the body's box centred at an absolute point
    pub fn occupied_at<Q: OverlapQuery>(
        &self,
        solids: &Q,
        body: &ActorBody,
        point: Vec2,
    ) -> Option<Q::Hit> {
        solids.overlap(point, self.probe_extents(body), self.mask)
    }

    /// Test the body's box displaced from its current position by `units`
    /// grid units along `direction`
    pub fn occupied_offset<Q: OverlapQuery>(
        &self,
        solids: &Q,
        body: &ActorBody,
        direction: IVec2,
        units: i32,
    ) -> Option<Q::Hit> {
        let offset = (direction * units).as_vec2() * body.grid().pixel_size();
        self.occupied_at(solids, body, body.center() + offset)
    }

    /// Check for solid ground one grid unit below the body
    pub fn is_grounded<Q: OverlapQuery>(&self, solids: &Q, body: &ActorBody) -> bool {
        self.occupied_offset(solids, body, IVec2::NEG_Y, 1).is_some()
    }
}

impl Default for GridProbe {
    fn default() -> Self {
        Self::new(SolidMask::default())
    }
}
