use glam::Vec2;
use log::debug;
use rapier2d::prelude::*;

use super::collision::SolidMask;
use super::probe::OverlapQuery;

/// Handle to identify solid colliders
pub type ColliderHandle = rapier2d::prelude::ColliderHandle;

/// Static solid geometry answering box-overlap queries
///
/// Nothing here is simulated: colliders are parentless and never move, and
/// the query pipeline is rebuilt whenever the solid set changes.
pub struct SolidWorld {
    /// Collider set holding every solid
    collider_set: ColliderSet,

    /// Rigid body set (always empty, required by the query API)
    rigid_body_set: RigidBodySet,

    /// Island manager (required for collider removal)
    island_manager: IslandManager,

    /// Query pipeline for overlap tests
    query_pipeline: QueryPipeline,
}

impl SolidWorld {
    /// Create an empty world
    pub fn new() -> Self {
        Self {
            collider_set: ColliderSet::new(),
            rigid_body_set: RigidBodySet::new(),
            island_manager: IslandManager::new(),
            query_pipeline: QueryPipeline::new(),
        }
    }

    /// Add a solid collider to the world
    pub fn add_solid(&mut self, collider: Collider) -> ColliderHandle {
        let handle = self.collider_set.insert(collider);
        self.query_pipeline.update(&self.rigid_body_set, &self.collider_set);
        debug!("Added solid {:?} ({} total)", handle, self.collider_set.len());
        handle
    }

    /// Add several solids at once, rebuilding the query pipeline only once
    pub fn add_solids<I>(&mut self, colliders: I) -> Vec<ColliderHandle>
    where
        I: IntoIterator<Item = Collider>,
    {
        let handles: Vec<_> = colliders
            .into_iter()
            .map(|collider| self.collider_set.insert(collider))
            .collect();
        self.query_pipeline.update(&self.rigid_body_set, &self.collider_set);
        debug!("Added {} solids ({} total)", handles.len(), self.collider_set.len());
        handles
    }

    /// Remove a solid from the world
    pub fn remove_solid(&mut self, handle: ColliderHandle) -> Option<Collider> {
        let removed = self.collider_set.remove(
            handle,
            &mut self.island_manager,
            &mut self.rigid_body_set,
            false, // no bodies to wake
        );
        if removed.is_some() {
            self.query_pipeline.update(&self.rigid_body_set, &self.collider_set);
        }
        removed
    }

    /// Get a reference to a solid
    pub fn get_solid(&self, handle: ColliderHandle) -> Option<&Collider> {
        self.collider_set.get(handle)
    }

    /// Number of solids in the world
    pub fn solid_count(&self) -> usize {
        self.collider_set.len()
    }

    /// Find the first solid overlapping an axis-aligned box
    pub fn overlap_box(
        &self,
        center: Vec2,
        half_extents: Vec2,
        mask: SolidMask,
    ) -> Option<ColliderHandle> {
        let shape = Cuboid::new(vector![half_extents.x, half_extents.y]);
        let shape_pos = Isometry::translation(center.x, center.y);
        let filter = QueryFilter::default()
            .exclude_sensors()
            .groups(mask.query_groups());

        self.query_pipeline.intersection_with_shape(
            &self.rigid_body_set,
            &self.collider_set,
            &shape_pos,
            &shape,
            filter,
        )
    }
}

impl Default for SolidWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlapQuery for SolidWorld {
    type Hit = ColliderHandle;

    fn overlap(&self, center: Vec2, half_extents: Vec2, mask: SolidMask) -> Option<Self::Hit> {
        self.overlap_box(center, half_extents, mask)
    }
}
