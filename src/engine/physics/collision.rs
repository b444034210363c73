use rapier2d::prelude::*;

/// Collision layers that static geometry can belong to
///
/// A [`SolidMask`] selects which of these layers block an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionLayer {
    /// Ground, walls and ceilings
    Terrain = 0b0000_0001,

    /// Floating platforms
    Platform = 0b0000_0010,

    /// Arena hazards (spikes, lava, etc.)
    Hazard = 0b0000_0100,

    /// Pickups (health, power-ups, etc.)
    Pickup = 0b0000_1000,

    /// Trigger zones - never physically solid
    Trigger = 0b0001_0000,
}

impl CollisionLayer {
    /// Bit for this layer
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Interaction groups for a collider living on this layer
    ///
    /// Static geometry never filters anything itself; the querying side
    /// decides what it collides with.
    pub fn to_interaction_groups(self) -> InteractionGroups {
        InteractionGroups::new(Group::from_bits_truncate(self.bits()), Group::ALL)
    }
}

/// Which collision layers count as solid for a probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SolidMask(u32);

impl SolidMask {
    /// Mask that selects nothing
    pub const NONE: SolidMask = SolidMask(0);

    /// Mask that selects every layer
    pub const ALL: SolidMask = SolidMask(u32::MAX);

    /// Build a mask from raw layer bits
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Build a mask from a list of layers
    pub fn from_layers(layers: &[CollisionLayer]) -> Self {
        Self(layers.iter().fold(0, |bits, layer| bits | layer.bits()))
    }

    /// Add a layer to the mask
    pub fn with(self, layer: CollisionLayer) -> Self {
        Self(self.0 | layer.bits())
    }

    /// Raw layer bits
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Check if a layer is selected
    pub fn contains(self, layer: CollisionLayer) -> bool {
        self.0 & layer.bits() != 0
    }

    /// Interaction groups used by overlap queries filtered by this mask
    pub fn query_groups(self) -> InteractionGroups {
        InteractionGroups::new(Group::ALL, Group::from_bits_truncate(self.0))
    }
}

impl Default for SolidMask {
    /// Terrain and platforms block movement
    fn default() -> Self {
        Self::from_layers(&[CollisionLayer::Terrain, CollisionLayer::Platform])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_layer_bits() {
        // Ensure each layer has a unique bit
        let layers = [
            CollisionLayer::Terrain,
            CollisionLayer::Platform,
            CollisionLayer::Hazard,
            CollisionLayer::Pickup,
            CollisionLayer::Trigger,
        ];

        for (i, layer1) in layers.iter().enumerate() {
            for (j, layer2) in layers.iter().enumerate() {
                if i != j {
                    assert_ne!(layer1.bits(), layer2.bits(), "Layers must have unique bits");
                }
            }
        }
    }

    #[test]
    fn test_default_mask_selects_terrain_and_platforms() {
        let mask = SolidMask::default();
        assert!(mask.contains(CollisionLayer::Terrain));
        assert!(mask.contains(CollisionLayer::Platform));
        assert!(!mask.contains(CollisionLayer::Hazard));
        assert!(!mask.contains(CollisionLayer::Trigger));
    }

    #[test]
    fn test_mask_builders_agree() {
        let built = SolidMask::NONE
            .with(CollisionLayer::Terrain)
            .with(CollisionLayer::Hazard);
        let listed = SolidMask::from_layers(&[CollisionLayer::Terrain, CollisionLayer::Hazard]);
        assert_eq!(built, listed);
        assert_eq!(built.bits(), 0b0000_0101);
    }

    #[test]
    fn test_query_groups_match_selected_layers() {
        let query = SolidMask::from_layers(&[CollisionLayer::Platform]).query_groups();
        let platform = CollisionLayer::Platform.to_interaction_groups();
        let hazard = CollisionLayer::Hazard.to_interaction_groups();

        assert!(query.test(platform), "Platforms should be selected");
        assert!(!query.test(hazard), "Hazards should be filtered out");
    }
}
