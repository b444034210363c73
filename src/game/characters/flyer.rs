// Free-flying actor: moves straight from input on both axes, no gravity

use glam::Vec2;

use crate::engine::physics::{
    ActorBody, AxisMover, GridProbe, LeniencyConfig, MoveOptions, MoveOutcome, OverlapQuery,
    PixelGrid, SolidMask,
};
use crate::error::EngineError;

/// Default flying speed in world units per second
pub const DEFAULT_FLY_SPEED: f32 = 10.0;

/// Per-axis results of one [`FreeFlyer::update`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightReport<H> {
    pub horizontal: MoveOutcome<H>,
    pub vertical: MoveOutcome<H>,
}

/// Debug actor that flies wherever the input points
///
/// Useful for poking at level geometry: with collision on it slides along
/// solids and slips past lips like a character does; in no-clip mode it
/// passes through everything.
#[derive(Debug, Clone)]
pub struct FreeFlyer {
    body: ActorBody,
    mover: AxisMover,
    speed: f32,
    leniency: LeniencyConfig,
    no_clip: bool,
}

impl FreeFlyer {
    /// Create a flyer of `size` centred on `position`
    pub fn new(grid: PixelGrid, position: Vec2, size: Vec2) -> Result<Self, EngineError> {
        Ok(Self {
            body: ActorBody::new(grid, position, size)?,
            mover: AxisMover::new(GridProbe::default()),
            speed: DEFAULT_FLY_SPEED,
            leniency: LeniencyConfig::ALL,
            no_clip: false,
        })
    }

    /// Set the flying speed
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Set the layers that block the flyer
    pub fn with_collision_mask(mut self, mask: SolidMask) -> Self {
        self.mover = AxisMover::new(GridProbe::new(mask));
        self
    }

    /// Set which directions may slip past lips
    pub fn with_leniency(mut self, leniency: LeniencyConfig) -> Self {
        self.leniency = leniency;
        self
    }

    /// Move by `direction * speed * dt`, horizontal axis first
    ///
    /// `direction` components are clamped to `[-1, 1]`.
    pub fn update<Q: OverlapQuery>(
        &mut self,
        solids: &Q,
        direction: Vec2,
        dt: f32,
    ) -> FlightReport<Q::Hit> {
        let options = if self.no_clip {
            MoveOptions::no_clip()
        } else {
            MoveOptions::with_leniency(self.leniency)
        };
        let delta = direction.clamp(Vec2::NEG_ONE, Vec2::ONE) * self.speed * dt;

        let horizontal = self.mover.move_h(solids, &mut self.body, delta.x, options);
        let vertical = self.mover.move_v(solids, &mut self.body, delta.y, options);

        FlightReport {
            horizontal,
            vertical,
        }
    }

    /// Toggle no-clip, returns the new state
    pub fn toggle_no_clip(&mut self) -> bool {
        self.no_clip = !self.no_clip;
        log::info!("No-clip {}", if self.no_clip { "on" } else { "off" });
        self.no_clip
    }

    /// Check if the flyer passes through solids
    pub fn is_no_clip(&self) -> bool {
        self.no_clip
    }

    /// Get the flying speed
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Get the current centre position
    pub fn position(&self) -> Vec2 {
        self.body.center()
    }

    /// Get the collision body
    pub fn body(&self) -> &ActorBody {
        &self.body
    }

    /// Move to `position`, dropping any sub-pixel remainder
    pub fn teleport(&mut self, position: Vec2) {
        self.body.teleport(position);
        self.mover.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::{presets, SolidWorld};
    use approx::assert_abs_diff_eq;

    fn flyer(x: f32, y: f32) -> FreeFlyer {
        FreeFlyer::new(PixelGrid::default(), Vec2::new(x, y), Vec2::ONE).unwrap()
    }

    #[test]
    fn test_flies_diagonally() {
        let world = SolidWorld::new();
        let mut flyer = flyer(0.0, 0.0);

        let report = flyer.update(&world, Vec2::new(1.0, -1.0), 0.1);
        assert_eq!(report.horizontal, MoveOutcome::Completed);
        assert_eq!(report.vertical, MoveOutcome::Completed);
        assert_abs_diff_eq!(flyer.position().x, 1.0);
        assert_abs_diff_eq!(flyer.position().y, -1.0);
    }

    #[test]
    fn test_direction_is_clamped() {
        let world = SolidWorld::new();
        let mut flyer = flyer(0.0, 0.0).with_speed(5.0);

        flyer.update(&world, Vec2::new(4.0, 0.0), 0.1);
        assert_abs_diff_eq!(flyer.position().x, 0.5);
    }

    #[test]
    fn test_stopped_by_wall() {
        let mut world = SolidWorld::new();
        world.add_solid(presets::wall(0.5, 1.0, -10.0, 10.0));
        let mut flyer = flyer(0.0, 0.0);

        let report = flyer.update(&world, Vec2::X, 0.1);
        assert!(report.horizontal.is_blocked());
        assert_abs_diff_eq!(flyer.position().x, 0.0);
    }

    #[test]
    fn test_no_clip_passes_through() {
        let mut world = SolidWorld::new();
        world.add_solid(presets::wall(0.5, 1.0, -10.0, 10.0));
        let mut flyer = flyer(0.0, 0.0);

        assert!(flyer.toggle_no_clip());
        for _ in 0..3 {
            let report = flyer.update(&world, Vec2::X, 0.1);
            assert_eq!(report.horizontal, MoveOutcome::Completed);
        }
        assert_abs_diff_eq!(flyer.position().x, 3.0);

        assert!(!flyer.toggle_no_clip());
        assert!(!flyer.is_no_clip());
    }

    #[test]
    fn test_slips_past_corner() {
        let mut world = SolidWorld::new();
        // Lip one grid unit tall in front of the flyer's feet
        world.add_solid(presets::ground(0.5, 1.5, -0.375, 1.0));
        let mut flyer = flyer(0.0, 0.0);

        let report = flyer.update(&world, Vec2::X, 0.02);
        assert_eq!(
            report.horizontal,
            MoveOutcome::Slipped {
                offset: glam::IVec2::new(1, 1)
            }
        );
        assert_abs_diff_eq!(flyer.position().y, 0.125);
    }

    #[test]
    fn test_teleport_clears_remainder() {
        let world = SolidWorld::new();
        let mut flyer = flyer(0.0, 0.0);
        flyer.update(&world, Vec2::X, 0.01);

        flyer.teleport(Vec2::new(2.0, 2.0));
        flyer.update(&world, Vec2::X, 0.01);
        assert_eq!(flyer.position(), Vec2::new(2.0, 2.0));
    }
}
