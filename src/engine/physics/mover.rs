// Axis-separated, sub-pixel accumulating mover

use glam::{IVec2, Vec2};
use log::{debug, trace, warn};

use super::actor::{ActorBody, Axis};
use super::probe::{GridProbe, OverlapQuery};
use crate::core::math::step_sign;

/// How far (in grid units) an actor may be nudged sideways to slip past a lip
pub const MOVE_LENIENCY: i32 = 2;

/// Which movement directions may slip past one-pixel lips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeniencyConfig {
    /// Horizontal movement (either direction)
    pub horizontal: bool,
    /// Upward movement - lets a jump clip past a ledge corner
    pub upward: bool,
    /// Downward movement
    pub downward: bool,
}

impl LeniencyConfig {
    /// Leniency disabled in every direction
    pub const NONE: LeniencyConfig = LeniencyConfig {
        horizontal: false,
        upward: false,
        downward: false,
    };

    /// Leniency enabled in every direction
    pub const ALL: LeniencyConfig = LeniencyConfig {
        horizontal: true,
        upward: true,
        downward: true,
    };

    /// Check if movement along `axis` in `direction` (-1 or +1) may slip
    pub fn allows(&self, axis: Axis, direction: i32) -> bool {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical if direction > 0 => self.upward,
            Axis::Vertical => self.downward,
        }
    }
}

impl Default for LeniencyConfig {
    /// Downward leniency is off to avoid snapping onto floors
    fn default() -> Self {
        Self {
            horizontal: true,
            upward: true,
            downward: false,
        }
    }
}

/// Per-call movement options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOptions {
    /// Probe for solids before every step
    pub collide_solids: bool,
    /// Lip leniency applied when a step is obstructed
    pub leniency: LeniencyConfig,
}

impl MoveOptions {
    /// Collide with solids using the given leniency
    pub fn with_leniency(leniency: LeniencyConfig) -> Self {
        Self {
            collide_solids: true,
            leniency,
        }
    }

    /// Move through solids without probing
    pub fn no_clip() -> Self {
        Self {
            collide_solids: false,
            leniency: LeniencyConfig::NONE,
        }
    }
}

impl Default for MoveOptions {
    fn default() -> Self {
        Self::with_leniency(LeniencyConfig::default())
    }
}

/// Result of a single-axis move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome<H> {
    /// Every whole grid unit requested was travelled
    Completed,
    /// A step was obstructed but the actor slipped past it; the actor was
    /// translated by `offset` and the rest of the request was dropped
    Slipped { offset: IVec2 },
    /// A step was obstructed by `H`; the rest of the request was dropped
    Blocked(H),
}

impl<H> MoveOutcome<H> {
    /// Check if the move was stopped by a solid
    pub fn is_blocked(&self) -> bool {
        matches!(self, MoveOutcome::Blocked(_))
    }

    /// What stopped the move, if anything
    pub fn hit(&self) -> Option<&H> {
        match self {
            MoveOutcome::Blocked(hit) => Some(hit),
            _ => None,
        }
    }
}

/// Moves an actor one grid unit at a time, one axis per call
///
/// Requested distance that does not add up to a whole grid unit is kept in a
/// per-axis remainder and carried into the next call.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisMover {
    probe: GridProbe,
    remainder: Vec2,
}

impl AxisMover {
    /// Create a mover probing with `probe`
    pub fn new(probe: GridProbe) -> Self {
        Self {
            probe,
            remainder: Vec2::ZERO,
        }
    }

    /// Probe used before each step
    pub fn probe(&self) -> &GridProbe {
        &self.probe
    }

    /// Sub-pixel distance waiting to be applied along `axis`
    pub fn remainder(&self, axis: Axis) -> f32 {
        axis.component(self.remainder)
    }

    /// Drop any pending sub-pixel distance on both axes
    pub fn reset(&mut self) {
        self.remainder = Vec2::ZERO;
    }

    /// Move horizontally by `amount` world units
    pub fn move_h<Q: OverlapQuery>(
        &mut self,
        solids: &Q,
        body: &mut ActorBody,
        amount: f32,
        options: MoveOptions,
    ) -> MoveOutcome<Q::Hit> {
        self.move_axis(solids, body, Axis::Horizontal, amount, options)
    }

    /// Move vertically by `amount` world units
    pub fn move_v<Q: OverlapQuery>(
        &mut self,
        solids: &Q,
        body: &mut ActorBody,
        amount: f32,
        options: MoveOptions,
    ) -> MoveOutcome<Q::Hit> {
        self.move_axis(solids, body, Axis::Vertical, amount, options)
    }

    /// Move along `axis` by `amount` world units
    ///
    /// Non-finite amounts are ignored. The step direction is the sign of
    /// `amount` for the whole call. When a step is obstructed the remainder
    /// is cleared and the move ends, either slipping past the obstruction
    /// (if leniency allows it) or reporting the hit.
    pub fn move_axis<Q: OverlapQuery>(
        &mut self,
        solids: &Q,
        body: &mut ActorBody,
        axis: Axis,
        amount: f32,
        options: MoveOptions,
    ) -> MoveOutcome<Q::Hit> {
        // Infinite or NaN amounts never drain the remainder
        if !amount.is_finite() {
            warn!("Ignoring non-finite {:?} move of {}", axis, amount);
            return MoveOutcome::Completed;
        }

        let probe = self.probe;
        let pixel = body.grid().pixel_size();
        let direction = step_sign(amount);
        let step = axis.unit() * direction;

        let remainder = axis.component_mut(&mut self.remainder);
        *remainder += amount;

        while remainder.abs() >= pixel {
            if options.collide_solids {
                if let Some(hit) = probe.occupied_offset(solids, body, step, 1) {
                    *remainder = 0.0;

                    if options.leniency.allows(axis, direction) {
                        if let Some(offset) = slip_offset(&probe, solids, body, step, axis) {
                            body.translate(offset);
                            debug!("{:?} move slipped past {:?} by {}", axis, hit, offset);
                            return MoveOutcome::Slipped { offset };
                        }
                    }

                    debug!("{:?} move blocked by {:?} at {}", axis, hit, body.center());
                    return MoveOutcome::Blocked(hit);
                }
            }

            *remainder -= direction as f32 * pixel;
            body.translate(step);
            trace!("{:?} step to {}", axis, body.center());
        }

        MoveOutcome::Completed
    }
}

/// Search sideways from an obstructed step for a free cell
///
/// Offsets are tried nearest first, alternating sides: -1, +1, -2, +2, ...
/// up to [`MOVE_LENIENCY`]. The returned offset includes the step itself, so
/// the actor lands exactly on the cell that was probed free.
fn slip_offset<Q: OverlapQuery>(
    probe: &GridProbe,
    solids: &Q,
    body: &ActorBody,
    step: IVec2,
    axis: Axis,
) -> Option<IVec2> {
    let side = axis.perpendicular().unit();

    (1..=MOVE_LENIENCY)
        .flat_map(|distance| [-distance, distance])
        .map(|shift| step + side * shift)
        .find(|&offset| probe.occupied_offset(solids, body, offset, 1).is_none())
}
