// Platforming character: input, timing windows and gravity on top of the grid mover

use glam::Vec2;
use log::debug;

use crate::core::math::move_towards;
use crate::engine::input::InputFrame;
use crate::engine::physics::{
    ActorBody, AxisMover, GridProbe, MoveOptions, MoveOutcome, OverlapQuery,
};
use crate::error::EngineError;

use super::settings::MovementSettings;
use super::state::{CharacterState, CharacterStateMachine, JumpWindows};

/// What happened during one [`PlatformerCharacter::update`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport<H> {
    /// A jump was triggered this tick
    pub jumped: bool,
    /// The ground probe found ground after the character was airborne,
    /// including ticks where a buffered jump fires straight away
    pub landed: bool,
    /// Horizontal move result, `None` when horizontal velocity was zero
    pub horizontal: Option<MoveOutcome<H>>,
    /// Vertical move result, `None` when vertical velocity was zero
    pub vertical: Option<MoveOutcome<H>>,
}

/// A character driven by horizontal input and a jump button
///
/// Velocity is in world units per second with +y up. The character only
/// moves through its [`AxisMover`], so its position is always a whole number
/// of grid units away from where it spawned.
#[derive(Debug, Clone)]
pub struct PlatformerCharacter {
    settings: MovementSettings,
    body: ActorBody,
    mover: AxisMover,

    velocity: Vec2,
    windows: JumpWindows,
    /// Result of the most recent ground probe
    grounded: bool,
    /// Set by a jump, cleared on the ground
    jumping: bool,
    /// The early-release cut has been applied for the current jump
    has_released_jump: bool,
    /// Direction character is facing (1 = right, -1 = left)
    facing_direction: f32,

    state_machine: CharacterStateMachine,
}

impl PlatformerCharacter {
    /// Create a character centred on `spawn`
    pub fn new(settings: MovementSettings, spawn: Vec2) -> Result<Self, EngineError> {
        settings.validate()?;

        let grid = settings.grid()?;
        let body = ActorBody::new(grid, spawn, Vec2::new(settings.width, settings.height))?;
        let mover = AxisMover::new(GridProbe::new(settings.collision_mask));

        debug!(
            "Spawned character at {} ({}x{}, {} px/unit)",
            spawn, settings.width, settings.height, settings.pixels_per_unit
        );

        Ok(Self {
            settings,
            body,
            mover,
            velocity: Vec2::ZERO,
            windows: JumpWindows::closed(),
            grounded: false,
            jumping: false,
            has_released_jump: false,
            facing_direction: 1.0,
            state_machine: CharacterStateMachine::new(CharacterState::Descending),
        })
    }

    /// Advance the character by one fixed tick of `dt` seconds
    pub fn update<Q: OverlapQuery>(
        &mut self,
        solids: &Q,
        input: &InputFrame,
        dt: f32,
    ) -> TickReport<Q::Hit> {
        let s = self.settings;
        let horizontal_input = input.horizontal_axis();

        let mut max_speed = s.top_speed;
        let mut acceleration = s.acceleration;
        let mut gravity = s.upwards_gravity;

        // No input, or input against the current motion, brakes
        if horizontal_input == 0.0 || horizontal_input * self.velocity.x < 0.0 {
            acceleration = s.deceleration;
        }

        self.windows.advance(dt);

        // The ground is only probed when not moving up
        let was_grounded = self.grounded;
        if self.velocity.y <= 0.0 {
            self.grounded = self.mover.probe().is_grounded(solids, &self.body);
            gravity = s.downwards_gravity;
        }
        let landed = self.grounded && !was_grounded;
        if landed {
            debug!("Landed at {}", self.body.center());
        }

        if input.jump_pressed {
            self.windows.mark_jump_input();
        }

        if self.jumping && !self.has_released_jump && input.jump_released && self.velocity.y > 0.0
        {
            self.velocity.y *= s.jump_release_multiplier;
            self.has_released_jump = true;
        }

        if self.jumping && self.velocity.y.abs() <= s.apex_velocity_threshold {
            max_speed *= s.apex_velocity_multiplier;
            acceleration *= s.apex_accel_multiplier;
            gravity *= s.apex_gravity_multiplier;
        }

        if self.grounded {
            self.windows.mark_grounded();
            self.jumping = false;
        } else {
            acceleration *= s.air_control_multiplier;

            let terminal = s.terminal_velocity();
            if self.velocity.y > terminal {
                self.velocity.y = (self.velocity.y - gravity * dt).max(terminal);
            } else {
                self.velocity.y = move_towards(
                    self.velocity.y,
                    terminal,
                    s.past_max_fall_speed_deceleration * dt,
                );
            }
        }

        let jumped = self.windows.can_jump(s.coyote_time, s.jump_buffer);
        if jumped {
            self.jump();
        }

        // Speed from an outside source decays gently instead of snapping back
        if self.velocity.x.abs() > max_speed {
            acceleration *= s.past_max_acceleration_multiplier;
        }
        self.velocity.x = move_towards(
            self.velocity.x,
            horizontal_input * max_speed,
            acceleration * dt,
        );

        if horizontal_input > 0.0 {
            self.facing_direction = 1.0;
        } else if horizontal_input < 0.0 {
            self.facing_direction = -1.0;
        }

        let options = MoveOptions::with_leniency(s.leniency);

        let horizontal = (self.velocity.x != 0.0).then(|| {
            let outcome =
                self.mover
                    .move_h(solids, &mut self.body, self.velocity.x * dt, options);
            if outcome.is_blocked() {
                self.velocity.x = 0.0;
            }
            outcome
        });

        let vertical = (self.velocity.y != 0.0).then(|| {
            let outcome =
                self.mover
                    .move_v(solids, &mut self.body, self.velocity.y * dt, options);
            if outcome.is_blocked() {
                self.velocity.y = 0.0;
            }
            outcome
        });

        self.state_machine.update(dt, self.state());

        TickReport {
            jumped,
            landed,
            horizontal,
            vertical,
        }
    }

    fn jump(&mut self) {
        self.velocity.y = self.settings.jump_force;
        self.jumping = true;
        self.grounded = false;
        self.has_released_jump = false;
        self.windows.consume();

        debug!("Jump from {}", self.body.center());
    }

    /// Move to `position` and come to rest
    ///
    /// Clears velocity, sub-pixel remainders and both jump windows; the grid
    /// is re-anchored at the new position.
    pub fn teleport(&mut self, position: Vec2) {
        self.body.teleport(position);
        self.mover.reset();
        self.velocity = Vec2::ZERO;
        self.windows = JumpWindows::closed();
        self.grounded = false;
        self.jumping = false;
        self.has_released_jump = false;
    }

    /// Get the movement settings
    pub fn settings(&self) -> &MovementSettings {
        &self.settings
    }

    /// Get the collision body
    pub fn body(&self) -> &ActorBody {
        &self.body
    }

    /// Get the current centre position
    pub fn position(&self) -> Vec2 {
        self.body.center()
    }

    /// Get the current velocity
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Override the velocity (launch pads, knockback)
    ///
    /// Horizontal speed above the top speed bleeds off at the reduced
    /// past-max acceleration; vertical speed is subject to gravity as usual.
    /// An upward velocity lifts the character off the ground, like a jump
    /// that does not count as one (no release cut, no `jumping` flag).
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
        if velocity.y > 0.0 {
            self.grounded = false;
        }
    }

    /// Check if the last ground probe found solid ground
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Check if the character is in a jump that has not landed yet
    pub fn is_jumping(&self) -> bool {
        self.jumping
    }

    /// Check if the early-release cut was used for this jump
    pub fn has_released_jump(&self) -> bool {
        self.has_released_jump
    }

    /// Get the coyote-time and jump-buffer clocks
    pub fn jump_windows(&self) -> &JumpWindows {
        &self.windows
    }

    /// Get the direction the character faces (1 = right, -1 = left)
    pub fn facing_direction(&self) -> f32 {
        self.facing_direction
    }

    /// Get the coarse movement state
    pub fn state(&self) -> CharacterState {
        CharacterState::from_motion(self.grounded, self.velocity.y)
    }

    /// Get the state tracker (previous state, time in state)
    pub fn state_machine(&self) -> &CharacterStateMachine {
        &self.state_machine
    }
}
