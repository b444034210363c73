// Per-player input state: turns held buttons into per-tick edges

use super::action::Action;
use super::frame::InputFrame;
use std::collections::HashSet;

/// Input state for a single player
///
/// The outside world reports which actions are held; edges are derived by
/// diffing against the previous tick, so a press and release inside the same
/// tick still produce both edges.
#[derive(Debug, Default)]
pub struct PlayerInput {
    /// Actions that are currently pressed
    pressed: HashSet<Action>,

    /// Actions pressed since the last tick
    just_pressed: HashSet<Action>,

    /// Actions released since the last tick
    just_released: HashSet<Action>,

    /// Actions that were pressed at the end of the previous tick
    previous_pressed: HashSet<Action>,
}

impl PlayerInput {
    /// Create a new player input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was pressed since the last tick
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was released since the last tick
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Check if an action has been held since before this tick
    pub fn is_held(&self, action: Action) -> bool {
        self.pressed.contains(&action) && self.previous_pressed.contains(&action)
    }

    /// Register an action press
    pub fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    /// Set an action's held state, producing an edge if it changed
    pub fn set_held(&mut self, action: Action, held: bool) {
        if held {
            self.press(action);
        } else {
            self.release(action);
        }
    }

    /// Snapshot for the current tick
    pub fn frame(&self) -> InputFrame {
        let (horizontal, vertical) = self.get_direction();
        InputFrame {
            horizontal,
            vertical,
            jump_pressed: self.just_pressed(Action::Jump),
            jump_released: self.just_released(Action::Jump),
        }
    }

    /// Finish the tick: clear edges and remember what is held
    pub fn update(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
        self.previous_pressed = self.pressed.clone();
    }

    /// Reset all input state
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
        self.previous_pressed.clear();
    }

    /// Directional input as (horizontal, vertical), each in `[-1, 1]`
    pub fn get_direction(&self) -> (f32, f32) {
        let mut horizontal = 0.0;
        let mut vertical = 0.0;

        if self.is_pressed(Action::MoveLeft) {
            horizontal -= 1.0;
        }
        if self.is_pressed(Action::MoveRight) {
            horizontal += 1.0;
        }
        if self.is_pressed(Action::MoveDown) {
            vertical -= 1.0;
        }
        if self.is_pressed(Action::MoveUp) {
            vertical += 1.0;
        }

        (horizontal, vertical)
    }
}
