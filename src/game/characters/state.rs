// Character state: coarse movement state plus the jump timing windows

/// Coarse movement state of a platforming character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharacterState {
    /// Standing on solid ground
    #[default]
    Grounded,
    /// In the air, moving upward
    Ascending,
    /// In the air, moving downward or hanging still
    Descending,
}

impl CharacterState {
    /// Derive the state from the grounded flag and vertical velocity
    pub fn from_motion(grounded: bool, velocity_y: f32) -> Self {
        if grounded {
            Self::Grounded
        } else if velocity_y > 0.0 {
            Self::Ascending
        } else {
            Self::Descending
        }
    }

    /// Check if the character is on the ground
    pub fn is_grounded(&self) -> bool {
        matches!(self, Self::Grounded)
    }

    /// Check if the character is in the air
    pub fn is_airborne(&self) -> bool {
        !self.is_grounded()
    }

    /// Short label for debug output and animation selection
    pub fn name(&self) -> &'static str {
        match self {
            Self::Grounded => "grounded",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// Coyote-time and jump-buffer clocks
///
/// Both clocks count up from the event that opened their window. A closed
/// window is `f32::INFINITY`, which stays infinite however much time is
/// added to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpWindows {
    time_since_grounded: f32,
    time_since_jump_input: f32,
}

impl JumpWindows {
    /// Both windows closed
    pub fn closed() -> Self {
        Self {
            time_since_grounded: f32::INFINITY,
            time_since_jump_input: f32::INFINITY,
        }
    }

    /// Seconds since the character last stood on the ground
    pub fn time_since_grounded(&self) -> f32 {
        self.time_since_grounded
    }

    /// Seconds since jump was last pressed
    pub fn time_since_jump_input(&self) -> f32 {
        self.time_since_jump_input
    }

    /// Advance both clocks
    pub fn advance(&mut self, dt: f32) {
        self.time_since_grounded += dt;
        self.time_since_jump_input += dt;
    }

    /// Standing on the ground: open the coyote window
    pub fn mark_grounded(&mut self) {
        self.time_since_grounded = 0.0;
    }

    /// Jump pressed: open the buffer window
    pub fn mark_jump_input(&mut self) {
        self.time_since_jump_input = 0.0;
    }

    /// Check if both windows are open at once
    pub fn can_jump(&self, coyote_time: f32, jump_buffer: f32) -> bool {
        self.time_since_grounded < coyote_time && self.time_since_jump_input < jump_buffer
    }

    /// A jump happened: close both windows so one press jumps once
    pub fn consume(&mut self) {
        *self = Self::closed();
    }
}

impl Default for JumpWindows {
    fn default() -> Self {
        Self::closed()
    }
}

/// Tracks state changes over time
#[derive(Debug, Clone, Default)]
pub struct CharacterStateMachine {
    current_state: CharacterState,
    previous_state: CharacterState,
    state_time: f32,
}

impl CharacterStateMachine {
    pub fn new(initial: CharacterState) -> Self {
        Self {
            current_state: initial,
            previous_state: initial,
            state_time: 0.0,
        }
    }

    /// Get the current state
    pub fn state(&self) -> CharacterState {
        self.current_state
    }

    /// Get the previous state
    pub fn previous_state(&self) -> CharacterState {
        self.previous_state
    }

    /// Get time spent in current state
    pub fn state_time(&self) -> f32 {
        self.state_time
    }

    /// Check if state just changed this tick
    pub fn state_just_changed(&self) -> bool {
        self.state_time == 0.0
    }

    /// Transition to a new state, returns whether it changed
    pub fn transition(&mut self, new_state: CharacterState) -> bool {
        if self.current_state == new_state {
            return false;
        }
        self.previous_state = self.current_state;
        self.current_state = new_state;
        self.state_time = 0.0;
        true
    }

    /// Advance time and move to `observed`; returns whether it changed
    pub fn update(&mut self, dt: f32, observed: CharacterState) -> bool {
        self.state_time += dt;
        self.transition(observed)
    }

    /// Check if the last change was a landing
    pub fn just_landed(&self) -> bool {
        self.state_just_changed()
            && self.current_state.is_grounded()
            && self.previous_state.is_airborne()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_motion() {
        assert_eq!(CharacterState::from_motion(true, 5.0), CharacterState::Grounded);
        assert_eq!(CharacterState::from_motion(false, 5.0), CharacterState::Ascending);
        assert_eq!(CharacterState::from_motion(false, 0.0), CharacterState::Descending);
        assert_eq!(CharacterState::from_motion(false, -3.0), CharacterState::Descending);
    }

    #[test]
    fn test_grounded_states() {
        assert!(CharacterState::Grounded.is_grounded());
        assert!(CharacterState::Ascending.is_airborne());
        assert!(CharacterState::Descending.is_airborne());
        assert_eq!(CharacterState::Ascending.name(), "ascending");
    }

    #[test]
    fn test_windows_start_closed() {
        let windows = JumpWindows::default();
        assert!(!windows.can_jump(0.1, 0.1));
        assert_eq!(windows.time_since_grounded(), f32::INFINITY);
    }

    #[test]
    fn test_infinity_never_reopens() {
        let mut windows = JumpWindows::closed();
        for _ in 0..1000 {
            windows.advance(1.0e6);
        }
        assert!(windows.time_since_jump_input().is_infinite());
        assert!(!windows.can_jump(f32::MAX, f32::MAX));
    }

    #[test]
    fn test_both_windows_must_be_open() {
        let mut windows = JumpWindows::closed();
        windows.mark_grounded();
        assert!(!windows.can_jump(0.1, 0.1), "No press yet");

        windows.mark_jump_input();
        assert!(windows.can_jump(0.1, 0.1));

        windows.advance(0.05);
        assert!(windows.can_jump(0.1, 0.1));

        // Coyote window shorter than the buffer expires first
        assert!(!windows.can_jump(0.04, 0.1));
        // And the other way round
        assert!(!windows.can_jump(0.1, 0.04));
    }

    #[test]
    fn test_consume_closes_windows() {
        let mut windows = JumpWindows::closed();
        windows.mark_grounded();
        windows.mark_jump_input();
        windows.consume();

        assert!(!windows.can_jump(0.1, 0.1));
        windows.advance(0.016);
        assert!(!windows.can_jump(0.1, 0.1));
    }

    #[test]
    fn test_state_transition() {
        let mut sm = CharacterStateMachine::new(CharacterState::Grounded);
        assert!(sm.transition(CharacterState::Ascending));
        assert_eq!(sm.state(), CharacterState::Ascending);
        assert_eq!(sm.previous_state(), CharacterState::Grounded);
        assert!(!sm.transition(CharacterState::Ascending));
    }

    #[test]
    fn test_state_time_and_landing() {
        let mut sm = CharacterStateMachine::new(CharacterState::Descending);
        sm.update(0.1, CharacterState::Descending);
        assert!(!sm.state_just_changed());
        assert!((sm.state_time() - 0.1).abs() < 1e-6);

        assert!(sm.update(0.1, CharacterState::Grounded));
        assert!(sm.just_landed());

        sm.update(0.1, CharacterState::Grounded);
        assert!(!sm.just_landed());
    }
}
