// Per-tick input snapshot consumed by the character controllers

use glam::Vec2;

/// Input for a single simulation tick
///
/// Edges describe what happened since the previous tick; they are never
/// polled from a live device.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputFrame {
    /// Horizontal axis in `[-1, 1]`
    pub horizontal: f32,
    /// Vertical axis in `[-1, 1]` (only used by free-flying actors)
    pub vertical: f32,
    /// Jump went from released to pressed
    pub jump_pressed: bool,
    /// Jump went from pressed to released
    pub jump_released: bool,
}

impl InputFrame {
    /// Frame with only a horizontal axis value
    pub fn horizontal(value: f32) -> Self {
        Self {
            horizontal: value,
            ..Self::default()
        }
    }

    /// Add a jump press edge
    pub fn with_jump_press(mut self) -> Self {
        self.jump_pressed = true;
        self
    }

    /// Add a jump release edge
    pub fn with_jump_release(mut self) -> Self {
        self.jump_released = true;
        self
    }

    /// Horizontal axis clamped to `[-1, 1]`
    pub fn horizontal_axis(&self) -> f32 {
        clamp_axis(self.horizontal)
    }

    /// Both axes clamped to `[-1, 1]`
    pub fn direction(&self) -> Vec2 {
        Vec2::new(clamp_axis(self.horizontal), clamp_axis(self.vertical))
    }
}

fn clamp_axis(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_neutral() {
        let frame = InputFrame::default();
        assert_eq!(frame.horizontal_axis(), 0.0);
        assert!(!frame.jump_pressed);
        assert!(!frame.jump_released);
    }

    #[test]
    fn test_axis_is_clamped() {
        assert_eq!(InputFrame::horizontal(3.0).horizontal_axis(), 1.0);
        assert_eq!(InputFrame::horizontal(-2.5).horizontal_axis(), -1.0);
        assert_eq!(InputFrame::horizontal(f32::NAN).horizontal_axis(), 0.0);
    }

    #[test]
    fn test_builders() {
        let frame = InputFrame::horizontal(0.5).with_jump_press().with_jump_release();
        assert_eq!(frame.horizontal, 0.5);
        assert!(frame.jump_pressed);
        assert!(frame.jump_released);
    }

    #[test]
    fn test_direction() {
        let frame = InputFrame {
            horizontal: -1.0,
            vertical: 4.0,
            ..InputFrame::default()
        };
        assert_eq!(frame.direction(), Vec2::new(-1.0, 1.0));
    }
}
