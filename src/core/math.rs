// Math utilities and helper functions

/// Move `current` toward `target` by at most `max_delta`, never overshooting
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else {
        current + delta.signum() * max_delta
    }
}

/// Sign of a step request: -1 for negative amounts, +1 otherwise (zero included)
pub fn step_sign(value: f32) -> i32 {
    if value < 0.0 {
        -1
    } else {
        1
    }
}
