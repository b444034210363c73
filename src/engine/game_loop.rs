/// Fixed timestep driver
///
/// The movement code assumes every tick has the same, small `dt`. This
/// turns whatever frame times the host produces into a whole number of
/// fixed ticks, carrying the leftover time into the next frame.
use std::time::{Duration, Instant};

/// Target simulation rate (60 ticks per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of ticks per frame to prevent spiral of death
const MAX_STEPS_PER_FRAME: u32 = 5;

/// Fixed timestep accumulator
pub struct GameLoop {
    /// Accumulated time not yet consumed by ticks
    accumulator: Duration,

    /// Length of one tick
    timestep: Duration,

    /// Time of last frame (wall-clock driving only)
    last_frame_time: Instant,

    /// Whether the simulation is paused
    paused: bool,

    /// Current frame number
    frame_count: u64,

    /// Total ticks executed
    update_count: u64,
}

impl GameLoop {
    /// Create a loop ticking at [`FIXED_TIMESTEP`]
    pub fn new() -> Self {
        Self::with_timestep(FIXED_TIMESTEP_DURATION)
    }

    /// Create a loop with a custom tick length
    pub fn with_timestep(timestep: Duration) -> Self {
        Self {
            accumulator: Duration::ZERO,
            timestep: timestep.max(Duration::from_micros(1)),
            last_frame_time: Instant::now(),
            paused: false,
            frame_count: 0,
            update_count: 0,
        }
    }

    /// Begin a frame using the wall clock, returns the number of ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(frame_time)
    }

    /// Feed an explicit frame duration, returns the number of ticks to run
    ///
    /// Deterministic: the same sequence of frame times always yields the
    /// same sequence of tick counts.
    pub fn advance(&mut self, frame_time: Duration) -> u32 {
        self.frame_count += 1;

        // If paused, don't accumulate time for updates
        if self.paused {
            return 0;
        }

        self.accumulator += frame_time;

        let mut updates = 0;
        while self.accumulator >= self.timestep && updates < MAX_STEPS_PER_FRAME {
            self.accumulator -= self.timestep;
            updates += 1;
        }

        // Drop the backlog instead of replaying it next frame
        if updates == MAX_STEPS_PER_FRAME && self.accumulator >= self.timestep {
            log::warn!(
                "Simulation fell behind, dropping {:?} of accumulated time",
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }

        self.update_count += updates as u64;
        updates
    }

    /// Tick length in seconds, the `dt` to hand to the simulation
    pub fn fixed_timestep(&self) -> f32 {
        self.timestep.as_secs_f32()
    }

    /// Interpolation alpha between the last two ticks, for rendering
    pub fn alpha(&self) -> f32 {
        self.accumulator.as_secs_f32() / self.timestep.as_secs_f32()
    }

    /// Get total number of frames seen
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get total number of ticks executed
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Check if the simulation is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause the simulation
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Simulation paused");
        }
    }

    /// Resume the simulation
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent update burst
            self.accumulator = Duration::ZERO;
            log::info!("Simulation resumed");
        }
    }

    /// Toggle pause state
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
