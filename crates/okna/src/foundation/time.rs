//! Time management utilities

use std::time::{Duration, Instant};

use thiserror::Error;

/// Clock construction errors
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ClockError {
    /// The requested frame rate is zero, negative or not a number
    #[error("target fps must be a positive number, got {0}")]
    InvalidFrameRate(f32),
}

/// Fixed-tick frame clock
///
/// [`Clock::tick`] sleeps away whatever is left of the target frame time and
/// then measures the real frame duration, which becomes the next
/// [`Clock::delta_time`].
pub struct Clock {
    last_tick: Instant,
    target_frame: Duration,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl Clock {
    /// Create a clock pacing the loop at `target_fps` frames per second
    ///
    /// Until the first tick, the delta time is one target frame.
    ///
    /// # Errors
    /// Returns [`ClockError::InvalidFrameRate`] unless `target_fps` is a
    /// positive, finite number.
    pub fn new(target_fps: f32) -> Result<Self, ClockError> {
        if !(target_fps.is_finite() && target_fps > 0.0) {
            return Err(ClockError::InvalidFrameRate(target_fps));
        }

        let target_frame = Duration::from_secs_f32(1.0 / target_fps);
        Ok(Self {
            last_tick: Instant::now(),
            target_frame,
            delta_time: target_frame.as_secs_f32(),
            total_time: 0.0,
            frame_count: 0,
        })
    }

    /// Reset the reference instant to now
    pub fn start(&mut self) {
        self.last_tick = Instant::now();
    }

    /// Finish the current frame
    ///
    /// Sleeps for the remainder of the target frame (nothing if the frame
    /// already overran), then records the elapsed time as the new delta.
    pub fn tick(&mut self) {
        let spent = self.last_tick.elapsed();
        let remaining = self.target_frame.saturating_sub(spent);
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }

        let now = Instant::now();
        self.delta_time = now.duration_since(self.last_tick).as_secs_f32();
        self.total_time += self.delta_time;
        self.last_tick = now;
        self.frame_count += 1;
    }

    /// Time the last frame took, in seconds
    pub const fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Target duration of one frame
    pub const fn target_frame(&self) -> Duration {
        self.target_frame
    }

    /// Total time accumulated over all ticks, in seconds
    pub const fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Number of completed ticks
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average FPS since the clock was created
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count as f32 / self.total_time
        } else {
            0.0
        }
    }
}
