//! Time management utilities

use std::time::{Duration, Instant};

/// Frame timer and rate governor.
///
/// `tick` sleeps away whatever is left of the frame budget and reports the
/// wall-clock seconds since the previous tick, which becomes the next
/// simulation step's delta time.
pub struct Timer {
    last_frame: Instant,
    frame_budget: Option<Duration>,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new uncapped timer
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            frame_budget: None,
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Create a timer that caps the loop at `target_fps` frames per second
    pub fn with_target_fps(target_fps: u32) -> Self {
        let mut timer = Self::new();
        if target_fps > 0 {
            timer.frame_budget = Some(Duration::from_secs_f64(1.0 / f64::from(target_fps)));
        }
        timer
    }

    /// Finish the current frame.
    ///
    /// Waits until the frame budget is used up (if capped), then records the
    /// elapsed time since the previous tick and returns it in seconds.
    pub fn tick(&mut self) -> f32 {
        if let Some(budget) = self.frame_budget {
            let spent = self.last_frame.elapsed();
            if spent < budget {
                std::thread::sleep(budget - spent);
            }
        }

        let now = Instant::now();
        self.record(now.duration_since(self.last_frame));
        self.last_frame = now;
        self.delta_time
    }

    fn record(&mut self, elapsed: Duration) {
        self.delta_time = elapsed.as_secs_f32();
        self.total_time += self.delta_time;
        self.frame_count += 1;
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed time across all ticks
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average FPS since timer creation
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count as f32 / self.total_time
        } else {
            0.0
        }
    }
}

/// Countdown used for gameplay timers (spawn intervals, message displays).
///
/// Inactive once it has run down to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Countdown {
    remaining: f32,
}

impl Countdown {
    /// An inactive countdown
    pub const fn idle() -> Self {
        Self { remaining: 0.0 }
    }

    /// Start (or restart) the countdown
    pub fn start(&mut self, seconds: f32) {
        self.remaining = seconds.max(0.0);
    }

    /// Stop the countdown without letting it expire
    pub fn cancel(&mut self) {
        self.remaining = 0.0;
    }

    /// Whether time is still left on the countdown
    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    /// Seconds left
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Advance by `dt`. Returns `true` on the tick the countdown expires.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.is_active() {
            return false;
        }
        self.remaining = (self.remaining - dt).max(0.0);
        !self.is_active()
    }
}
