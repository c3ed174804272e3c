//! Per-tick timing: fixed-step [`FrameTime`] values and a wall-clock
//! [`FrameClock`] that produces them.

use web_time::{Duration, Instant};

/// Timing inputs for one camera tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTime {
    /// Seconds elapsed since the previous tick.
    pub delta: f32,
    /// Monotonic seconds since the clock started (drives shake phase).
    pub now: f32,
}

impl FrameTime {
    /// Timing with an explicit delta and wall time, for fixed-step hosts.
    #[must_use]
    pub const fn new(delta: f32, now: f32) -> Self {
        Self { delta, now }
    }

    /// Next fixed step after this one.
    #[must_use]
    pub fn advance(self, delta: f32) -> Self {
        Self {
            delta,
            now: self.now + delta,
        }
    }
}

/// Frame clock with smoothed FPS, producing [`FrameTime`] per tick.
pub struct FrameClock {
    /// Clock origin for [`FrameTime::now`]
    start: Instant,
    /// Last tick timestamp
    last_frame: Instant,
    /// Upper bound applied to a single delta (stalls, breakpoints)
    max_delta: Duration,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Start a clock now.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            max_delta: Duration::from_millis(250),
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Advance the clock and return the timing for this tick.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame).min(self.max_delta);
        self.last_frame = now;

        let delta = elapsed.as_secs_f32();
        if delta > 0.0 {
            let instant_fps = 1.0 / delta;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        FrameTime {
            delta,
            now: now.duration_since(self.start).as_secs_f32(),
        }
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
