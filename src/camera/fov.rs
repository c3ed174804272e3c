//! Speed-driven field of view.

use crate::options::FovOptions;
use crate::util::smoothing::{clamp_ordered, lerp_to, safe_ratio};

/// Smoothed field of view that widens with speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FovSmoother {
    current: f32,
}

impl FovSmoother {
    /// Start at the standstill FOV.
    #[must_use]
    pub fn new(options: &FovOptions) -> Self {
        Self {
            current: options.min_fov,
        }
    }

    /// Current field of view in degrees.
    #[must_use]
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Target FOV for an absolute speed, or `None` when speed scaling is
    /// disabled.
    #[must_use]
    pub fn target(speed: f32, options: &FovOptions) -> Option<f32> {
        safe_ratio(speed.abs(), options.max_fov_speed)
            .map(|ratio| lerp_to(options.min_fov, options.max_fov, ratio))
    }

    /// Advance one tick.
    ///
    /// With `max_fov_speed <= 0` the FOV is pinned to `max_fov`.
    pub fn update(&mut self, speed: f32, dt: f32, options: &FovOptions) -> f32 {
        self.current = match Self::target(speed, options) {
            Some(target) => {
                lerp_to(self.current, target, dt * options.smoothing_speed)
            }
            None => options.max_fov,
        };
        self.current =
            clamp_ordered(self.current, options.min_fov, options.max_fov);
        self.current
    }
}
