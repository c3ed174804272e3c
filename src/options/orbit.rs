use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::smoothing::clamp_ordered;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit", inline)]
#[serde(default)]
/// Orbit/follow placement and blending parameters.
pub struct OrbitOptions {
    /// Seconds without look input before the camera returns to follow mode.
    #[schemars(title = "Orbit Cooldown", range(min = 0.0, max = 5.0), extend("step" = 0.05))]
    pub cooldown: f32,
    /// Per-second slerp rate while the player is orbiting.
    #[schemars(title = "Orbit Smoothing", range(min = 0.0, max = 60.0), extend("step" = 0.5))]
    pub smoothing_speed: f32,
    /// Cap on the per-second slerp rate when returning to follow.
    #[schemars(title = "Return Smoothing", range(min = 0.0, max = 20.0), extend("step" = 0.1))]
    pub return_smoothing_speed: f32,
    /// Lowest orbit pitch in degrees (negative looks up).
    #[schemars(title = "Min Pitch", range(min = -89.0, max = 0.0), extend("step" = 1.0))]
    pub min_pitch: f32,
    /// Highest orbit pitch in degrees.
    #[schemars(title = "Max Pitch", range(min = 0.0, max = 89.0), extend("step" = 1.0))]
    pub max_pitch: f32,
    /// Pitch the follow camera settles at.
    #[schemars(title = "Follow Pitch", range(min = -45.0, max = 60.0), extend("step" = 1.0))]
    pub fixed_pitch: f32,
    /// Height above the pivot, multiplied by vehicle scale.
    #[schemars(title = "Height", range(min = 0.0, max = 200.0), extend("step" = 1.0))]
    pub height: f32,
    /// Distance behind the pivot, multiplied by vehicle scale.
    #[schemars(title = "Distance", range(min = 10.0, max = 600.0), extend("step" = 5.0))]
    pub distance: f32,
    /// Speed at which the follow return rate saturates. Zero or less snaps
    /// back instantly every tick.
    #[schemars(title = "Max Return Speed", range(min = 0.0, max = 1000.0), extend("step" = 5.0))]
    pub max_return_speed: f32,
}

impl Default for OrbitOptions {
    fn default() -> Self {
        Self {
            cooldown: 0.6,
            smoothing_speed: 25.0,
            return_smoothing_speed: 4.0,
            min_pitch: -25.0,
            max_pitch: 70.0,
            fixed_pitch: 10.0,
            height: 35.0,
            distance: 150.0,
            max_return_speed: 100.0,
        }
    }
}

impl OrbitOptions {
    /// Clamp a pitch into `[min_pitch, max_pitch]`.
    ///
    /// Tolerates inverted bounds from hand-edited presets.
    #[must_use]
    pub fn clamp_pitch(&self, pitch: f32) -> f32 {
        clamp_ordered(pitch, self.min_pitch, self.max_pitch)
    }
}
