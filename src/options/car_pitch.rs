use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How much of the car body's pitch the camera inherits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Car Pitch", inline)]
#[serde(default)]
pub struct CarPitchOptions {
    /// Lowest body pitch followed, in degrees.
    #[schemars(title = "Min Car Pitch", range(min = -90.0, max = 0.0), extend("step" = 1.0))]
    pub min: f32,
    /// Highest body pitch followed, in degrees.
    #[schemars(title = "Max Car Pitch", range(min = 0.0, max = 90.0), extend("step" = 1.0))]
    pub max: f32,
    /// Per-second smoothing rate toward the body pitch.
    #[schemars(title = "Car Pitch Smoothing", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub smoothing_speed: f32,
}

impl Default for CarPitchOptions {
    fn default() -> Self {
        Self {
            min: -60.0,
            max: 60.0,
            smoothing_speed: 1.0,
        }
    }
}
