use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::noise::DEFAULT_NOISE_SEED;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Shake", inline)]
#[serde(default)]
/// High-speed camera shake.
pub struct ShakeOptions {
    /// Noise phase advance per second of wall time.
    #[schemars(title = "Shake Speed", range(min = 0.0, max = 50.0), extend("step" = 0.5))]
    pub speed: f32,
    /// Speed at or below which there is no shake.
    #[schemars(title = "Shake Threshold", range(min = 0.0, max = 5000.0), extend("step" = 10.0))]
    pub speed_threshold: f32,
    /// Speed at which the shake reaches full strength.
    #[schemars(title = "Shake Full Speed", range(min = 0.0, max = 10000.0), extend("step" = 10.0))]
    pub max_speed: f32,
    /// Upper bound on shake intensity (units and degrees).
    #[schemars(title = "Max Shake", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub max_length: f32,
    /// Noise-space offset separating the vertical sample from the
    /// horizontal one.
    #[schemars(skip)]
    pub vertical_offset: f32,
    /// Seed for the default noise sampler.
    #[schemars(skip)]
    pub seed: u32,
}

impl Default for ShakeOptions {
    fn default() -> Self {
        Self {
            speed: 10.0,
            speed_threshold: 1500.0,
            max_speed: 2500.0,
            max_length: 1.0,
            vertical_offset: 5.0,
            seed: DEFAULT_NOISE_SEED,
        }
    }
}
