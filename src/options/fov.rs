use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Field of View", inline)]
#[serde(default)]
/// Speed-driven field-of-view widening.
pub struct FovOptions {
    /// Field of view at standstill, in degrees.
    #[schemars(title = "Min FOV", range(min = 30.0, max = 120.0), extend("step" = 1.0))]
    pub min_fov: f32,
    /// Field of view at or above `max_fov_speed`, in degrees.
    #[schemars(title = "Max FOV", range(min = 30.0, max = 140.0), extend("step" = 1.0))]
    pub max_fov: f32,
    /// Speed at which the FOV reaches `max_fov`. Zero or less pins the FOV
    /// to `max_fov`.
    #[schemars(title = "Max FOV Speed", range(min = 0.0, max = 5000.0), extend("step" = 10.0))]
    pub max_fov_speed: f32,
    /// Per-second smoothing rate toward the speed target.
    #[schemars(title = "FOV Smoothing", range(min = 0.0, max = 30.0), extend("step" = 0.5))]
    pub smoothing_speed: f32,
}

impl Default for FovOptions {
    fn default() -> Self {
        Self {
            min_fov: 80.0,
            max_fov: 100.0,
            max_fov_speed: 1000.0,
            smoothing_speed: 4.0,
        }
    }
}
