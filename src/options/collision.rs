use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// World collision probe parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Collision", inline)]
#[serde(default)]
pub struct CollisionOptions {
    /// Radius of the swept sphere cast from the pivot to the camera.
    #[schemars(title = "Probe Radius", range(min = 0.0, max = 64.0), extend("step" = 0.5))]
    pub radius: f32,
}

impl Default for CollisionOptions {
    fn default() -> Self {
        Self { radius: 8.0 }
    }
}
