use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Projection", inline)]
#[serde(default)]
/// Clip planes used when building the render uniform.
pub struct ProjectionOptions {
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            znear: 5.0,
            zfar: 20000.0,
        }
    }
}
