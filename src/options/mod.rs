//! Centralized camera tunables with TOML preset support.
//!
//! Every tweakable constant of the chase camera (field of view, orbit and
//! follow blending, car-pitch tracking, collision probing, shake, projection)
//! lives here. Vehicle variants are expressed as presets: TOML files that
//! override any subset of the defaults, stored in `presets/`.

mod car_pitch;
mod collision;
mod fov;
mod orbit;
mod projection;
mod shake;

use std::path::Path;

pub use car_pitch::CarPitchOptions;
pub use collision::CollisionOptions;
pub use fov::FovOptions;
pub use orbit::OrbitOptions;
pub use projection::ProjectionOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use shake::ShakeOptions;

use crate::error::ChaseCamError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[orbit]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Speed-driven field of view.
    pub fov: FovOptions,
    /// Orbit/follow placement and blending.
    pub orbit: OrbitOptions,
    /// Car body pitch tracking.
    pub car_pitch: CarPitchOptions,
    /// World collision probe.
    pub collision: CollisionOptions,
    /// High-speed shake.
    pub shake: ShakeOptions,
    /// Clip planes for the render uniform.
    #[schemars(skip)]
    pub projection: ProjectionOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ChaseCamError::OptionsParse`] if the text is not valid
    /// options TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, ChaseCamError> {
        toml::from_str(content)
            .map_err(|e| ChaseCamError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ChaseCamError::Io`] if the file cannot be read, or
    /// [`ChaseCamError::OptionsParse`] if its contents do not parse.
    pub fn load(path: &Path) -> Result<Self, ChaseCamError> {
        let content =
            std::fs::read_to_string(path).map_err(ChaseCamError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load the preset `name` from `dir` (`<dir>/<name>.toml`).
    ///
    /// # Errors
    ///
    /// Same as [`Options::load`].
    pub fn load_preset(dir: &Path, name: &str) -> Result<Self, ChaseCamError> {
        let opts = Self::load(&dir.join(format!("{name}.toml")))?;
        log::info!("Loaded camera preset '{name}'");
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed), creating parent
    /// directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`ChaseCamError::OptionsParse`] if serialization fails, or
    /// [`ChaseCamError::Io`] if the file or its directory cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ChaseCamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ChaseCamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ChaseCamError::Io)?;
        }
        std::fs::write(path, content).map_err(ChaseCamError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
