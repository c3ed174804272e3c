//! Third-person chase camera.
//!
//! The [`controller::CameraController`] owns one vehicle-occupancy session
//! and runs the per-tick pipeline: orbit/follow angles, pose and collision,
//! field of view, then shake.

/// Session owner and per-tick pipeline.
pub mod controller;
/// Speed-driven field of view smoothing.
pub mod fov;
/// Look-input accumulation between ticks.
pub mod input;
/// Orbit/follow state machine and car-pitch tracking.
pub mod orbit;
/// Camera placement behind the pivot, clamped against the world.
pub mod pose;
/// Procedural high-speed shake.
pub mod shake;
/// Emitted camera state and its GPU uniform.
pub mod state;

pub use controller::CameraController;
pub use input::{LookDelta, LookInput};
pub use orbit::OrbitMode;
pub use state::{CameraState, CameraUniform};
