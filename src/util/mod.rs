//! Shared math and timing helpers for the camera.
//!
//! Angle conventions, scalar smoothing, coherent noise, and frame timing.

pub mod angles;
pub mod frame_timing;
pub mod noise;
pub mod smoothing;
