// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Allowances mirrored from [workspace.lints] (crate attributes win over
// command-line levels, so the groups above would re-deny them)
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Third-person chase camera for drivable vehicles.
//!
//! Chasecam places a camera behind and above a vehicle, lets the player orbit
//! it with look input, and returns to the vehicle heading after a short
//! cooldown. The camera inherits the car's body pitch, widens its field of
//! view with speed, stops short of world geometry, and shakes at very high
//! speed.
//!
//! # Key entry points
//!
//! - [`camera::CameraController`] - one vehicle session; call `update` once
//!   per tick
//! - [`vehicle::VehicleSnapshot`] - the per-tick physics read the camera
//!   consumes
//! - [`world::CollisionProbe`] - swept-sphere query into the host's physics
//! - [`options::Options`] - tunables, loadable from TOML presets
//!
//! # Tick pipeline
//!
//! Look input is folded in as it arrives. Each tick then runs orbit/follow →
//! pose solve and collision clamp → FOV smoothing → shake, and emits a
//! [`camera::CameraState`] (position, rotation, field of view).

pub mod camera;
pub mod error;
pub mod options;
pub mod util;
pub mod vehicle;
pub mod world;

pub use camera::{CameraController, CameraState, LookDelta, OrbitMode};
pub use error::ChaseCamError;
pub use options::Options;
pub use util::frame_timing::{FrameClock, FrameTime};
pub use vehicle::{EntityId, VehicleSnapshot};
pub use world::{CollisionProbe, ProbeQuery};
