//! Orbit/follow state machine.
//!
//! The camera is either following the car (yaw tracks heading, pitch sits at
//! a fixed angle) or orbiting under player control. Look input switches to
//! [`OrbitMode::Orbit`] immediately; a quiet period longer than the cooldown
//! switches back to [`OrbitMode::Follow`] without touching the angles, so
//! the follow slerp picks up from wherever the player left the camera.
//!
//! Yaw and pitch are smoothed as two separate quaternions and composed
//! yaw-first.

use glam::Quat;

use super::input::LookDelta;
use crate::options::{CarPitchOptions, OrbitOptions};
use crate::util::angles::{
    normalize_degrees, pitch_of, pitch_rotation, slerp_clamped, yaw_of,
    yaw_rotation, Angles,
};
use crate::util::smoothing::{clamp_ordered, lerp_to, safe_ratio};
use crate::vehicle::VehicleSnapshot;

/// Combined pitch targets are kept short of straight up/down so the pitch
/// quaternion never flips over the pole.
const PITCH_LIMIT: f32 = 89.0;

/// Which behaviour drives the camera angles.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OrbitMode {
    /// Angles auto-track the vehicle heading and a fixed pitch.
    #[default]
    Follow,
    /// Angles come from player look input.
    Orbit {
        /// Seconds since the last non-zero look input.
        idle: f32,
    },
}

impl OrbitMode {
    /// Whether the player is currently orbiting.
    #[must_use]
    pub fn is_orbiting(&self) -> bool {
        matches!(self, Self::Orbit { .. })
    }
}

/// Orbit/follow angles, their smoothed rotations, and the tracked car pitch.
#[derive(Debug, Clone)]
pub struct OrbitTracker {
    mode: OrbitMode,
    /// Angle accumulator. Pitch excludes the car-pitch contribution and is
    /// always inside the configured orbit pitch range.
    angles: Angles,
    yaw_rot: Quat,
    pitch_rot: Quat,
    /// Smoothed body pitch the camera inherits.
    car_pitch: f32,
    /// The first follow step after a reset lands on its target outright.
    snap_pending: bool,
}

impl Default for OrbitTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitTracker {
    /// Follow mode, zero angles, identity rotations.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: OrbitMode::Follow,
            angles: Angles::ZERO,
            yaw_rot: Quat::IDENTITY,
            pitch_rot: Quat::IDENTITY,
            car_pitch: 0.0,
            snap_pending: true,
        }
    }

    /// Return to the freshly-activated state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> OrbitMode {
        self.mode
    }

    /// Angle accumulator, normalized.
    #[must_use]
    pub fn angles(&self) -> Angles {
        self.angles.normal()
    }

    /// Smoothed car pitch in degrees.
    #[must_use]
    pub fn car_pitch(&self) -> f32 {
        self.car_pitch
    }

    /// Smoothed camera rotation: yaw composed with pitch.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        self.yaw_rot * self.pitch_rot
    }

    /// Fold a look delta into the accumulator.
    ///
    /// Entering orbit seeds the accumulator from the current smoothed
    /// rotation so the camera does not jump. Returns the resolved view
    /// angles for the input layer; a zero or non-finite delta only reports
    /// them.
    pub fn apply_look(
        &mut self,
        delta: LookDelta,
        options: &OrbitOptions,
    ) -> Angles {
        if !delta.is_active() || !delta.is_finite() {
            return self.angles();
        }

        if !self.mode.is_orbiting() {
            let current = Angles::from_quat(self.rotation()).normal();
            self.yaw_rot = yaw_rotation(current.yaw);
            self.pitch_rot = pitch_rotation(current.pitch);
            self.angles = Angles::new(
                options.clamp_pitch(current.pitch - self.car_pitch),
                current.yaw,
                0.0,
            );
            log::debug!(
                "orbit engaged at yaw {:.1} pitch {:.1}",
                self.angles.yaw,
                self.angles.pitch
            );
        }

        self.mode = OrbitMode::Orbit { idle: 0.0 };
        self.angles.yaw = normalize_degrees(self.angles.yaw + delta.yaw);
        self.angles.pitch = options.clamp_pitch(self.angles.pitch + delta.pitch);

        self.angles()
    }

    /// Advance one tick and return the smoothed camera rotation.
    pub fn update(
        &mut self,
        vehicle: &VehicleSnapshot,
        dt: f32,
        orbit: &OrbitOptions,
        car: &CarPitchOptions,
    ) -> Quat {
        self.advance_idle(dt, orbit);
        self.update_car_pitch(vehicle, dt, car);

        match self.mode {
            OrbitMode::Orbit { .. } => self.step_orbit(dt, orbit),
            OrbitMode::Follow => self.step_follow(vehicle, dt, orbit),
        }
        self.snap_pending = false;

        self.rotation()
    }

    /// Count `dt` seconds without look input, falling back to follow once
    /// the cooldown has passed. Also called for ticks that have no vehicle,
    /// so the cooldown runs on wall time.
    pub fn advance_idle(&mut self, dt: f32, orbit: &OrbitOptions) {
        if let OrbitMode::Orbit { idle } = &mut self.mode {
            *idle += dt;
            if *idle > orbit.cooldown {
                log::debug!("orbit idle for {idle:.2}s, resuming follow");
                self.mode = OrbitMode::Follow;
            }
        }
    }

    fn update_car_pitch(
        &mut self,
        vehicle: &VehicleSnapshot,
        dt: f32,
        car: &CarPitchOptions,
    ) {
        let target = if vehicle.grounded {
            let sign = if vehicle.is_reversing() { -1.0 } else { 1.0 };
            clamp_ordered(vehicle.pitch(), car.min, car.max) * sign
        } else {
            0.0
        };
        self.car_pitch =
            lerp_to(self.car_pitch, target, dt * car.smoothing_speed);
    }

    fn pitch_target(&self, pitch: f32) -> Quat {
        pitch_rotation(
            (pitch + self.car_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT),
        )
    }

    fn step_orbit(&mut self, dt: f32, orbit: &OrbitOptions) {
        let t = dt * orbit.smoothing_speed;
        self.yaw_rot =
            slerp_clamped(self.yaw_rot, yaw_rotation(self.angles.yaw), t);
        let pitch_target = self.pitch_target(self.angles.pitch);
        self.pitch_rot = slerp_clamped(self.pitch_rot, pitch_target, t);
    }

    fn step_follow(
        &mut self,
        vehicle: &VehicleSnapshot,
        dt: f32,
        orbit: &OrbitOptions,
    ) {
        let heading = yaw_of(vehicle.rotation);
        let target_yaw = if vehicle.is_reversing() {
            heading + 180.0
        } else {
            heading
        };
        let target_pitch = orbit.clamp_pitch(orbit.fixed_pitch);

        let t = if self.snap_pending {
            1.0
        } else {
            safe_ratio(vehicle.speed.abs(), orbit.max_return_speed).map_or(
                1.0,
                |ratio| {
                    dt * clamp_ordered(
                        ratio,
                        0.0,
                        orbit.return_smoothing_speed,
                    )
                },
            )
        };

        let pitch_target = self.pitch_target(target_pitch);
        self.yaw_rot = slerp_clamped(self.yaw_rot, yaw_rotation(target_yaw), t);
        self.pitch_rot = slerp_clamped(self.pitch_rot, pitch_target, t);

        self.angles = Angles::new(
            pitch_of(self.pitch_rot) - self.car_pitch,
            yaw_of(self.yaw_rot),
            0.0,
        )
        .normal();
        self.angles.pitch = orbit.clamp_pitch(self.angles.pitch);
    }
}
