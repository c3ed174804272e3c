//! Procedural high-speed camera shake.

use std::f32::consts::PI;

use glam::{Quat, Vec3};

use crate::options::ShakeOptions;
use crate::util::angles::RotationAxes;
use crate::util::noise::CoherentNoise;
use crate::util::smoothing::safe_ratio;

/// Per-tick shake inputs derived from speed and wall time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShakeParameters {
    /// Noise-space sample position.
    pub phase: f32,
    /// Amplitude in world units (position) and degrees (rotation).
    pub intensity: f32,
}

impl ShakeParameters {
    /// Derive this tick's parameters; `None` at or below the threshold.
    #[must_use]
    pub fn derive(speed: f32, now: f32, options: &ShakeOptions) -> Option<Self> {
        let speed = speed.abs();
        if speed <= options.speed_threshold {
            return None;
        }
        let max_length = options.max_length.max(0.0);
        let ratio = safe_ratio(
            speed - options.speed_threshold,
            options.max_speed - options.speed_threshold,
        )
        .unwrap_or(max_length);

        Some(Self {
            phase: now.rem_euclid(PI) * options.speed,
            intensity: ratio.clamp(0.0, max_length),
        })
    }

    /// Horizontal and vertical displacement sampled from `noise`.
    #[must_use]
    pub fn offsets<N: CoherentNoise + ?Sized>(
        &self,
        noise: &N,
        options: &ShakeOptions,
    ) -> (f32, f32) {
        let x = noise.sample(self.phase, 0.0, 0.0) * self.intensity;
        let y = noise.sample(self.phase, options.vertical_offset, 0.0)
            * self.intensity;
        (x, y)
    }
}

/// Perturb a solved pose. Returns the input unchanged at or below the
/// shake threshold.
#[must_use]
pub fn apply_shake<N: CoherentNoise + ?Sized>(
    position: Vec3,
    rotation: Quat,
    speed: f32,
    now: f32,
    options: &ShakeOptions,
    noise: &N,
) -> (Vec3, Quat) {
    let Some(params) = ShakeParameters::derive(speed, now, options) else {
        return (position, rotation);
    };
    let (x, y) = params.offsets(noise, options);

    let position = position + rotation.right() * x + rotation.up() * y;
    let rotation = rotation * Quat::from_axis_angle(Vec3::Z, x.to_radians());
    let rotation =
        rotation * Quat::from_axis_angle(Vec3::NEG_Y, y.to_radians());
    (position, rotation.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::noise::{shake_field, DEFAULT_NOISE_SEED};

    /// Noise that always answers `value`.
    struct Constant(f32);

    impl CoherentNoise for Constant {
        fn sample(&self, _x: f32, _y: f32, _z: f32) -> f32 {
            self.0
        }
    }

    #[test]
    fn no_shake_at_or_below_threshold() {
        let opts = ShakeOptions::default();
        let pos = Vec3::new(1.0, 2.0, 3.0);
        let rot = Quat::from_rotation_z(0.3);
        let noise = shake_field(DEFAULT_NOISE_SEED);
        for speed in [0.0, 700.0, -1500.0, 1500.0] {
            let (p, r) = apply_shake(pos, rot, speed, 12.34, &opts, &noise);
            assert_eq!(p, pos);
            assert_eq!(r, rot);
        }
    }

    #[test]
    fn intensity_ramps_and_clamps() {
        let opts = ShakeOptions::default();
        let half = ShakeParameters::derive(2000.0, 0.0, &opts).unwrap();
        assert!((half.intensity - 0.5).abs() < 1e-6);
        let over = ShakeParameters::derive(9000.0, 0.0, &opts).unwrap();
        assert_eq!(over.intensity, opts.max_length);
    }

    #[test]
    fn degenerate_speed_range_uses_max_length() {
        let opts = ShakeOptions {
            max_speed: 1000.0,
            ..ShakeOptions::default()
        };
        let p = ShakeParameters::derive(1600.0, 0.0, &opts).unwrap();
        assert_eq!(p.intensity, opts.max_length);
    }

    #[test]
    fn phase_wraps_every_pi_seconds() {
        let opts = ShakeOptions::default();
        let a = ShakeParameters::derive(2000.0, 1.0, &opts).unwrap();
        let b = ShakeParameters::derive(2000.0, 1.0 + PI, &opts).unwrap();
        assert!((a.phase - b.phase).abs() < 1e-3);
        assert!((a.phase - 10.0).abs() < 1e-4);
    }

    #[test]
    fn displacement_follows_camera_axes() {
        let opts = ShakeOptions::default();
        let (p, r) = apply_shake(
            Vec3::ZERO,
            Quat::IDENTITY,
            2500.0,
            0.5,
            &opts,
            &Constant(0.5),
        );
        // Right is -Y and up is +Z for the identity rotation.
        assert!((p - Vec3::new(0.0, -0.5, 0.5)).length() < 1e-5);
        assert!(r.angle_between(Quat::IDENTITY) > 0.0);
    }
}
