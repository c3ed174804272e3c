//! Euler angles in degrees and the rotation conventions built on them.
//!
//! The world is Z-up with X forward and Y left. Positive pitch tilts the
//! forward vector downward, positive yaw turns toward +Y. A rotation built
//! from [`Angles`] applies roll, then pitch, then yaw.

use glam::{EulerRot, Quat, Vec3};

/// Wrap an angle in degrees into `(-180, 180]`.
#[inline]
#[must_use]
pub fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Pitch/yaw/roll triple in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Angles {
    /// Rotation about the left (+Y) axis. Positive looks down.
    pub pitch: f32,
    /// Rotation about the up (+Z) axis.
    pub yaw: f32,
    /// Rotation about the forward (+X) axis.
    pub roll: f32,
}

impl Angles {
    /// All-zero angles.
    pub const ZERO: Self = Self {
        pitch: 0.0,
        yaw: 0.0,
        roll: 0.0,
    };

    /// Construct from pitch, yaw and roll in degrees.
    #[must_use]
    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Decompose a rotation into angles.
    #[must_use]
    pub fn from_quat(rotation: Quat) -> Self {
        let (yaw, pitch, roll) = rotation.to_euler(EulerRot::ZYX);
        Self {
            pitch: pitch.to_degrees(),
            yaw: yaw.to_degrees(),
            roll: roll.to_degrees(),
        }
    }

    /// Build the rotation these angles describe.
    #[must_use]
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(
            EulerRot::ZYX,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            self.roll.to_radians(),
        )
    }

    /// Every component wrapped into `(-180, 180]`.
    #[must_use]
    pub fn normal(self) -> Self {
        Self {
            pitch: normalize_degrees(self.pitch),
            yaw: normalize_degrees(self.yaw),
            roll: normalize_degrees(self.roll),
        }
    }
}

/// Pure yaw rotation about world up.
#[inline]
#[must_use]
pub fn yaw_rotation(yaw: f32) -> Quat {
    Quat::from_rotation_z(yaw.to_radians())
}

/// Pure pitch rotation about the local left axis.
#[inline]
#[must_use]
pub fn pitch_rotation(pitch: f32) -> Quat {
    Quat::from_rotation_y(pitch.to_radians())
}

/// Yaw of a rotation in degrees.
#[inline]
#[must_use]
pub fn yaw_of(rotation: Quat) -> f32 {
    Angles::from_quat(rotation).yaw
}

/// Pitch of a rotation in degrees.
#[inline]
#[must_use]
pub fn pitch_of(rotation: Quat) -> f32 {
    Angles::from_quat(rotation).pitch
}

/// Direction vectors of a rotation in the Z-up, X-forward frame.
pub trait RotationAxes {
    /// Local +X.
    fn forward(&self) -> Vec3;
    /// Local -X.
    fn backward(&self) -> Vec3;
    /// Local -Y.
    fn right(&self) -> Vec3;
    /// Local +Z.
    fn up(&self) -> Vec3;
}

impl RotationAxes for Quat {
    fn forward(&self) -> Vec3 {
        *self * Vec3::X
    }

    fn backward(&self) -> Vec3 {
        -self.forward()
    }

    fn right(&self) -> Vec3 {
        *self * Vec3::NEG_Y
    }

    fn up(&self) -> Vec3 {
        *self * Vec3::Z
    }
}

/// Spherical interpolation with the fraction clamped to `[0, 1]`.
#[inline]
#[must_use]
pub fn slerp_clamped(from: Quat, to: Quat, t: f32) -> Quat {
    from.slerp(to, t.clamp(0.0, 1.0)).normalize()
}

/// Whether two quaternions describe the same rotation within `eps` per
/// component, treating `q` and `-q` as equal.
#[cfg(test)]
pub(crate) fn same_rotation(a: Quat, b: Quat, eps: f32) -> bool {
    a.abs_diff_eq(b, eps) || a.abs_diff_eq(-b, eps)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn normalize_wraps_into_half_open_range() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(180.0), 180.0);
        assert_eq!(normalize_degrees(-180.0), 180.0);
        assert!((normalize_degrees(190.0) + 170.0).abs() < EPS);
        assert!((normalize_degrees(-370.0) + 10.0).abs() < EPS);
        assert!((normalize_degrees(7200.0 + 45.0) - 45.0).abs() < EPS);
    }

    #[test]
    fn positive_pitch_looks_down() {
        let rot = pitch_rotation(30.0);
        assert!(rot.forward().z < 0.0);
    }

    #[test]
    fn positive_yaw_turns_left() {
        let rot = yaw_rotation(90.0);
        let f = rot.forward();
        assert!((f - Vec3::Y).length() < EPS, "forward was {f}");
    }

    #[test]
    fn angles_survive_quat_conversion() {
        let angles = Angles::new(20.0, -135.0, 0.0);
        let back = Angles::from_quat(angles.to_quat());
        assert!((back.pitch - 20.0).abs() < 1e-3);
        assert!((back.yaw + 135.0).abs() < 1e-3);
        assert!(back.roll.abs() < 1e-3);
    }

    #[test]
    fn yaw_then_pitch_matches_euler_build() {
        let composed = yaw_rotation(40.0) * pitch_rotation(15.0);
        let built = Angles::new(15.0, 40.0, 0.0).to_quat();
        assert!(same_rotation(composed, built, EPS));
    }

    #[test]
    fn right_is_perpendicular_to_forward_and_up() {
        let rot = Angles::new(10.0, 60.0, 0.0).to_quat();
        assert!(rot.right().dot(rot.forward()).abs() < EPS);
        assert!(rot.right().dot(rot.up()).abs() < EPS);
        assert!((Quat::IDENTITY.right() - Vec3::NEG_Y).length() < EPS);
    }

    #[test]
    fn slerp_fraction_is_clamped() {
        let a = Quat::IDENTITY;
        let b = yaw_rotation(90.0);
        assert!(same_rotation(slerp_clamped(a, b, 5.0), b, EPS));
        assert!(same_rotation(slerp_clamped(a, b, -1.0), a, EPS));
    }
}
