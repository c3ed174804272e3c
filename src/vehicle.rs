//! Read-only vehicle state the camera consumes each tick.

use glam::{Quat, Vec3};

use crate::util::angles::pitch_of;

/// Opaque handle of a world entity, used to exclude the vehicle from
/// collision probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EntityId(pub u64);

/// Snapshot of the controlled vehicle, supplied by the physics layer.
///
/// The camera never mutates it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleSnapshot {
    /// Entity handle, ignored by the collision probe.
    pub entity: EntityId,
    /// World position of the vehicle origin.
    pub position: Vec3,
    /// World orientation.
    pub rotation: Quat,
    /// Signed movement speed; negative while reversing.
    pub speed: f32,
    /// Whether the wheels are on the ground.
    pub grounded: bool,
    /// Uniform model scale; orbit distance and height scale with it.
    pub scale: f32,
    /// Center of mass in the vehicle's local frame.
    pub mass_center: Vec3,
}

impl Default for VehicleSnapshot {
    fn default() -> Self {
        Self {
            entity: EntityId::default(),
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            speed: 0.0,
            grounded: true,
            scale: 1.0,
            mass_center: Vec3::ZERO,
        }
    }
}

impl VehicleSnapshot {
    /// Whether the physics body is usable. Non-finite transforms or a
    /// degenerate scale mean the body is gone or mid-teardown.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.position.is_finite()
            && self.rotation.is_finite()
            && self.rotation.length_squared() > 1e-6
            && self.mass_center.is_finite()
            && self.speed.is_finite()
            && self.scale.is_finite()
            && self.scale > 0.0
    }

    /// World position of the center of mass: the camera pivot.
    #[must_use]
    pub fn pivot(&self) -> Vec3 {
        self.position + self.rotation * self.mass_center
    }

    /// Moving backwards.
    #[must_use]
    pub fn is_reversing(&self) -> bool {
        self.speed < 0.0
    }

    /// Body pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        pitch_of(self.rotation)
    }
}
