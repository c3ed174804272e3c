//! Places the camera behind the pivot and clamps it against the world.

use glam::{Quat, Vec3};

use crate::options::{CollisionOptions, OrbitOptions};
use crate::util::angles::RotationAxes;
use crate::vehicle::VehicleSnapshot;
use crate::world::{CollisionProbe, ProbeQuery};

/// Result of one pose solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseSolution {
    /// Vehicle center of mass in world space.
    pub pivot: Vec3,
    /// Where the camera wants to be with nothing in the way.
    pub desired: Vec3,
    /// Collision-safe camera position.
    pub position: Vec3,
    /// Camera rotation.
    pub rotation: Quat,
}

impl PoseSolution {
    /// Whether the probe pulled the camera in from `desired`.
    #[must_use]
    pub fn is_obstructed(&self) -> bool {
        self.position != self.desired
    }
}

/// Unclamped camera position for `rotation` around `vehicle`.
#[must_use]
pub fn desired_position(
    vehicle: &VehicleSnapshot,
    rotation: Quat,
    orbit: &OrbitOptions,
) -> Vec3 {
    vehicle.pivot()
        + rotation.backward() * (orbit.distance * vehicle.scale)
        + Vec3::Z * (orbit.height * vehicle.scale)
}

/// Solve the camera pose and run the collision probe from the pivot.
///
/// The probe's answer is projected back onto the pivot→desired segment, so
/// the camera can only ever move toward the pivot, never past the desired
/// point or off the line. A non-finite answer counts as fully blocked.
pub fn solve_pose<P: CollisionProbe + ?Sized>(
    vehicle: &VehicleSnapshot,
    rotation: Quat,
    orbit: &OrbitOptions,
    collision: &CollisionOptions,
    probe: &P,
) -> PoseSolution {
    let pivot = vehicle.pivot();
    let desired = desired_position(vehicle, rotation, orbit);

    let query = ProbeQuery {
        start: pivot,
        end: desired,
        radius: collision.radius.max(0.0),
        ignore: Some(vehicle.entity),
        world_only: true,
    };
    let stop = probe.probe(&query);

    let position = if stop == desired {
        desired
    } else if stop.is_finite() {
        constrain_to_segment(pivot, desired, stop)
    } else {
        log::trace!("collision probe returned {stop}, holding at pivot");
        pivot
    };

    PoseSolution {
        pivot,
        desired,
        position,
        rotation,
    }
}

fn constrain_to_segment(start: Vec3, end: Vec3, point: Vec3) -> Vec3 {
    let ray = end - start;
    let len_sq = ray.length_squared();
    if len_sq <= f32::EPSILON {
        return start;
    }
    let t = ((point - start).dot(ray) / len_sq).clamp(0.0, 1.0);
    start + ray * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::angles::{pitch_rotation, yaw_rotation};
    use crate::world::Unobstructed;

    fn stopping_at(fraction: f32) -> impl Fn(&ProbeQuery) -> Vec3 {
        move |q: &ProbeQuery| q.start.lerp(q.end, fraction)
    }

    #[test]
    fn unobstructed_pose_sits_behind_and_above() {
        let car = VehicleSnapshot::default();
        let pose = solve_pose(
            &car,
            Quat::IDENTITY,
            &OrbitOptions::default(),
            &CollisionOptions::default(),
            &Unobstructed,
        );
        assert_eq!(pose.position, Vec3::new(-150.0, 0.0, 35.0));
        assert!(!pose.is_obstructed());
    }

    #[test]
    fn offset_scales_with_vehicle() {
        let car = VehicleSnapshot {
            scale: 2.0,
            mass_center: Vec3::new(0.0, 0.0, 10.0),
            ..VehicleSnapshot::default()
        };
        let pose = solve_pose(
            &car,
            yaw_rotation(90.0),
            &OrbitOptions::default(),
            &CollisionOptions::default(),
            &Unobstructed,
        );
        let expected = Vec3::new(0.0, -300.0, 80.0);
        assert!((pose.position - expected).length() < 1e-3);
    }

    #[test]
    fn obstruction_pulls_camera_toward_pivot() {
        let car = VehicleSnapshot::default();
        let rot = yaw_rotation(30.0) * pitch_rotation(10.0);
        let pose = solve_pose(
            &car,
            rot,
            &OrbitOptions::default(),
            &CollisionOptions::default(),
            &stopping_at(0.25),
        );
        let full = (pose.desired - pose.pivot).length();
        let got = (pose.position - pose.pivot).length();
        assert!((got - full * 0.25).abs() < 1e-3);
        assert!(pose.is_obstructed());
    }

    #[test]
    fn probe_cannot_push_camera_past_desired() {
        let car = VehicleSnapshot::default();
        let pose = solve_pose(
            &car,
            Quat::IDENTITY,
            &OrbitOptions::default(),
            &CollisionOptions::default(),
            &stopping_at(3.0),
        );
        assert!((pose.position - pose.desired).length() < 1e-3);
    }

    #[test]
    fn non_finite_probe_answer_holds_at_pivot() {
        let car = VehicleSnapshot {
            position: Vec3::new(1.0, 2.0, 3.0),
            ..VehicleSnapshot::default()
        };
        let pose = solve_pose(
            &car,
            Quat::IDENTITY,
            &OrbitOptions::default(),
            &CollisionOptions::default(),
            &|_: &ProbeQuery| Vec3::NAN,
        );
        assert_eq!(pose.position, car.pivot());
    }

    #[test]
    fn probe_receives_vehicle_and_radius() {
        let car = VehicleSnapshot {
            entity: crate::vehicle::EntityId(42),
            ..VehicleSnapshot::default()
        };
        let seen = std::cell::Cell::new(None);
        let probe = |q: &ProbeQuery| {
            seen.set(Some((q.ignore, q.radius, q.world_only)));
            q.end
        };
        let _ = solve_pose(
            &car,
            Quat::IDENTITY,
            &OrbitOptions::default(),
            &CollisionOptions { radius: 3.5 },
            &probe,
        );
        assert_eq!(
            seen.get(),
            Some((Some(crate::vehicle::EntityId(42)), 3.5, true))
        );
    }
}
