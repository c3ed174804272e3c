//! World collision probe seam.
//!
//! The camera asks the host's collision engine to sweep a sphere from the
//! vehicle pivot to the desired camera position and uses the stopping point.

use glam::Vec3;

use crate::vehicle::EntityId;

/// A swept-sphere query from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeQuery {
    /// Sweep origin (the vehicle pivot).
    pub start: Vec3,
    /// Desired end of the sweep.
    pub end: Vec3,
    /// Radius of the swept sphere.
    pub radius: f32,
    /// Entity to exclude (the vehicle itself).
    pub ignore: Option<EntityId>,
    /// Only static world geometry should block the sweep.
    pub world_only: bool,
}

/// Synchronous collision query supplied by the host.
pub trait CollisionProbe {
    /// Sweep the query and return where the sphere center stops: `end` when
    /// nothing is hit, `start` when the sweep is blocked immediately.
    fn probe(&self, query: &ProbeQuery) -> Vec3;
}

impl<F> CollisionProbe for F
where
    F: Fn(&ProbeQuery) -> Vec3,
{
    fn probe(&self, query: &ProbeQuery) -> Vec3 {
        self(query)
    }
}

/// Empty world: every sweep reaches its end.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unobstructed;

impl CollisionProbe for Unobstructed {
    fn probe(&self, query: &ProbeQuery) -> Vec3 {
        query.end
    }
}

/// Infinite horizontal floor at `height`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroundPlane {
    /// World Z of the floor surface.
    pub height: f32,
}

impl CollisionProbe for GroundPlane {
    fn probe(&self, query: &ProbeQuery) -> Vec3 {
        let floor = self.height + query.radius;
        if query.start.z < floor {
            return query.start;
        }
        if query.end.z >= floor {
            return query.end;
        }
        let t = (query.start.z - floor) / (query.start.z - query.end.z);
        query.start.lerp(query.end, t.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(start: Vec3, end: Vec3) -> ProbeQuery {
        ProbeQuery {
            start,
            end,
            radius: 2.0,
            ignore: None,
            world_only: true,
        }
    }

    #[test]
    fn unobstructed_returns_end() {
        let q = query(Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(Unobstructed.probe(&q), q.end);
    }

    #[test]
    fn ground_plane_stops_sphere_above_floor() {
        let floor = GroundPlane { height: 0.0 };
        let q = query(Vec3::new(0.0, 0.0, 10.0), Vec3::new(10.0, 0.0, -10.0));
        let hit = floor.probe(&q);
        assert!((hit.z - 2.0).abs() < 1e-4);
        assert!((hit.x - 4.0).abs() < 1e-4);
    }

    #[test]
    fn ground_plane_passes_clear_sweeps() {
        let floor = GroundPlane { height: 0.0 };
        let q = query(Vec3::new(0.0, 0.0, 10.0), Vec3::new(10.0, 0.0, 5.0));
        assert_eq!(floor.probe(&q), q.end);
    }

    #[test]
    fn embedded_start_is_fully_blocked() {
        let floor = GroundPlane { height: 0.0 };
        let q = query(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 9.0));
        assert_eq!(floor.probe(&q), q.start);
    }

    #[test]
    fn closures_act_as_probes() {
        let probe = |q: &ProbeQuery| q.start;
        let q = query(Vec3::ONE, Vec3::ZERO);
        assert_eq!(probe.probe(&q), Vec3::ONE);
    }
}
