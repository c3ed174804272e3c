use glam::Quat;

use super::fov::FovSmoother;
use super::input::LookDelta;
use super::orbit::{OrbitMode, OrbitTracker};
use super::pose::solve_pose;
use super::shake::apply_shake;
use super::state::CameraState;
use crate::options::Options;
use crate::util::angles::Angles;
use crate::util::frame_timing::FrameTime;
use crate::util::noise::{shake_field, CoherentNoise, Perlin};
use crate::vehicle::VehicleSnapshot;
use crate::world::CollisionProbe;

/// Per-session smoothing state, split from the controller so a tick can
/// borrow it mutably alongside the options and noise.
#[derive(Debug, Clone)]
struct Session {
    orbit: OrbitTracker,
    fov: FovSmoother,
    state: CameraState,
}

impl Session {
    fn new(options: &Options) -> Self {
        let fov = FovSmoother::new(&options.fov);
        Self {
            orbit: OrbitTracker::new(),
            fov,
            state: CameraState {
                fov: fov.current(),
                ..CameraState::default()
            },
        }
    }

    fn tick<P, N>(
        &mut self,
        vehicle: &VehicleSnapshot,
        probe: &P,
        noise: &N,
        opts: &Options,
        time: FrameTime,
    ) -> &CameraState
    where
        P: CollisionProbe + ?Sized,
        N: CoherentNoise + ?Sized,
    {
        let dt = tick_delta(time);
        let speed = vehicle.speed.abs();

        let rotation =
            self.orbit.update(vehicle, dt, &opts.orbit, &opts.car_pitch);
        let pose = solve_pose(
            vehicle,
            rotation,
            &opts.orbit,
            &opts.collision,
            probe,
        );
        let fov = self.fov.update(speed, dt, &opts.fov);
        let (position, rotation) = apply_shake(
            pose.position,
            pose.rotation,
            speed,
            time.now,
            &opts.shake,
            noise,
        );

        self.state = CameraState {
            position,
            rotation,
            fov,
        };
        &self.state
    }
}

/// Usable seconds for this tick; negative or non-finite deltas count as 0.
fn tick_delta(time: FrameTime) -> f32 {
    if time.delta.is_finite() {
        time.delta.max(0.0)
    } else {
        0.0
    }
}

/// Third-person chase camera for one vehicle-occupancy session.
///
/// Call [`activate`](Self::activate) on vehicle entry, feed look input
/// through [`apply_look`](Self::apply_look) as it arrives, and call
/// [`update`](Self::update) once per tick. Each tick runs the orbit/follow
/// tracker, solves and collision-clamps the pose, smooths the FOV, and
/// layers shake on top.
pub struct CameraController {
    options: Options,
    noise: Perlin,
    active: bool,
    session: Session,
}

impl CameraController {
    /// Create an inactive camera with the given tunables.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            noise: shake_field(options.shake.seed),
            session: Session::new(&options),
            options,
            active: false,
        }
    }

    /// Current tunables.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the tunables (e.g. after loading a preset). Takes effect on
    /// the next tick; smoothing state carries over.
    pub fn set_options(&mut self, options: Options) {
        if options.shake.seed != self.options.shake.seed {
            self.noise = shake_field(options.shake.seed);
        }
        self.options = options;
    }

    /// Reset orbit, car-pitch, and FOV state for a new vehicle session.
    pub fn activate(&mut self) {
        let last = self.session.state;
        self.session = Session::new(&self.options);
        self.session.state.position = last.position;
        self.session.state.rotation = last.rotation;
        self.active = true;
        log::debug!("chase camera activated");
    }

    /// End the session. The last state stays readable.
    pub fn deactivate(&mut self) {
        if self.active {
            log::debug!("chase camera deactivated");
        }
        self.active = false;
        self.session.orbit.reset();
    }

    /// Whether a vehicle session is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Orbit or follow.
    #[must_use]
    pub fn mode(&self) -> OrbitMode {
        self.session.orbit.mode()
    }

    /// Resolved view angles the input layer should adopt.
    #[must_use]
    pub fn view_angles(&self) -> Angles {
        self.session.orbit.angles()
    }

    /// Smoothed camera rotation before shake.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        self.session.orbit.rotation()
    }

    /// Smoothed car pitch in degrees.
    #[must_use]
    pub fn car_pitch(&self) -> f32 {
        self.session.orbit.car_pitch()
    }

    /// Last emitted camera state.
    #[must_use]
    pub fn state(&self) -> &CameraState {
        &self.session.state
    }

    /// Fold look input into the orbit target and return the view angles for
    /// the input layer. Non-zero input enters orbit mode immediately.
    pub fn apply_look(&mut self, delta: LookDelta) -> Angles {
        if !self.active {
            return self.view_angles();
        }
        self.session.orbit.apply_look(delta, &self.options.orbit)
    }

    /// Run one tick with the built-in noise sampler.
    ///
    /// Returns `None` and keeps the previous state when the camera is
    /// inactive or the vehicle is missing or invalid. The orbit cooldown
    /// still runs during such ticks.
    pub fn update<P: CollisionProbe + ?Sized>(
        &mut self,
        vehicle: Option<&VehicleSnapshot>,
        probe: &P,
        time: FrameTime,
    ) -> Option<&CameraState> {
        let vehicle = self.tickable(vehicle, time)?;
        let noise = &self.noise;
        Some(self.session.tick(vehicle, probe, noise, &self.options, time))
    }

    /// Run one tick with a caller-supplied noise source.
    pub fn update_with_noise<P, N>(
        &mut self,
        vehicle: Option<&VehicleSnapshot>,
        probe: &P,
        noise: &N,
        time: FrameTime,
    ) -> Option<&CameraState>
    where
        P: CollisionProbe + ?Sized,
        N: CoherentNoise + ?Sized,
    {
        let vehicle = self.tickable(vehicle, time)?;
        Some(self.session.tick(vehicle, probe, noise, &self.options, time))
    }

    fn tickable<'a>(
        &mut self,
        vehicle: Option<&'a VehicleSnapshot>,
        time: FrameTime,
    ) -> Option<&'a VehicleSnapshot> {
        if !self.active {
            log::trace!("camera inactive, skipping tick");
            return None;
        }
        let vehicle = vehicle.filter(|v| v.is_valid());
        if vehicle.is_none() {
            log::trace!("no valid vehicle, holding camera");
            self.session
                .orbit
                .advance_idle(tick_delta(time), &self.options.orbit);
        }
        vehicle
    }
}
