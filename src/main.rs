//! Scripted drive that logs the chase camera pose once per second.

use std::path::Path;

use chasecam::camera::{CameraUniform, LookInput};
use chasecam::util::angles::{yaw_rotation, Angles};
use chasecam::world::GroundPlane;
use chasecam::{
    CameraController, EntityId, FrameTime, Options, VehicleSnapshot,
};
use glam::Vec3;
use rand::{rngs::StdRng, Rng, SeedableRng};

const TICK: f32 = 1.0 / 60.0;
const PRESET_DIR: &str = "presets";

/// Scripted car driving a loop on bumpy flat ground: idle, accelerate into
/// a turn, brake, reverse, then a short jump.
struct DemoCar {
    position: Vec3,
    heading: f32,
    speed: f32,
    airborne_for: f32,
    /// Body pitch from road bumps, degrees.
    bump: f32,
    road: StdRng,
}

impl DemoCar {
    fn new(seed: u64) -> Self {
        Self {
            position: Vec3::ZERO,
            heading: 0.0,
            speed: 0.0,
            airborne_for: 0.0,
            bump: 0.0,
            road: StdRng::seed_from_u64(seed),
        }
    }

    fn step(&mut self, t: f32, dt: f32) {
        let target_speed = match t {
            t if t < 2.0 => 0.0,
            t if t < 12.0 => 2500.0,
            t if t < 16.0 => 0.0,
            t if t < 20.0 => -300.0,
            _ => 800.0,
        };
        self.speed += (target_speed - self.speed) * (dt * 0.8).min(1.0);
        if (2.0..12.0).contains(&t) {
            self.heading += 15.0 * dt;
        }
        if (22.0..22.0 + dt).contains(&t) {
            self.airborne_for = 1.2;
        }
        self.airborne_for = (self.airborne_for - dt).max(0.0);

        if self.airborne_for <= 0.0 {
            let roughness = (self.speed.abs() / 500.0).min(4.0);
            let kick = self.road.random_range(-1.0..=1.0) * roughness;
            self.bump += (kick - self.bump) * (dt * 6.0).min(1.0);
        }

        let forward = yaw_rotation(self.heading) * Vec3::X;
        self.position += forward * self.speed * dt;
    }

    fn snapshot(&self) -> VehicleSnapshot {
        let pitch = if self.airborne_for > 0.0 { -15.0 } else { self.bump };
        VehicleSnapshot {
            entity: EntityId(1),
            position: self.position,
            rotation: Angles::new(pitch, self.heading, 0.0).to_quat(),
            speed: self.speed,
            grounded: self.airborne_for <= 0.0,
            scale: 1.0,
            mass_center: Vec3::new(0.0, 0.0, 20.0),
        }
    }
}

fn resolve_options(input: Option<&str>) -> Result<Options, String> {
    let Some(input) = input else {
        return Ok(Options::default());
    };
    let path = Path::new(input);
    if path.exists() {
        return Options::load(path).map_err(|e| e.to_string());
    }
    let dir = Path::new(PRESET_DIR);
    let presets = Options::list_presets(dir);
    if presets.iter().any(|p| p == input) {
        return Options::load_preset(dir, input).map_err(|e| e.to_string());
    }
    Err(format!(
        "Not a preset file or known preset: {input} (available: {})",
        presets.join(", ")
    ))
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let options = match resolve_options(args.get(1).map(String::as_str)) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            log::error!("Usage: chasecam [PRESET or path.toml] [SECONDS]");
            std::process::exit(1);
        }
    };
    let seconds = args
        .get(2)
        .and_then(|s| s.parse::<f32>().ok())
        .unwrap_or(26.0);

    let projection = options.projection.clone();
    let mut camera = CameraController::new(options);
    camera.activate();

    let ground = GroundPlane { height: 0.0 };
    let mut look = LookInput::default();
    let mut uniform = CameraUniform::new();
    let mut car = DemoCar::new(7);
    let mut time = FrameTime::default();

    let ticks = (seconds / TICK) as u32;
    for tick in 0..ticks {
        time = time.advance(TICK);
        car.step(time.now, TICK);

        // Drag the mouse to the left for half a second mid-turn.
        if (6.0..6.5).contains(&time.now) {
            look.cursor_moved(-(tick as f32) * 4.0, 0.0);
        } else {
            look.release_cursor();
        }
        let _ = camera.apply_look(look.take());

        let snapshot = car.snapshot();
        let Some(state) =
            camera.update(Some(&snapshot), &ground, time).copied()
        else {
            continue;
        };
        uniform.update(&state, 16.0 / 9.0, &projection);

        if tick % 60 == 0 {
            let angles = state.angles();
            log::info!(
                "t={:5.2}s speed={:7.1} mode={:?} pos=({:8.1}, {:8.1}, \
                 {:6.1}) yaw={:7.2} pitch={:6.2} fov={:5.1}",
                time.now,
                snapshot.speed,
                camera.mode(),
                state.position.x,
                state.position.y,
                state.position.z,
                angles.yaw,
                angles.pitch,
                state.fov,
            );
        }
    }

    camera.deactivate();
    log::info!(
        "done after {ticks} ticks, final view direction {:?}",
        uniform.forward
    );
}
