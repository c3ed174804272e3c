use chasecam::util::angles::yaw_rotation;
use chasecam::util::noise::{shake_field, CoherentNoise, DEFAULT_NOISE_SEED};
use chasecam::world::{GroundPlane, Unobstructed};
use chasecam::{CameraController, FrameTime, LookDelta, Options, VehicleSnapshot};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;

fn perlin_benchmark(c: &mut Criterion) {
    let noise = shake_field(DEFAULT_NOISE_SEED);
    c.bench_function("perlin_sample", |b| {
        b.iter(|| black_box(noise.sample(black_box(1.37), black_box(5.0), 0.0)))
    });
}

fn camera_tick_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("camera_tick");

    for speed in [0.0_f32, 1200.0, 2400.0] {
        let vehicle = VehicleSnapshot {
            rotation: yaw_rotation(30.0),
            speed,
            mass_center: Vec3::new(0.0, 0.0, 20.0),
            ..VehicleSnapshot::default()
        };
        let mut camera = CameraController::new(Options::default());
        camera.activate();
        let mut time = FrameTime::default();

        group.bench_function(format!("follow_{speed}"), |b| {
            b.iter(|| {
                time = time.advance(1.0 / 60.0);
                black_box(
                    camera.update(Some(&vehicle), &Unobstructed, time).copied(),
                )
            })
        });
    }

    let vehicle = VehicleSnapshot {
        speed: 600.0,
        ..VehicleSnapshot::default()
    };
    let ground = GroundPlane { height: 10.0 };
    let mut camera = CameraController::new(Options::default());
    camera.activate();
    let mut time = FrameTime::default();
    group.bench_function("orbit_with_ground_probe", |b| {
        b.iter(|| {
            time = time.advance(1.0 / 60.0);
            let _ = camera.apply_look(LookDelta::new(0.5, -0.8));
            black_box(camera.update(Some(&vehicle), &ground, time).copied())
        })
    });
    group.finish();
}

criterion_group!(benches, perlin_benchmark, camera_tick_benchmark);
criterion_main!(benches);
