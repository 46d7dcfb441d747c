use std::{f64::consts::FRAC_PI_3, hint::black_box, time::Instant};

use hikari::{
    camera::Camera,
    integrators::{Whitted, WhittedParams},
    math::{
        transforms::{chain, rotation_x, rotation_y, scale, translation, view_transform},
        Matrix4x4, Point3, Vec3,
    },
    scene::demo::demo_scene,
    world::default_world,
};

const ITERATIONS: usize = 5000000;
const RENDERS: usize = 5;

fn report(name: &str, start: Instant, count: usize, unit: &str) {
    let elapsed_ns = start.elapsed().as_nanos();
    let elapsed_ms = (elapsed_ns as f64) * 1e-6;
    let us_per_op = (elapsed_ns as f64) * 1e-3 / (count as f64);
    println!(
        "{:<8} took {:6.1} ms total, {:0.4} us per {}",
        name, elapsed_ms, us_per_op, unit
    );
}

fn bench_invert(name: &str, m: &Matrix4x4<f64>) {
    let mut m = *m;
    let start = Instant::now();
    for _ in 0..ITERATIONS {
        m = match m.try_inverted() {
            Ok(inv) => inv,
            Err(e) => panic!("{}: {}", name, e),
        };
        if m.m[0][0].is_nan() {
            panic!("We only wanted to force the loop to be executed!")
        }
    }
    report(name, start, ITERATIONS, "invert");
}

fn bench_mul(m: &Matrix4x4<f64>) {
    let start = Instant::now();
    for _ in 0..ITERATIONS {
        let prod = black_box(m) * black_box(m);
        if prod.m[0][0].is_nan() {
            panic!("We only wanted to force the loop to be executed!")
        }
    }
    report("Mul", start, ITERATIONS, "mul");
}

fn main() -> hikari::Result<()> {
    let s = scale(2.0, 3.0, 4.0);
    let r = chain(&[rotation_x(0.7), rotation_y(-1.3)]);
    let t = translation(Vec3::new(2.0, 3.0, 4.0));

    bench_invert("Identity", &Matrix4x4::identity());
    bench_invert("S", s.m());
    bench_invert("SR", chain(&[s.clone(), r.clone()]).m());
    let srt = chain(&[s, r, t]);
    bench_invert("SRT", srt.m());
    bench_mul(srt.m());

    let integrator = Whitted::new(WhittedParams::default());

    let world = default_world()?;
    let camera = Camera::new(200, 100, FRAC_PI_3)?.with_transform(view_transform(
        Point3::new(0.0, 0.0, -5.0),
        Point3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    )?);
    let start = Instant::now();
    for _ in 0..RENDERS {
        camera.render(&world, &integrator)?;
    }
    report("Default", start, RENDERS * 200 * 100, "pixel");

    let (world, camera) = demo_scene(200, 100)?;
    let start = Instant::now();
    for _ in 0..RENDERS {
        camera.render(&world, &integrator)?;
    }
    report("Demo", start, RENDERS * 200 * 100, "pixel");

    Ok(())
}
