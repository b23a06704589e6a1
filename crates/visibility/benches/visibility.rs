use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use rand::rngs::SmallRng;

use sightcone_visibility::*;

const AIM_COUNT: usize = 256;

fn random_aims() -> Vec<Point> {
    let mut rng = SmallRng::seed_from_u64(5);
    (0..AIM_COUNT)
        .map(|_| Point::new(rng.gen_range(0.0..840.0), rng.gen_range(0.0..360.0)))
        .collect()
}

fn sweep(calc: &VisibilityCalculator, aims: &[Point], fov: f64) {
    let pivot = Point::new(420.0, 180.0);
    for aim in aims {
        black_box(
            calc.compute_visibility_polygon(pivot, black_box(*aim), fov)
                .ok(),
        );
    }
}

pub fn benchmarks(c: &mut Criterion) {
    sightcone_logging::log_to_stderr();
    let calc = match VisibilityCalculator::from_scene(&Scene::demo()) {
        Ok(c) => c,
        Err(e) => panic!("Demo scene should load: {}", e),
    };
    let aims = random_aims();

    c.bench_function("demo_fov_90", |b| b.iter(|| sweep(&calc, &aims, 90.0)));
    c.bench_function("demo_fov_360", |b| b.iter(|| sweep(&calc, &aims, 360.0)));
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
