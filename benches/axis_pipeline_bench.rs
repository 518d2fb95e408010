use std::hint::black_box;

use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use timelog_chart::core::axis::synthesize_x;
use timelog_chart::core::boundaries::generate;
use timelog_chart::core::{Sample, TimeScale};

fn minute_samples(count: i64) -> Vec<Sample> {
    let start: DateTime<Utc> = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            let phase = i as f64 / 180.0;
            Sample::new(start + Duration::minutes(i), phase.sin().abs())
        })
        .collect()
}

fn bench_boundary_generation_10k(c: &mut Criterion) {
    let samples = minute_samples(10_000);

    c.bench_function("boundary_generation_10k", |b| {
        b.iter(|| generate(black_box(&samples), black_box("1h")).expect("generate"))
    });
}

fn bench_scale_mapping_10k(c: &mut Criterion) {
    let samples = minute_samples(10_000);
    let boundaries = generate(&samples, "1h").expect("generate");
    let scale = TimeScale::build(&boundaries, 1920.0).expect("build");

    c.bench_function("scale_mapping_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for sample in &samples {
                acc += scale.time_to_pixel(black_box(sample.time));
            }
            acc
        })
    });
}

fn bench_axis_synthesis(c: &mut Criterion) {
    let samples = minute_samples(10_000);
    let boundaries = generate(&samples, "1h").expect("generate");
    let scale = TimeScale::build(&boundaries, 1920.0).expect("build");

    c.bench_function("axis_synthesis", |b| {
        b.iter(|| synthesize_x(black_box(&boundaries), black_box(&scale)))
    });
}

criterion_group!(
    benches,
    bench_boundary_generation_10k,
    bench_scale_mapping_10k,
    bench_axis_synthesis
);
criterion_main!(benches);
