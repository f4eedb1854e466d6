//! Benchmark selection extraction and falloff deformation.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rupa::{
    ApplyParams, BlendMode, DeformationEngine, FieldIndex, PointField, RigidTransform,
    SelectionVolume, WorldPoint,
};

fn field(count: usize) -> PointField {
    let mut rng = StdRng::seed_from_u64(7);
    PointField::from_positions(
        (0..count)
            .map(|_| {
                WorldPoint::new(
                    rng.random_range(-2.0..2.0),
                    rng.random_range(-2.0..2.0),
                    rng.random_range(-2.0..2.0),
                )
            })
            .collect(),
    )
}

fn bench_selection(c: &mut Criterion) {
    env_logger::try_init().ok();
    let field = field(500_000);
    let selection = SelectionVolume::sphere(WorldPoint::new(0.5, 0.0, 0.0), 0.3);
    let mut group = c.benchmark_group("selection");

    group.bench_function("linear_scan", |b| b.iter(|| black_box(field.select_indices(&selection))));

    let mut index = FieldIndex::new(0.25).unwrap();
    index.rebuild(&field);
    group.bench_function("indexed", |b| b.iter(|| black_box(index.select(&field, &selection))));

    group.finish();
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");
    let selection = SelectionVolume::sphere(WorldPoint::ZERO, 0.5);
    let transform = RigidTransform::new(
        RigidTransform::from_axis_angle(nalgebra::Vector3::z(), 0.1).rotation,
        WorldPoint::new(0.0, 0.0, 0.05),
    );

    for blend in [BlendMode::Translation, BlendMode::Rigid] {
        let params = ApplyParams::linear(0.5)
            .with_blend(blend)
            .with_accumulate(false);
        let mut target = field(500_000);
        let mut engine = DeformationEngine::new();

        group.bench_with_input(BenchmarkId::new("blend", format!("{blend:?}")), &params, |b, params| {
            b.iter(|| black_box(engine.apply(&mut target, &selection, &transform, params)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_selection, bench_apply);
criterion_main!(benches);
