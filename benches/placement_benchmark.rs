// benches/placement_benchmark.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shape_scatter::{Bounds, ScatterConfig, Shape, ShapeGenerator, ShapeIntersection, Sizing};

fn random_shape(rng: &mut impl Rng) -> Shape {
    let x = rng.gen_range(0.0..500.0);
    let y = rng.gen_range(0.0..500.0);
    if rng.gen_bool(0.5) {
        Shape::circle(x, y, rng.gen_range(3.0..15.0))
    } else {
        Shape::square(x, y, 15.0)
    }
}

fn intersection_benchmark_fn(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);

    const NUM_BENCH_PAIRS: usize = 100;
    let pairs: Vec<(Shape, Shape)> = (0..NUM_BENCH_PAIRS)
        .map(|_| (random_shape(&mut rng), random_shape(&mut rng)))
        .collect();

    let mut group = c.benchmark_group("IntersectionOperations");
    group.bench_function("intersects_100_mixed_pairs", |b| {
        let mut pair_iter = pairs.iter().cycle();
        b.iter(|| {
            let (a, other) = pair_iter.next().unwrap();
            ShapeIntersection::intersects(black_box(a), black_box(other))
        })
    });
    group.finish();
}

fn placement_benchmark_fn(c: &mut Criterion) {
    let mut group = c.benchmark_group("PlacementOperations");

    group.bench_function("scatter_default_config", |b| {
        let config = ScatterConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        b.iter(|| ShapeGenerator::scatter(&mut rng, black_box(&config)).unwrap())
    });

    // Dense canvas where most slots exhaust their attempts.
    group.bench_function("generate_crowded_200_slots", |b| {
        let bounds = Bounds::new(120, 120);
        let sizing = Sizing::default();
        let mut rng = StdRng::seed_from_u64(7);
        b.iter(|| ShapeGenerator::generate(&mut rng, black_box(200), &bounds, &sizing, 100).unwrap())
    });
    group.finish();
}

criterion_group!(benches, intersection_benchmark_fn, placement_benchmark_fn);
criterion_main!(benches);
