//! Property tests for the intersection oracle and the placement engine.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use shape_scatter::{
    Bounds, ConfigError, Scatter, ScatterConfig, Shape, ShapeGenerator, ShapeIntersection, Sizing,
};

fn shape_strategy() -> impl Strategy<Value = Shape> {
    prop_oneof![
        (-50i32..50, -50i32..50, 1u32..20)
            .prop_map(|(x, y, r)| Shape::circle(x as f32, y as f32, r as f32)),
        (-50i32..50, -50i32..50, 1u32..20)
            .prop_map(|(x, y, s)| Shape::square(x as f32, y as f32, s as f32)),
    ]
}

fn config_strategy() -> impl Strategy<Value = ScatterConfig> {
    (40u32..300, 40u32..300, 1u32..5, 0u32..10, 1u32..20, 0u32..30, 1u32..60).prop_map(
        |(width, height, min_radius, extra_radius, square_side, count_min, attempts)| {
            ScatterConfig {
                bounds: Bounds::new(width, height),
                sizing: Sizing { min_radius, max_radius: min_radius + extra_radius, square_side },
                count_range: count_min..=count_min + 10,
                max_attempts_per_shape: attempts,
            }
        },
    )
}

fn assert_placement_invariants(scatter: &Scatter, bounds: &Bounds) {
    let shapes = scatter.shapes.shapes();
    assert!(shapes.len() as u32 <= scatter.target_count);
    for (i, a) in shapes.iter().enumerate() {
        assert!(bounds.contains(a), "{:?} escapes {:?}", a, bounds);
        for b in &shapes[i + 1..] {
            assert!(!ShapeIntersection::intersects(a, b), "{:?} overlaps {:?}", a, b);
        }
    }
}

proptest! {
    #[test]
    fn oracle_is_symmetric(a in shape_strategy(), b in shape_strategy()) {
        prop_assert_eq!(
            ShapeIntersection::intersects(&a, &b),
            ShapeIntersection::intersects(&b, &a)
        );
    }

    #[test]
    fn oracle_is_deterministic(a in shape_strategy(), b in shape_strategy()) {
        let first = ShapeIntersection::intersects(&a, &b);
        for _ in 0..4 {
            prop_assert_eq!(ShapeIntersection::intersects(&a, &b), first);
        }
    }

    #[test]
    fn shapes_intersect_themselves(a in shape_strategy()) {
        prop_assert!(ShapeIntersection::intersects(&a, &a));
    }

    #[test]
    fn generated_sets_are_disjoint_and_contained(config in config_strategy(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let scatter = ShapeGenerator::scatter(&mut rng, &config).unwrap();
        prop_assert!(config.count_range.contains(&scatter.target_count));
        assert_placement_invariants(&scatter, &config.bounds);
    }

    #[test]
    fn seeded_runs_are_reproducible(seed in any::<u64>()) {
        let config = ScatterConfig::default();
        let a = ShapeGenerator::scatter(&mut StdRng::seed_from_u64(seed), &config).unwrap();
        let b = ShapeGenerator::scatter(&mut StdRng::seed_from_u64(seed), &config).unwrap();
        prop_assert_eq!(a, b);
    }
}

#[test]
fn scenario_overlapping_circles() {
    let a = Shape::circle(0.0, 0.0, 3.0);
    let b = Shape::circle(5.0, 0.0, 3.0);
    assert!(ShapeIntersection::intersects(&a, &b));
}

#[test]
fn scenario_separate_circles() {
    let a = Shape::circle(0.0, 0.0, 3.0);
    let b = Shape::circle(10.0, 0.0, 3.0);
    assert!(!ShapeIntersection::intersects(&a, &b));
}

#[test]
fn scenario_edge_touching_squares() {
    let a = Shape::square(0.0, 0.0, 10.0);
    let b = Shape::square(10.0, 0.0, 10.0);
    assert!(ShapeIntersection::intersects(&a, &b));
}

#[test]
fn scenario_circle_near_square() {
    let circle = Shape::circle(5.0, 5.0, 2.0);
    let square = Shape::square(0.0, 0.0, 4.0);
    assert!(ShapeIntersection::intersects(&circle, &square));
}

#[test]
fn scenario_square_wider_than_canvas() {
    let mut rng = StdRng::seed_from_u64(2024);
    let sizing = Sizing { min_radius: 1, max_radius: 1, square_side: 20 };
    let result = ShapeGenerator::generate(&mut rng, 1, &Bounds::new(10, 10), &sizing, 5);
    assert_eq!(result, Err(ConfigError::SquareExceedsCanvas { side: 20, width: 10, height: 10 }));
}

#[test]
fn default_config_fills_most_of_the_target() {
    // 500x500 with at most 15 small shapes leaves plenty of room.
    let config = ScatterConfig::default();
    for seed in 0..20 {
        let scatter = ShapeGenerator::scatter(&mut StdRng::seed_from_u64(seed), &config).unwrap();
        assert_eq!(scatter.shapes.len() as u32, scatter.target_count, "seed {}", seed);
        assert_placement_invariants(&scatter, &config.bounds);
    }
}
