// src/generator.rs

use std::ops::RangeInclusive;

use log::{debug, trace};
use rand::Rng;

use crate::config::{validate_placement, ScatterConfig, Sizing};
use crate::error::{ConfigError, Result};
use crate::geometry::{Bounds, Shape, ShapeKind};
use crate::intersection::ShapeIntersection;

/// Shapes accepted during one run, in acceptance order.
///
/// Shapes can only be added through [`PlacedShapeSet::try_place`], which keeps the set
/// pairwise non-overlapping. Nothing is ever removed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlacedShapeSet {
    shapes: Vec<Shape>,
}

impl PlacedShapeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `candidate` unless it intersects a shape already in the set.
    pub fn try_place(&mut self, candidate: Shape) -> bool {
        if self
            .shapes
            .iter()
            .any(|placed| ShapeIntersection::intersects(&candidate, placed))
        {
            return false;
        }
        self.shapes.push(candidate);
        true
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    pub fn into_vec(self) -> Vec<Shape> {
        self.shapes
    }
}

impl<'a> IntoIterator for &'a PlacedShapeSet {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}

/// Outcome of a full run: the drawn target count and what could actually be placed.
#[derive(Clone, Debug, PartialEq)]
pub struct Scatter {
    pub target_count: u32,
    pub shapes: PlacedShapeSet,
}

impl Scatter {
    /// Slots that ran out of attempts.
    pub fn skipped(&self) -> u32 {
        self.target_count.saturating_sub(self.shapes.len() as u32)
    }
}

pub struct ShapeGenerator;

impl ShapeGenerator {
    /// Draws the target count from `config.count_range`, then fills the canvas.
    pub fn scatter<R: Rng + ?Sized>(rng: &mut R, config: &ScatterConfig) -> Result<Scatter> {
        config.validate()?;
        let target_count = Self::random_target_count(rng, &config.count_range)?;
        let shapes = Self::generate(
            rng,
            target_count,
            &config.bounds,
            &config.sizing,
            config.max_attempts_per_shape,
        )?;
        Ok(Scatter { target_count, shapes })
    }

    pub fn random_target_count<R: Rng + ?Sized>(
        rng: &mut R,
        range: &RangeInclusive<u32>,
    ) -> Result<u32> {
        if range.is_empty() {
            return Err(ConfigError::EmptyCountRange { start: *range.start(), end: *range.end() });
        }
        Ok(rng.gen_range(range.clone()))
    }

    /// Rejection-sampling placement of up to `target_count` shapes.
    ///
    /// Each slot gets at most `max_attempts_per_shape` random candidates; a slot whose
    /// candidates all collide is skipped, so the result may hold fewer shapes than requested.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        target_count: u32,
        bounds: &Bounds,
        sizing: &Sizing,
        max_attempts_per_shape: u32,
    ) -> Result<PlacedShapeSet> {
        validate_placement(bounds, sizing)?;

        let mut placed = PlacedShapeSet::new();
        let mut total_attempts: u64 = 0;

        for slot in 0..target_count {
            let mut attempts = 0;
            let mut valid_position = false;

            while !valid_position && attempts < max_attempts_per_shape {
                attempts += 1;
                let candidate = Self::random_candidate(rng, bounds, sizing);
                valid_position = placed.try_place(candidate);
            }

            total_attempts += u64::from(attempts);
            if !valid_position {
                trace!("slot {} skipped after {} attempts", slot, attempts);
            }
        }

        debug!(
            "placed {} of {} shapes in {} attempts",
            placed.len(),
            target_count,
            total_attempts
        );
        Ok(placed)
    }

    /// One candidate shape fully inside `bounds`. Assumes `validate_placement` passed.
    fn random_candidate<R: Rng + ?Sized>(rng: &mut R, bounds: &Bounds, sizing: &Sizing) -> Shape {
        match Self::random_kind(rng) {
            ShapeKind::Circle => Self::random_circle(rng, bounds, sizing),
            ShapeKind::Square => Self::random_square(rng, bounds, sizing),
        }
    }

    fn random_kind<R: Rng + ?Sized>(rng: &mut R) -> ShapeKind {
        if rng.gen_bool(0.5) {
            ShapeKind::Circle
        } else {
            ShapeKind::Square
        }
    }

    fn random_circle<R: Rng + ?Sized>(rng: &mut R, bounds: &Bounds, sizing: &Sizing) -> Shape {
        let radius = rng.gen_range(sizing.min_radius..=sizing.max_radius);
        let x = rng.gen_range(radius..=bounds.width - radius);
        let y = rng.gen_range(radius..=bounds.height - radius);
        Shape::circle(x as f32, y as f32, radius as f32)
    }

    fn random_square<R: Rng + ?Sized>(rng: &mut R, bounds: &Bounds, sizing: &Sizing) -> Shape {
        let side = sizing.square_side;
        let x = rng.gen_range(0..=bounds.width - side);
        let y = rng.gen_range(0..=bounds.height - side);
        Shape::square(x as f32, y as f32, side as f32)
    }
}
