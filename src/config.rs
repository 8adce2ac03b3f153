// src/config.rs

use std::ops::RangeInclusive;

use crate::error::{ConfigError, Result};
use crate::geometry::Bounds;

pub const SEED_ENV_VAR: &str = "SHAPE_SCATTER_SEED";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sizing {
    pub min_radius: u32,
    pub max_radius: u32,
    pub square_side: u32,
}

impl Default for Sizing {
    fn default() -> Self {
        Self { min_radius: 3, max_radius: 15, square_side: 15 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScatterConfig {
    pub bounds: Bounds,
    pub sizing: Sizing,
    pub count_range: RangeInclusive<u32>,
    pub max_attempts_per_shape: u32,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            sizing: Sizing::default(),
            count_range: 5..=15,
            max_attempts_per_shape: 100,
        }
    }
}

impl ScatterConfig {
    pub fn validate(&self) -> Result<()> {
        validate_placement(&self.bounds, &self.sizing)?;
        if self.count_range.is_empty() {
            return Err(ConfigError::EmptyCountRange {
                start: *self.count_range.start(),
                end: *self.count_range.end(),
            });
        }
        Ok(())
    }
}

/// Checks that every coordinate and size range the placement engine draws from is non-empty.
pub fn validate_placement(bounds: &Bounds, sizing: &Sizing) -> Result<()> {
    let Bounds { width, height } = *bounds;
    if width == 0 || height == 0 {
        return Err(ConfigError::EmptyCanvas { width, height });
    }
    if sizing.min_radius == 0 {
        return Err(ConfigError::ZeroRadius);
    }
    if sizing.min_radius > sizing.max_radius {
        return Err(ConfigError::InvertedRadiusRange {
            min: sizing.min_radius,
            max: sizing.max_radius,
        });
    }
    let diameter = sizing.max_radius.saturating_mul(2);
    if diameter > width || diameter > height {
        return Err(ConfigError::CircleExceedsCanvas { radius: sizing.max_radius, width, height });
    }
    if sizing.square_side == 0 {
        return Err(ConfigError::ZeroSquareSide);
    }
    if sizing.square_side > width || sizing.square_side > height {
        return Err(ConfigError::SquareExceedsCanvas { side: sizing.square_side, width, height });
    }
    Ok(())
}

/// How the finished canvas is presented.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayConfig {
    pub grid_denominator: u32,
    pub window_width: u32,
    pub window_height: u32,
    pub title: String,
}

impl DisplayConfig {
    pub fn for_canvas(bounds: &Bounds) -> Self {
        Self {
            grid_denominator: 10,
            window_width: 700,
            window_height: 700,
            title: format!("Alchemist {}x{}", bounds.width, bounds.height),
        }
    }

    /// Spacing between vertical and horizontal grid lines, `None` when the grid is disabled.
    pub fn grid_steps(&self, bounds: &Bounds) -> Option<(f32, f32)> {
        if self.grid_denominator == 0 {
            return None;
        }
        let denominator = self.grid_denominator as f32;
        Some((bounds.width as f32 / denominator, bounds.height as f32 / denominator))
    }

    /// Canvas units covered by one window pixel along the wider axis.
    pub fn units_per_pixel(&self, bounds: &Bounds) -> f32 {
        let x = bounds.width as f32 / self.window_width.max(1) as f32;
        let y = bounds.height as f32 / self.window_height.max(1) as f32;
        x.max(y)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::for_canvas(&Bounds::default())
    }
}

pub fn parse_seed(value: Option<&str>) -> Option<u64> {
    value.and_then(|v| v.trim().parse().ok())
}
