// src/error.rs

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Placement settings that would leave a random draw range empty or inverted.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("canvas must have a non-zero size, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },
    #[error("minimum circle radius must be positive")]
    ZeroRadius,
    #[error("circle radius range is inverted: {min} > {max}")]
    InvertedRadiusRange { min: u32, max: u32 },
    #[error("circle of radius {radius} does not fit a {width}x{height} canvas")]
    CircleExceedsCanvas { radius: u32, width: u32, height: u32 },
    #[error("square side must be positive")]
    ZeroSquareSide,
    #[error("square of side {side} does not fit a {width}x{height} canvas")]
    SquareExceedsCanvas { side: u32, width: u32, height: u32 },
    #[error("shape count range {start}..={end} is empty")]
    EmptyCountRange { start: u32, end: u32 },
}
