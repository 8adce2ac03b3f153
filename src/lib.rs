// src/lib.rs

pub mod config;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod intersection;
pub mod rendering_lib;

pub use config::{DisplayConfig, ScatterConfig, Sizing};
pub use error::{ConfigError, Result};
pub use generator::{PlacedShapeSet, Scatter, ShapeGenerator};
pub use geometry::{Bounds, Circle, Point2, Shape, ShapeKind, Square};
pub use intersection::ShapeIntersection;
