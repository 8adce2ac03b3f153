// src/geometry.rs

use bytemuck::{Pod, Zeroable};

use crate::intersection::ShapeIntersection;

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable, PartialEq)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point2,
    pub radius: f32,
}

/// Axis-aligned square anchored at its lower-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Square {
    pub origin: Point2,
    pub side: f32,
}

impl Square {
    pub fn max_corner(&self) -> Point2 {
        Point2::new(self.origin.x + self.side, self.origin.y + self.side)
    }

    /// Closest point of the square (boundary or interior) to `point`.
    pub fn closest_point(&self, point: &Point2) -> Point2 {
        let max = self.max_corner();
        Point2::new(
            point.x.clamp(self.origin.x, max.x),
            point.y.clamp(self.origin.y, max.y),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Square,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Square(Square),
}

impl Shape {
    pub fn circle(x: f32, y: f32, radius: f32) -> Self {
        Shape::Circle(Circle { center: Point2::new(x, y), radius })
    }

    pub fn square(x: f32, y: f32, side: f32) -> Self {
        Shape::Square(Square { origin: Point2::new(x, y), side })
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Square(_) => ShapeKind::Square,
        }
    }

    /// Axis-aligned extent as `(min, max)` corners.
    pub fn bounds(&self) -> (Point2, Point2) {
        match self {
            Shape::Circle(c) => (
                Point2::new(c.center.x - c.radius, c.center.y - c.radius),
                Point2::new(c.center.x + c.radius, c.center.y + c.radius),
            ),
            Shape::Square(s) => (s.origin, s.max_corner()),
        }
    }

    /// Legend text shown next to the shape in the info panel.
    pub fn label(&self) -> String {
        match self {
            Shape::Circle(c) => format!("flower (R={})", c.radius),
            Shape::Square(s) => format!("grass ({}x{})", s.side, s.side),
        }
    }

    pub fn intersects(&self, other: &Shape) -> bool {
        ShapeIntersection::intersects(self, other)
    }
}

/// The canvas `[0, width] x [0, height]` that shapes are placed into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, shape: &Shape) -> bool {
        let (min, max) = shape.bounds();
        min.x >= 0.0
            && min.y >= 0.0
            && max.x <= self.width as f32
            && max.y <= self.height as f32
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(500, 500)
    }
}
