// src/intersection.rs

use crate::geometry::{Circle, Shape, Square};

pub struct ShapeIntersection;

impl ShapeIntersection {
    /// Pairwise overlap test used to reject candidates during placement.
    ///
    /// Circles that only touch do not intersect, while squares sharing an edge do.
    pub fn intersects(a: &Shape, b: &Shape) -> bool {
        match (a, b) {
            (Shape::Circle(c1), Shape::Circle(c2)) => Self::circles_overlap(c1, c2),
            (Shape::Square(s1), Shape::Square(s2)) => Self::squares_overlap(s1, s2),
            (Shape::Circle(circle), Shape::Square(square))
            | (Shape::Square(square), Shape::Circle(circle)) => {
                Self::circle_square_overlap(circle, square)
            }
        }
    }

    #[inline(always)]
    fn circles_overlap(a: &Circle, b: &Circle) -> bool {
        a.center.distance(&b.center) < a.radius + b.radius
    }

    #[inline(always)]
    fn squares_overlap(a: &Square, b: &Square) -> bool {
        let a_max = a.max_corner();
        let b_max = b.max_corner();
        let separated = a_max.x < b.origin.x
            || b_max.x < a.origin.x
            || a_max.y < b.origin.y
            || b_max.y < a.origin.y;
        !separated
    }

    #[inline(always)]
    fn circle_square_overlap(circle: &Circle, square: &Square) -> bool {
        let closest = square.closest_point(&circle.center);
        circle.center.distance(&closest) < circle.radius
    }
}
