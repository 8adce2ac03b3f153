// src/rendering_lib/tessellate.rs

use glam::Vec2;

use super::vertex::Vertex;
use crate::config::DisplayConfig;
use crate::geometry::{Bounds, Circle, Shape, Square};

pub const GRID_COLOR: [f32; 4] = [0.827, 0.827, 0.827, 1.0];
pub const CIRCLE_FILL: [f32; 4] = [1.0, 0.0, 0.0, 0.5];
pub const CIRCLE_OUTLINE: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
pub const SQUARE_FILL: [f32; 4] = [0.0, 0.0, 1.0, 0.3];
pub const SQUARE_OUTLINE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

const GRID_LINE_PX: f32 = 0.5;
const OUTLINE_PX: f32 = 2.0;

#[derive(Clone, Debug, PartialEq)]
pub struct CanvasStyle {
    /// `(x_step, y_step)` between grid lines; `None` draws no grid.
    pub grid_steps: Option<(f32, f32)>,
    pub grid_width: f32,
    pub outline_width: f32,
    pub circle_segments: u32,
}

impl CanvasStyle {
    /// Line widths are given in window pixels and converted into canvas units here.
    pub fn for_display(bounds: &Bounds, display: &DisplayConfig) -> Self {
        let units_per_pixel = display.units_per_pixel(bounds);
        Self {
            grid_steps: display.grid_steps(bounds),
            grid_width: GRID_LINE_PX * units_per_pixel,
            outline_width: OUTLINE_PX * units_per_pixel,
            circle_segments: 48,
        }
    }
}

/// Triangle list for the whole canvas, grid first and then shapes in acceptance order.
#[derive(Clone, Debug, Default)]
pub struct CanvasMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl CanvasMesh {
    pub fn build<'a>(
        shapes: impl IntoIterator<Item = &'a Shape>,
        bounds: &Bounds,
        style: &CanvasStyle,
    ) -> Self {
        let mut mesh = Self::default();
        if let Some((x_step, y_step)) = style.grid_steps {
            mesh.push_grid(bounds, x_step, y_step, style.grid_width);
        }
        for shape in shapes {
            match shape {
                Shape::Circle(circle) => mesh.push_circle(circle, style),
                Shape::Square(square) => mesh.push_square(square, style),
            }
        }
        mesh
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    fn push_grid(&mut self, bounds: &Bounds, x_step: f32, y_step: f32, width: f32) {
        let w = bounds.width as f32;
        let h = bounds.height as f32;

        for y in grid_positions(h, y_step) {
            self.push_line(Vec2::new(0.0, y), Vec2::new(w, y), width, GRID_COLOR);
        }
        for x in grid_positions(w, x_step) {
            self.push_line(Vec2::new(x, 0.0), Vec2::new(x, h), width, GRID_COLOR);
        }
    }

    fn push_circle(&mut self, circle: &Circle, style: &CanvasStyle) {
        let center = Vec2::new(circle.center.x, circle.center.y);
        let segments = style.circle_segments.max(3);
        self.push_disk(center, circle.radius, segments, CIRCLE_FILL);

        let half = style.outline_width * 0.5;
        self.push_ring(
            center,
            (circle.radius - half).max(0.0),
            circle.radius + half,
            segments,
            CIRCLE_OUTLINE,
        );
    }

    fn push_square(&mut self, square: &Square, style: &CanvasStyle) {
        let min = Vec2::new(square.origin.x, square.origin.y);
        let max = min + Vec2::splat(square.side);
        let corners = [min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)];
        self.push_quad(corners, SQUARE_FILL);

        for i in 0..corners.len() {
            let j = (i + 1) % corners.len();
            self.push_line(corners[i], corners[j], style.outline_width, SQUARE_OUTLINE);
        }
    }

    fn next_index(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Corners in counter-clockwise order.
    fn push_quad(&mut self, corners: [Vec2; 4], color: [f32; 4]) {
        let start = self.next_index();
        self.vertices.extend(corners.iter().map(|&c| Vertex::at(c, color)));
        self.indices
            .extend_from_slice(&[start, start + 1, start + 2, start, start + 2, start + 3]);
    }

    /// Straight stroke of `width` centered on the segment `a -> b`.
    fn push_line(&mut self, a: Vec2, b: Vec2, width: f32, color: [f32; 4]) {
        let direction = (b - a).normalize_or_zero();
        if direction == Vec2::ZERO {
            return;
        }
        // Extend past the ends so adjoining strokes meet without notches.
        let half = width * 0.5;
        let a = a - direction * half;
        let b = b + direction * half;
        let offset = direction.perp() * half;
        self.push_quad([a - offset, b - offset, b + offset, a + offset], color);
    }

    fn push_disk(&mut self, center: Vec2, radius: f32, segments: u32, color: [f32; 4]) {
        let hub = self.next_index();
        self.vertices.push(Vertex::at(center, color));
        for i in 0..segments {
            self.vertices.push(Vertex::at(center + rim(i, segments) * radius, color));
        }
        for i in 0..segments {
            let current = hub + 1 + i;
            let next = hub + 1 + (i + 1) % segments;
            self.indices.extend_from_slice(&[hub, current, next]);
        }
    }

    fn push_ring(&mut self, center: Vec2, inner: f32, outer: f32, segments: u32, color: [f32; 4]) {
        let start = self.next_index();
        for i in 0..segments {
            let dir = rim(i, segments);
            self.vertices.push(Vertex::at(center + dir * inner, color));
            self.vertices.push(Vertex::at(center + dir * outer, color));
        }
        for i in 0..segments {
            let inner_a = start + 2 * i;
            let outer_a = inner_a + 1;
            let inner_b = start + 2 * ((i + 1) % segments);
            let outer_b = inner_b + 1;
            self.indices
                .extend_from_slice(&[inner_a, outer_a, outer_b, inner_a, outer_b, inner_b]);
        }
    }
}

fn rim(i: u32, segments: u32) -> Vec2 {
    Vec2::from_angle(i as f32 * std::f32::consts::TAU / segments as f32)
}

/// `0, step, 2*step, ...` strictly below `extent`.
fn grid_positions(extent: f32, step: f32) -> impl Iterator<Item = f32> {
    let count = if step > 0.0 && step.is_finite() {
        (extent / step).ceil() as u32
    } else {
        0
    };
    (0..count).map(move |i| i as f32 * step).filter(move |&p| p < extent)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(grid_steps: Option<(f32, f32)>) -> CanvasStyle {
        CanvasStyle { grid_steps, grid_width: 0.5, outline_width: 2.0, circle_segments: 16 }
    }

    #[test]
    fn grid_positions_exclude_the_far_edge() {
        let lines: Vec<f32> = grid_positions(500.0, 50.0).collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines.first(), Some(&0.0));
        assert_eq!(lines.last(), Some(&450.0));
        assert_eq!(grid_positions(100.0, 0.0).count(), 0);
    }

    #[test]
    fn default_grid_has_ten_lines_per_axis() {
        let bounds = Bounds::default();
        let mesh = CanvasMesh::build(std::iter::empty(), &bounds, &style(Some((50.0, 50.0))));
        assert_eq!(mesh.vertices.len(), 20 * 4);
        assert_eq!(mesh.triangle_count(), 20 * 2);
    }

    #[test]
    fn empty_canvas_without_grid_is_empty() {
        let mesh = CanvasMesh::build(std::iter::empty(), &Bounds::default(), &style(None));
        assert!(mesh.is_empty());
    }

    #[test]
    fn shapes_are_drawn_in_acceptance_order() {
        let shapes = [Shape::square(10.0, 10.0, 15.0), Shape::circle(100.0, 100.0, 5.0)];
        let mesh = CanvasMesh::build(&shapes, &Bounds::default(), &style(None));

        // square: fill quad + four outline quads, circle: 16-segment fan + ring
        let square_vertices = 4 + 4 * 4;
        assert_eq!(mesh.vertices.len(), square_vertices + (1 + 16) + 2 * 16);
        assert_eq!(mesh.triangle_count(), (2 + 4 * 2) + 16 + 2 * 16);
        assert_eq!(mesh.vertices[0].color, SQUARE_FILL);
        assert_eq!(mesh.vertices[square_vertices].color, CIRCLE_FILL);
        assert_eq!(mesh.vertices[square_vertices].position, [100.0, 100.0]);
    }

    #[test]
    fn indices_stay_in_range() {
        let shapes = [Shape::circle(20.0, 20.0, 3.0), Shape::square(40.0, 40.0, 15.0)];
        let mesh = CanvasMesh::build(&shapes, &Bounds::default(), &style(Some((50.0, 50.0))));
        let count = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < count));
        assert_eq!(mesh.indices.len() % 3, 0);
    }

    #[test]
    fn circle_fill_reaches_its_radius() {
        let shapes = [Shape::circle(50.0, 60.0, 10.0)];
        let mesh = CanvasMesh::build(&shapes, &Bounds::default(), &style(None));
        let first_rim = Vec2::from(mesh.vertices[1].position);
        assert!((first_rim.distance(Vec2::new(50.0, 60.0)) - 10.0).abs() < 1e-4);
    }

    #[test]
    fn style_scales_pixel_widths_to_canvas_units() {
        let bounds = Bounds::new(700, 700);
        let display = DisplayConfig::for_canvas(&bounds);
        let style = CanvasStyle::for_display(&bounds, &display);
        assert_eq!(style.outline_width, 2.0);
        assert_eq!(style.grid_width, 0.5);
        assert_eq!(style.grid_steps, Some((70.0, 70.0)));
    }
}
