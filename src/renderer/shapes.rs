//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::geom::Rect;

/// Two triangles covering a rectangle
pub fn rect(r: Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (x0, y0) = (r.left() as f32, r.top() as f32);
    let (x1, y1) = (r.right() as f32, r.bottom() as f32);

    [
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a filled ellipse (triangle fan from the center)
pub fn ellipse(center: Vec2, radii: Vec2, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radii.x * theta1.cos(),
            center.y + radii.y * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radii.x * theta2.cos(),
            center.y + radii.y * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Ellipse inscribed in a bounding rectangle
pub fn ellipse_in(bounds: Rect, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let radii = Vec2::new(bounds.w as f32, bounds.h as f32) / 2.0;
    let center = Vec2::new(bounds.x as f32, bounds.y as f32) + radii;
    ellipse(center, radii, color, segments)
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    ellipse(center, Vec2::splat(radius), color, segments)
}
