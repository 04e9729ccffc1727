//! Triangle-list canvas for GPU backends
//!
//! Collects a frame's draw calls as a flat vertex list that can be uploaded
//! to a vertex buffer as-is.

use glam::{IVec2, Vec2};

use super::Canvas;
use super::shapes;
use super::vertex::Vertex;
use crate::geom::Rect;
use crate::settings::Rgb;

/// Canvas that tessellates into [`Vertex`] triangles
#[derive(Debug, Clone)]
pub struct MeshCanvas {
    vertices: Vec<Vertex>,
    clear_color: [f32; 4],
    segments: u32,
}

impl MeshCanvas {
    /// `segments` is the fan slice count for curved shapes
    pub fn new(segments: u32) -> Self {
        Self {
            vertices: Vec::new(),
            clear_color: Rgb::BLACK.to_rgba(1.0),
            segments,
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Packed bytes ready for a vertex buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn clear_color(&self) -> [f32; 4] {
        self.clear_color
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

impl Canvas for MeshCanvas {
    fn fill(&mut self, color: Rgb) {
        self.vertices.clear();
        self.clear_color = color.to_rgba(1.0);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.vertices.extend(shapes::rect(rect, color.to_rgba(1.0)));
    }

    fn fill_ellipse(&mut self, bounds: Rect, color: Rgb) {
        self.vertices
            .extend(shapes::ellipse_in(bounds, color.to_rgba(1.0), self.segments));
    }

    fn fill_circle(&mut self, center: IVec2, radius: i32, color: Rgb) {
        self.vertices.extend(shapes::circle(
            Vec2::new(center.x as f32, center.y as f32),
            radius as f32,
            color.to_rgba(1.0),
            self.segments,
        ));
    }
}
