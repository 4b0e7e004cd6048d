//! Drawing surface
//!
//! `Canvas` is the small set of primitives the game draws with. Coordinates
//! are in window pixels with y growing downward. `VertexCanvas` turns the
//! calls into a triangle list ready to upload as a vertex buffer.

use glam::{Vec2, Vec4};

use super::shapes;
use super::vertex::Vertex;
use crate::consts::LOW_DETAIL_SEGMENTS;

pub trait Canvas {
    fn size(&self) -> (u32, u32);
    fn clear(&mut self, color: Vec4);
    fn filled_circle(&mut self, x: f32, y: f32, radius: f32, color: Vec4);
    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Vec4);
    fn filled_triangle(&mut self, v0: Vec2, v1: Vec2, v2: Vec2, color: Vec4);
}

/// Canvas that tessellates into triangles
#[derive(Debug, Clone)]
pub struct VertexCanvas {
    width: u32,
    height: u32,
    clear_color: Vec4,
    vertices: Vec<Vertex>,
    circle_segments: u32,
    line_width: f32,
}

impl VertexCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            clear_color: Vec4::new(0.0, 0.0, 0.0, 1.0),
            vertices: Vec::new(),
            circle_segments: LOW_DETAIL_SEGMENTS,
            line_width: 2.0,
        }
    }

    pub fn clear_color(&self) -> Vec4 {
        self.clear_color
    }

    /// Triangle list drawn since the last clear
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Vertex data as raw bytes for a GPU buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl Canvas for VertexCanvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Vec4) {
        self.clear_color = color;
        self.vertices.clear();
    }

    fn filled_circle(&mut self, x: f32, y: f32, radius: f32, color: Vec4) {
        if radius <= 0.0 {
            return;
        }
        self.vertices.extend(shapes::circle(
            Vec2::new(x, y),
            radius,
            color,
            self.circle_segments,
        ));
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Vec4) {
        self.vertices.extend(shapes::line(
            Vec2::new(x1, y1),
            Vec2::new(x2, y2),
            self.line_width,
            color,
        ));
    }

    fn filled_triangle(&mut self, v0: Vec2, v1: Vec2, v2: Vec2, color: Vec4) {
        self.vertices.push(Vertex::at(v0, color));
        self.vertices.push(Vertex::at(v1, color));
        self.vertices.push(Vertex::at(v2, color));
    }
}
