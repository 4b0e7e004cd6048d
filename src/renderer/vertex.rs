//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec4};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn at(point: Vec2, color: Vec4) -> Self {
        Self::new(point.x, point.y, color.to_array())
    }

    /// Bytes per vertex in a vertex buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}
