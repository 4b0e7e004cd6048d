//! Shape generation for 2D primitives

use glam::{Vec2, Vec4};
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: Vec4, segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::at(center, color));
        vertices.push(Vertex::at(
            center + radius * Vec2::new(theta1.cos(), theta1.sin()),
            color,
        ));
        vertices.push(Vertex::at(
            center + radius * Vec2::new(theta2.cos(), theta2.sin()),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a line as a quad of the given width
pub fn line(from: Vec2, to: Vec2, width: f32, color: Vec4) -> Vec<Vertex> {
    // Direction from start to end
    let dir = (to - from).normalize_or_zero();
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a0 = from + perp;
    let a1 = from - perp;
    let b0 = to + perp;
    let b1 = to - perp;

    vec![
        Vertex::at(a0, color),
        Vertex::at(a1, color),
        Vertex::at(b0, color),
        Vertex::at(b0, color),
        Vertex::at(a1, color),
        Vertex::at(b1, color),
    ]
}

/// Outline of a circle whose radius ripples with `lobes` bumps.
///
/// Point `i` sits at angle `2πi/segments` with radius
/// `radius + amplitude * sin(lobes * angle + phase)`, never below zero.
pub fn wavy_outline(
    center: Vec2,
    radius: f32,
    amplitude: f32,
    lobes: u32,
    phase: f32,
    segments: u32,
) -> Vec<Vec2> {
    let segments = segments.max(3);
    (0..segments)
        .map(|i| {
            let theta = (i as f32 / segments as f32) * 2.0 * PI;
            let r = (radius + amplitude * (lobes as f32 * theta + phase).sin()).max(0.0);
            center + r * Vec2::new(theta.cos(), theta.sin())
        })
        .collect()
}
