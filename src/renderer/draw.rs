//! Bomp drawing
//!
//! Each bomp is a shadow on the ground, a body raised by the jump height,
//! and a marker line showing its spin.

use glam::Vec2;

use super::canvas::Canvas;
use super::shapes::wavy_outline;
use crate::consts::WOBBLE_LOBES;
use crate::palette::{Palette, slots};
use crate::sim::Bomp;

/// Rim thickness around the body
const RIM_WIDTH: f32 = 2.0;

/// Clear the canvas and draw every bomp
pub fn draw_bomps(canvas: &mut impl Canvas, palette: &Palette, bomps: &[Bomp]) {
    canvas.clear(palette[slots::BACKGROUND]);
    for bomp in bomps {
        draw_bomp(canvas, palette, bomp);
    }
}

pub fn draw_bomp(canvas: &mut impl Canvas, palette: &Palette, bomp: &Bomp) {
    let pose = bomp.pose;
    let ground = bomp.position().truncate();

    // Shadow shrinks while the body is in the air
    let shadow_radius = (bomp.radius - pose.shadow_inset).max(0.0);
    canvas.filled_circle(ground.x, ground.y, shadow_radius, palette[slots::SHADOW]);

    let center = ground - Vec2::Y * pose.height_offset;
    let body = if pose.is_wobbling() {
        palette[slots::BODY_JUMP]
    } else {
        palette[slots::BODY]
    };

    if pose.is_wobbling() {
        for (radius, color) in [
            (bomp.radius + RIM_WIDTH, palette[slots::RIM]),
            (bomp.radius, body),
        ] {
            let outline = wavy_outline(
                center,
                radius,
                pose.wobble,
                WOBBLE_LOBES,
                bomp.rotation,
                pose.segments,
            );
            for (i, &p) in outline.iter().enumerate() {
                let next = outline[(i + 1) % outline.len()];
                canvas.filled_triangle(center, p, next, color);
            }
        }
    } else {
        canvas.filled_circle(center.x, center.y, bomp.radius + RIM_WIDTH, palette[slots::RIM]);
        canvas.filled_circle(center.x, center.y, bomp.radius, body);
    }

    let tip = center + bomp.radius * Vec2::new(bomp.rotation.cos(), bomp.rotation.sin());
    canvas.line(center.x, center.y, tip.x, tip.y, palette[slots::MARKER]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{GameObjectId, PlayingId};
    use crate::consts::{HIGH_DETAIL_SEGMENTS, REST_HEIGHT};
    use crate::sim::{BompParams, Degree, JumpPose};
    use glam::{Vec3, Vec4};

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear(Vec4),
        Circle(f32, f32, f32, Vec4),
        Line(f32, f32, f32, f32),
        Triangle(Vec4),
    }

    #[derive(Default)]
    struct RecordingCanvas {
        ops: Vec<Op>,
    }

    impl Canvas for RecordingCanvas {
        fn size(&self) -> (u32, u32) {
            (800, 600)
        }
        fn clear(&mut self, color: Vec4) {
            self.ops.push(Op::Clear(color));
        }
        fn filled_circle(&mut self, x: f32, y: f32, radius: f32, color: Vec4) {
            self.ops.push(Op::Circle(x, y, radius, color));
        }
        fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, _color: Vec4) {
            self.ops.push(Op::Line(x1, y1, x2, y2));
        }
        fn filled_triangle(&mut self, _v0: Vec2, _v1: Vec2, _v2: Vec2, color: Vec4) {
            self.ops.push(Op::Triangle(color));
        }
    }

    fn palette() -> Palette {
        Palette::new(
            (0..slots::REQUIRED_LEN)
                .map(|i| Vec4::new(i as f32 / 64.0, 0.0, 0.0, 1.0))
                .collect(),
        )
    }

    fn bomp() -> Bomp {
        let params = BompParams {
            position: Vec3::new(100.0, 200.0, 0.0),
            radius_min: 10.0,
            radius_max: 50.0,
            speed: 1.0,
            time_offset: 0.0,
            degree: Degree::First,
        };
        Bomp::new(params, GameObjectId(1))
    }

    #[test]
    fn test_resting_bomp_draws_plain_circles() {
        let palette = palette();
        let b = bomp();
        let mut canvas = RecordingCanvas::default();
        draw_bomps(&mut canvas, &palette, std::slice::from_ref(&b));

        assert_eq!(canvas.ops[0], Op::Clear(palette[slots::BACKGROUND]));
        assert_eq!(
            canvas.ops[1],
            Op::Circle(100.0, 200.0, b.radius, palette[slots::SHADOW])
        );
        assert_eq!(
            canvas.ops[3],
            Op::Circle(100.0, 200.0 - REST_HEIGHT, b.radius, palette[slots::BODY])
        );
        assert!(matches!(canvas.ops[4], Op::Line(..)));
        assert_eq!(canvas.ops.len(), 5);
    }

    #[test]
    fn test_jumping_bomp_draws_wavy_outline() {
        let palette = palette();
        let mut b = bomp();
        b.playing_id = PlayingId(1);
        b.pose = JumpPose::at(Some(0.1));
        let mut canvas = RecordingCanvas::default();
        draw_bomp(&mut canvas, &palette, &b);

        let triangles = canvas
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Triangle(_)))
            .count();
        assert_eq!(triangles, 2 * HIGH_DETAIL_SEGMENTS as usize);
        assert!(canvas
            .ops
            .contains(&Op::Triangle(palette[slots::BODY_JUMP])));

        // shadow shrinks by the inset
        let Op::Circle(_, _, shadow, _) = canvas.ops[0] else {
            panic!("expected shadow circle first");
        };
        assert!((shadow - (b.radius - b.pose.shadow_inset)).abs() < 1e-5);
    }
}
