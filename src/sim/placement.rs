//! Scene layout
//!
//! Bomps are scattered over the window by rejection sampling: a candidate
//! center is kept only if it is farther than `MIN_SEPARATION` from every
//! bomp placed before it.

use glam::{Vec2, Vec3};

use super::bomp::{BompParams, Degree};
use super::rng::Random;
use crate::consts::*;

/// Ranges the per-bomp parameters are drawn from
pub const SPEED_RANGE: (f32, f32) = (1.0, 3.0);
pub const RADIUS_MIN_RANGE: (i32, i32) = (8, 24);
pub const RADIUS_MAX_RANGE: (i32, i32) = (40, 60);
pub const DEGREE_RANGE: (i32, i32) = (1, 7);

/// Area centers are drawn from: `[margin, size - margin]` on each axis,
/// collapsed to the middle when the window is too small for the margin.
pub fn placement_bounds(width: f32, height: f32) -> (Vec2, Vec2) {
    let axis = |size: f32| {
        if size - PLACEMENT_MARGIN >= PLACEMENT_MARGIN {
            (PLACEMENT_MARGIN, size - PLACEMENT_MARGIN)
        } else {
            (size / 2.0, size / 2.0)
        }
    };
    let (x0, x1) = axis(width);
    let (y0, y1) = axis(height);
    (Vec2::new(x0, y0), Vec2::new(x1, y1))
}

/// Distance from `candidate` to the closest placed center
fn nearest_distance(candidate: Vec2, placed: &[BompParams]) -> f32 {
    placed
        .iter()
        .map(|p| candidate.distance(p.position.truncate()))
        .fold(f32::INFINITY, f32::min)
}

/// Lay out `count` bomps in a `width` x `height` window.
///
/// Each bomp gets up to `MAX_PLACEMENT_ATTEMPTS` tries to find a spot that
/// respects the separation. After that the best spot seen is used instead.
pub fn place_bomps(rng: &mut Random, count: usize, width: f32, height: f32) -> Vec<BompParams> {
    let (lo, hi) = placement_bounds(width, height);
    let mut placed: Vec<BompParams> = Vec::with_capacity(count);

    for index in 0..count {
        let time_offset = rng.next_float_range(0.0, std::f32::consts::TAU);
        let speed = rng.next_float_range(SPEED_RANGE.0, SPEED_RANGE.1);
        let radius_min = rng.next_int_range(RADIUS_MIN_RANGE.0, RADIUS_MIN_RANGE.1) as f32;
        let radius_max = rng.next_int_range(RADIUS_MAX_RANGE.0, RADIUS_MAX_RANGE.1) as f32;
        let degree = Degree::from_index(rng.next_int_range(DEGREE_RANGE.0, DEGREE_RANGE.1));

        let mut best = lo;
        let mut best_distance = f32::NEG_INFINITY;
        let mut accepted = false;

        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let candidate = Vec2::new(
                rng.next_float_range(lo.x, hi.x),
                rng.next_float_range(lo.y, hi.y),
            );
            let distance = nearest_distance(candidate, &placed);
            if distance > best_distance {
                best = candidate;
                best_distance = distance;
            }
            if distance > MIN_SEPARATION {
                accepted = true;
                break;
            }
        }

        if !accepted {
            log::warn!(
                "Bomp {} could not be placed {} units from its neighbours; using a spot {:.1} away",
                index,
                MIN_SEPARATION,
                best_distance
            );
        }

        placed.push(BompParams {
            position: Vec3::new(best.x, best.y, 0.0),
            radius_min,
            radius_max,
            speed,
            time_offset,
            degree,
        });
    }

    placed
}
