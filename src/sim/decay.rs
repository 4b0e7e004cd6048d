//! Post-trigger animation
//!
//! Every visual effect of a trigger is a pure function of the time since the
//! bomp last fired. `JumpPose::at` evaluates all of them from one elapsed
//! value so they stay in step.

use std::f32::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::lerp;

#[inline]
fn in_jump(elapsed: f32) -> bool {
    (0.0..JUMP_DURATION).contains(&elapsed)
}

/// Half-sine hump over the jump
#[inline]
fn hump(elapsed: f32) -> f32 {
    (PI * elapsed / JUMP_DURATION).sin()
}

/// Quarter-cosine falloff over the jump (1 at trigger, 0 at the end)
#[inline]
fn falloff(elapsed: f32) -> f32 {
    (elapsed / JUMP_DURATION * FRAC_PI_2).cos()
}

pub fn height_offset(elapsed: f32) -> f32 {
    if in_jump(elapsed) {
        lerp(REST_HEIGHT, JUMP_HEIGHT, hump(elapsed))
    } else {
        REST_HEIGHT
    }
}

pub fn shadow_inset(elapsed: f32) -> f32 {
    if in_jump(elapsed) {
        lerp(0.0, MAX_SHADOW_INSET, hump(elapsed))
    } else {
        0.0
    }
}

pub fn spin_bonus(elapsed: f32) -> f32 {
    if in_jump(elapsed) {
        lerp(0.0, MAX_SPIN_BONUS, falloff(elapsed))
    } else {
        0.0
    }
}

pub fn wobble_amplitude(elapsed: f32) -> f32 {
    if in_jump(elapsed) {
        lerp(0.0, MAX_WOBBLE, falloff(elapsed))
    } else {
        0.0
    }
}

pub fn segment_count(elapsed: f32) -> u32 {
    if in_jump(elapsed) {
        HIGH_DETAIL_SEGMENTS
    } else {
        LOW_DETAIL_SEGMENTS
    }
}

/// Visual parameters of a bomp for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JumpPose {
    pub height_offset: f32,
    pub shadow_inset: f32,
    pub spin_bonus: f32,
    pub wobble: f32,
    pub segments: u32,
}

impl JumpPose {
    pub const REST: JumpPose = JumpPose {
        height_offset: REST_HEIGHT,
        shadow_inset: 0.0,
        spin_bonus: 0.0,
        wobble: 0.0,
        segments: LOW_DETAIL_SEGMENTS,
    };

    /// Pose for a bomp that last fired `elapsed` seconds ago, or never
    pub fn at(elapsed: Option<f32>) -> Self {
        let Some(elapsed) = elapsed else {
            return Self::REST;
        };

        Self {
            height_offset: height_offset(elapsed),
            shadow_inset: shadow_inset(elapsed),
            spin_bonus: spin_bonus(elapsed),
            wobble: wobble_amplitude(elapsed),
            segments: segment_count(elapsed),
        }
    }

    /// Whether the outline should be drawn wavy
    pub fn is_wobbling(&self) -> bool {
        self.wobble >= WOBBLE_THRESHOLD
    }
}

impl Default for JumpPose {
    fn default() -> Self {
        Self::REST
    }
}
