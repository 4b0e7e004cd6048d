//! The bomp entity
//!
//! A bomp is a circle whose radius oscillates between two bounds. Each time
//! it rises through 85% of its maximum it plays its note and jumps.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::decay::JumpPose;
use crate::audio::ids::events;
use crate::audio::{EventId, GameObjectId, PlayingId};
use crate::consts::TRIGGER_RATIO;
use crate::lerp;

/// Scale degree a bomp plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Degree {
    None = 0,
    First = 1,
    Second = 2,
    Third = 3,
    Fourth = 4,
    Fifth = 5,
    Sixth = 6,
    Seventh = 7,
    Octave = 8,
}

impl Degree {
    pub fn from_index(index: i32) -> Self {
        match index {
            1 => Degree::First,
            2 => Degree::Second,
            3 => Degree::Third,
            4 => Degree::Fourth,
            5 => Degree::Fifth,
            6 => Degree::Sixth,
            7 => Degree::Seventh,
            8 => Degree::Octave,
            _ => Degree::None,
        }
    }

    /// Note event for this degree. `Octave` has no sample and plays nothing.
    pub fn event(&self) -> Option<EventId> {
        match self {
            Degree::First => Some(events::PLAY_PIANO_C_001),
            Degree::Second => Some(events::PLAY_PIANO_D_001),
            Degree::Third => Some(events::PLAY_PIANO_E_001),
            Degree::Fourth => Some(events::PLAY_PIANO_F_001),
            Degree::Fifth => Some(events::PLAY_PIANO_G_001),
            Degree::Sixth => Some(events::PLAY_PIANO_A_001),
            Degree::Seventh => Some(events::PLAY_PIANO_BB_001),
            Degree::None | Degree::Octave => None,
        }
    }
}

/// Fixed parameters of a bomp, drawn once at scene setup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BompParams {
    /// Screen-space center (y grows downward)
    pub position: Vec3,
    pub radius_min: f32,
    pub radius_max: f32,
    /// Angular rate of the oscillation (radians/sec)
    pub speed: f32,
    /// Phase offset (radians)
    pub time_offset: f32,
    pub degree: Degree,
}

impl BompParams {
    /// Radius at simulation time `t`
    #[inline]
    pub fn radius_at(&self, t: f32) -> f32 {
        let phase = ((t * self.speed + self.time_offset).sin() + 1.0) / 2.0;
        lerp(self.radius_min, self.radius_max, phase).clamp(self.radius_min, self.radius_max)
    }

    /// Radius a bomp must rise through to fire
    #[inline]
    pub fn trigger_threshold(&self) -> f32 {
        self.radius_max * TRIGGER_RATIO
    }
}

#[derive(Debug, Clone)]
pub struct Bomp {
    pub params: BompParams,
    /// Current radius (updated every frame)
    pub radius: f32,
    /// Accumulated wobble phase
    pub rotation: f32,
    /// Last event this bomp fired, INVALID until the first trigger
    pub playing_id: PlayingId,
    /// Simulation time of the last trigger
    pub playing_time: f32,
    /// Visual pose derived this frame
    pub pose: JumpPose,
    audio_handle: GameObjectId,
}

impl Bomp {
    pub fn new(params: BompParams, audio_handle: GameObjectId) -> Self {
        debug_assert!(
            params.radius_min < params.radius_max,
            "radius_min must be below radius_max"
        );
        Self {
            params,
            radius: params.radius_at(0.0),
            rotation: params.time_offset,
            playing_id: PlayingId::INVALID,
            playing_time: 0.0,
            pose: JumpPose::REST,
            audio_handle,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.params.position
    }

    pub fn audio_handle(&self) -> GameObjectId {
        self.audio_handle
    }

    pub fn has_fired(&self) -> bool {
        self.playing_id.is_valid()
    }

    /// Seconds since the last trigger, None if it never fired
    pub fn elapsed(&self, t: f32) -> Option<f32> {
        self.has_fired().then(|| t - self.playing_time)
    }

    /// Radius mapped to [0, 1] between the bounds
    pub fn normalized_radius(&self) -> f32 {
        let range = self.params.radius_max - self.params.radius_min;
        ((self.radius - self.params.radius_min) / range).clamp(0.0, 1.0)
    }
}
