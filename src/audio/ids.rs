//! Sound engine identifiers
//!
//! Event, bank and parameter ids are 32-bit FNV-1 hashes of the lowercased
//! object name, the same short ids the sound bank generator emits.

use serde::{Deserialize, Serialize};

/// Registered game object (emitter or listener)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameObjectId(pub u64);

/// Handle to one playing instance of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayingId(pub u32);

impl PlayingId {
    /// Returned when an event could not be posted
    pub const INVALID: PlayingId = PlayingId(0);

    pub fn is_valid(&self) -> bool {
        *self != Self::INVALID
    }
}

impl Default for PlayingId {
    fn default() -> Self {
        Self::INVALID
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BankId(pub u32);

/// Game parameter (RTPC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RtpcId(pub u32);

/// Short id for a named sound engine object
pub const fn short_id(name: &str) -> u32 {
    let bytes = name.as_bytes();
    let mut hash: u32 = 2166136261;
    let mut i = 0;
    while i < bytes.len() {
        hash = hash.wrapping_mul(16777619);
        hash ^= bytes[i].to_ascii_lowercase() as u32;
        i += 1;
    }
    hash
}

pub mod events {
    use super::EventId;

    pub const PLAY_PIANO_A_001: EventId = EventId(857158485);
    pub const PLAY_PIANO_BB_001: EventId = EventId(1625241216);
    pub const PLAY_PIANO_C_001: EventId = EventId(15674995);
    pub const PLAY_PIANO_D_001: EventId = EventId(1200867520);
    pub const PLAY_PIANO_E_001: EventId = EventId(3256878353);
    pub const PLAY_PIANO_F_001: EventId = EventId(2506816126);
    pub const PLAY_PIANO_G_001: EventId = EventId(4116466127);
}

pub mod banks {
    pub const INIT: &str = "Init";
    pub const DEBUG_SOUNDS: &str = "Debug_Sounds";
    pub const PLAYER: &str = "Player";
}

/// Game parameters defined by this project.
///
/// These are not in the generated sound bank ids; the id is hashed from the
/// name, so a sound bank that wants to react must add a parameter with the
/// same name. Until then the engine ignores the value.
pub mod game_parameters {
    use super::{RtpcId, short_id};

    /// Normalized oscillation position of a bomp (0 = radius_min, 1 = radius_max)
    pub const BOMP_SIZE: RtpcId = RtpcId(short_id("Bomp_Size"));
}
