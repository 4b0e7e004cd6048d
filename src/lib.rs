//! Bomps - pulsing circles that play a note each time they peak
//!
//! Core modules:
//! - `sim`: Bomp simulation (seeding, placement, oscillation, trigger, decay)
//! - `lifecycle`: Application state machine
//! - `app`: The game object the host drives
//! - `engine`: Host side of the frame loop
//! - `audio`: Sound engine seam and handle bookkeeping
//! - `renderer`: Canvas surface and bomp drawing

pub mod app;
pub mod audio;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod lifecycle;
pub mod palette;
pub mod renderer;
pub mod sim;

pub use app::App;
pub use config::Config;
pub use engine::{Engine, Game, Host};
pub use error::StartupError;
pub use lifecycle::AppState;

/// Simulation and presentation constants
pub mod consts {
    /// Default number of bomps in a scene
    pub const BOMP_COUNT: usize = 8;

    /// Minimum distance between two bomp centers
    pub const MIN_SEPARATION: f32 = 128.0;
    /// Distance kept free between a bomp center and the window edge
    pub const PLACEMENT_MARGIN: f32 = 64.0;
    /// Placement tries per bomp before the separation rule is relaxed
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 1000;

    /// Fraction of radius_max a bomp must rise through to fire its note
    pub const TRIGGER_RATIO: f32 = 0.85;

    /// Length of the post-trigger jump (seconds)
    pub const JUMP_DURATION: f32 = 1.0;
    /// Height offset at rest and at the top of the jump
    pub const REST_HEIGHT: f32 = 6.0;
    pub const JUMP_HEIGHT: f32 = 32.0;
    /// Shadow shrink at the top of the jump
    pub const MAX_SHADOW_INSET: f32 = 24.0;
    /// Extra spin (radians/sec) right after a trigger
    pub const MAX_SPIN_BONUS: f32 = 5.0;
    /// Outline wobble amplitude right after a trigger
    pub const MAX_WOBBLE: f32 = 8.0;
    /// Below this amplitude a plain circle is drawn
    pub const WOBBLE_THRESHOLD: f32 = 0.5;
    /// Number of lobes on the wobbling outline
    pub const WOBBLE_LOBES: u32 = 20;
    /// Outline detail while jumping / at rest
    pub const HIGH_DETAIL_SEGMENTS: u32 = 128;
    pub const LOW_DETAIL_SEGMENTS: u32 = 48;

    /// Base spin multiplier applied to a bomp's speed
    pub const SPIN_FACTOR: f32 = 5.0;

    /// Default host frame rate
    pub const FRAME_RATE: u32 = 60;
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
