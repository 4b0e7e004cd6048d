//! Application lifecycle
//!
//! `None -> Initializing -> Playing -> Quitting -> Terminate`. Terminate is
//! absorbing: once reached, nothing leaves it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AppState {
    /// Nothing set up yet
    #[default]
    None,
    /// Loading banks, creating the surface and the scene
    Initializing,
    /// Bomps are running
    Playing,
    /// Shutdown requested; becomes Terminate on the next frame
    Quitting,
    /// Tells the host to stop the frame loop
    Terminate,
}

impl AppState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppState::None => "None",
            AppState::Initializing => "Initializing",
            AppState::Playing => "Playing",
            AppState::Quitting => "Quitting",
            AppState::Terminate => "Terminate",
        }
    }

    /// The state to move to when `requested` is asked for, or None if the
    /// request changes nothing.
    pub fn next(self, requested: AppState) -> Option<AppState> {
        if requested == self || self == AppState::Terminate {
            return None;
        }
        Some(requested)
    }
}

impl std::fmt::Display for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
