//! Input commands and action bindings

use std::collections::{BTreeMap, HashMap};

/// Key state carried by an input command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    Pressed,
    Repeated,
    Released,
}

/// A raw key event from the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputCommand {
    pub key: String,
    pub state: TriggerState,
}

impl InputCommand {
    pub fn pressed(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            state: TriggerState::Pressed,
        }
    }

    pub fn released(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            state: TriggerState::Released,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.state == TriggerState::Pressed
    }
}

/// Actions the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    /// Debug: play a note on the unpositioned object
    PlayDebug,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Quit => "quit",
            Action::PlayDebug => "play",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "quit" => Some(Action::Quit),
            "play" | "play_debug" => Some(Action::PlayDebug),
            _ => None,
        }
    }
}

/// Key name to action lookup
#[derive(Debug, Clone, Default)]
pub struct ActionBinds {
    binds: HashMap<String, Action>,
}

impl ActionBinds {
    /// Build from the config `[binds]` table. Unknown actions are skipped.
    pub fn from_table(table: &BTreeMap<String, String>) -> Self {
        let mut binds = HashMap::with_capacity(table.len());
        for (key, action_name) in table {
            match Action::from_str(action_name) {
                Some(action) => {
                    binds.insert(key.clone(), action);
                }
                None => log::warn!("Unknown action {:?} bound to {}", action_name, key),
            }
        }
        Self { binds }
    }

    pub fn action_for(&self, input: &InputCommand) -> Option<Action> {
        self.binds.get(&input.key).copied()
    }

    pub fn len(&self) -> usize {
        self.binds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.binds.is_empty()
    }
}
