//! Sound engine seam
//!
//! `SoundEngine` is the surface the game needs from the audio middleware.
//! `HeadlessEngine` stands in for it when no middleware is linked: every
//! call succeeds, playing ids count up, and calls can be journaled.

use std::collections::{BTreeMap, HashMap, HashSet};

use glam::Vec3;

use super::ids::{BankId, EventId, GameObjectId, PlayingId, RtpcId, short_id};
use crate::error::AudioError;

/// Low-level sound engine calls
pub trait SoundEngine {
    fn register_game_object(&mut self, id: GameObjectId, name: &str) -> Result<(), AudioError>;
    fn unregister_all(&mut self);
    fn set_default_listener(&mut self, listener: GameObjectId);
    fn set_listener_pose(&mut self, listener: GameObjectId, position: Vec3, forward: Vec3, up: Vec3);

    /// Returns `PlayingId::INVALID` on failure
    fn post_event(&mut self, event: EventId, object: GameObjectId) -> PlayingId;
    fn set_position(&mut self, object: GameObjectId, position: Vec3);
    fn set_rtpc_value(&mut self, rtpc: RtpcId, object: GameObjectId, value: f32);

    fn load_bank(&mut self, name: &str) -> Result<BankId, AudioError>;
    fn unload_bank(&mut self, bank: BankId) -> Result<(), AudioError>;

    /// Process pending commands (once per frame)
    fn render_audio(&mut self);
}

/// A recorded call on the headless engine
#[derive(Debug, Clone, PartialEq)]
pub enum AudioCall {
    Register { object: GameObjectId, name: String },
    ListenerPose { listener: GameObjectId, position: Vec3, forward: Vec3, up: Vec3 },
    Post { event: EventId, object: GameObjectId, playing: PlayingId },
    SetPosition { object: GameObjectId, position: Vec3 },
    SetRtpc { rtpc: RtpcId, object: GameObjectId, value: f32 },
    LoadBank { name: String, bank: BankId },
    UnloadBank { bank: BankId },
    Render,
}

/// Sound engine that plays nothing
#[derive(Debug, Default)]
pub struct HeadlessEngine {
    next_playing_id: u32,
    objects: BTreeMap<GameObjectId, String>,
    banks: HashMap<BankId, String>,
    default_listener: Option<GameObjectId>,
    frames: u64,
    journal: Option<Vec<AudioCall>>,
    fail_posts: bool,
    fail_banks: HashSet<String>,
}

impl HeadlessEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep a journal of every call (for inspection)
    pub fn recording() -> Self {
        Self {
            journal: Some(Vec::new()),
            ..Self::default()
        }
    }

    /// Make every `post_event` fail
    pub fn with_failing_posts(mut self) -> Self {
        self.fail_posts = true;
        self
    }

    /// Make loading the named bank fail
    pub fn with_failing_bank(mut self, name: &str) -> Self {
        self.fail_banks.insert(name.to_string());
        self
    }

    pub fn set_failing_posts(&mut self, fail: bool) {
        self.fail_posts = fail;
    }

    pub fn journal(&self) -> &[AudioCall] {
        self.journal.as_deref().unwrap_or_default()
    }

    pub fn clear_journal(&mut self) {
        if let Some(journal) = &mut self.journal {
            journal.clear();
        }
    }

    pub fn object_name(&self, id: GameObjectId) -> Option<&str> {
        self.objects.get(&id).map(String::as_str)
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn is_bank_loaded(&self, name: &str) -> bool {
        self.banks.values().any(|n| n == name)
    }

    pub fn default_listener(&self) -> Option<GameObjectId> {
        self.default_listener
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    fn record(&mut self, call: AudioCall) {
        if let Some(journal) = &mut self.journal {
            journal.push(call);
        }
    }
}

impl SoundEngine for HeadlessEngine {
    fn register_game_object(&mut self, id: GameObjectId, name: &str) -> Result<(), AudioError> {
        if self.objects.contains_key(&id) {
            return Err(AudioError::Register {
                name: name.to_string(),
                reason: format!("id {} already registered", id.0),
            });
        }
        log::debug!("Registered game object {} ({})", id.0, name);
        self.objects.insert(id, name.to_string());
        self.record(AudioCall::Register {
            object: id,
            name: name.to_string(),
        });
        Ok(())
    }

    fn unregister_all(&mut self) {
        log::debug!("Unregistered {} game objects", self.objects.len());
        self.objects.clear();
        self.default_listener = None;
    }

    fn set_default_listener(&mut self, listener: GameObjectId) {
        self.default_listener = Some(listener);
    }

    fn set_listener_pose(&mut self, listener: GameObjectId, position: Vec3, forward: Vec3, up: Vec3) {
        self.record(AudioCall::ListenerPose {
            listener,
            position,
            forward,
            up,
        });
    }

    fn post_event(&mut self, event: EventId, object: GameObjectId) -> PlayingId {
        let playing = if self.fail_posts || !self.objects.contains_key(&object) {
            PlayingId::INVALID
        } else {
            self.next_playing_id += 1;
            PlayingId(self.next_playing_id)
        };
        log::debug!("Post event {} on {} -> {}", event.0, object.0, playing.0);
        self.record(AudioCall::Post {
            event,
            object,
            playing,
        });
        playing
    }

    fn set_position(&mut self, object: GameObjectId, position: Vec3) {
        self.record(AudioCall::SetPosition { object, position });
    }

    fn set_rtpc_value(&mut self, rtpc: RtpcId, object: GameObjectId, value: f32) {
        self.record(AudioCall::SetRtpc { rtpc, object, value });
    }

    fn load_bank(&mut self, name: &str) -> Result<BankId, AudioError> {
        if self.fail_banks.contains(name) {
            return Err(AudioError::LoadBank {
                name: name.to_string(),
                reason: "bank file not found".to_string(),
            });
        }
        let bank = BankId(short_id(name));
        self.banks.insert(bank, name.to_string());
        self.record(AudioCall::LoadBank {
            name: name.to_string(),
            bank,
        });
        Ok(bank)
    }

    fn unload_bank(&mut self, bank: BankId) -> Result<(), AudioError> {
        if self.banks.remove(&bank).is_none() {
            return Err(AudioError::UnloadBank {
                id: bank.0,
                reason: "bank not loaded".to_string(),
            });
        }
        self.record(AudioCall::UnloadBank { bank });
        Ok(())
    }

    fn render_audio(&mut self) {
        self.frames += 1;
        self.record(AudioCall::Render);
    }
}
