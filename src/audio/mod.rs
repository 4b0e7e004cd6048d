//! Audio layer
//!
//! `Audio` owns everything the game needs to keep track of on top of the raw
//! sound engine: game object id allocation, the default listener, a
//! non-spatial object for one-shots, and which banks are loaded.

pub mod engine;
pub mod ids;

use std::collections::HashMap;

use glam::Vec3;

pub use engine::{AudioCall, HeadlessEngine, SoundEngine};
pub use ids::{BankId, EventId, GameObjectId, PlayingId, RtpcId, short_id};

use crate::error::AudioError;

pub struct Audio<E: SoundEngine> {
    engine: E,
    game_object_count: u64,
    listener: GameObjectId,
    unpositioned: GameObjectId,
    loaded_banks: HashMap<String, BankId>,
}

impl<E: SoundEngine> Audio<E> {
    /// Load the Init bank, register the default listener and the
    /// unpositioned object.
    pub fn new(engine: E) -> Result<Self, AudioError> {
        let mut audio = Self {
            engine,
            game_object_count: 0,
            listener: GameObjectId(0),
            unpositioned: GameObjectId(0),
            loaded_banks: HashMap::new(),
        };

        audio.load_bank(ids::banks::INIT)?;

        audio.listener = audio.register_entity("Default listener")?;
        audio.engine.set_default_listener(audio.listener);

        audio.unpositioned = audio.register_entity("Unpositioned game object")?;

        Ok(audio)
    }

    /// Register a new game object under a fresh id
    pub fn register_entity(&mut self, name: &str) -> Result<GameObjectId, AudioError> {
        self.game_object_count += 1;
        let id = GameObjectId(self.game_object_count);
        self.engine.register_game_object(id, name)?;
        Ok(id)
    }

    pub fn listener(&self) -> GameObjectId {
        self.listener
    }

    /// Object for sounds without a position
    pub fn unpositioned(&self) -> GameObjectId {
        self.unpositioned
    }

    pub fn post_event(&mut self, event: EventId, object: GameObjectId) -> PlayingId {
        let playing = self.engine.post_event(event, object);
        if !playing.is_valid() {
            log::error!(
                "Could not post event {} for game object {}",
                event.0,
                object.0
            );
        }
        playing
    }

    pub fn post_event_by_name(&mut self, event_name: &str, object: GameObjectId) -> PlayingId {
        let playing = self.engine.post_event(EventId(short_id(event_name)), object);
        if !playing.is_valid() {
            log::error!(
                "Could not post event {} for game object {}",
                event_name,
                object.0
            );
        }
        playing
    }

    pub fn set_position(&mut self, object: GameObjectId, position: Vec3) {
        self.engine.set_position(object, position);
    }

    pub fn set_game_parameter(&mut self, parameter: RtpcId, object: GameObjectId, value: f32) {
        self.engine.set_rtpc_value(parameter, object, value);
    }

    pub fn set_listener_pose(&mut self, position: Vec3, forward: Vec3, up: Vec3) {
        self.engine
            .set_listener_pose(self.listener, position, forward, up);
    }

    /// Load a bank by name. Failure is fatal to the caller.
    pub fn load_bank(&mut self, name: &str) -> Result<BankId, AudioError> {
        let bank = self.engine.load_bank(name)?;
        log::info!("Loaded bank {}", name);
        self.loaded_banks.insert(name.to_string(), bank);
        Ok(bank)
    }

    /// Unload a bank by name. Unknown banks are logged and ignored.
    pub fn unload_bank(&mut self, name: &str) {
        let Some(bank) = self.loaded_banks.remove(name) else {
            log::error!("Trying to unload a bank that isn't loaded: {}", name);
            return;
        };

        match self.engine.unload_bank(bank) {
            Ok(()) => log::info!("Unloaded bank {}", name),
            Err(e) => log::error!("{}", e),
        }
    }

    pub fn is_bank_loaded(&self, name: &str) -> bool {
        self.loaded_banks.contains_key(name)
    }

    /// Flush queued commands to the sound engine (once per frame)
    pub fn flush(&mut self) {
        self.engine.render_audio();
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }
}

impl<E: SoundEngine> Drop for Audio<E> {
    fn drop(&mut self) {
        self.engine.unregister_all();
    }
}
