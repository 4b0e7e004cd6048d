//! The bomp population
//!
//! Created once during setup and kept for the whole session.

use super::bomp::Bomp;
use super::placement::place_bomps;
use super::rng::Random;
use super::tick::update_bomps;
use crate::audio::{Audio, SoundEngine};
use crate::error::AudioError;

#[derive(Debug, Clone)]
pub struct Scene {
    /// Seed the layout was drawn from
    pub seed: u64,
    pub bomps: Vec<Bomp>,
    /// Simulation time of the last update
    pub time: f32,
    /// Notes fired since the scene was created
    pub notes_fired: u64,
}

impl Scene {
    /// Lay out `count` bomps and register one audio object per bomp
    pub fn spawn<E: SoundEngine>(
        rng: &mut Random,
        count: usize,
        width: f32,
        height: f32,
        audio: &mut Audio<E>,
    ) -> Result<Self, AudioError> {
        let params = place_bomps(rng, count, width, height);

        let mut bomps = Vec::with_capacity(params.len());
        for (i, p) in params.into_iter().enumerate() {
            let handle = audio.register_entity(&format!("Bomp {}", i))?;
            log::debug!(
                "Bomp {} at ({:.0}, {:.0}) r={}..{} speed={:.2} {:?}",
                i,
                p.position.x,
                p.position.y,
                p.radius_min,
                p.radius_max,
                p.speed,
                p.degree
            );
            bomps.push(Bomp::new(p, handle));
        }

        log::info!("Spawned {} bomps (seed {})", bomps.len(), rng.seed());

        Ok(Self {
            seed: rng.seed(),
            bomps,
            time: 0.0,
            notes_fired: 0,
        })
    }

    /// Advance every bomp. Returns how many fired this frame.
    pub fn update<E: SoundEngine>(
        &mut self,
        audio: &mut Audio<E>,
        canvas_height: f32,
        t: f32,
        dt: f32,
    ) -> usize {
        self.time = t;
        let fired = update_bomps(&mut self.bomps, audio, canvas_height, t, dt);
        self.notes_fired += fired as u64;
        fired
    }
}
