//! The game the host drives
//!
//! Owns the config, binds, palette, audio, render surface and scene, and
//! steps them through the lifecycle. Setup happens on entering
//! Initializing; teardown happens when the app is dropped.

use std::path::Path;

use glam::Vec3;

use crate::audio::ids::banks;
use crate::audio::{Audio, SoundEngine};
use crate::config::Config;
use crate::engine::{Game, Host};
use crate::error::{PaletteError, StartupError};
use crate::input::{Action, ActionBinds, InputCommand};
use crate::lifecycle::AppState;
use crate::palette::{Palette, slots};
use crate::renderer::{VertexCanvas, draw_bomps};
use crate::sim::{Degree, Random, Scene};

/// Banks loaded on entering Initializing, in load order
pub const REQUIRED_BANKS: [&str; 2] = [banks::DEBUG_SOUNDS, banks::PLAYER];

/// Exit status when setup fails
const SETUP_FAILURE: i32 = 1;

// Fields drop top to bottom, after `Drop::drop` unloads the banks.
pub struct App<E: SoundEngine> {
    state: AppState,
    canvas: Option<VertexCanvas>,
    scene: Option<Scene>,
    loaded_banks: Vec<&'static str>,
    rng: Random,
    audio: Audio<E>,
    palette: Palette,
    binds: ActionBinds,
    config: Config,
}

impl<E: SoundEngine> App<E> {
    pub fn new(config: Config, palette: Palette, engine: E) -> Result<Self, StartupError> {
        let binds = ActionBinds::from_table(&config.binds);
        let rng = match config.game.seed {
            Some(seed) => Random::new(seed),
            None => Random::from_clock(),
        };
        let audio = Audio::new(engine)?;

        Ok(Self {
            state: AppState::None,
            canvas: None,
            scene: None,
            loaded_banks: Vec::new(),
            rng,
            audio,
            palette,
            binds,
            config,
        })
    }

    /// Load the config at `config_path` and the palette it names
    pub fn load(config_path: &Path, engine: E) -> Result<Self, StartupError> {
        let config = Config::load(config_path)?;
        let palette_path = config.palette_path(config_path);
        let palette = Palette::load(&palette_path)?;
        if !palette.covers_slots() {
            return Err(StartupError::Palette {
                path: palette_path,
                source: PaletteError::MissingSlots {
                    required: slots::REQUIRED_LEN,
                    found: palette.len(),
                },
            });
        }
        Self::new(config, palette, engine)
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn canvas(&self) -> Option<&VertexCanvas> {
        self.canvas.as_ref()
    }

    pub fn audio(&self) -> &Audio<E> {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut Audio<E> {
        &mut self.audio
    }

    /// Move to `requested` and run its entry actions
    pub fn transition(&mut self, host: &mut Host, requested: AppState) {
        let Some(next) = self.state.next(requested) else {
            return;
        };
        self.state = next;

        match next {
            AppState::None => {}
            AppState::Initializing => {
                log::info!("Initializing");
                match self.setup(host) {
                    Ok(()) => self.transition(host, AppState::Playing),
                    Err(e) => {
                        log::error!("Setup failed: {}", e);
                        host.fail(SETUP_FAILURE);
                        self.transition(host, AppState::Terminate);
                    }
                }
            }
            AppState::Playing => log::info!("Playing"),
            AppState::Quitting => log::info!("Quitting"),
            AppState::Terminate => {
                log::info!("Terminating");
                host.terminate();
            }
        }
    }

    fn setup(&mut self, host: &Host) -> Result<(), StartupError> {
        for name in REQUIRED_BANKS {
            self.audio.load_bank(name)?;
            self.loaded_banks.push(name);
        }

        let (w, h) = host.window_size();
        let (width, height) = (w as f32, h as f32);
        self.audio.set_listener_pose(
            Vec3::new(width * 0.5, height * 0.5, 0.0),
            Vec3::Z,
            Vec3::Y,
        );

        self.canvas = Some(VertexCanvas::new(w, h));

        let scene = Scene::spawn(
            &mut self.rng,
            self.config.game.bomp_count,
            width,
            height,
            &mut self.audio,
        )?;
        self.scene = Some(scene);
        Ok(())
    }

    fn play_debug(&mut self) {
        let Some(event) = Degree::First.event() else {
            return;
        };
        let object = self.audio.unpositioned();
        self.audio.post_event(event, object);
    }
}

impl<E: SoundEngine> Game for App<E> {
    fn on_input(&mut self, host: &mut Host, input: &InputCommand) {
        if self.state != AppState::Playing || !input.is_pressed() {
            return;
        }
        match self.binds.action_for(input) {
            Some(Action::Quit) => self.transition(host, AppState::Quitting),
            Some(Action::PlayDebug) => self.play_debug(),
            None => {}
        }
    }

    fn update(&mut self, host: &mut Host, t: f32, dt: f32) {
        match self.state {
            AppState::None => self.transition(host, AppState::Initializing),
            AppState::Playing => {
                let height = host.window_size().1 as f32;
                if let Some(scene) = self.scene.as_mut() {
                    scene.update(&mut self.audio, height, t, dt);
                }
                self.audio.flush();
            }
            AppState::Quitting => self.transition(host, AppState::Terminate),
            AppState::Initializing | AppState::Terminate => {}
        }
    }

    fn render(&mut self, _host: &mut Host) {
        if self.state != AppState::Playing {
            return;
        }
        let (Some(canvas), Some(scene)) = (self.canvas.as_mut(), self.scene.as_ref()) else {
            return;
        };
        draw_bomps(canvas, &self.palette, &scene.bomps);
    }

    fn on_shutdown(&mut self, host: &mut Host) -> bool {
        self.transition(host, AppState::Quitting);
        true
    }
}

impl<E: SoundEngine> Drop for App<E> {
    fn drop(&mut self) {
        while let Some(name) = self.loaded_banks.pop() {
            self.audio.unload_bank(name);
        }
    }
}
