use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use glam::Vec3;

use bomps::app::REQUIRED_BANKS;
use bomps::audio::{
    AudioCall, BankId, EventId, GameObjectId, HeadlessEngine, PlayingId, RtpcId, SoundEngine,
    short_id,
};
use bomps::error::{AudioError, PaletteError};
use bomps::input::InputCommand;
use bomps::{App, AppState, Engine, StartupError};

/// Headless engine that stays inspectable after the app owning it is gone
#[derive(Clone, Default)]
struct SharedEngine(Rc<RefCell<HeadlessEngine>>);

impl SharedEngine {
    fn recording() -> Self {
        Self(Rc::new(RefCell::new(HeadlessEngine::recording())))
    }

    fn journal(&self) -> Vec<AudioCall> {
        self.0.borrow().journal().to_vec()
    }
}

impl SoundEngine for SharedEngine {
    fn register_game_object(&mut self, id: GameObjectId, name: &str) -> Result<(), AudioError> {
        self.0.borrow_mut().register_game_object(id, name)
    }
    fn unregister_all(&mut self) {
        self.0.borrow_mut().unregister_all()
    }
    fn set_default_listener(&mut self, listener: GameObjectId) {
        self.0.borrow_mut().set_default_listener(listener)
    }
    fn set_listener_pose(&mut self, listener: GameObjectId, position: Vec3, forward: Vec3, up: Vec3) {
        self.0
            .borrow_mut()
            .set_listener_pose(listener, position, forward, up)
    }
    fn post_event(&mut self, event: EventId, object: GameObjectId) -> PlayingId {
        self.0.borrow_mut().post_event(event, object)
    }
    fn set_position(&mut self, object: GameObjectId, position: Vec3) {
        self.0.borrow_mut().set_position(object, position)
    }
    fn set_rtpc_value(&mut self, rtpc: RtpcId, object: GameObjectId, value: f32) {
        self.0.borrow_mut().set_rtpc_value(rtpc, object, value)
    }
    fn load_bank(&mut self, name: &str) -> Result<BankId, AudioError> {
        self.0.borrow_mut().load_bank(name)
    }
    fn unload_bank(&mut self, bank: BankId) -> Result<(), AudioError> {
        self.0.borrow_mut().unload_bank(bank)
    }
    fn render_audio(&mut self) {
        self.0.borrow_mut().render_audio()
    }
}

fn write_palette(dir: &Path, colors: usize) -> PathBuf {
    let mut text = format!("JASC-PAL\r\n0100\r\n{}\r\n", colors);
    for i in 0..colors {
        text.push_str(&format!("{} {} {}\r\n", i, 255 - i, 128));
    }
    let path = dir.join("palette.pal");
    fs::write(&path, text).unwrap();
    path
}

fn write_config(dir: &Path, run_seconds: f32) -> PathBuf {
    let text = format!(
        r#"
[engine]
window_width = 800
window_height = 600
frame_rate = 60
run_seconds = {run_seconds:?}

[game]
palette = "palette.pal"
bomp_count = 6
seed = 42

[binds]
Escape = "quit"
"#
    );
    let path = dir.join("config.toml");
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn runs_until_shutdown_then_tears_down_in_order() {
    let dir = tempfile::tempdir().unwrap();
    write_palette(dir.path(), 38);
    let config_path = write_config(dir.path(), 8.0);

    let sound = SharedEngine::recording();
    let mut app = App::load(&config_path, sound.clone()).unwrap();

    let mut engine = Engine::new(&app.config().engine);
    engine.set_game(Box::new(&mut app));
    assert_eq!(engine.run(), 0);
    let frames = engine.frame();
    drop(engine);

    assert_eq!(app.state(), AppState::Terminate);
    // 8s at 60fps, plus the frame that turns Quitting into Terminate
    assert!((480..=482).contains(&frames), "ran {frames} frames");

    let scene = app.scene().unwrap();
    assert_eq!(scene.seed, 42);
    assert_eq!(scene.bomps.len(), 6);
    // every bomp has a period under 2*pi seconds
    assert!(scene.notes_fired >= 6, "fired {}", scene.notes_fired);
    assert!(app.canvas().unwrap().triangle_count() > 0);

    drop(app);

    let journal = sound.journal();
    let loads: Vec<&str> = journal
        .iter()
        .filter_map(|call| match call {
            AudioCall::LoadBank { name, .. } => Some(name.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(loads, ["Init", REQUIRED_BANKS[0], REQUIRED_BANKS[1]]);

    let unloads: Vec<BankId> = journal
        .iter()
        .filter_map(|call| match call {
            AudioCall::UnloadBank { bank } => Some(*bank),
            _ => None,
        })
        .collect();
    assert_eq!(
        unloads,
        [
            BankId(short_id(REQUIRED_BANKS[1])),
            BankId(short_id(REQUIRED_BANKS[0]))
        ]
    );
    assert_eq!(sound.0.borrow().object_count(), 0);
}

#[test]
fn quit_key_stops_the_loop() {
    let dir = tempfile::tempdir().unwrap();
    write_palette(dir.path(), 38);
    let config_path = write_config(dir.path(), 0.0);

    let mut app = App::load(&config_path, HeadlessEngine::new()).unwrap();
    let mut engine = Engine::new(&app.config().engine);
    engine.set_game(Box::new(&mut app));

    engine.step();
    engine.push_input(InputCommand::pressed("Escape"));
    assert_eq!(engine.run_frames(100), 0);
    assert_eq!(engine.frame(), 2);
    assert!(engine.host().is_terminating());
    drop(engine);

    assert_eq!(app.state(), AppState::Terminate);
}

#[test]
fn failed_bank_load_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    write_palette(dir.path(), 38);
    let config_path = write_config(dir.path(), 0.0);

    let sound = HeadlessEngine::new().with_failing_bank(REQUIRED_BANKS[0]);
    let app = App::load(&config_path, sound).unwrap();
    let mut engine = Engine::new(&app.config().engine);
    engine.set_game(Box::new(app));
    assert_eq!(engine.run_frames(100), 1);
    assert_eq!(engine.frame(), 1);
}

#[test]
fn missing_config_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let result = App::load(&dir.path().join("nope.toml"), HeadlessEngine::new());
    assert!(matches!(result, Err(StartupError::Config(_))));
}

#[test]
fn missing_palette_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_config(dir.path(), 0.0);
    let result = App::load(&config_path, HeadlessEngine::new());
    assert!(matches!(
        result,
        Err(StartupError::Palette {
            source: PaletteError::Io { .. },
            ..
        })
    ));
}

#[test]
fn short_palette_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_palette(dir.path(), 16);
    let config_path = write_config(dir.path(), 0.0);
    let result = App::load(&config_path, HeadlessEngine::new());
    assert!(matches!(
        result,
        Err(StartupError::Palette {
            source: PaletteError::MissingSlots {
                required: 38,
                found: 16
            },
            ..
        })
    ));
}
