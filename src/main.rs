//! Bomps entry point
//!
//! Loads the config, builds the app on the headless sound engine and runs
//! the frame loop until the app terminates.

use std::process::ExitCode;

use bomps::audio::HeadlessEngine;
use bomps::{App, Config, Engine};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Bomps starting...");

    let config_path = Config::default_path();
    let app = match App::load(&config_path, HeadlessEngine::new()) {
        Ok(app) => app,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut engine = Engine::new(&app.config().engine);
    engine.set_game(Box::new(app));
    if engine.run() == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
