//! Host side of the frame loop
//!
//! The host owns the loop and calls into the game once per frame: queued
//! input first, then one update with the current time, then render. `Host`
//! is what the game gets to talk back with.

use std::collections::VecDeque;

use crate::config::EngineConfig;
use crate::input::InputCommand;

/// Callbacks the host drives
pub trait Game {
    fn on_input(&mut self, host: &mut Host, input: &InputCommand);
    fn update(&mut self, host: &mut Host, t: f32, dt: f32);
    fn render(&mut self, host: &mut Host);
    /// The host wants to close. Returning false keeps the loop running.
    fn on_shutdown(&mut self, host: &mut Host) -> bool;
}

impl<G: Game + ?Sized> Game for &mut G {
    fn on_input(&mut self, host: &mut Host, input: &InputCommand) {
        (**self).on_input(host, input)
    }
    fn update(&mut self, host: &mut Host, t: f32, dt: f32) {
        (**self).update(host, t, dt)
    }
    fn render(&mut self, host: &mut Host) {
        (**self).render(host)
    }
    fn on_shutdown(&mut self, host: &mut Host) -> bool {
        (**self).on_shutdown(host)
    }
}

/// Host state visible to the game
#[derive(Debug, Clone)]
pub struct Host {
    window_width: u32,
    window_height: u32,
    terminating: bool,
    exit_code: i32,
}

impl Host {
    pub fn new(window_width: u32, window_height: u32) -> Self {
        Self {
            window_width,
            window_height,
            terminating: false,
            exit_code: 0,
        }
    }

    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    /// Stop the frame loop after the current frame
    pub fn terminate(&mut self) {
        self.terminating = true;
    }

    /// Stop with a failure status
    pub fn fail(&mut self, exit_code: i32) {
        self.exit_code = exit_code;
        self.terminating = true;
    }

    pub fn is_terminating(&self) -> bool {
        self.terminating
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }
}

/// Headless host with a fixed frame rate
pub struct Engine<'a> {
    host: Host,
    game: Option<Box<dyn Game + 'a>>,
    inputs: VecDeque<InputCommand>,
    frame_dt: f32,
    time: f32,
    frame: u64,
    /// Ask the game to close after this long (seconds)
    shutdown_after: Option<f32>,
    shutdown_requested: bool,
}

impl<'a> Engine<'a> {
    pub fn new(config: &EngineConfig) -> Self {
        let frame_dt = 1.0 / config.frame_rate.max(1) as f32;
        let shutdown_after = (config.run_seconds > 0.0).then_some(config.run_seconds);
        Self {
            host: Host::new(config.window_width, config.window_height),
            game: None,
            inputs: VecDeque::new(),
            frame_dt,
            time: 0.0,
            frame: 0,
            shutdown_after,
            shutdown_requested: false,
        }
    }

    pub fn set_game(&mut self, game: Box<dyn Game + 'a>) {
        self.game = Some(game);
    }

    pub fn push_input(&mut self, input: InputCommand) {
        self.inputs.push_back(input);
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Ask the game whether it may close, like a window close button
    pub fn request_shutdown(&mut self) -> bool {
        let Some(game) = self.game.as_mut() else {
            self.host.terminate();
            return true;
        };
        game.on_shutdown(&mut self.host)
    }

    /// Run one frame: input, update, render
    pub fn step(&mut self) {
        self.frame += 1;
        self.time += self.frame_dt;

        if let Some(limit) = self.shutdown_after {
            if !self.shutdown_requested && self.time >= limit {
                self.shutdown_requested = true;
                log::info!("Requesting shutdown after {:.1}s", self.time);
                self.request_shutdown();
            }
        }

        let Some(game) = self.game.as_mut() else {
            self.inputs.clear();
            return;
        };

        while let Some(input) = self.inputs.pop_front() {
            game.on_input(&mut self.host, &input);
        }
        game.update(&mut self.host, self.time, self.frame_dt);
        game.render(&mut self.host);
    }

    /// Run until the game terminates. Returns the exit status.
    pub fn run(&mut self) -> i32 {
        self.run_frames(u64::MAX)
    }

    /// Run at most `max_frames` frames or until the game terminates
    pub fn run_frames(&mut self, max_frames: u64) -> i32 {
        let mut frames = 0;
        while !self.host.is_terminating() && frames < max_frames {
            self.step();
            frames += 1;
        }
        log::info!("Host stopped after {} frames", self.frame);
        self.host.exit_code()
    }
}
