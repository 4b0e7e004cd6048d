//! Config file
//!
//! TOML with an `[engine]` section for the host window, a `[game]` section
//! for the scene, and a `[binds]` table mapping key names to actions.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{BOMP_COUNT, FRAME_RATE};
use crate::error::ConfigError;

/// Default config location relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "assets/config.toml";
/// Environment variable overriding the config location
pub const CONFIG_ENV: &str = "BOMPS_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub window_width: u32,
    pub window_height: u32,
    #[serde(default = "EngineConfig::default_frame_rate")]
    pub frame_rate: u32,
    /// Ask the game to shut down after this many seconds (0 = never)
    #[serde(default)]
    pub run_seconds: f32,
}

impl EngineConfig {
    fn default_frame_rate() -> u32 {
        FRAME_RATE
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub palette: PathBuf,
    #[serde(default = "GameConfig::default_bomp_count")]
    pub bomp_count: usize,
    /// Fixed seed; a wall-clock seed is used when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    fn default_bomp_count() -> usize {
        BOMP_COUNT
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub engine: EngineConfig,
    pub game: GameConfig,
    #[serde(default)]
    pub binds: BTreeMap<String, String>,
}

impl Config {
    /// Parse config text. `path` is only used for diagnostics.
    pub fn from_str(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read and parse a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_str(&text, path)?;
        log::info!(
            "Loaded config {} ({}x{})",
            path.display(),
            config.engine.window_width,
            config.engine.window_height
        );
        Ok(config)
    }

    /// Config path from the environment, or the default location
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Resolve a relative palette path against the config file's directory
    pub fn palette_path(&self, config_path: &Path) -> PathBuf {
        let palette = &self.game.palette;
        if palette.is_absolute() {
            return palette.clone();
        }
        match config_path.parent() {
            Some(dir) => dir.join(palette),
            None => palette.clone(),
        }
    }

    pub fn window_size(&self) -> (u32, u32) {
        (self.engine.window_width, self.engine.window_height)
    }
}
