//! Error types
//!
//! Startup failures are fatal and bubble up to `main`. Runtime audio
//! failures are logged where they happen and never reach here.

use std::path::PathBuf;

use thiserror::Error;

/// Errors while loading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("could not open config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or is missing required keys.
    #[error("could not parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Errors while loading a JASC-PAL palette.
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("could not read palette file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid header, expected {expected}")]
    Header { expected: &'static str },

    #[error("invalid number of colors: {0:?}")]
    Count(String),

    #[error("invalid colors on line {line}: {text:?}")]
    Color { line: usize, text: String },

    #[error("color component out of bounds: {0}")]
    Component(u32),

    #[error("expected {expected} colors, found {found}")]
    Truncated { expected: usize, found: usize },

    #[error("palette has {found} colors, the renderer needs {required}")]
    MissingSlots { required: usize, found: usize },
}

/// Errors reported by the sound engine for setup calls.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AudioError {
    #[error("could not load bank {name}: {reason}")]
    LoadBank { name: String, reason: String },

    #[error("could not unload bank {id}: {reason}")]
    UnloadBank { id: u32, reason: String },

    #[error("could not register game object {name}: {reason}")]
    Register { name: String, reason: String },
}

/// Anything that stops the app from reaching the Playing state.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("palette {path}: {source}")]
    Palette {
        path: PathBuf,
        #[source]
        source: PaletteError,
    },

    #[error(transparent)]
    Audio(#[from] AudioError),
}
