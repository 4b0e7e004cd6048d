//! JASC-PAL palette loading
//!
//! ```text
//! JASC-PAL
//! 0100
//! 3
//! 255 0 0
//! 0 255 0
//! 0 0 255
//! ```

use std::fs;
use std::ops::Index;
use std::path::Path;

use glam::Vec4;

use crate::error::{PaletteError, StartupError};

/// Fixed palette slots used by the renderer
pub mod slots {
    pub const SHADOW: usize = 6;
    pub const BODY: usize = 7;
    pub const BODY_JUMP: usize = 8;
    pub const RIM: usize = 9;
    pub const MARKER: usize = 17;
    pub const BACKGROUND: usize = 37;

    /// Smallest palette that covers every slot above
    pub const REQUIRED_LEN: usize = BACKGROUND + 1;
}

/// Ordered RGBA colors (0-1 floats), read-only after load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    colors: Vec<Vec4>,
}

impl Palette {
    pub fn new(colors: Vec<Vec4>) -> Self {
        Self { colors }
    }

    /// Load a palette file. The file contents live only for this call.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StartupError> {
        let path = path.as_ref();
        let wrap = |source| StartupError::Palette {
            path: path.to_path_buf(),
            source,
        };

        let text = fs::read_to_string(path).map_err(|source| {
            wrap(PaletteError::Io {
                path: path.to_path_buf(),
                source,
            })
        })?;
        let palette = Self::parse(&text).map_err(wrap)?;
        log::info!("Loaded {} colors from {}", palette.len(), path.display());
        Ok(palette)
    }

    /// Parse JASC-PAL text.
    pub fn parse(text: &str) -> Result<Self, PaletteError> {
        // `lines()` strips a trailing '\r' too
        let mut lines = text.lines();

        if lines.next() != Some("JASC-PAL") {
            return Err(PaletteError::Header {
                expected: "JASC-PAL",
            });
        }
        if lines.next() != Some("0100") {
            return Err(PaletteError::Header { expected: "0100" });
        }

        let count_line = lines.next().unwrap_or_default();
        let count: usize = count_line
            .trim()
            .parse()
            .map_err(|_| PaletteError::Count(count_line.to_string()))?;

        let mut colors = Vec::new();
        for (i, line) in lines.take(count).enumerate() {
            colors.push(parse_color(line, i + 4)?);
        }

        if colors.len() < count {
            return Err(PaletteError::Truncated {
                expected: count,
                found: colors.len(),
            });
        }

        Ok(Self { colors })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Vec4> {
        self.colors.get(index).copied()
    }

    /// Whether every renderer slot exists
    pub fn covers_slots(&self) -> bool {
        self.colors.len() >= slots::REQUIRED_LEN
    }
}

impl Index<usize> for Palette {
    type Output = Vec4;

    fn index(&self, index: usize) -> &Vec4 {
        &self.colors[index]
    }
}

fn parse_color(line: &str, line_no: usize) -> Result<Vec4, PaletteError> {
    let bad = || PaletteError::Color {
        line: line_no,
        text: line.to_string(),
    };

    let mut parts = line.split_whitespace();
    let mut rgb = [0.0f32; 3];
    for channel in &mut rgb {
        let value: u32 = parts.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
        if value > u8::MAX as u32 {
            return Err(PaletteError::Component(value));
        }
        *channel = value as f32 / 255.0;
    }

    Ok(Vec4::new(rgb[0], rgb[1], rgb[2], 1.0))
}
