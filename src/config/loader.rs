use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::canvas::{Color, CANVAS_HEIGHT, CANVAS_WIDTH, TILE_HEIGHT, TILE_WIDTH};
use crate::config::types::Config;
use crate::display::{SCREEN_COLS, SCREEN_ROWS};

const MAX_FRAME_RATE: u32 = 240;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

/// Half-open cell rectangle used for layout checks.
#[derive(Debug, Clone, Copy)]
struct Region {
    x: u16,
    y: u16,
    width: u16,
    height: u16,
}

impl Region {
    fn fits_screen(&self) -> bool {
        u32::from(self.x) + u32::from(self.width) <= u32::from(SCREEN_COLS)
            && u32::from(self.y) + u32::from(self.height) <= u32::from(SCREEN_ROWS)
    }

    fn overlaps(&self, other: &Region) -> bool {
        let (ax1, ay1) = (u32::from(self.x), u32::from(self.y));
        let (ax2, ay2) = (ax1 + u32::from(self.width), ay1 + u32::from(self.height));
        let (bx1, by1) = (u32::from(other.x), u32::from(other.y));
        let (bx2, by2) = (bx1 + u32::from(other.width), by1 + u32::from(other.height));
        ax1 < bx2 && bx1 < ax2 && ay1 < by2 && by1 < ay2
    }
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/tiledit/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("tiledit").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Fill and brush colors are palette indices
    /// - The frame rate is between 1 and 240
    /// - Canvas and hex dump (with its label row) fit the screen without overlapping
    /// - The cursor starts on the canvas
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("fill_color", self.editor.fill_color),
            ("brush_color", self.editor.brush_color),
        ] {
            if Color::new(value).is_none() {
                return Err(validation(format!(
                    "{name} {value} is out of range (0-{})",
                    Color::MAX.index()
                )));
            }
        }

        let rate = self.display.frame_rate;
        if !(1..=MAX_FRAME_RATE).contains(&rate) {
            return Err(validation(format!(
                "frame_rate {rate} is out of range (1-{MAX_FRAME_RATE})"
            )));
        }

        let layout = &self.layout;
        let canvas = Region {
            x: layout.canvas_x,
            y: layout.canvas_y,
            width: u16::from(CANVAS_WIDTH),
            height: u16::from(CANVAS_HEIGHT),
        };
        if !canvas.fits_screen() {
            return Err(validation(format!(
                "canvas at ({}, {}) does not fit the {SCREEN_COLS}x{SCREEN_ROWS} screen",
                layout.canvas_x, layout.canvas_y
            )));
        }

        if layout.hex_dump_y == 0 {
            return Err(validation(
                "hex_dump_y must leave a row above it for the tile label".to_string(),
            ));
        }
        let hex_dump = Region {
            x: layout.hex_dump_x,
            y: layout.hex_dump_y - 1,
            width: u16::from(TILE_WIDTH),
            height: u16::from(TILE_HEIGHT) + 1,
        };
        if !hex_dump.fits_screen() {
            return Err(validation(format!(
                "hex dump at ({}, {}) does not fit the {SCREEN_COLS}x{SCREEN_ROWS} screen",
                layout.hex_dump_x, layout.hex_dump_y
            )));
        }
        if canvas.overlaps(&hex_dump) {
            return Err(validation("hex dump overlaps the canvas".to_string()));
        }

        let cursor = self.editor.cursor();
        if !layout.canvas_bounds().contains(cursor) {
            return Err(validation(format!("cursor start {cursor} is outside the canvas")));
        }

        Ok(())
    }
}

fn validation(message: String) -> ConfigError {
    ConfigError::ValidationError { message }
}
