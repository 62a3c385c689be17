use serde::{Deserialize, Serialize};

use crate::canvas::{CanvasBounds, Color, Position};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Initial editor state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Palette index every canvas pixel starts with (default: 1).
    #[serde(default = "default_fill_color")]
    pub fill_color: u8,
    /// Palette index the brush starts with (default: 2).
    #[serde(default = "default_brush_color")]
    pub brush_color: u8,
    /// Starting cursor column on the screen grid (default: 8).
    #[serde(default = "default_cursor")]
    pub cursor_x: u16,
    /// Starting cursor row on the screen grid (default: 8).
    #[serde(default = "default_cursor")]
    pub cursor_y: u16,
}

/// Placement of the canvas and the hex dump on the 40×28 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_canvas_origin")]
    pub canvas_x: u16,
    #[serde(default = "default_canvas_origin")]
    pub canvas_y: u16,
    #[serde(default = "default_hex_dump_x")]
    pub hex_dump_x: u16,
    /// Top row of the dump; the tile label goes on the row above.
    #[serde(default = "default_hex_dump_y")]
    pub hex_dump_y: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Frames per second of the redraw loop (default: 60).
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Logging is off when unset.
    #[serde(default)]
    pub file: Option<String>,
}

fn default_fill_color() -> u8 {
    1
}

fn default_brush_color() -> u8 {
    2
}

fn default_cursor() -> u16 {
    8
}

fn default_canvas_origin() -> u16 {
    2
}

fn default_hex_dump_x() -> u16 {
    2
}

fn default_hex_dump_y() -> u16 {
    20
}

fn default_frame_rate() -> u32 {
    60
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            fill_color: default_fill_color(),
            brush_color: default_brush_color(),
            cursor_x: default_cursor(),
            cursor_y: default_cursor(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_x: default_canvas_origin(),
            canvas_y: default_canvas_origin(),
            hex_dump_x: default_hex_dump_x(),
            hex_dump_y: default_hex_dump_y(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl EditorConfig {
    /// Out-of-range values (only possible before `validate`) read as color 0.
    pub fn fill(&self) -> Color {
        Color::new(self.fill_color).unwrap_or(Color::MIN)
    }

    pub fn brush(&self) -> Color {
        Color::new(self.brush_color).unwrap_or(Color::MIN)
    }

    pub fn cursor(&self) -> Position {
        Position::new(self.cursor_x, self.cursor_y)
    }
}

impl LayoutConfig {
    pub fn canvas_bounds(&self) -> CanvasBounds {
        CanvasBounds::new(Position::new(self.canvas_x, self.canvas_y))
    }

    pub fn hex_dump_origin(&self) -> Position {
        Position::new(self.hex_dump_x, self.hex_dump_y)
    }
}
