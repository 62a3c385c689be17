//! Display-side collaborators of the editor.
//!
//! The editor only talks to a [`DisplaySurface`] and a [`FrameClock`]. The
//! concrete [`ScreenBuffer`] is an in-memory two-plane tile map that the
//! terminal front end renders every frame.

mod clock;
pub mod palette;
mod screen;

pub use clock::IntervalClock;
pub use screen::ScreenBuffer;

use crate::canvas::Color;

/// Width of the tile map in cells.
pub const SCREEN_COLS: u16 = 40;
/// Height of the tile map in cells.
pub const SCREEN_ROWS: u16 = 28;

/// Composited tile-map layers. `Foreground` is drawn over `Background` and
/// lets it show through wherever it is [`Symbol::Empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plane {
    Background,
    Foreground,
}

/// What a tile-map cell references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Symbol {
    /// Transparent / cleared cell.
    #[default]
    Empty,
    /// Solid block of one palette color.
    Fill(Color),
    /// Hollow square outlined in one palette color.
    Cursor(Color),
    /// Text glyph.
    Glyph(char),
}

pub trait DisplaySurface {
    fn set_cell(&mut self, plane: Plane, symbol: Symbol, x: u16, y: u16);

    /// Writes `text` left to right starting at `(x, y)` on the text plane.
    fn draw_text(&mut self, text: &str, x: u16, y: u16);
}

pub trait FrameClock {
    /// Blocks until the next display refresh.
    fn wait_for_next_frame(&mut self);
}
