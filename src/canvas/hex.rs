//! Text rendering of tile pixel data, one hex digit per pixel.

use crate::canvas::geometry::{TILE_HEIGHT, TILE_WIDTH};
use crate::canvas::model::{Color, Tile};

/// Digit shown for each palette index.
pub const HEX_DIGITS: [u8; 16] = *b"0123456789ABCDEF";

const ROWS: usize = TILE_HEIGHT as usize;
const COLS: usize = TILE_WIDTH as usize;

pub fn hex_digit(color: Color) -> char {
    char::from(HEX_DIGITS[usize::from(color.index())])
}

/// Eight fixed-width rows of eight ASCII hex digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexDump {
    rows: [[u8; COLS]; ROWS],
}

impl HexDump {
    pub fn row(&self, row: usize) -> &str {
        std::str::from_utf8(&self.rows[row]).expect("hex rows hold ASCII digits only")
    }

    pub fn rows(&self) -> impl Iterator<Item = &str> + '_ {
        (0..ROWS).map(move |row| self.row(row))
    }

    pub fn digit(&self, row: usize, col: usize) -> char {
        char::from(self.rows[row][col])
    }

    /// Rewrites a single digit after a one-pixel paint.
    pub fn set_digit(&mut self, row: usize, col: usize, color: Color) {
        self.rows[row][col] = HEX_DIGITS[usize::from(color.index())];
    }
}

pub fn serialize_tile(tile: &Tile) -> HexDump {
    let mut rows = [[b'0'; COLS]; ROWS];
    for (out, pixels) in rows.iter_mut().zip(tile.iter()) {
        for (digit, color) in out.iter_mut().zip(pixels.iter()) {
            *digit = HEX_DIGITS[usize::from(color.index())];
        }
    }
    HexDump { rows }
}
