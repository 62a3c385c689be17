use std::fmt;

use crate::canvas::geometry::{
    CanvasBounds, Location, Position, TileIndex, TILE_COUNT, TILE_HEIGHT, TILE_WIDTH,
};

/// A 4-bit palette index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Color(u8);

impl Color {
    pub const MIN: Color = Color(0x0);
    pub const MAX: Color = Color(0xF);

    /// Returns `None` for values above [`Color::MAX`].
    pub const fn new(index: u8) -> Option<Self> {
        if index <= Self::MAX.0 {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Infallible constructor for known indices; out of range fails the
    /// build in const context and panics otherwise.
    pub const fn from_index(index: u8) -> Self {
        assert!(index <= Self::MAX.0, "color index out of range");
        Self(index)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub fn saturating_inc(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::MAX.0))
    }

    pub fn saturating_dec(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    pub fn all() -> impl Iterator<Item = Color> {
        (Self::MIN.0..=Self::MAX.0).map(Color)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.0)
    }
}

pub type TileRow = [Color; TILE_WIDTH as usize];
pub type Tile = [TileRow; TILE_HEIGHT as usize];

/// Pixel storage for the four canvas tiles.
///
/// Storage is fixed at construction and never reallocated; painting touches
/// exactly one pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    bounds: CanvasBounds,
    tiles: [Tile; TILE_COUNT],
}

impl Canvas {
    pub fn filled(bounds: CanvasBounds, color: Color) -> Self {
        Self {
            bounds,
            tiles: [[[color; TILE_WIDTH as usize]; TILE_HEIGHT as usize]; TILE_COUNT],
        }
    }

    pub fn bounds(&self) -> &CanvasBounds {
        &self.bounds
    }

    /// Sets the pixel under `cursor` and returns where it landed.
    pub fn paint(&mut self, cursor: Position, color: Color) -> Location {
        let location = self.bounds.locate(cursor);
        self.tiles[location.tile.as_usize()][location.row][location.col] = color;
        location
    }

    pub fn read_tile(&self, tile: TileIndex) -> &Tile {
        &self.tiles[tile.as_usize()]
    }

    pub fn pixel(&self, location: &Location) -> Color {
        self.tiles[location.tile.as_usize()][location.row][location.col]
    }

    /// Color of the pixel shown at a screen cell inside the bounds.
    pub fn pixel_at(&self, pos: Position) -> Color {
        self.pixel(&self.bounds.locate(pos))
    }
}
