//! Tile canvas: coordinate mapping, pixel storage and hex serialization.

mod geometry;
mod hex;
mod model;

pub use geometry::{
    CanvasBounds, CanvasPoint, Direction, Location, Position, TileIndex, CANVAS_HEIGHT,
    CANVAS_WIDTH, TILES_X, TILES_Y, TILE_COUNT, TILE_HEIGHT, TILE_WIDTH,
};
pub use hex::{hex_digit, serialize_tile, HexDump, HEX_DIGITS};
pub use model::{Canvas, Color, Tile, TileRow};
