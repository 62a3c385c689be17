//! Coordinate mapping between screen cells, canvas pixels and tiles.
//!
//! The canvas is a fixed 2×2 block of 8×8 tiles placed somewhere on the
//! screen grid. Everything here is a pure function of the bounds origin.
//!
//! ```text
//!  screen (x, y) ──(- origin)──→ canvas (cx, cy) ──→ tile  = (cx/8) | (cy/8)<<1
//!                                                 └─→ pixel = (cy%8, cx%8)
//! ```

use std::fmt;

pub const TILE_WIDTH: u8 = 8;
pub const TILE_HEIGHT: u8 = 8;
pub const TILES_X: u8 = 2;
pub const TILES_Y: u8 = 2;
pub const TILE_COUNT: usize = (TILES_X * TILES_Y) as usize;
pub const CANVAS_WIDTH: u8 = TILE_WIDTH * TILES_X;
pub const CANVAS_HEIGHT: u8 = TILE_HEIGHT * TILES_Y;

/// Absolute cell on the screen grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

impl Position {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Offset by a cell delta. Used for laying out text and hex regions.
    pub const fn offset(self, dx: u16, dy: u16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Pixel coordinate relative to the canvas origin, in `0..16` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CanvasPoint {
    pub x: u8,
    pub y: u8,
}

impl CanvasPoint {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Tile under this point: horizontal tile bit low, vertical tile bit next.
    pub fn tile_index(self) -> TileIndex {
        TileIndex::new((self.x / TILE_WIDTH) | ((self.y / TILE_HEIGHT) << 1))
    }

    /// `(row, col)` of this point inside its tile.
    pub fn pixel_offset(self) -> (usize, usize) {
        (
            usize::from(self.y % TILE_HEIGHT),
            usize::from(self.x % TILE_WIDTH),
        )
    }
}

/// Index of one of the four canvas tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct TileIndex(u8);

impl TileIndex {
    /// # Panics
    ///
    /// Panics if `index` does not name one of the canvas tiles.
    pub fn new(index: u8) -> Self {
        assert!(
            usize::from(index) < TILE_COUNT,
            "tile index {index} outside the {TILE_COUNT}-tile canvas"
        );
        Self(index)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        usize::from(self.0)
    }

    pub fn all() -> impl Iterator<Item = TileIndex> {
        (0..TILE_COUNT as u8).map(TileIndex)
    }
}

impl fmt::Display for TileIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything derived from a cursor position in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub point: CanvasPoint,
    pub tile: TileIndex,
    pub row: usize,
    pub col: usize,
}

impl Location {
    /// Cell in a hex dump region (anchored at `origin`) showing this pixel.
    pub fn hex_cell(&self, origin: Position) -> Position {
        origin.offset(self.col as u16, self.row as u16)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Screen rectangle occupied by the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasBounds {
    origin: Position,
}

impl Default for CanvasBounds {
    fn default() -> Self {
        Self::new(Position::new(2, 2))
    }
}

impl CanvasBounds {
    pub const fn new(origin: Position) -> Self {
        Self { origin }
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn x_min(&self) -> u16 {
        self.origin.x
    }

    pub fn x_max(&self) -> u16 {
        self.origin.x + u16::from(CANVAS_WIDTH) - 1
    }

    pub fn y_min(&self) -> u16 {
        self.origin.y
    }

    pub fn y_max(&self) -> u16 {
        self.origin.y + u16::from(CANVAS_HEIGHT) - 1
    }

    pub fn contains(&self, pos: Position) -> bool {
        (self.x_min()..=self.x_max()).contains(&pos.x)
            && (self.y_min()..=self.y_max()).contains(&pos.y)
    }

    /// Canvas-relative coordinates of `pos`. `pos` must lie inside the bounds.
    pub fn to_canvas(&self, pos: Position) -> CanvasPoint {
        debug_assert!(self.contains(pos), "{pos} outside canvas bounds");
        CanvasPoint::new((pos.x - self.origin.x) as u8, (pos.y - self.origin.y) as u8)
    }

    pub fn to_absolute(&self, point: CanvasPoint) -> Position {
        self.origin.offset(u16::from(point.x), u16::from(point.y))
    }

    pub fn locate(&self, pos: Position) -> Location {
        let point = self.to_canvas(pos);
        let (row, col) = point.pixel_offset();
        Location {
            point,
            tile: point.tile_index(),
            row,
            col,
        }
    }

    /// One cell from `pos` towards `dir`, or `None` when that would leave the canvas.
    pub fn step(&self, pos: Position, dir: Direction) -> Option<Position> {
        match dir {
            Direction::Right if pos.x < self.x_max() => Some(Position::new(pos.x + 1, pos.y)),
            Direction::Left if pos.x > self.x_min() => Some(Position::new(pos.x - 1, pos.y)),
            Direction::Up if pos.y > self.y_min() => Some(Position::new(pos.x, pos.y - 1)),
            Direction::Down if pos.y < self.y_max() => Some(Position::new(pos.x, pos.y + 1)),
            _ => None,
        }
    }

    /// Every cell of the canvas in row-major screen order.
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        let origin = self.origin;
        (0..u16::from(CANVAS_HEIGHT)).flat_map(move |dy| {
            (0..u16::from(CANVAS_WIDTH)).map(move |dx| origin.offset(dx, dy))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_index_covers_all_four_tiles() {
        let bounds = CanvasBounds::default();
        for pos in bounds.cells() {
            let tile = bounds.locate(pos).tile;
            assert!(tile.get() < 4);
            let round_trip = bounds.to_canvas(bounds.to_absolute(bounds.to_canvas(pos)));
            assert_eq!(round_trip.tile_index(), tile);
        }
    }

    #[test]
    fn tile_layout_is_row_major() {
        assert_eq!(CanvasPoint::new(0, 0).tile_index().get(), 0);
        assert_eq!(CanvasPoint::new(8, 0).tile_index().get(), 1);
        assert_eq!(CanvasPoint::new(0, 8).tile_index().get(), 2);
        assert_eq!(CanvasPoint::new(15, 15).tile_index().get(), 3);
    }

    #[test]
    fn pixel_offset_wraps_per_tile() {
        assert_eq!(CanvasPoint::new(9, 14).pixel_offset(), (6, 1));
        assert_eq!(CanvasPoint::new(7, 7).pixel_offset(), (7, 7));
    }

    #[test]
    fn bounds_match_default_layout() {
        let bounds = CanvasBounds::default();
        assert_eq!((bounds.x_min(), bounds.x_max()), (2, 17));
        assert_eq!((bounds.y_min(), bounds.y_max()), (2, 17));
        assert_eq!(bounds.cells().count(), 256);
    }

    #[test]
    fn step_rejects_every_exit_at_every_corner() {
        let bounds = CanvasBounds::default();
        let corners = [
            (Position::new(2, 2), [Direction::Left, Direction::Up]),
            (Position::new(17, 2), [Direction::Right, Direction::Up]),
            (Position::new(2, 17), [Direction::Left, Direction::Down]),
            (Position::new(17, 17), [Direction::Right, Direction::Down]),
        ];
        for (corner, exits) in corners {
            for dir in exits {
                assert_eq!(bounds.step(corner, dir), None, "{corner} {dir:?}");
            }
        }
    }

    #[test]
    fn step_moves_one_cell_inside() {
        let bounds = CanvasBounds::default();
        let pos = Position::new(9, 9);
        assert_eq!(bounds.step(pos, Direction::Right), Some(Position::new(10, 9)));
        assert_eq!(bounds.step(pos, Direction::Up), Some(Position::new(9, 8)));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn tile_index_out_of_range_panics() {
        let _ = TileIndex::new(4);
    }

    #[test]
    fn hex_cell_follows_sub_tile_offset() {
        let bounds = CanvasBounds::default();
        let loc = bounds.locate(Position::new(12, 5));
        assert_eq!(loc.hex_cell(Position::new(2, 20)), Position::new(4, 23));
    }
}
