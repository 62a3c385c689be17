use crate::canvas::{serialize_tile, Canvas, Color, HexDump, Location, Position, TileIndex};
use crate::config::{EditorConfig, LayoutConfig};
use crate::display::{DisplaySurface, FrameClock, Plane, Symbol};
use crate::input::{FrameIntents, IntentMailbox};

/// Overlay drawn on the hex digit under the cursor.
pub const HEX_MARKER: Symbol = Symbol::Cursor(Color::from_index(1));

/// What one call to [`Editor::frame`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    pub moved: bool,
    /// A move was requested but would have left the canvas.
    pub rejected_move: bool,
    pub painted: Option<Location>,
    pub redrawn: bool,
}

/// Sole owner and writer of cursor, canvas and redraw state.
///
/// Input arrives as [`FrameIntents`] drained once per frame; each frame runs
/// the move, paint and redraw phases in that order.
pub struct Editor {
    canvas: Canvas,
    cursor: Position,
    brush: Color,
    active_tile: TileIndex,
    hex: HexDump,
    hex_origin: Position,
    dirty: bool,
}

impl Editor {
    /// # Panics
    ///
    /// Panics if the configured cursor start lies outside the canvas.
    pub fn new(editor: &EditorConfig, layout: &LayoutConfig) -> Self {
        let bounds = layout.canvas_bounds();
        let cursor = editor.cursor();
        assert!(
            bounds.contains(cursor),
            "cursor start {cursor} outside canvas bounds"
        );

        let canvas = Canvas::filled(bounds, editor.fill());
        let active_tile = bounds.locate(cursor).tile;
        let hex = serialize_tile(canvas.read_tile(active_tile));

        Self {
            canvas,
            cursor,
            brush: editor.brush(),
            active_tile,
            hex,
            hex_origin: layout.hex_dump_origin(),
            dirty: true,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn brush(&self) -> Color {
        self.brush
    }

    pub fn active_tile(&self) -> TileIndex {
        self.active_tile
    }

    pub fn hex_dump(&self) -> &HexDump {
        &self.hex
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn location(&self) -> Location {
        self.canvas.bounds().locate(self.cursor)
    }

    /// Paints every canvas pixel onto the background plane.
    pub fn load<D: DisplaySurface>(&self, display: &mut D) {
        for pos in self.canvas.bounds().cells() {
            let color = self.canvas.pixel_at(pos);
            display.set_cell(Plane::Background, Symbol::Fill(color), pos.x, pos.y);
        }
    }

    /// Waits for the next refresh, then applies whatever input is pending.
    pub fn tick<C, D>(
        &mut self,
        clock: &mut C,
        mailbox: &IntentMailbox,
        display: &mut D,
    ) -> FrameReport
    where
        C: FrameClock,
        D: DisplaySurface,
    {
        clock.wait_for_next_frame();
        self.frame(mailbox.drain(), display)
    }

    pub fn frame<D: DisplaySurface>(
        &mut self,
        intents: FrameIntents,
        display: &mut D,
    ) -> FrameReport {
        let mut report = FrameReport::default();

        self.brush = intents.brush;
        self.dirty |= intents.dirty;

        if let Some(dir) = intents.move_dir {
            self.clear_overlays(display);

            match self.canvas.bounds().step(self.cursor, dir) {
                Some(next) => {
                    self.cursor = next;
                    report.moved = true;
                }
                None => {
                    tracing::trace!(cursor = %self.cursor, ?dir, "move rejected at canvas edge");
                    report.rejected_move = true;
                }
            }

            let tile = self.location().tile;
            if tile != self.active_tile {
                tracing::debug!(from = %self.active_tile, to = %tile, "active tile changed");
            }
            self.active_tile = tile;
            self.hex = serialize_tile(self.canvas.read_tile(tile));
            self.dirty = true;
        }

        if intents.paint {
            let location = self.canvas.paint(self.cursor, self.brush);
            debug_assert_eq!(location.tile, self.active_tile);
            self.hex.set_digit(location.row, location.col, self.brush);
            display.set_cell(
                Plane::Background,
                Symbol::Fill(self.brush),
                self.cursor.x,
                self.cursor.y,
            );
            tracing::debug!(
                tile = %location.tile,
                row = location.row,
                col = location.col,
                color = %self.brush,
                "painted pixel"
            );
            self.dirty = true;
            report.painted = Some(location);
        }

        if self.dirty {
            self.redraw(display);
            self.dirty = false;
            report.redrawn = true;
        }

        report
    }

    fn clear_overlays<D: DisplaySurface>(&self, display: &mut D) {
        let marker = self.location().hex_cell(self.hex_origin);
        display.set_cell(Plane::Foreground, Symbol::Empty, self.cursor.x, self.cursor.y);
        display.set_cell(Plane::Foreground, Symbol::Empty, marker.x, marker.y);
    }

    fn redraw<D: DisplaySurface>(&self, display: &mut D) {
        let marker = self.location().hex_cell(self.hex_origin);
        display.set_cell(
            Plane::Foreground,
            Symbol::Cursor(self.brush),
            self.cursor.x,
            self.cursor.y,
        );
        display.set_cell(Plane::Foreground, HEX_MARKER, marker.x, marker.y);

        let origin = self.hex_origin;
        display.draw_text(
            &format!("Tile {}", self.active_tile),
            origin.x,
            origin.y.saturating_sub(1),
        );
        for (offset, row) in (0u16..).zip(self.hex.rows()) {
            display.draw_text(row, origin.x, origin.y + offset);
        }
    }
}
