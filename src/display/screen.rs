use crate::display::{DisplaySurface, Plane, Symbol, SCREEN_COLS, SCREEN_ROWS};

const COLS: usize = SCREEN_COLS as usize;
const ROWS: usize = SCREEN_ROWS as usize;

type PlaneCells = [[Symbol; COLS]; ROWS];

/// In-memory tile map with a background and a foreground plane.
///
/// Text shares the background plane, so the cursor overlay can sit on top
/// of hex digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenBuffer {
    background: PlaneCells,
    foreground: PlaneCells,
}

impl Default for ScreenBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenBuffer {
    pub fn new() -> Self {
        Self {
            background: [[Symbol::Empty; COLS]; ROWS],
            foreground: [[Symbol::Empty; COLS]; ROWS],
        }
    }

    pub fn cell(&self, plane: Plane, x: u16, y: u16) -> Symbol {
        let (x, y) = (usize::from(x), usize::from(y));
        if x >= COLS || y >= ROWS {
            return Symbol::Empty;
        }
        self.plane(plane)[y][x]
    }

    /// Text read back from the background plane, `len` cells from `(x, y)`.
    /// Non-glyph cells read as spaces.
    pub fn text_at(&self, x: u16, y: u16, len: u16) -> String {
        (x..x.saturating_add(len))
            .map(|cx| match self.cell(Plane::Background, cx, y) {
                Symbol::Glyph(ch) => ch,
                _ => ' ',
            })
            .collect()
    }

    fn plane(&self, plane: Plane) -> &PlaneCells {
        match plane {
            Plane::Background => &self.background,
            Plane::Foreground => &self.foreground,
        }
    }

    fn plane_mut(&mut self, plane: Plane) -> &mut PlaneCells {
        match plane {
            Plane::Background => &mut self.background,
            Plane::Foreground => &mut self.foreground,
        }
    }
}

impl DisplaySurface for ScreenBuffer {
    fn set_cell(&mut self, plane: Plane, symbol: Symbol, x: u16, y: u16) {
        let (col, row) = (usize::from(x), usize::from(y));
        if col >= COLS || row >= ROWS {
            tracing::debug!(?plane, x, y, "dropping write outside the tile map");
            return;
        }
        self.plane_mut(plane)[row][col] = symbol;
    }

    fn draw_text(&mut self, text: &str, x: u16, y: u16) {
        for (offset, ch) in (0u16..).zip(text.chars()) {
            self.set_cell(Plane::Background, Symbol::Glyph(ch), x.saturating_add(offset), y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Color;

    #[test]
    fn planes_are_independent() {
        let mut screen = ScreenBuffer::new();
        let red = Color::new(2).unwrap();
        screen.set_cell(Plane::Background, Symbol::Fill(red), 3, 4);
        screen.set_cell(Plane::Foreground, Symbol::Cursor(red), 3, 4);

        assert_eq!(screen.cell(Plane::Background, 3, 4), Symbol::Fill(red));
        assert_eq!(screen.cell(Plane::Foreground, 3, 4), Symbol::Cursor(red));
        screen.set_cell(Plane::Foreground, Symbol::Empty, 3, 4);
        assert_eq!(screen.cell(Plane::Background, 3, 4), Symbol::Fill(red));
    }

    #[test]
    fn text_lands_on_background_and_clips() {
        let mut screen = ScreenBuffer::new();
        screen.draw_text("Tile 3", 2, 19);
        assert_eq!(screen.text_at(2, 19, 6), "Tile 3");

        screen.draw_text("ABCDEFGH", SCREEN_COLS - 3, 0);
        assert_eq!(screen.text_at(SCREEN_COLS - 3, 0, 3), "ABC");
    }

    #[test]
    fn out_of_range_writes_are_dropped() {
        let mut screen = ScreenBuffer::new();
        let before = screen.clone();
        screen.set_cell(Plane::Background, Symbol::Glyph('x'), SCREEN_COLS, 0);
        screen.set_cell(Plane::Foreground, Symbol::Glyph('x'), 0, SCREEN_ROWS);
        assert_eq!(screen, before);
    }
}
