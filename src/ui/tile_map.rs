use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

use crate::canvas::Color as PaletteColor;
use crate::display::palette::rgb;
use crate::display::{Plane, ScreenBuffer, Symbol, SCREEN_COLS, SCREEN_ROWS};
use crate::ui::layout::CELL_WIDTH;
use crate::ui::theme::{GLYPH_TEXT, SCREEN_BACKDROP};

/// Renders the two-plane tile map, foreground composited over background.
pub struct TileMapView<'a> {
    screen: &'a ScreenBuffer,
}

impl<'a> TileMapView<'a> {
    pub fn new(screen: &'a ScreenBuffer) -> Self {
        Self { screen }
    }
}

impl Widget for TileMapView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = SCREEN_ROWS.min(area.height);
        let cols = SCREEN_COLS.min(area.width / CELL_WIDTH);

        for y in 0..rows {
            for x in 0..cols {
                let halves = compose(
                    self.screen.cell(Plane::Background, x, y),
                    self.screen.cell(Plane::Foreground, x, y),
                );
                for (dx, (ch, style)) in (0u16..).zip(halves) {
                    let position = (area.x + x * CELL_WIDTH + dx, area.y + y);
                    if let Some(cell) = buf.cell_mut(position) {
                        cell.set_char(ch).set_style(style);
                    }
                }
            }
        }
    }
}

pub fn palette_color(color: PaletteColor) -> Color {
    let (r, g, b) = rgb(color);
    Color::Rgb(r, g, b)
}

type Halves = [(char, Style); 2];

fn compose(background: Symbol, foreground: Symbol) -> Halves {
    let under = symbol_halves(background, Style::default().bg(SCREEN_BACKDROP));
    match (foreground, background) {
        (Symbol::Empty, _) => under,
        (Symbol::Cursor(color), Symbol::Glyph(ch)) => {
            let style = Style::default().fg(Color::Black).bg(palette_color(color));
            [(ch, style), (' ', style)]
        }
        (overlay, _) => symbol_halves(overlay, under[0].1),
    }
}

fn symbol_halves(symbol: Symbol, base: Style) -> Halves {
    match symbol {
        Symbol::Empty => [(' ', base), (' ', base)],
        Symbol::Fill(color) => {
            let style = base.bg(palette_color(color));
            [(' ', style), (' ', style)]
        }
        Symbol::Cursor(color) => {
            let style = base
                .fg(palette_color(color))
                .add_modifier(Modifier::BOLD);
            [('[', style), (']', style)]
        }
        Symbol::Glyph(ch) => {
            let style = base.fg(GLYPH_TEXT);
            [(ch, style), (' ', style)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::DisplaySurface;

    fn color(index: u8) -> PaletteColor {
        PaletteColor::new(index).unwrap()
    }

    #[test]
    fn cursor_keeps_fill_underneath() {
        let [(left, style), (right, _)] =
            compose(Symbol::Fill(color(1)), Symbol::Cursor(color(2)));
        assert_eq!((left, right), ('[', ']'));
        assert_eq!(style.bg, Some(palette_color(color(1))));
        assert_eq!(style.fg, Some(palette_color(color(2))));
    }

    #[test]
    fn marker_highlights_glyph() {
        let [(ch, style), _] = compose(Symbol::Glyph('A'), Symbol::Cursor(color(1)));
        assert_eq!(ch, 'A');
        assert_eq!(style.bg, Some(palette_color(color(1))));
    }

    #[test]
    fn renders_two_columns_per_cell() {
        let mut screen = ScreenBuffer::new();
        screen.draw_text("Hi", 0, 0);
        let area = Rect::new(0, 0, SCREEN_COLS * CELL_WIDTH, SCREEN_ROWS);
        let mut buf = Buffer::empty(area);
        TileMapView::new(&screen).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "H");
        assert_eq!(buf[(1, 0)].symbol(), " ");
        assert_eq!(buf[(2, 0)].symbol(), "i");
    }
}
