use crate::canvas::{hex_digit, Color, Position, TileIndex};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use crate::ui::tile_map::palette_color;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Status line: brush swatch, cursor and active tile.
pub struct Header {
    brush: Color,
    cursor: Position,
    tile: TileIndex,
}

impl Header {
    pub fn new(brush: Color, cursor: Position, tile: TileIndex) -> Self {
        Self {
            brush,
            cursor,
            tile,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let line = Line::from(vec![
            Span::styled("  tiledit", Style::default().fg(ACCENT)),
            Span::styled("  │  ", separator_style),
            Span::styled("Brush ", text_style),
            Span::styled("  ", Style::default().bg(palette_color(self.brush))),
            Span::styled(format!(" {}", hex_digit(self.brush)), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("Cursor {}", self.cursor), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("Tile {}", self.tile), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
