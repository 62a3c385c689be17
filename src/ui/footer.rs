use crate::canvas::{hex_digit, Color as PaletteColor};
use crate::display::palette::rgb;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use crate::ui::tile_map::palette_color;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " Arrows: Move │ Space: Paint │ Shift+←/→ or [ ]: Brush │ Q: Quit";

/// Palette strip with the brush marked, then key hints and version.
pub struct Footer {
    brush: PaletteColor,
}

impl Footer {
    pub fn new(brush: PaletteColor) -> Self {
        Self { brush }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        Paragraph::new(vec![self.palette_line(), hints_line(area, text_style)]).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }

    fn palette_line(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for color in PaletteColor::all() {
            let digit = hex_digit(color);
            let style = Style::default()
                .bg(palette_color(color))
                .fg(contrast(color));
            spans.push(if color == self.brush {
                Span::styled(format!("[{digit}]"), style.add_modifier(Modifier::BOLD))
            } else {
                Span::styled(format!(" {digit} "), style)
            });
        }
        Line::from(spans)
    }
}

fn hints_line(area: Rect, style: Style) -> Line<'static> {
    let version = format!("v{VERSION} ");
    let content_width = usize::from(area.width.saturating_sub(2));
    let padding = content_width
        .saturating_sub(HINTS.chars().count())
        .saturating_sub(version.chars().count());

    Line::from(vec![
        Span::styled(HINTS, style),
        Span::styled(" ".repeat(padding), style),
        Span::styled(version, style),
    ])
}

/// Black or white, whichever reads better on `color`.
fn contrast(color: PaletteColor) -> Color {
    let (r, g, b) = rgb(color);
    let luma = u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114;
    if luma > 128_000 {
        Color::Black
    } else {
        Color::White
    }
}
