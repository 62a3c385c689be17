use ratatui::layout::{Constraint, Layout, Rect};

use crate::display::{SCREEN_COLS, SCREEN_ROWS};

/// Terminal columns per tile-map cell; keeps cells roughly square.
pub const CELL_WIDTH: u16 = 2;

/// Header: one status line between top and bottom rules.
pub const HEADER_HEIGHT: u16 = 3;

/// Footer: palette strip and key hints inside a border.
pub const FOOTER_HEIGHT: u16 = 4;

/// Splits the frame into header, tile-map body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);
    (header, body, footer)
}

pub fn centered_rect_by_size(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Where the tile map goes inside the body, clipped if the terminal is small.
pub fn screen_rect(body: Rect) -> Rect {
    centered_rect_by_size(SCREEN_COLS * CELL_WIDTH, SCREEN_ROWS, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_stack_header_body_footer() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 100, 40));
        assert_eq!(header, Rect::new(0, 0, 100, 3));
        assert_eq!(body, Rect::new(0, 3, 100, 33));
        assert_eq!(footer, Rect::new(0, 36, 100, 4));
    }

    #[test]
    fn screen_is_centered_and_clipped() {
        assert_eq!(screen_rect(Rect::new(0, 3, 100, 34)), Rect::new(10, 6, 80, 28));
        assert_eq!(screen_rect(Rect::new(0, 0, 60, 10)), Rect::new(0, 0, 60, 10));
    }
}
