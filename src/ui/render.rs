use crate::display::ScreenBuffer;
use crate::editor::Editor;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, screen_rect};
use crate::ui::theme::SCREEN_BACKDROP;
use crate::ui::tile_map::TileMapView;
use ratatui::style::Style;
use ratatui::widgets::{Block, Clear};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, editor: &Editor, screen: &ScreenBuffer) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(editor.brush(), editor.cursor(), editor.active_tile());
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    let map_area = screen_rect(body);
    frame.render_widget(
        Block::default().style(Style::default().bg(SCREEN_BACKDROP)),
        map_area,
    );
    frame.render_widget(TileMapView::new(screen), map_area);

    let footer_widget = Footer::new(editor.brush());
    frame.render_widget(footer_widget.widget(footer), footer);
}
