use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x56, 0xb6, 0xda);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const GLYPH_TEXT: Color = Color::Rgb(0xd4, 0xd4, 0xd4);
pub const SCREEN_BACKDROP: Color = Color::Rgb(0x10, 0x10, 0x10);
