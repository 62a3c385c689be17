//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use tiledit::canvas::{CanvasPoint, Color, Direction, Position};
use tiledit::config::{EditorConfig, LayoutConfig};
use tiledit::display::{DisplaySurface, FrameClock, Plane, ScreenBuffer, Symbol};
use tiledit::editor::Editor;
use tiledit::input::FrameIntents;

/// One call made against a display surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    Cell {
        plane: Plane,
        symbol: Symbol,
        x: u16,
        y: u16,
    },
    Text {
        text: String,
        x: u16,
        y: u16,
    },
}

/// Display surface that records every call and also applies it to a screen.
#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
    pub screen: ScreenBuffer,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }
}

impl DisplaySurface for RecordingSurface {
    fn set_cell(&mut self, plane: Plane, symbol: Symbol, x: u16, y: u16) {
        self.ops.push(DrawOp::Cell {
            plane,
            symbol,
            x,
            y,
        });
        self.screen.set_cell(plane, symbol, x, y);
    }

    fn draw_text(&mut self, text: &str, x: u16, y: u16) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
        });
        self.screen.draw_text(text, x, y);
    }
}

/// Frame clock that never blocks and counts waits.
#[derive(Default)]
pub struct CountingClock {
    pub frames: usize,
}

impl FrameClock for CountingClock {
    fn wait_for_next_frame(&mut self) {
        self.frames += 1;
    }
}

pub fn color(index: u8) -> Color {
    Color::new(index).expect("test color in range")
}

/// Editor with default layout, fill 1, brush 2, cursor at a canvas-relative point.
pub fn editor_at(x: u8, y: u8) -> Editor {
    let layout = LayoutConfig::default();
    let cursor = layout
        .canvas_bounds()
        .to_absolute(CanvasPoint::new(x, y));
    let editor = EditorConfig {
        cursor_x: cursor.x,
        cursor_y: cursor.y,
        ..EditorConfig::default()
    };
    Editor::new(&editor, &layout)
}

pub fn idle(brush: Color) -> FrameIntents {
    FrameIntents::idle(brush)
}

pub fn move_to(dir: Direction, brush: Color) -> FrameIntents {
    FrameIntents {
        move_dir: Some(dir),
        dirty: true,
        ..FrameIntents::idle(brush)
    }
}

pub fn paint(brush: Color) -> FrameIntents {
    FrameIntents {
        paint: true,
        dirty: true,
        ..FrameIntents::idle(brush)
    }
}

/// Canvas-relative point of the editor's cursor.
pub fn canvas_point(editor: &Editor) -> CanvasPoint {
    editor.location().point
}

pub fn absolute(x: u8, y: u8) -> Position {
    LayoutConfig::default()
        .canvas_bounds()
        .to_absolute(CanvasPoint::new(x, y))
}
