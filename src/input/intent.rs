use crate::canvas::{Color, Direction};
use crate::ui::mvi::UiState;

/// Brush color the editor starts with unless configured otherwise.
pub const DEFAULT_BRUSH: Color = Color::from_index(2);

/// Input staged between frames.
///
/// Every field is independently valid, so the asynchronous producer may
/// overwrite any of them between two scheduler reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingIntents {
    /// Last direction requested since the previous frame.
    pub move_dir: Option<Direction>,
    pub paint: bool,
    pub brush: Color,
    pub dirty: bool,
}

impl Default for PendingIntents {
    fn default() -> Self {
        Self::with_brush(DEFAULT_BRUSH)
    }
}

impl UiState for PendingIntents {}

impl PendingIntents {
    pub fn with_brush(brush: Color) -> Self {
        Self {
            move_dir: None,
            paint: false,
            brush,
            dirty: false,
        }
    }
}

/// What the scheduler consumes once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameIntents {
    pub move_dir: Option<Direction>,
    pub paint: bool,
    pub brush: Color,
    pub dirty: bool,
}

impl FrameIntents {
    /// No input this frame, brush unchanged.
    pub fn idle(brush: Color) -> Self {
        Self {
            move_dir: None,
            paint: false,
            brush,
            dirty: false,
        }
    }
}
