//! Frame-synchronous editor state and redraw scheduling.

mod scheduler;

pub use scheduler::{Editor, FrameReport, HEX_MARKER};
