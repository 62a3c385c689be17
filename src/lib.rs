//! On-device style pixel-art tile editor.
//!
//! A cursor moves over a 2×2 block of 8×8 tiles on a 40×28 tile map; the
//! brush paints single pixels in one of 16 palette colors while the active
//! tile is mirrored as a hex dump below the canvas.

pub mod canvas;
pub mod config;
pub mod display;
pub mod editor;
pub mod input;
pub mod logging;
pub mod shutdown;
pub mod ui;
