//! Terminal front end: keyboard input, frame loop and rendering.

pub mod events;
pub mod footer;
pub mod header;
pub mod keymap;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod tile_map;
