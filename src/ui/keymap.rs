//! Keyboard stand-in for the controller.
//!
//! Terminals only report presses, so every key produces a controller event
//! whose held mask is exactly the buttons that key stands for.
//!
//! | Key                   | Pad          |
//! |-----------------------|--------------|
//! | arrows                | d-pad        |
//! | Shift+Left/Right      | C + Left/Right |
//! | `[` / `]`             | C + Left/Right |
//! | Space, Enter, `a`     | A            |
//! | `q`, Esc, Ctrl+C      | quit         |

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::input::{Buttons, ControllerEvent, Port};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Controller(ControllerEvent),
    Quit,
}

pub fn map_key(key: KeyEvent) -> Option<KeyAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
        return Some(KeyAction::Quit);
    }

    let mut buttons = match key.code {
        KeyCode::Left => Buttons::LEFT,
        KeyCode::Right => Buttons::RIGHT,
        KeyCode::Up => Buttons::UP,
        KeyCode::Down => Buttons::DOWN,
        KeyCode::Char('[') => Buttons::C | Buttons::LEFT,
        KeyCode::Char(']') => Buttons::C | Buttons::RIGHT,
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('a') => Buttons::A,
        _ => return None,
    };

    // C only does something with Left/Right; Shift+Up/Down stay plain moves.
    if key.modifiers.contains(KeyModifiers::SHIFT)
        && buttons.intersects(Buttons::LEFT | Buttons::RIGHT)
    {
        buttons |= Buttons::C;
    }

    Some(KeyAction::Controller(ControllerEvent::press(Port::One, buttons)))
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
