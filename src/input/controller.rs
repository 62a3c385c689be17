use bitflags::bitflags;

use crate::ui::mvi::Intent;

/// Controller port the event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Port {
    One,
    Two,
}

bitflags! {
    /// Signal mask of a three-button pad.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Buttons: u16 {
        const UP = 0x0001;
        const DOWN = 0x0002;
        const LEFT = 0x0004;
        const RIGHT = 0x0008;
        const A = 0x0040;
        const B = 0x0010;
        const C = 0x0020;
        const START = 0x0080;
    }
}

/// One input-change notification: which signals changed and what is held now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerEvent {
    pub port: Port,
    pub changed: Buttons,
    pub state: Buttons,
}

impl ControllerEvent {
    /// A press of `buttons` on `port` from an all-released pad.
    pub fn press(port: Port, buttons: Buttons) -> Self {
        Self {
            port,
            changed: buttons,
            state: buttons,
        }
    }
}

impl Intent for ControllerEvent {}
