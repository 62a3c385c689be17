//! The editor's 16-entry palette in the target display's 9-bit BGR format.

use crate::canvas::Color;

/// `0x0BGR`, one even nibble (0..=E) per channel.
pub const PALETTE: [u16; 16] = [
    0x000, 0xEEE, 0xE00, 0x0E0, 0x00E, 0xE0E, 0xEE0, 0x0EE, 0x000, 0x888, 0x800, 0x080, 0x008,
    0x808, 0x880, 0x088,
];

/// 8-bit `(r, g, b)` for a palette entry.
pub fn rgb(color: Color) -> (u8, u8, u8) {
    let entry = PALETTE[usize::from(color.index())];
    let channel = |shift: u16| -> u8 {
        let level = u32::from((entry >> shift) & 0xE);
        (level * 255 / 0xE) as u8
    };
    (channel(0), channel(4), channel(8))
}
