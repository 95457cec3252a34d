//! Colours of the counter board.

use crate::view::Strategy;
use ratatui::style::Color;

pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const READY: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const REJECTED: Color = Color::Rgb(0xef, 0x44, 0x44);

/// Title colour of a section; the focused section also gets it as border.
pub fn section_accent(strategy: Strategy) -> Color {
    match strategy {
        Strategy::Local => Color::Rgb(0x60, 0xa5, 0xfa),
        Strategy::Reducer => Color::Rgb(0xa7, 0x8b, 0xfa),
        Strategy::GlobalStore => Color::Rgb(0xf4, 0x72, 0xb6),
        Strategy::Atom => Color::Rgb(0xfb, 0xbf, 0x24),
        Strategy::ExternalStore => Color::Rgb(0x34, 0xd3, 0x99),
    }
}
