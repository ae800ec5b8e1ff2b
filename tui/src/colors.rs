//! Palette accessors used across the views.

use ratatui::style::Color;

pub(crate) fn primary() -> Color {
    Color::Cyan
}

pub(crate) fn text() -> Color {
    Color::Reset
}

pub(crate) fn text_dim() -> Color {
    Color::DarkGray
}

pub(crate) fn border() -> Color {
    Color::DarkGray
}

pub(crate) fn chip_active_bg() -> Color {
    Color::Blue
}

pub(crate) fn chip_active_fg() -> Color {
    Color::White
}

pub(crate) fn link() -> Color {
    Color::Blue
}
