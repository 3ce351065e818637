//! Color utility functions for the particle background.

use folio_core::Rgb;
use ratatui::style::Color;

/// Convert a palette color to a terminal color.
pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Terminal color for a particle of `color` and `opacity` drawn over `backdrop`.
///
/// Terminals have no alpha channel, so opacity is baked into the foreground.
pub fn particle_color(color: Rgb, opacity: f32, backdrop: Rgb) -> Color {
    to_color(color.over(backdrop, opacity))
}
