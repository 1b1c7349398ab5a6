//! Color constants for the TUI.

use ratatui::style::Color;

/// Breakdown bar color for the household's own values.
pub const YOURS_COLOR: Color = Color::Cyan;
/// Efficient-range band bar color.
pub const EFFICIENT_COLOR: Color = Color::Green;
/// High-consumption band bar color.
pub const HIGH_COLOR: Color = Color::Yellow;
/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;
/// Above-average delta color.
pub const ABOVE_AVERAGE: Color = Color::Red;
/// Below-average delta color.
pub const BELOW_AVERAGE: Color = Color::Green;
/// Enabled appliance indicator color.
pub const APPLIANCE_ON: Color = Color::Green;
/// Disabled appliance indicator color.
pub const APPLIANCE_OFF: Color = Color::DarkGray;

/// Returns the delta color for an average comparison standing.
pub fn standing_color(above_average: bool) -> Color {
    if above_average {
        ABOVE_AVERAGE
    } else {
        BELOW_AVERAGE
    }
}
