//! Color constants for the terminal user interface.

use ratatui::style::Color;

/// Border of the focused column
pub const FOCUS_PURPLE: Color = Color::Indexed(62);
/// Key hints and task descriptions
pub const HINT_GREY: Color = Color::Indexed(241);
/// The entry form field receiving input
pub const GOLD: Color = Color::Rgb(255, 215, 0);
