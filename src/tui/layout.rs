//! Presentation settings passed into the board and form renderers.

use ratatui::style::Color;

use crate::tui::colors::{FOCUS_PURPLE, GOLD, HINT_GREY};

/// Sizing and styling for the board view.
///
/// Each column is `width / divisor` wide and `height - divisor` tall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    pub divisor: u16,
    /// (vertical, horizontal) padding inside unfocused columns
    pub column_padding: (u16, u16),
    pub focus_color: Color,
    pub hint_color: Color,
    pub active_field_color: Color,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            divisor: 3,
            column_padding: (1, 2),
            focus_color: FOCUS_PURPLE,
            hint_color: HINT_GREY,
            active_field_color: GOLD,
        }
    }
}

impl LayoutConfig {
    /// Column dimensions for a terminal of the given size.
    pub fn column_size(&self, width: u16, height: u16) -> (u16, u16) {
        let divisor = self.divisor.max(1);
        (width / divisor, height.saturating_sub(divisor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_size_divides_width() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.column_size(120, 40), (40, 37));
        assert_eq!(layout.column_size(10, 2), (3, 0));
    }

    #[test]
    fn test_zero_divisor_does_not_panic() {
        let layout = LayoutConfig { divisor: 0, ..LayoutConfig::default() };
        assert_eq!(layout.column_size(90, 30), (90, 29));
    }
}
