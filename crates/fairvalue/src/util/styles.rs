//! Terminal colors for menu output

use crossterm::style::{Color, Stylize};

/// Standard color for headers
pub const HEADER_COLOR: Color = Color::Cyan;

/// Standard color for positive values
pub const POSITIVE_COLOR: Color = Color::Green;

/// Standard color for negative values
pub const NEGATIVE_COLOR: Color = Color::Red;

/// Standard color for warning/caution values
pub const WARNING_COLOR: Color = Color::Yellow;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGrey;

/// Applies colors only when enabled, so scripted runs and pipes get plain text.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Colors on when stdout is a terminal
    pub fn detect() -> Self {
        use std::io::IsTerminal;
        Self::new(std::io::stdout().is_terminal())
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn paint(&self, text: impl Into<String>, color: Color) -> String {
        let text = text.into();
        if self.enabled {
            text.with(color).to_string()
        } else {
            text
        }
    }

    pub fn header(&self, text: impl Into<String>) -> String {
        let text = text.into();
        if self.enabled {
            text.with(HEADER_COLOR).bold().to_string()
        } else {
            text
        }
    }

    pub fn positive(&self, text: impl Into<String>) -> String {
        self.paint(text, POSITIVE_COLOR)
    }

    pub fn negative(&self, text: impl Into<String>) -> String {
        self.paint(text, NEGATIVE_COLOR)
    }

    pub fn warning(&self, text: impl Into<String>) -> String {
        self.paint(text, WARNING_COLOR)
    }

    pub fn help(&self, text: impl Into<String>) -> String {
        self.paint(text, HELP_COLOR)
    }

    /// Green for gains, red for losses
    pub fn signed(&self, value: f64, text: impl Into<String>) -> String {
        self.paint(text, value_color(value))
    }
}

/// Get the appropriate color for a monetary value (green for positive, red for negative).
pub fn value_color(value: f64) -> Color {
    if value >= 0.0 {
        POSITIVE_COLOR
    } else {
        NEGATIVE_COLOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_color() {
        assert_eq!(value_color(100.0), POSITIVE_COLOR);
        assert_eq!(value_color(-100.0), NEGATIVE_COLOR);
        assert_eq!(value_color(0.0), POSITIVE_COLOR);
    }

    #[test]
    fn test_plain_palette_leaves_text_alone() {
        let palette = Palette::plain();
        assert_eq!(palette.header("VALUATION"), "VALUATION");
        assert_eq!(palette.signed(-1.0, "-$1.00"), "-$1.00");
    }

    #[test]
    fn test_enabled_palette_emits_escapes() {
        let palette = Palette::new(true);
        let painted = palette.positive("+$8.22");
        assert!(painted.contains("+$8.22"));
        assert!(painted.starts_with('\u{1b}'));
    }
}
