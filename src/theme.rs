// Theme support for the TUI
//
// Two palettes: "light" mirrors white cards on a pale background with gray
// text, "dark" inverts it. Unknown names fall back to light.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Terminal colors
    pub background: Color,
    pub foreground: Color,

    // Card colors
    pub card: Color,
    pub title: Color,
    pub meta: Color,
    pub counter: Color,

    // UI element colors
    pub border: Color,
    pub highlight: Color,
    pub tab_active: Color,
    pub tab_inactive: Color,
    pub status_bar: Color,
    pub error: Color,

    /// Secondary text (empty states, faded rows during transitions)
    pub muted: Color,

    pub border_type: BorderType,
}

impl Theme {
    /// Load theme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color::Rgb(0xf3, 0xf4, 0xf6),
            foreground: Color::Rgb(0x11, 0x18, 0x27),
            card: Color::Rgb(0xff, 0xff, 0xff),
            title: Color::Rgb(0x11, 0x18, 0x27),  // gray-900
            meta: Color::Rgb(0x4b, 0x55, 0x63),   // gray-600
            counter: Color::Rgb(0x37, 0x41, 0x51), // gray-700
            border: Color::Rgb(0xd1, 0xd5, 0xdb),
            highlight: Color::Rgb(0x25, 0x63, 0xeb),
            tab_active: Color::Rgb(0x25, 0x63, 0xeb),
            tab_inactive: Color::Rgb(0x6b, 0x72, 0x80),
            status_bar: Color::Rgb(0x4b, 0x55, 0x63),
            error: Color::Rgb(0xdc, 0x26, 0x26),
            muted: Color::Rgb(0x9c, 0xa3, 0xaf),
            border_type: BorderType::Rounded,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color::Rgb(0x11, 0x18, 0x27),
            foreground: Color::Rgb(0xe5, 0xe7, 0xeb),
            card: Color::Rgb(0x1f, 0x29, 0x37),
            title: Color::Rgb(0xf9, 0xfa, 0xfb),
            meta: Color::Rgb(0x9c, 0xa3, 0xaf),
            counter: Color::Rgb(0xd1, 0xd5, 0xdb),
            border: Color::Rgb(0x37, 0x41, 0x51),
            highlight: Color::Rgb(0x60, 0xa5, 0xfa),
            tab_active: Color::Rgb(0x60, 0xa5, 0xfa),
            tab_inactive: Color::Rgb(0x6b, 0x72, 0x80),
            status_bar: Color::Rgb(0x9c, 0xa3, 0xaf),
            error: Color::Rgb(0xf8, 0x71, 0x71),
            muted: Color::Rgb(0x4b, 0x55, 0x63),
            border_type: BorderType::Rounded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_names_fall_back_to_light() {
        assert_eq!(Theme::by_name("DARK").name, "dark");
        assert_eq!(Theme::by_name("solarized").name, "light");
    }
}
