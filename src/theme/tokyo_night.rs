//! Tokyo Night theme

use ratatui::style::Color;

use super::Theme;

pub const NAME: &str = "Tokyo Night";

// Palette swatches
const NIGHT: Color = Color::Rgb(0x1a, 0x1b, 0x26);
const STORM: Color = Color::Rgb(0x24, 0x28, 0x3b);
const DUSK: Color = Color::Rgb(0x41, 0x48, 0x68);
const HIGHLIGHT: Color = Color::Rgb(0x28, 0x34, 0x57);
const COMMENT: Color = Color::Rgb(0x56, 0x5f, 0x89);
const TEXT: Color = Color::Rgb(0xa9, 0xb1, 0xd6);
const BRIGHT_TEXT: Color = Color::Rgb(0xc0, 0xca, 0xf5);
const BLUE: Color = Color::Rgb(0x7a, 0xa2, 0xf7);
const MAGENTA: Color = Color::Rgb(0xbb, 0x9a, 0xf7);
const CYAN: Color = Color::Rgb(0x7d, 0xcf, 0xff);
const GREEN: Color = Color::Rgb(0x9e, 0xce, 0x6a);
const ORANGE: Color = Color::Rgb(0xe0, 0xaf, 0x68);
const RED: Color = Color::Rgb(0xf7, 0x76, 0x8e);

impl Theme {
    /// Dark blue theme, the default
    pub fn tokyo_night() -> Self {
        Self {
            name: NAME.to_string(),
            bg_primary: NIGHT,
            bg_secondary: STORM,
            bg_tertiary: DUSK,
            fg_primary: TEXT,
            fg_secondary: BRIGHT_TEXT,
            fg_muted: COMMENT,
            accent_primary: BLUE,
            accent_secondary: MAGENTA,
            // Timer runs green, then orange, then red
            success: GREEN,
            warning: ORANGE,
            error: RED,
            info: CYAN,
            border: DUSK,
            border_focused: BLUE,
            selection: HIGHLIGHT,
            cursor: BRIGHT_TEXT,
        }
    }
}
