//! Theming system for signquiz

mod tokyo_night;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// A color theme for the application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,

    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_tertiary: Color,

    // Foreground colors
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub fg_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Semantic colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // UI elements
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
    pub cursor: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::tokyo_night()
    }
}

impl Theme {
    /// Look up a built-in theme by its display name, ignoring case
    pub fn by_name(name: &str) -> Option<Self> {
        if name.trim().eq_ignore_ascii_case(tokyo_night::NAME) {
            Some(Self::tokyo_night())
        } else {
            None
        }
    }

    /// Timer gauge color for the fraction of time left
    pub fn timer_color(&self, fraction: f32) -> Color {
        if fraction > 0.5 {
            self.success
        } else if fraction > 0.2 {
            self.warning
        } else {
            self.error
        }
    }

    /// Indicator color for a checked answer
    pub fn verdict_color(&self, correct: bool) -> Color {
        if correct { self.success } else { self.error }
    }
}
