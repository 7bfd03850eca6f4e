//! Layout utilities and common components

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::theme::Theme;

/// Create a centered rectangle with the given percentage of width and height
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

/// Draw a single line of key hints at the bottom of `area`
pub fn draw_hints(frame: &mut Frame, area: Rect, hints: &str, theme: &Theme) {
    if area.height == 0 {
        return;
    }
    let hint_area = Rect { y: area.y + area.height - 1, height: 1, ..area };
    let hint = Paragraph::new(Line::from(Span::styled(hints, Style::default().fg(theme.fg_muted))))
        .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}

/// Text progress bar of `width` cells filled to `fraction`
pub fn progress_bar(fraction: f32, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f32).round() as usize).min(width);
    format!("{}{}", "\u{2588}".repeat(filled), "\u{2591}".repeat(width - filled)) // █ and ░
}
