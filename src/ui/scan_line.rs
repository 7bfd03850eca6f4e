//! Card label entry shown while the scanner is open

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::state::ScanInputState;
use crate::theme::Theme;

const PROMPT: &str = "card> ";

/// Draw the scan line with its cursor
pub fn draw(frame: &mut Frame, area: Rect, state: &ScanInputState, theme: &Theme) {
    let text = format!("{PROMPT}{}", state.input);
    let style = Style::default().fg(theme.info);
    let line = build_line_with_cursor(&text, state.cursor + PROMPT.chars().count(), style, theme);
    frame.render_widget(Paragraph::new(line), area);
}

/// Build a line with a visible cursor
fn build_line_with_cursor(
    text: &str,
    cursor_pos: usize,
    base_style: Style,
    theme: &Theme,
) -> Line<'static> {
    let chars: Vec<char> = text.chars().collect();
    let mut spans = Vec::new();

    if cursor_pos > 0 {
        let before: String = chars.iter().take(cursor_pos).collect();
        spans.push(Span::styled(before, base_style));
    }

    // Space when the cursor sits past the end
    let cursor_char = chars.get(cursor_pos).copied().unwrap_or(' ');
    let cursor_style =
        Style::default().fg(theme.bg_primary).bg(theme.cursor).add_modifier(Modifier::BOLD);
    spans.push(Span::styled(cursor_char.to_string(), cursor_style));

    if cursor_pos + 1 < chars.len() {
        let after: String = chars.iter().skip(cursor_pos + 1).collect();
        spans.push(Span::styled(after, base_style));
    }

    Line::from(spans)
}
