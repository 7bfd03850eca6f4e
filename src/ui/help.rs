//! Key reference

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::layout::centered_rect;
use crate::theme::Theme;

const KEYS: &[(&str, &str)] = &[
    ("Enter / s", "Start a level from the menu"),
    ("j / k, \u{2191} / \u{2193}", "Move between answers"),
    ("Enter, 1-9", "Submit an answer"),
    ("Tab", "Open or close the card scanner"),
    ("p", "Play the sign"),
    ("Space", "Pause or resume the sign"),
    ("r", "Replay the sign from the start"),
    ("Esc", "Back to the menu"),
    ("q, Ctrl+C", "Quit"),
];

/// Draw the help popup
pub fn draw(frame: &mut Frame, area: Rect, theme: &Theme) {
    let popup = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .style(Style::default().bg(theme.bg_secondary))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .title(Span::styled(" Help ", Style::default().fg(theme.accent_primary)));

    let mut lines: Vec<Line> = KEYS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!("{key:>14}  "),
                    Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD),
                ),
                Span::styled(*action, Style::default().fg(theme.fg_primary)),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(theme.fg_muted),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    #[test]
    fn popup_sits_on_secondary_background() {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| draw(frame, frame.area(), &theme)).unwrap();

        let popup = centered_rect(60, 60, Rect::new(0, 0, 80, 30));
        let cell = &terminal.backend().buffer()[(popup.x + 1, popup.y + 1)];
        assert_eq!(cell.bg, theme.bg_secondary);
    }
}
