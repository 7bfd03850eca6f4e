//! Menu screen shown while no level is running

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::layout::{centered_rect, draw_hints};
use crate::app::player::TerminalClipPlayer;
use crate::app::state::AppState;
use crate::quiz::{Modality, QuizSession};
use crate::theme::Theme;

const TITLE: &str = "S I G N Q U I Z";
const TAGLINE: &str = "Learn the sign alphabet one question at a time";

/// Draw the menu with bank and rule summary
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    session: &QuizSession<TerminalClipPlayer>,
    theme: &Theme,
) {
    let bank = session.bank();
    let settings = session.settings();
    let body = centered_rect(80, 70, area);

    let mut lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(TAGLINE, Style::default().fg(theme.fg_muted))),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{}  \u{2022}  {} questions ({} multiple choice, {} scan)",
                bank.name(),
                bank.len(),
                bank.count_modality(Modality::MultipleChoice),
                bank.count_modality(Modality::ScanMode),
            ),
            Style::default().fg(theme.fg_secondary),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} questions per level  \u{2022}  {} attempts  \u{2022}  {}s per question",
                settings.questions_per_level, settings.attempt_limit, settings.question_time_limit,
            ),
            Style::default().fg(theme.fg_primary),
        )),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to start",
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        )),
    ];

    if let Some(ref message) = state.message {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(message.as_str(), Style::default().fg(theme.error))));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);
    draw_hints(frame, area, "[Enter] Start    [?] Help    [q] Quit", theme);
}
