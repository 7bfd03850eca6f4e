//! Game over and level complete screens

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::layout::{centered_rect, draw_hints, progress_bar};
use crate::app::player::TerminalClipPlayer;
use crate::app::state::{AppState, Screen};
use crate::quiz::QuizSession;
use crate::theme::Theme;

/// Draw the end-of-level summary
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    session: &QuizSession<TerminalClipPlayer>,
    theme: &Theme,
) {
    let body = centered_rect(70, 60, area);
    let finished = state.screen == Screen::Finished;

    let (title, color) =
        if finished { ("LEVEL COMPLETE", theme.success) } else { ("GAME OVER", theme.error) };

    let mut lines = vec![
        Line::from(Span::styled(title, Style::default().fg(color).add_modifier(Modifier::BOLD))),
        Line::from(""),
    ];

    match state.quiz.score {
        Some((score, total)) => {
            let fraction = if total == 0 { 0.0 } else { score as f32 / total as f32 };
            lines.push(Line::from(Span::styled(
                format!("Score {score} / {total}"),
                Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                progress_bar(fraction, 24),
                Style::default().fg(theme.accent_primary),
            )));
        }
        None => {
            let reason = if session.time_remaining() <= 0.0 {
                "Time ran out"
            } else {
                "Out of attempts"
            };
            lines.push(Line::from(Span::styled(reason, Style::default().fg(theme.fg_secondary))));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("{} of {} answered correctly", session.correct_count(), state.quiz.total),
        Style::default().fg(theme.fg_muted),
    )));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);
    draw_hints(frame, area, "[Enter] Play again    [m] Menu    [q] Quit", theme);
}
