//! Quiz screen: status header, clip view, prompt and answers

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

use super::layout::{draw_hints, progress_bar};
use super::scan_line;
use crate::app::player::TerminalClipPlayer;
use crate::app::state::{AppState, QuizView};
use crate::quiz::{CheckedAnswer, QuizState};
use crate::theme::Theme;

const CLIP_BAR_WIDTH: usize = 30;

/// Draw the quiz screen
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    player: &TerminalClipPlayer,
    theme: &Theme,
) {
    let view = &state.quiz;
    let Some(question) = view.question.as_ref() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Timer
            Constraint::Length(3), // Clip
            Constraint::Min(3),    // Prompt + answers
            Constraint::Length(1), // Hints
        ])
        .split(area);

    draw_header(frame, chunks[0], view, theme);

    let timer_style =
        Style::default().fg(theme.timer_color(view.timer_fraction)).bg(theme.bg_tertiary);
    let timer = Gauge::default()
        .gauge_style(timer_style)
        .ratio(f64::from(view.timer_fraction.clamp(0.0, 1.0)))
        .label(format!("{:.1}s", view.timer_remaining));
    frame.render_widget(timer, chunks[1]);

    draw_clip(frame, chunks[2], player, theme);

    let body = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            format!(" {} ", question.modality.label()),
            Style::default().fg(theme.accent_secondary),
        ));
    let inner = body.inner(chunks[3]);
    frame.render_widget(body, chunks[3]);

    let body_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(inner);

    let prompt = Paragraph::new(Span::styled(
        question.prompt.as_str(),
        Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
    ))
    .wrap(Wrap { trim: true });
    frame.render_widget(prompt, body_chunks[0]);

    if view.is_scan_question() {
        draw_scan_area(frame, body_chunks[1], state, theme);
    } else {
        draw_choices(frame, body_chunks[1], view, theme);
    }

    let hints = if view.scanning {
        "[Enter] Scan    [Tab] Close scanner    [Esc] Menu"
    } else if view.is_scan_question() {
        "[Tab] Open scanner    [p] Play    [Space] Pause    [r] Replay    [?] Help    [Esc] Menu"
    } else {
        "[j/k] Move    [Enter/1-9] Answer    [p] Play    [Space] Pause    [r] Replay    [?] Help"
    };
    draw_hints(frame, chunks[4], hints, theme);
}

fn draw_header(frame: &mut Frame, area: Rect, view: &QuizView, theme: &Theme) {
    let mut spans = vec![
        Span::styled(
            format!(" Question {} of {} ", view.index + 1, view.total),
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
        ),
        Span::styled("\u{2502} ", Style::default().fg(theme.border)),
        Span::styled(
            format!("Attempts {}", "\u{2665} ".repeat(view.attempts as usize)),
            Style::default().fg(theme.error),
        ),
    ];
    if view.state == QuizState::QuestionTransition {
        spans.push(Span::styled("\u{2502} ", Style::default().fg(theme.border)));
        spans.push(Span::styled("Next question...", Style::default().fg(theme.fg_muted)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_clip(frame: &mut Frame, area: Rect, player: &TerminalClipPlayer, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(" Sign ", Style::default().fg(theme.fg_secondary)));

    let line = match player.clip_name() {
        Some(name) => {
            let marker = if player.is_paused() && player.progress() < 1.0 {
                " \u{23F8}"
            } else {
                ""
            };
            Line::from(vec![
                Span::styled(format!("{name} "), Style::default().fg(theme.fg_primary)),
                Span::styled(
                    progress_bar(player.progress(), CLIP_BAR_WIDTH),
                    Style::default().fg(theme.accent_secondary),
                ),
                Span::styled(marker, Style::default().fg(theme.warning)),
            ])
        }
        None => Line::from(Span::styled("no clip", Style::default().fg(theme.fg_muted))),
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_choices(frame: &mut Frame, area: Rect, view: &QuizView, theme: &Theme) {
    let lines: Vec<Line> = view
        .choices
        .iter()
        .enumerate()
        .map(|(row, choice)| {
            let selected = row == view.selected;
            let pointer = if selected { "\u{25B6} " } else { "  " };
            let mut style = Style::default().fg(theme.fg_primary);
            if selected {
                style = style.bg(theme.selection).add_modifier(Modifier::BOLD);
            }

            let mut spans = vec![
                Span::styled(pointer, Style::default().fg(theme.accent_primary)),
                Span::styled(format!("{}. {}", row + 1, choice.text), style),
            ];
            if let Some(correct) = view.verdict_for_row(row) {
                let mark = if correct { "  \u{2713}" } else { "  \u{2717}" };
                let text = match choice.indicator.as_deref() {
                    Some(indicator) => format!("{mark} {indicator}"),
                    None => mark.to_string(),
                };
                spans.push(Span::styled(text, Style::default().fg(theme.verdict_color(correct))));
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_scan_area(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let view = &state.quiz;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    if view.scanning {
        scan_line::draw(frame, chunks[0], &state.scan_input, theme);
    } else {
        let hint = Paragraph::new(Span::styled(
            "Show the matching card: press Tab to open the scanner",
            Style::default().fg(theme.fg_muted),
        ));
        frame.render_widget(hint, chunks[0]);
    }

    if let Some(verdict) = &view.verdict {
        let CheckedAnswer::Scan(label) = &verdict.answer else {
            return;
        };
        let text = if verdict.correct {
            format!("\u{2713} {label}")
        } else {
            format!("\u{2717} {label} is not the right card")
        };
        let line = Paragraph::new(Span::styled(
            text,
            Style::default().fg(theme.verdict_color(verdict.correct)).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, chunks[1]);
    }
}
