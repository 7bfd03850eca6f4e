//! UI rendering components

pub mod help;
pub mod layout;
pub mod menu;
pub mod quiz_panel;
pub mod results;
pub mod scan_line;

use ratatui::{Frame, style::Style, widgets::Block};

use crate::app::player::TerminalClipPlayer;
use crate::app::state::{AppState, Screen};
use crate::quiz::QuizSession;
use crate::theme::Theme;

/// Main draw function
pub fn draw(
    frame: &mut Frame,
    state: &AppState,
    session: &QuizSession<TerminalClipPlayer>,
    theme: &Theme,
) {
    let area = frame.area();

    // Fill background
    frame.render_widget(Block::default().style(Style::default().bg(theme.bg_primary)), area);

    match state.screen {
        Screen::Menu => menu::draw(frame, area, state, session, theme),
        Screen::Quiz => quiz_panel::draw(frame, area, state, session.player(), theme),
        Screen::GameOver | Screen::Finished => results::draw(frame, area, state, session, theme),
        Screen::Help => help::draw(frame, area, theme),
    }
}
