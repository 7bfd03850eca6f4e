//! Event handling utilities

use crossterm::event::{KeyCode, KeyModifiers};

use super::state::Screen;

/// Actions that can be taken in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Answer list
    Up,
    Down,
    Select,
    /// Pick the answer on an on-screen row directly
    Choose(usize),

    // Scanner
    ToggleScanner,
    ScanInput(char),
    ScanBackspace,
    ScanLeft,
    ScanRight,

    // Animation transport
    PlayAnimation,
    TogglePause,
    ResetAnimation,

    // Flow
    Start,
    Restart,
    Back,
    Help,
    Quit,
}

/// Map a key press to an action for the given screen
///
/// While the scanner is open, printable keys type into the card label instead
/// of triggering shortcuts.
pub fn key_to_action(
    screen: Screen,
    scanning: bool,
    key: KeyCode,
    modifiers: KeyModifiers,
) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) && key == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match screen {
        Screen::Menu => match key {
            KeyCode::Enter | KeyCode::Char('s') => Some(Action::Start),
            KeyCode::Char('?') => Some(Action::Help),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        },
        Screen::Quiz if scanning => match key {
            KeyCode::Enter => Some(Action::Select),
            KeyCode::Tab => Some(Action::ToggleScanner),
            KeyCode::Backspace => Some(Action::ScanBackspace),
            KeyCode::Left => Some(Action::ScanLeft),
            KeyCode::Right => Some(Action::ScanRight),
            KeyCode::Esc => Some(Action::Back),
            KeyCode::Char(c) => Some(Action::ScanInput(c)),
            _ => None,
        },
        Screen::Quiz => match key {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::Down),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::Up),
            KeyCode::Enter => Some(Action::Select),
            KeyCode::Char(c @ '1'..='9') => Some(Action::Choose(c as usize - '1' as usize)),
            KeyCode::Tab => Some(Action::ToggleScanner),
            KeyCode::Char('p') => Some(Action::PlayAnimation),
            KeyCode::Char(' ') => Some(Action::TogglePause),
            KeyCode::Char('r') => Some(Action::ResetAnimation),
            KeyCode::Char('?') => Some(Action::Help),
            KeyCode::Esc => Some(Action::Back),
            _ => None,
        },
        Screen::GameOver | Screen::Finished => match key {
            KeyCode::Enter | KeyCode::Char('r') => Some(Action::Restart),
            KeyCode::Esc | KeyCode::Char('m') => Some(Action::Back),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
        // Any key closes help
        Screen::Help => Some(Action::Back),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz_key(key: KeyCode) -> Option<Action> {
        key_to_action(Screen::Quiz, false, key, KeyModifiers::NONE)
    }

    #[test]
    fn vim_keys_move_selection() {
        assert_eq!(quiz_key(KeyCode::Char('j')), Some(Action::Down));
        assert_eq!(quiz_key(KeyCode::Char('k')), Some(Action::Up));
    }

    #[test]
    fn digits_choose_rows() {
        assert_eq!(quiz_key(KeyCode::Char('1')), Some(Action::Choose(0)));
        assert_eq!(quiz_key(KeyCode::Char('4')), Some(Action::Choose(3)));
        assert_eq!(quiz_key(KeyCode::Char('0')), None);
    }

    #[test]
    fn scanner_captures_letters() {
        let action = key_to_action(Screen::Quiz, true, KeyCode::Char('p'), KeyModifiers::NONE);
        assert_eq!(action, Some(Action::ScanInput('p')));
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        for screen in [Screen::Menu, Screen::Quiz, Screen::GameOver, Screen::Help] {
            assert_eq!(
                key_to_action(screen, true, KeyCode::Char('c'), KeyModifiers::CONTROL),
                Some(Action::Quit)
            );
        }
    }

    #[test]
    fn results_offer_restart() {
        let action = key_to_action(Screen::Finished, false, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(action, Some(Action::Restart));
    }

    #[test]
    fn unknown_key_returns_none() {
        assert_eq!(quiz_key(KeyCode::Char('x')), None);
    }
}
