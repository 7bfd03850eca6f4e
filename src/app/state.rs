//! Application state definitions

use std::sync::Arc;

use rand::Rng;

use crate::quiz::{
    AnswerChoice, CheckedAnswer, Modality, Question, QuizEvent, QuizState, present_answers,
};

/// Which screen is currently displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Menu,
    Quiz,
    GameOver,
    Finished,
    Help,
}

/// How long an answer indicator stays on screen (seconds)
pub const VERDICT_SECONDS: f32 = 1.0;

/// Correct/wrong indicator for the last checked answer
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub answer: CheckedAnswer,
    pub correct: bool,
    /// Seconds left before the indicator hides
    pub remaining: f32,
}

/// Presentation-side copy of the quiz, built only from session events
#[derive(Debug, Clone, Default)]
pub struct QuizView {
    /// Last state reported by the session
    pub state: QuizState,
    /// Question on screen
    pub question: Option<Arc<Question>>,
    /// Position of the question within the level
    pub index: usize,
    /// Level length
    pub total: usize,
    /// Answers in on-screen order
    pub choices: Vec<AnswerChoice>,
    /// Highlighted row in `choices`
    pub selected: usize,
    /// Whether the scanner view is open instead of the answer list
    pub scanning: bool,
    pub attempts: u32,
    pub timer_remaining: f32,
    /// Normalized time left in `[0, 1]`
    pub timer_fraction: f32,
    /// Answer indicator currently shown
    pub verdict: Option<Verdict>,
    /// `(score, total)` once the level is finished
    pub score: Option<(u32, u32)>,
    /// Whether answer input is locked until the next question
    pub locked: bool,
}

impl QuizView {
    /// Fold a session event into the view
    pub fn apply(&mut self, event: &QuizEvent, rng: &mut impl Rng) {
        match event {
            QuizEvent::QuestionChanged { index, total, question } => {
                if *index == 0 {
                    // New level: nothing from the previous run carries over
                    self.score = None;
                    self.verdict = None;
                }
                self.index = *index;
                self.total = *total;
                self.choices = match question.modality {
                    Modality::MultipleChoice => present_answers(question, rng),
                    Modality::ScanMode => Vec::new(),
                };
                self.question = Some(Arc::clone(question));
                self.selected = 0;
                self.scanning = false;
                self.locked = false;
            }
            QuizEvent::AttemptsChanged { remaining } => self.attempts = *remaining,
            QuizEvent::TimerChanged { remaining, fraction } => {
                self.timer_remaining = *remaining;
                self.timer_fraction = *fraction;
            }
            QuizEvent::AnswerChecked { answer, correct } => {
                self.locked = true;
                self.verdict = Some(Verdict {
                    answer: answer.clone(),
                    correct: *correct,
                    remaining: VERDICT_SECONDS,
                });
            }
            QuizEvent::StateChanged { to, .. } => {
                self.state = *to;
                if *to == QuizState::Idle {
                    *self = Self::default();
                }
            }
            QuizEvent::GameFinished { score, total } => self.score = Some((*score, *total)),
        }
    }

    /// Let the answer indicator fade
    pub fn tick(&mut self, dt: f32) {
        if let Some(verdict) = &mut self.verdict {
            verdict.remaining -= dt;
            if verdict.remaining <= 0.0 {
                self.verdict = None;
            }
        }
    }

    /// Whether the question on screen is answered by scanning
    pub fn is_scan_question(&self) -> bool {
        self.question.as_ref().is_some_and(|q| q.modality == Modality::ScanMode)
    }

    /// Move the highlight down, wrapping
    pub fn select_next(&mut self) {
        if !self.choices.is_empty() {
            self.selected = (self.selected + 1) % self.choices.len();
        }
    }

    /// Move the highlight up, wrapping
    pub fn select_prev(&mut self) {
        if !self.choices.is_empty() {
            self.selected = (self.selected + self.choices.len() - 1) % self.choices.len();
        }
    }

    /// Authored answer index behind an on-screen row
    pub fn answer_index_at(&self, row: usize) -> Option<usize> {
        self.choices.get(row).map(|c| c.index)
    }

    /// Verdict for an on-screen row, if that row was the one checked
    pub fn verdict_for_row(&self, row: usize) -> Option<bool> {
        let verdict = self.verdict.as_ref()?;
        let index = self.answer_index_at(row)?;
        match verdict.answer {
            CheckedAnswer::Choice(checked) if checked == index => Some(verdict.correct),
            _ => None,
        }
    }
}

/// Card label entry standing in for the camera-based card tracker
#[derive(Debug, Clone, Default)]
pub struct ScanInputState {
    /// Label typed so far
    pub input: String,
    /// Cursor position (character index)
    pub cursor: usize,
}

impl ScanInputState {
    /// Convert character index to byte index
    fn char_to_byte_index(&self, char_idx: usize) -> usize {
        self.input.char_indices().nth(char_idx).map(|(i, _)| i).unwrap_or(self.input.len())
    }

    fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// Insert a character at cursor
    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.char_to_byte_index(self.cursor);
        self.input.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_idx = self.char_to_byte_index(self.cursor);
            self.input.remove(byte_idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Take the typed label, leaving the input empty
    pub fn take(&mut self) -> Option<String> {
        let label = std::mem::take(&mut self.input);
        self.cursor = 0;
        let trimmed = label.trim();
        if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }
}

/// Full application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Current screen
    pub screen: Screen,

    /// Screen to return to when help closes
    pub previous_screen: Screen,

    /// Quiz as the presentation layer sees it
    pub quiz: QuizView,

    /// Simulated card reader input
    pub scan_input: ScanInputState,

    /// Status or error message for the footer
    pub message: Option<String>,
}

impl AppState {
    /// Follow the session into the matching screen
    pub fn sync_screen(&mut self) {
        if self.screen == Screen::Help {
            return;
        }
        self.screen = match self.quiz.state {
            QuizState::Idle => Screen::Menu,
            QuizState::Playing | QuizState::QuestionTransition => Screen::Quiz,
            QuizState::GameOver => Screen::GameOver,
            QuizState::GameFinished => Screen::Finished,
        };
    }

    /// Open the help screen
    pub fn show_help(&mut self) {
        if self.screen != Screen::Help {
            self.previous_screen = self.screen;
            self.screen = Screen::Help;
        }
    }

    /// Close the help screen
    pub fn close_help(&mut self) {
        if self.screen == Screen::Help {
            self.screen = self.previous_screen;
            self.sync_screen();
        }
    }
}
