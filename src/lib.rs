//! Signquiz - A terminal quiz for learning sign language
//!
//! Each level draws a shuffled set of questions from a question bank. A
//! question plays one or more sign clips and is answered either by picking
//! from a list or by showing the matching card to the scanner. Wrong answers
//! cost attempts and every question runs against a timer.

pub mod app;
pub mod config;
pub mod quiz;
pub mod theme;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use quiz::{QuestionBank, QuizEvent, QuizSession, QuizSettings, QuizState};
pub use theme::Theme;
