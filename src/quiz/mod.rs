//! Quiz core
//!
//! Question bank, timed quiz session state machine, and the collaborator
//! contracts (animation player, card-scan source, presentation observers) it
//! talks to. Nothing here depends on the terminal front end.

pub mod bank;
pub mod error;
pub mod events;
pub mod model;
pub mod playback;
pub mod presentation;
pub mod scan;
pub mod schedule;
pub mod session;
pub mod settings;

// Re-export commonly used types
pub use bank::QuestionBank;
pub use error::{BankError, QuizError};
pub use events::{CheckedAnswer, ObserverId, QuizEvent, QuizObserver, QuizState};
pub use model::{Answer, ClipRef, Modality, Question};
pub use playback::{AnimationPlayer, NullPlayer};
pub use presentation::{AnswerChoice, present_answers};
pub use scan::ScanGate;
pub use session::QuizSession;
pub use settings::{QuizSettings, TieBreak};
