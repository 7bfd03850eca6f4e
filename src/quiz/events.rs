//! Session events and the observers that receive them

use std::fmt;
use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use super::model::Question;

/// Lifecycle state of a quiz session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuizState {
    #[default]
    Idle,
    Playing,
    QuestionTransition,
    GameOver,
    GameFinished,
}

impl QuizState {
    /// Whether the level has ended
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::GameOver | Self::GameFinished)
    }
}

/// Which answer a check refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckedAnswer {
    /// Index into the question's unshuffled answer list
    Choice(usize),
    /// Label read from a scanned card
    Scan(String),
}

/// Notification pushed to the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum QuizEvent {
    /// A new question is on screen
    QuestionChanged {
        /// Position within the level
        index: usize,
        /// Level length
        total: usize,
        question: Arc<Question>,
    },
    /// Level-wide attempts counter changed (also sent on every question load)
    AttemptsChanged { remaining: u32 },
    /// Per-question countdown moved
    TimerChanged {
        /// Seconds left, never negative
        remaining: f32,
        /// `remaining / question_time_limit`, in `[0, 1]`
        fraction: f32,
    },
    /// An answer was evaluated; sent before any counter changes
    AnswerChecked { answer: CheckedAnswer, correct: bool },
    /// Session state moved
    StateChanged { from: QuizState, to: QuizState },
    /// Level completed
    GameFinished { score: u32, total: u32 },
}

/// Receives session events
pub trait QuizObserver {
    fn on_event(&mut self, event: &QuizEvent);
}

impl<F> QuizObserver for F
where
    F: FnMut(&QuizEvent),
{
    fn on_event(&mut self, event: &QuizEvent) {
        self(event)
    }
}

/// Forwards events into a channel; a dropped receiver is ignored
impl QuizObserver for UnboundedSender<QuizEvent> {
    fn on_event(&mut self, event: &QuizEvent) {
        if self.send(event.clone()).is_err() {
            tracing::trace!("Event receiver dropped, discarding {:?}", event);
        }
    }
}

/// Handle returned by [`Observers::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverId(u64);

/// Observer list, notified in registration order
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    entries: Vec<(ObserverId, Box<dyn QuizObserver>)>,
}

impl Observers {
    /// Register an observer
    pub fn subscribe(&mut self, observer: impl QuizObserver + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer, returns true if it was registered
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let len_before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() < len_before
    }

    /// Deliver an event to every observer
    pub fn emit(&mut self, event: &QuizEvent) {
        for (_, observer) in &mut self.entries {
            observer.on_event(event);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers").field("count", &self.entries.len()).finish()
    }
}
