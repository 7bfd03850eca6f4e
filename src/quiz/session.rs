//! The quiz state machine
//!
//! A session samples a level from the bank, presents one question at a time
//! against a countdown, and scores multiple-choice and scan answers with a
//! single resolution path. All waiting is driven by [`QuizSession::tick`].

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::bank::QuestionBank;
use super::error::QuizError;
use super::events::{CheckedAnswer, ObserverId, Observers, QuizEvent, QuizObserver, QuizState};
use super::model::{Modality, Question};
use super::playback::{AnimationPlayer, ClipSequence, NullPlayer};
use super::schedule::{Generation, Scheduler};
use super::settings::{QuizSettings, TieBreak};

/// Work suspended until some time has passed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    /// Inter-question pause is over
    Transition,
    /// The clip started last has played out
    ClipEnded,
}

/// One player's quiz, from level start to game over or completion
#[derive(Debug)]
pub struct QuizSession<P: AnimationPlayer = NullPlayer> {
    bank: QuestionBank,
    settings: QuizSettings,
    player: P,
    observers: Observers,
    rng: StdRng,
    scheduler: Scheduler<Task>,
    generation: Generation,

    state: QuizState,
    level: Vec<Arc<Question>>,
    current_index: usize,
    attempts_remaining: u32,
    correct_count: u32,
    time_remaining: f32,
    clips: ClipSequence,
    transition_elapsed: bool,
    final_score: Option<u32>,
}

impl<P: AnimationPlayer> QuizSession<P> {
    /// Create an idle session over `bank`
    pub fn new(bank: QuestionBank, settings: QuizSettings, player: P) -> Result<Self, QuizError> {
        settings.validate()?;
        let attempts_remaining = settings.attempt_limit;
        let time_remaining = settings.question_time_limit;

        Ok(Self {
            bank,
            settings,
            player,
            observers: Observers::default(),
            rng: StdRng::from_entropy(),
            scheduler: Scheduler::default(),
            generation: Generation::default(),
            state: QuizState::Idle,
            level: Vec::new(),
            current_index: 0,
            attempts_remaining,
            correct_count: 0,
            time_remaining,
            clips: ClipSequence::default(),
            transition_elapsed: false,
            final_score: None,
        })
    }

    /// Use a fixed seed for level sampling
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Register a presentation observer
    pub fn subscribe(&mut self, observer: impl QuizObserver + 'static) -> ObserverId {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Questions sampled for the current level
    pub fn level(&self) -> &[Arc<Question>] {
        &self.level
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Question at the current index, if the level has not run past its end
    pub fn current_question(&self) -> Option<&Arc<Question>> {
        self.level.get(self.current_index)
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn time_remaining(&self) -> f32 {
        self.time_remaining
    }

    /// Score of the last completed level as `(score, total)`
    pub fn final_score(&self) -> Option<(u32, u32)> {
        self.final_score.map(|score| (score, self.settings.max_score()))
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    /// Sample a new level and present its first question
    ///
    /// Fails without touching the session when the bank is too small.
    pub fn start_level(&mut self) -> Result<(), QuizError> {
        let requested = self.settings.questions_per_level;
        let available = self.bank.len();
        if available < requested {
            return Err(QuizError::InsufficientQuestions { requested, available });
        }

        let mut pool: Vec<Arc<Question>> = self.bank.questions().to_vec();
        pool.shuffle(&mut self.rng);
        pool.truncate(requested);

        self.generation = self.generation.next();
        self.level = pool;
        self.current_index = 0;
        self.correct_count = 0;
        self.attempts_remaining = self.settings.attempt_limit;
        self.final_score = None;
        self.player.stop();

        tracing::info!("Starting level of {} questions from '{}'", requested, self.bank.name());
        self.load_question();
        Ok(())
    }

    /// Play the level again with a fresh sample
    pub fn restart(&mut self) -> Result<(), QuizError> {
        self.start_level()
    }

    /// Abandon the level and return to idle
    pub fn reset(&mut self) {
        self.generation = self.generation.next();
        self.player.stop();
        self.level.clear();
        self.current_index = 0;
        self.correct_count = 0;
        self.attempts_remaining = self.settings.attempt_limit;
        self.time_remaining = self.settings.question_time_limit;
        self.clips = ClipSequence::default();
        self.transition_elapsed = false;
        self.set_state(QuizState::Idle);
    }

    /// Answer a multiple-choice question by its index in the authored answer list
    ///
    /// Returns whether the answer was correct, or `None` when the submission was
    /// ignored because no multiple-choice question is awaiting an answer.
    pub fn submit_multiple_choice_answer(&mut self, answer_index: usize) -> Option<bool> {
        let question = self.answerable(Modality::MultipleChoice)?;
        let correct = question.is_correct_index(answer_index);
        if answer_index >= question.answers.len() {
            tracing::warn!(
                "Answer index {} out of range for question '{}', scoring as wrong",
                answer_index,
                question.id
            );
        }

        self.resolve(CheckedAnswer::Choice(answer_index), correct);
        Some(correct)
    }

    /// Answer a scan question with the label of the card presented
    ///
    /// Returns whether the card matched, or `None` when the scan was ignored.
    pub fn submit_scan_answer(&mut self, scanned_label: &str) -> Option<bool> {
        let question = self.answerable(Modality::ScanMode)?;
        let correct = question.matches_scan(scanned_label);

        self.resolve(CheckedAnswer::Scan(scanned_label.to_string()), correct);
        Some(correct)
    }

    /// Advance the session clock by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }

        if self.state == QuizState::Playing {
            self.time_remaining -= dt;
            if self.time_remaining <= 0.0 {
                self.time_remaining = 0.0;
                self.emit_timer();
                tracing::info!("Time ran out on question {}", self.current_index + 1);
                self.set_state(QuizState::GameOver);
                return;
            }
            self.emit_timer();
        }

        if !matches!(self.state, QuizState::Playing | QuizState::QuestionTransition) {
            return;
        }

        for due in self.scheduler.advance(dt) {
            if due.generation != self.generation {
                tracing::trace!("Discarding stale {:?}", due.task);
                continue;
            }
            match due.task {
                Task::Transition => self.transition_elapsed = true,
                Task::ClipEnded => self.advance_clips(),
            }
        }

        if self.state == QuizState::QuestionTransition
            && self.transition_elapsed
            && self.clips.is_finished()
        {
            self.load_question();
        }
    }

    /// Resume the question's animation
    pub fn play_animation(&mut self) {
        self.player.play();
    }

    /// Freeze the question's animation
    pub fn pause_animation(&mut self) {
        self.player.pause();
    }

    /// Rewind and replay the current clip
    pub fn reset_animation(&mut self) {
        self.player.reset();
    }

    pub fn toggle_animation(&mut self, pause: bool) {
        self.player.toggle(pause);
    }

    /// The current question, if it is waiting for an answer of `modality`
    fn answerable(&self, modality: Modality) -> Option<Arc<Question>> {
        if self.state != QuizState::Playing {
            tracing::debug!("Ignoring answer while {:?}", self.state);
            return None;
        }
        let question = self.current_question()?;
        if question.modality != modality {
            tracing::debug!(
                "Ignoring {} answer for {} question '{}'",
                modality.label(),
                question.modality.label(),
                question.id
            );
            return None;
        }
        Some(Arc::clone(question))
    }

    /// Shared scoring path for both answer modalities
    fn resolve(&mut self, answer: CheckedAnswer, correct: bool) {
        self.observers.emit(&QuizEvent::AnswerChecked { answer, correct });

        if correct {
            self.correct_count += 1;
        } else {
            self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
            self.observers
                .emit(&QuizEvent::AttemptsChanged { remaining: self.attempts_remaining });
        }

        let out_of_attempts = self.attempts_remaining == 0;
        let last_question = self.current_index + 1 >= self.level.len();

        let game_over = match self.settings.tie_break {
            TieBreak::GameOver => out_of_attempts,
            TieBreak::GameFinished => out_of_attempts && !last_question,
        };
        if game_over {
            tracing::info!(
                "Out of attempts on question {} with {} correct",
                self.current_index + 1,
                self.correct_count
            );
            self.set_state(QuizState::GameOver);
            return;
        }

        self.current_index += 1;
        if last_question {
            self.finish();
        } else {
            self.transition_elapsed = false;
            self.scheduler.schedule(
                self.generation,
                self.settings.transition_delay,
                Task::Transition,
            );
            self.set_state(QuizState::QuestionTransition);
        }
    }

    /// Present the question at `current_index` and restart its timer
    fn load_question(&mut self) {
        let Some(question) = self.current_question().cloned() else {
            self.finish();
            return;
        };

        self.time_remaining = self.settings.question_time_limit;
        self.transition_elapsed = false;
        self.set_state(QuizState::Playing);

        tracing::debug!("Presenting question {} ('{}')", self.current_index + 1, question.id);
        self.observers.emit(&QuizEvent::QuestionChanged {
            index: self.current_index,
            total: self.level.len(),
            question: Arc::clone(&question),
        });
        self.observers.emit(&QuizEvent::AttemptsChanged { remaining: self.attempts_remaining });
        self.emit_timer();

        self.clips = ClipSequence::new(question.clips.clone());
        self.advance_clips();
    }

    /// Start the next clip of the current question, if any
    fn advance_clips(&mut self) {
        if let Some(duration) = self.clips.play_next(&mut self.player) {
            self.scheduler.schedule(self.generation, duration, Task::ClipEnded);
        }
    }

    fn finish(&mut self) {
        let score = self.correct_count.saturating_mul(self.settings.score_multiplier);
        let total = self.settings.max_score();
        self.final_score = Some(score);

        tracing::info!("Level finished: {}/{}", score, total);
        self.set_state(QuizState::GameFinished);
        self.observers.emit(&QuizEvent::GameFinished { score, total });
    }

    fn emit_timer(&mut self) {
        let remaining = self.time_remaining.max(0.0);
        let fraction = (remaining / self.settings.question_time_limit).clamp(0.0, 1.0);
        self.observers.emit(&QuizEvent::TimerChanged { remaining, fraction });
    }

    fn set_state(&mut self, to: QuizState) {
        let from = self.state;
        if from == to {
            return;
        }
        self.state = to;
        tracing::debug!("Quiz state {:?} -> {:?}", from, to);
        self.observers.emit(&QuizEvent::StateChanged { from, to });
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::quiz::model::{Answer, ClipRef};

    #[derive(Debug, Default)]
    struct RecordingPlayer {
        started: Vec<String>,
        stops: usize,
        paused: bool,
    }

    impl AnimationPlayer for RecordingPlayer {
        fn start_clip(&mut self, clip: &ClipRef) {
            self.started.push(clip.name.clone());
        }

        fn pause(&mut self) {
            self.paused = true;
        }

        fn play(&mut self) {
            self.paused = false;
        }

        fn stop(&mut self) {
            self.stops += 1;
        }
    }

    /// Multiple-choice question where index 0 is right and index 1 is wrong
    fn choice_question(id: usize) -> Question {
        Question {
            id: format!("q{}", id),
            prompt: format!("Question {}", id),
            modality: Modality::MultipleChoice,
            clips: vec![],
            answers: vec![Answer::correct("right"), Answer::wrong("wrong")],
        }
    }

    fn choice_bank(size: usize) -> QuestionBank {
        QuestionBank::new("test", (0..size).map(choice_question).collect()).unwrap()
    }

    fn settings(questions_per_level: usize) -> QuizSettings {
        QuizSettings { questions_per_level, ..Default::default() }
    }

    fn session(bank_size: usize, questions_per_level: usize) -> QuizSession<RecordingPlayer> {
        let rules = settings(questions_per_level);
        QuizSession::new(choice_bank(bank_size), rules, RecordingPlayer::default())
            .unwrap()
            .with_seed(42)
    }

    fn record<P: AnimationPlayer>(session: &mut QuizSession<P>) -> Rc<RefCell<Vec<QuizEvent>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        session.subscribe(move |event: &QuizEvent| sink.borrow_mut().push(event.clone()));
        log
    }

    /// Tick past the transition delay
    fn skip_transition<P: AnimationPlayer>(session: &mut QuizSession<P>) {
        let delay = session.settings().transition_delay;
        session.tick(delay + 0.5);
    }

    #[test]
    fn new_session_is_idle() {
        let session = session(3, 3);
        assert_eq!(session.state(), QuizState::Idle);
        assert!(session.current_question().is_none());
    }

    #[test]
    fn invalid_settings_rejected() {
        let result = QuizSession::new(
            choice_bank(3),
            QuizSettings { questions_per_level: 0, ..Default::default() },
            NullPlayer,
        );
        assert!(matches!(result, Err(QuizError::InvalidSettings(_))));
    }

    #[test]
    fn start_level_with_small_bank_fails_without_side_effects() {
        let mut session = session(4, 10);
        let events = record(&mut session);

        let err = session.start_level().unwrap_err();
        assert_eq!(err, QuizError::InsufficientQuestions { requested: 10, available: 4 });
        assert_eq!(session.state(), QuizState::Idle);
        assert!(session.level().is_empty());
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn start_level_samples_distinct_questions() {
        let mut session = session(10, 6);
        session.start_level().unwrap();

        let mut ids: Vec<&str> = session.level().iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids.len(), 6);
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn start_level_presents_first_question() {
        let mut session = session(3, 3);
        let events = record(&mut session);
        session.start_level().unwrap();

        let first = Arc::clone(&session.level()[0]);
        assert_eq!(
            *events.borrow(),
            vec![
                QuizEvent::StateChanged { from: QuizState::Idle, to: QuizState::Playing },
                QuizEvent::QuestionChanged { index: 0, total: 3, question: first },
                QuizEvent::AttemptsChanged { remaining: 3 },
                QuizEvent::TimerChanged { remaining: 10.0, fraction: 1.0 },
            ]
        );
        assert_eq!(session.attempts_remaining(), 3);
        assert_eq!(session.correct_count(), 0);
    }

    #[test]
    fn two_correct_answers_finish_with_full_score() {
        let mut session = session(2, 2);
        let events = record(&mut session);
        session.start_level().unwrap();

        assert_eq!(session.submit_multiple_choice_answer(0), Some(true));
        assert_eq!(session.state(), QuizState::QuestionTransition);
        skip_transition(&mut session);
        assert_eq!(session.state(), QuizState::Playing);
        assert_eq!(session.current_index(), 1);

        assert_eq!(session.submit_multiple_choice_answer(0), Some(true));
        assert_eq!(session.state(), QuizState::GameFinished);
        assert_eq!(session.final_score(), Some((20, 20)));
        assert_eq!(session.current_index(), 2);
        assert_eq!(events.borrow().last(), Some(&QuizEvent::GameFinished { score: 20, total: 20 }));
    }

    #[test]
    fn three_wrong_answers_end_the_game() {
        let mut session = session(10, 10);
        session.start_level().unwrap();

        session.submit_multiple_choice_answer(1);
        skip_transition(&mut session);
        session.submit_multiple_choice_answer(1);
        skip_transition(&mut session);
        assert_eq!(session.current_index(), 2);
        session.submit_multiple_choice_answer(1);

        assert_eq!(session.state(), QuizState::GameOver);
        assert_eq!(session.current_index(), 2);
        assert_eq!(session.correct_count(), 0);
        assert_eq!(session.attempts_remaining(), 0);
        assert_eq!(session.final_score(), None);
    }

    #[test]
    fn attempts_are_shared_across_the_level() {
        let mut session = session(5, 5);
        session.start_level().unwrap();

        session.submit_multiple_choice_answer(1);
        skip_transition(&mut session);
        session.submit_multiple_choice_answer(1);
        skip_transition(&mut session);
        for _ in 0..2 {
            session.submit_multiple_choice_answer(0);
            skip_transition(&mut session);
        }
        assert_eq!(session.attempts_remaining(), 1);

        session.submit_multiple_choice_answer(0);
        assert_eq!(session.state(), QuizState::GameFinished);
        assert_eq!(session.final_score(), Some((30, 50)));
    }

    #[test]
    fn answer_checked_precedes_attempts_change() {
        let mut session = session(3, 3);
        session.start_level().unwrap();
        let events = record(&mut session);

        assert_eq!(session.submit_multiple_choice_answer(9), Some(false));
        assert_eq!(
            events.borrow()[..2].to_vec(),
            vec![
                QuizEvent::AnswerChecked { answer: CheckedAnswer::Choice(9), correct: false },
                QuizEvent::AttemptsChanged { remaining: 2 },
            ]
        );
    }

    #[test]
    fn timer_expiry_forces_game_over() {
        let mut session = session(3, 3);
        session.start_level().unwrap();
        let events = record(&mut session);

        session.tick(4.0);
        session.tick(4.0);
        assert_eq!(session.state(), QuizState::Playing);
        assert_eq!(session.time_remaining(), 2.0);
        session.tick(2.0);

        assert_eq!(session.state(), QuizState::GameOver);
        assert_eq!(session.attempts_remaining(), 3);
        assert!(
            events.borrow().contains(&QuizEvent::TimerChanged { remaining: 0.0, fraction: 0.0 })
        );
        assert!(
            events
                .borrow()
                .contains(&QuizEvent::TimerChanged { remaining: 6.0, fraction: 0.6 })
        );
    }

    #[test]
    fn zero_tick_changes_nothing() {
        let mut session = session(3, 3);
        session.start_level().unwrap();
        let events = record(&mut session);

        for _ in 0..10 {
            session.tick(0.0);
        }
        session.tick(f32::NAN);

        assert_eq!(session.time_remaining(), 10.0);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn timer_resets_on_each_question() {
        let mut session = session(3, 3);
        session.start_level().unwrap();
        session.tick(7.5);
        session.submit_multiple_choice_answer(0);

        session.tick(1.0);
        assert_eq!(session.state(), QuizState::QuestionTransition);
        assert_eq!(session.time_remaining(), 2.5);

        skip_transition(&mut session);
        assert_eq!(session.time_remaining(), 10.0);
    }

    #[test]
    fn answers_ignored_outside_playing() {
        let mut session = session(3, 3);
        assert_eq!(session.submit_multiple_choice_answer(0), None);

        session.start_level().unwrap();
        session.submit_multiple_choice_answer(0);
        assert_eq!(session.state(), QuizState::QuestionTransition);
        assert_eq!(session.submit_multiple_choice_answer(0), None);
        assert_eq!(session.correct_count(), 1);
    }

    #[test]
    fn scan_answer_ignored_for_multiple_choice_question() {
        let mut session = session(3, 3);
        session.start_level().unwrap();
        let events = record(&mut session);

        assert_eq!(session.submit_scan_answer("right"), None);
        assert_eq!(session.state(), QuizState::Playing);
        assert!(events.borrow().is_empty());
    }

    fn scan_session(tie_break: TieBreak) -> QuizSession<RecordingPlayer> {
        let question = Question {
            id: "hello".into(),
            prompt: "Scan the card for this sign".into(),
            modality: Modality::ScanMode,
            clips: vec![],
            answers: vec![Answer::correct("hello")],
        };
        let bank = QuestionBank::new("scan", vec![question]).unwrap();
        let settings =
            QuizSettings { questions_per_level: 1, attempt_limit: 1, tie_break, ..Default::default() };
        QuizSession::new(bank, settings, RecordingPlayer::default()).unwrap()
    }

    #[test]
    fn scan_matches_case_insensitively() {
        let mut session = scan_session(TieBreak::GameOver);
        let events = record(&mut session);
        session.start_level().unwrap();

        assert_eq!(session.submit_multiple_choice_answer(0), None);
        assert_eq!(session.submit_scan_answer("Hello"), Some(true));
        assert_eq!(session.state(), QuizState::GameFinished);
        assert!(events.borrow().contains(&QuizEvent::AnswerChecked {
            answer: CheckedAnswer::Scan("Hello".into()),
            correct: true,
        }));
    }

    #[test]
    fn second_scan_for_same_question_ignored() {
        let mut session = scan_session(TieBreak::GameOver);
        session.start_level().unwrap();

        assert_eq!(session.submit_scan_answer("hello"), Some(true));
        assert_eq!(session.submit_scan_answer("hello"), None);
        assert_eq!(session.correct_count(), 1);
    }

    #[test]
    fn exhaustion_on_last_question_is_game_over_by_default() {
        let mut session = scan_session(TieBreak::GameOver);
        session.start_level().unwrap();

        assert_eq!(session.submit_scan_answer("goodbye"), Some(false));
        assert_eq!(session.state(), QuizState::GameOver);
    }

    #[test]
    fn finish_first_policy_completes_the_level() {
        let mut session = scan_session(TieBreak::GameFinished);
        session.start_level().unwrap();

        session.submit_scan_answer("goodbye");
        assert_eq!(session.state(), QuizState::GameFinished);
        assert_eq!(session.final_score(), Some((0, 10)));
    }

    #[test]
    fn transition_waits_for_delay() {
        let mut session = session(3, 3);
        session.start_level().unwrap();
        session.submit_multiple_choice_answer(0);

        session.tick(1.5);
        assert_eq!(session.state(), QuizState::QuestionTransition);
        session.tick(0.5);
        assert_eq!(session.state(), QuizState::Playing);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn stale_transition_from_previous_level_is_discarded() {
        let mut session = session(5, 5);
        session.start_level().unwrap();
        session.submit_multiple_choice_answer(0);
        session.tick(1.5);

        session.reset();
        assert_eq!(session.state(), QuizState::Idle);
        session.start_level().unwrap();
        session.submit_multiple_choice_answer(0);

        // The old level's transition comes due here and must not load a question
        session.tick(1.0);
        assert_eq!(session.state(), QuizState::QuestionTransition);
        session.tick(1.0);
        assert_eq!(session.state(), QuizState::Playing);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn clip_from_previous_level_does_not_advance_new_sequence() {
        let question = Question {
            clips: vec![ClipRef::new("a1", 3.0), ClipRef::new("a2", 3.0)],
            ..choice_question(0)
        };
        let bank = QuestionBank::new("clips", vec![question]).unwrap();
        let mut session =
            QuizSession::new(bank, settings(1), RecordingPlayer::default()).unwrap();

        session.start_level().unwrap();
        session.tick(2.0);
        session.restart().unwrap();

        // The first level's clip ends here; the new level's clip is still playing
        session.tick(1.5);
        assert_eq!(session.player().started, vec!["a1", "a1"]);

        session.tick(1.5);
        assert_eq!(session.player().started, vec!["a1", "a1", "a2"]);
    }

    #[test]
    fn next_question_waits_for_clip_sequence() {
        let clips = vec![ClipRef::new("hand_up", 2.0), ClipRef::new("hand_down", 2.0)];
        let questions = (0..2)
            .map(|i| Question { clips: clips.clone(), ..choice_question(i) })
            .collect();
        let bank = QuestionBank::new("clips", questions).unwrap();
        let settings =
            QuizSettings { questions_per_level: 2, transition_delay: 1.0, ..Default::default() };
        let mut session = QuizSession::new(bank, settings, RecordingPlayer::default()).unwrap();

        session.start_level().unwrap();
        assert_eq!(session.player().started, vec!["hand_up"]);
        session.submit_multiple_choice_answer(0);

        session.tick(1.0);
        assert_eq!(session.state(), QuizState::QuestionTransition);
        session.tick(1.0);
        assert_eq!(session.player().started, vec!["hand_up", "hand_down"]);
        assert_eq!(session.state(), QuizState::QuestionTransition);

        session.tick(2.0);
        assert_eq!(session.state(), QuizState::Playing);
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.player().started, vec!["hand_up", "hand_down", "hand_up"]);
    }

    #[test]
    fn reset_returns_to_idle_and_stops_player() {
        let mut session = session(3, 3);
        session.start_level().unwrap();
        session.tick(20.0);
        assert_eq!(session.state(), QuizState::GameOver);

        let stops = session.player().stops;
        session.reset();
        assert_eq!(session.state(), QuizState::Idle);
        assert_eq!(session.player().stops, stops + 1);
        assert!(session.level().is_empty());
    }

    #[test]
    fn restart_from_game_over_plays_again() {
        let mut session = session(3, 3);
        session.start_level().unwrap();
        session.tick(20.0);

        session.restart().unwrap();
        assert_eq!(session.state(), QuizState::Playing);
        assert_eq!(session.attempts_remaining(), 3);
        assert_eq!(session.time_remaining(), 10.0);
    }

    #[test]
    fn animation_controls_pass_through() {
        let mut session = session(3, 3);
        session.pause_animation();
        assert!(session.player().paused);
        session.play_animation();
        assert!(!session.player().paused);
        session.toggle_animation(true);
        assert!(session.player().paused);
    }

    proptest! {
        #[test]
        fn counters_stay_in_bounds(
            answers in proptest::collection::vec(0usize..3, 1..40),
            level in 1usize..8,
            attempt_limit in 1u32..5,
        ) {
            let settings =
                QuizSettings { questions_per_level: level, attempt_limit, ..Default::default() };
            let mut session = QuizSession::new(choice_bank(8), settings, NullPlayer)
                .unwrap()
                .with_seed(3);
            session.start_level().unwrap();

            for answer in answers {
                session.submit_multiple_choice_answer(answer);
                session.tick(3.0);

                prop_assert!(session.correct_count() as usize <= level);
                prop_assert!(session.attempts_remaining() <= attempt_limit);
                prop_assert!(session.current_index() <= session.level().len());

                match session.state() {
                    QuizState::GameOver => prop_assert_eq!(session.attempts_remaining(), 0),
                    QuizState::GameFinished => {
                        prop_assert_eq!(session.current_index(), level);
                        break;
                    }
                    _ => {}
                }
                if session.state().is_terminal() {
                    break;
                }
            }
        }
    }
}
