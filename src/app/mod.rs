//! Application state and event handling

pub mod input;
pub mod player;
pub mod state;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

use crate::config::Config;
use crate::quiz::{
    QuestionBank, QuizError, QuizEvent, QuizSession, QuizSettings, QuizState, ScanGate,
};
use crate::ui;
use input::{Action, key_to_action};
use player::TerminalClipPlayer;
use state::{AppState, Screen};

/// Frame interval for ticking the session
const FRAME: Duration = Duration::from_millis(16);

/// Owns the quiz session and routes input and session events to the view
///
/// This is the application root: the session is created here and handed to
/// nothing else, every collaborator reaches it through the controller.
pub struct Controller {
    state: AppState,
    session: QuizSession<TerminalClipPlayer>,
    gate: ScanGate,
    events: UnboundedReceiver<QuizEvent>,
    rng: StdRng,
}

impl Controller {
    /// Create a controller with an idle session over `bank`
    pub fn new(
        bank: QuestionBank,
        settings: QuizSettings,
        seed: Option<u64>,
    ) -> Result<Self, QuizError> {
        let mut session = QuizSession::new(bank, settings, TerminalClipPlayer::default())?;
        let rng = match seed {
            Some(seed) => {
                session = session.with_seed(seed);
                StdRng::seed_from_u64(seed.wrapping_add(1))
            }
            None => StdRng::from_entropy(),
        };

        let (tx, events) = unbounded_channel();
        session.subscribe(tx);

        Ok(Self { state: AppState::default(), session, gate: ScanGate::default(), events, rng })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn session(&self) -> &QuizSession<TerminalClipPlayer> {
        &self.session
    }

    /// Advance the session and animations by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        self.session.tick(dt);
        self.session.player_mut().advance(dt);
        self.drain_events();
        self.state.quiz.tick(dt);
    }

    /// Apply an input action, returns true if the app should exit
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::Help => self.state.show_help(),
            Action::Back if self.state.screen == Screen::Help => self.state.close_help(),
            Action::Back => {
                self.gate.disable();
                self.state.scan_input.clear();
                self.session.reset();
            }
            Action::Start | Action::Restart => self.start_level(),
            Action::Up => self.state.quiz.select_prev(),
            Action::Down => self.state.quiz.select_next(),
            Action::Select if self.state.quiz.scanning => self.submit_scan(),
            Action::Select => self.choose_row(self.state.quiz.selected),
            Action::Choose(row) => self.choose_row(row),
            Action::ToggleScanner => self.toggle_scanner(),
            Action::ScanInput(c) => {
                // Typing a new label means the previous card left the camera
                self.gate.card_lost();
                self.state.scan_input.insert_char(c);
            }
            Action::ScanBackspace => self.state.scan_input.delete_char(),
            Action::ScanLeft => self.state.scan_input.move_left(),
            Action::ScanRight => self.state.scan_input.move_right(),
            Action::PlayAnimation => self.session.play_animation(),
            Action::TogglePause => {
                let paused = self.session.player().is_paused();
                self.session.toggle_animation(!paused);
            }
            Action::ResetAnimation => self.session.reset_animation(),
        }

        self.drain_events();
        false
    }

    fn start_level(&mut self) {
        self.gate.disable();
        self.state.scan_input.clear();
        match self.session.start_level() {
            Ok(()) => self.state.message = None,
            Err(e) => {
                tracing::error!("Could not start level: {}", e);
                self.state.message = Some(e.to_string());
            }
        }
    }

    fn choose_row(&mut self, row: usize) {
        if self.state.quiz.locked {
            return;
        }
        if let Some(index) = self.state.quiz.answer_index_at(row) {
            self.session.submit_multiple_choice_answer(index);
        }
    }

    fn submit_scan(&mut self) {
        let Some(label) = self.state.scan_input.take() else {
            return;
        };
        if let Some(card) = self.gate.card_found(&label) {
            self.session.submit_scan_answer(&card);
        }
    }

    /// Switch between the answer view and the card scanner (scan questions only)
    fn toggle_scanner(&mut self) {
        let view = &mut self.state.quiz;
        if view.scanning {
            view.scanning = false;
            self.gate.disable();
        } else if view.is_scan_question() && !view.locked {
            view.scanning = true;
            self.gate.activate();
        }
    }

    /// Fold queued session events into the view
    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match &event {
                QuizEvent::QuestionChanged { .. } => {
                    self.gate.disable();
                    self.state.scan_input.clear();
                }
                QuizEvent::StateChanged { to, .. } if *to != QuizState::Playing => {
                    self.gate.disable();
                }
                _ => {}
            }
            self.state.quiz.apply(&event, &mut self.rng);
        }
        self.state.sync_screen();
    }
}

/// The main application
pub struct App {
    /// Application configuration
    config: Config,

    /// Quiz session and view state
    controller: Controller,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config, bank: QuestionBank, seed: Option<u64>) -> Result<Self> {
        let controller = Controller::new(bank, config.quiz.clone(), seed)?;
        let terminal = Self::setup_terminal()?;

        Ok(Self { config, controller, terminal })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        let theme = self.config.active_theme();
        let mut frames = tokio::time::interval(FRAME);
        let mut last_frame = Instant::now();

        loop {
            // Draw UI
            let controller = &self.controller;
            self.terminal.draw(|frame| {
                ui::draw(frame, controller.state(), controller.session(), &theme);
            })?;

            frames.tick().await;

            // Handle events
            while event::poll(Duration::ZERO)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    let state = self.controller.state();
                    let Some(action) =
                        key_to_action(state.screen, state.quiz.scanning, key.code, key.modifiers)
                    else {
                        continue;
                    };
                    if self.controller.handle_action(action) {
                        self.restore_terminal()?;
                        return Ok(());
                    }
                }
            }

            // Advance the quiz clock
            let now = Instant::now();
            self.controller.tick(now.duration_since(last_frame).as_secs_f32());
            last_frame = now;
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}
