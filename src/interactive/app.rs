//! TUI application state and logic

use crate::core::{DIGIT_COUNT, GameEngine, GameState, Guess, Score, Turn};
use crate::output::locale::{
    Language, MessageKey, attempts_text, score_text, share_text, submit_error_message,
};
use crate::solver::{Solver, StrategyType};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    engine: GameEngine<StdRng>,
    pub game: GameState,
    pub solver: Solver<StrategyType>,
    pub lang: Language,
    /// Accepted guesses of the current game, oldest first
    pub history: Vec<Turn>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    ConfirmReset,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results across the games of one session
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: u32,
    pub games_won: u32,
    pub total_attempts: u32,
    pub best: Option<u32>,
}

impl Statistics {
    #[must_use]
    pub fn average_attempts(&self) -> Option<f64> {
        (self.games_won > 0).then(|| f64::from(self.total_attempts) / f64::from(self.games_won))
    }

    fn record_win(&mut self, attempts: u32) {
        self.games_won += 1;
        self.total_attempts += attempts;
        self.best = Some(self.best.map_or(attempts, |best| best.min(attempts)));
    }
}

impl App {
    #[must_use]
    pub fn new(mut engine: GameEngine<StdRng>, solver: Solver<StrategyType>, lang: Language) -> Self {
        let game = engine.start_game();

        let mut app = Self {
            engine,
            game,
            solver,
            lang,
            history: Vec::new(),
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics {
                games_played: 1,
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Guessing,
        };
        app.add_message(lang.text(MessageKey::Instructions), MessageStyle::Info);
        app
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Guessing => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('r') => self.request_reset(),
                KeyCode::Char('?') => self.show_hint(),
                KeyCode::Char('l') => self.toggle_language(),
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    if self.input_buffer.len() < DIGIT_COUNT {
                        self.input_buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit(),
                _ => {}
            },
            InputMode::ConfirmReset => match key.code {
                KeyCode::Char('y' | 'Y') => self.new_game(),
                KeyCode::Char('n' | 'N') | KeyCode::Esc => {
                    self.input_mode = InputMode::Guessing;
                }
                _ => {}
            },
            InputMode::WinCelebration => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('r' | 'n') => self.new_game(),
                KeyCode::Char('s') => self.show_share(),
                KeyCode::Char('l') => self.toggle_language(),
                KeyCode::Enter => self.submit(),
                _ => {}
            },
        }
    }

    /// Submit the typed digits as a guess
    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.game.submit_guess(&input) {
            Ok(turn) => {
                self.history.push(turn);
                let text = format!("{}: {}", turn.guess, score_text(self.lang, turn.score));

                if self.game.is_over() {
                    self.stats.record_win(self.game.attempts());
                    self.input_mode = InputMode::WinCelebration;
                    self.add_message(&text, MessageStyle::Success);
                    self.add_message(self.lang.text(MessageKey::GameOverTitle), MessageStyle::Success);
                    let summary = format!(
                        "{} {}",
                        self.lang.text(MessageKey::GameOverAttempts),
                        attempts_text(self.lang, self.game.attempts())
                    );
                    self.add_message(&summary, MessageStyle::Success);
                } else {
                    self.add_message(&text, MessageStyle::Info);
                }
            }
            Err(err) => {
                debug!(%input, %err, "guess rejected");
                self.add_message(submit_error_message(self.lang, err), MessageStyle::Error);
            }
        }
    }

    /// Ask before throwing away a game in progress
    pub fn request_reset(&mut self) {
        if self.game.attempts() > 0 && !self.game.is_over() {
            self.input_mode = InputMode::ConfirmReset;
        } else {
            self.new_game();
        }
    }

    pub fn new_game(&mut self) {
        self.game = self.engine.reset_game();
        self.history.clear();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.stats.games_played += 1;
        self.add_message(self.lang.text(MessageKey::NewGame), MessageStyle::Info);
    }

    pub fn show_hint(&mut self) {
        let history = self.solver_history();
        match self.solver.next_guess(&history) {
            Some(guess) => {
                let text = format!(
                    "{} {guess} ({})",
                    self.lang.text(MessageKey::Hint),
                    self.solver.count_candidates(&history)
                );
                self.add_message(&text, MessageStyle::Info);
            }
            None => self.add_message(self.lang.text(MessageKey::NoHint), MessageStyle::Error),
        }
    }

    pub fn show_share(&mut self) {
        if self.game.is_over() {
            let text = share_text(self.lang, self.game.attempts());
            self.add_message(&text, MessageStyle::Success);
        }
    }

    pub fn toggle_language(&mut self) {
        self.lang = self.lang.toggled();
        debug!(lang = %self.lang, "language switched");
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.solver.count_candidates(&self.solver_history())
    }

    fn solver_history(&self) -> Vec<(Guess, Score)> {
        self.history
            .iter()
            .map(|turn| (turn.guess, turn.score))
            .collect()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
