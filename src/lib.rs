//! # switch-quiz
//!
//! A multi-option toggle switch and a terminal quiz screen built on top of it.
//!
//! Each row of the quiz is a [`SwitchControl`]: a fixed, ordered set of
//! mutually exclusive options with exactly one selected. A [`QuizEngine`]
//! scores the selected values against an answer key and derives a
//! [`ScoreTier`]. Once every row is correct the quiz locks.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use switch_quiz::{Quiz, QuizConfig, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     let mut rng = rand::thread_rng();
//!     let quiz = Quiz::from_config(QuizConfig::animal_cell(), &mut rng)?;
//!
//!     // Take over the terminal until the user quits
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! The engine can also be driven without a terminal:
//!
//! ```rust
//! use switch_quiz::{QuizConfig, QuizEngine, ScoreTier};
//!
//! let config = QuizConfig::animal_cell();
//! let mut engine = QuizEngine::with_initial_indices(
//!     config.question,
//!     config.options,
//!     config.answers,
//!     vec![1, 0, 0, 0],
//! )
//! .unwrap();
//!
//! assert_eq!(engine.tier(), ScoreTier::Majority);
//! engine.select(3, 1);
//! assert!(engine.is_locked());
//! ```

mod app;
mod data;
mod engine;
mod error;
mod models;
mod switch;
pub mod terminal;
mod tier;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::info;
use rand::Rng;
use thiserror::Error;

pub use app::App;
pub use data::{LoadError, load_quiz_config, parse_quiz_config};
pub use engine::{QuizEngine, QuizSnapshot, SnapshotListener};
pub use error::ConfigError;
pub use models::{OptionGroup, QuizConfig, SwitchOption};
pub use switch::{ChangeListener, SwitchControl};
pub use tier::{ScoreTier, Theme};
pub use ui::{SWITCH_HEIGHT, SwitchWidget};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Failed to load quiz: {0}")]
    Load(#[from] LoadError),

    #[error("Invalid quiz: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz screen that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    pub fn new(engine: QuizEngine) -> Self {
        Self {
            app: App::new(engine),
        }
    }

    /// Build a quiz whose rows start on options drawn from `rng`.
    pub fn from_config<R: Rng>(config: QuizConfig, rng: &mut R) -> Result<Self, QuizError> {
        Ok(Self {
            app: App::from_config(config, rng)?,
        })
    }

    /// Load a quiz definition from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use switch_quiz::Quiz;
    ///
    /// let quiz = Quiz::from_json("quiz.json", &mut rand::thread_rng()).expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>, R: Rng>(path: P, rng: &mut R) -> Result<Self, QuizError> {
        let config = load_quiz_config(path)?;
        Self::from_config(config, rng)
    }

    /// Run the quiz in the terminal.
    ///
    /// Takes over the terminal, draws the quiz and returns when the user
    /// quits. The terminal is restored on return and on panic.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut session = terminal::TerminalSession::enter()?;
        info!("quiz started: {}", self.app.engine().question());
        run_event_loop(session.terminal_mut(), &mut self.app)
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::QuizTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.focus_previous_row(),
        KeyCode::Down | KeyCode::Char('j') => app.focus_next_row(),
        KeyCode::Left | KeyCode::Char('h') => app.select_previous_option(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.select_next_option(),
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(digit) = c.to_digit(10) {
                app.select_option(digit as usize - 1);
            }
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
        _ => {}
    }

    false
}
