use std::cell::{Ref, RefCell};
use std::rc::Rc;

use log::debug;
use rand::Rng;

use crate::engine::{QuizEngine, QuizSnapshot};
use crate::error::ConfigError;
use crate::models::QuizConfig;

/// Terminal-side state: the engine plus which row has keyboard focus.
///
/// The screen is drawn from the latest [`QuizSnapshot`] pushed by the engine.
pub struct App {
    engine: QuizEngine,
    snapshot: Rc<RefCell<QuizSnapshot>>,
    focused_row: usize,
}

impl App {
    pub fn new(mut engine: QuizEngine) -> Self {
        let snapshot = Rc::new(RefCell::new(engine.snapshot()));
        let sink = Rc::clone(&snapshot);
        engine.subscribe(move |latest| *sink.borrow_mut() = latest.clone());

        Self {
            engine,
            snapshot,
            focused_row: 0,
        }
    }

    pub fn from_config<R: Rng>(config: QuizConfig, rng: &mut R) -> Result<Self, ConfigError> {
        QuizEngine::from_config(config, rng).map(Self::new)
    }

    pub fn engine(&self) -> &QuizEngine {
        &self.engine
    }

    pub fn snapshot(&self) -> Ref<'_, QuizSnapshot> {
        self.snapshot.borrow()
    }

    pub fn focused_row(&self) -> usize {
        self.focused_row
    }

    pub fn focus_next_row(&mut self) {
        if self.focused_row + 1 < self.engine.row_count() {
            self.focused_row += 1;
        }
    }

    pub fn focus_previous_row(&mut self) {
        self.focused_row = self.focused_row.saturating_sub(1);
    }

    pub fn select_next_option(&mut self) {
        if !self.accepts_input() {
            return;
        }
        let row = self.focused_row;
        if self.engine.select_next(row) {
            self.log_change();
        }
    }

    pub fn select_previous_option(&mut self) {
        if !self.accepts_input() {
            return;
        }
        let row = self.focused_row;
        if self.engine.select_previous(row) {
            self.log_change();
        }
    }

    pub fn select_option(&mut self, index: usize) {
        if !self.accepts_input() {
            return;
        }
        let row = self.focused_row;
        if self.engine.select(row, index) {
            self.log_change();
        }
    }

    /// Option keys are ignored once the quiz is locked.
    fn accepts_input(&self) -> bool {
        !self.snapshot.borrow().locked
    }

    fn log_change(&self) {
        let snapshot = self.snapshot.borrow();
        debug!(
            "row {} now on option {}, tier {:?}",
            self.focused_row, snapshot.selected_indices[self.focused_row], snapshot.tier
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tier::ScoreTier;

    fn app(indices: [usize; 4]) -> App {
        let config = QuizConfig::animal_cell();
        let engine = QuizEngine::with_initial_indices(
            config.question,
            config.options,
            config.answers,
            indices.to_vec(),
        )
        .unwrap();
        App::new(engine)
    }

    #[test]
    fn test_focus_stays_in_bounds() {
        let mut app = app([0, 0, 0, 0]);
        app.focus_previous_row();
        assert_eq!(app.focused_row(), 0);

        for _ in 0..10 {
            app.focus_next_row();
        }
        assert_eq!(app.focused_row(), 3);
    }

    #[test]
    fn test_snapshot_follows_engine() {
        let mut app = app([0, 1, 1, 0]);
        assert_eq!(app.snapshot().tier, ScoreTier::Baseline);

        app.select_next_option();
        app.focus_next_row();
        app.select_previous_option();

        let snapshot = app.snapshot();
        assert_eq!(snapshot.selected_indices, vec![1, 0, 1, 0]);
        assert_eq!(snapshot.tier, ScoreTier::Majority);
        assert_eq!(*snapshot, app.engine().snapshot());
    }

    #[test]
    fn test_input_ignored_once_locked() {
        let mut app = app([1, 0, 0, 0]);
        for _ in 0..3 {
            app.focus_next_row();
        }
        app.select_option(1);
        assert!(app.snapshot().locked);

        app.select_option(2);
        app.select_next_option();
        assert_eq!(app.snapshot().selected_indices, vec![1, 0, 0, 1]);
        assert_eq!(app.engine().tier(), ScoreTier::AllCorrect);
    }
}
