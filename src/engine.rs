//! Quiz scoring over a set of switches.
//!
//! A [`QuizEngine`] owns one [`SwitchControl`] per row, keeps the selected
//! value of every row, and scores them against an answer key. Once every row
//! matches, the engine locks and disables all of its switches for the rest
//! of the session.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::{debug, info};
use rand::Rng;

use crate::error::ConfigError;
use crate::models::{OptionGroup, QuizConfig};
use crate::switch::SwitchControl;
use crate::tier::{ScoreTier, Theme};

/// State handed to subscribers after every re-evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSnapshot {
    pub tier: ScoreTier,
    pub locked: bool,
    /// Selected option index for each row.
    pub selected_indices: Vec<usize>,
}

/// Callback invoked with the engine state after a row change.
pub type SnapshotListener = Box<dyn FnMut(&QuizSnapshot)>;

/// `(row, value)` notifications from the switches, in the order they fired.
type RowChanges = Rc<RefCell<Vec<(usize, String)>>>;

pub struct QuizEngine {
    question: String,
    controls: Vec<SwitchControl>,
    answers: Vec<String>,
    selected_values: Vec<String>,
    tier: ScoreTier,
    locked: bool,
    subscribers: Vec<SnapshotListener>,
    changes: RowChanges,
}

impl QuizEngine {
    /// Build a quiz whose rows start on a random option drawn from `rng`.
    pub fn new<R>(
        question: impl Into<String>,
        groups: Vec<OptionGroup>,
        answers: Vec<String>,
        rng: &mut R,
    ) -> Result<Self, ConfigError>
    where
        R: Rng,
    {
        let option_count = validate(&groups, &answers)?;
        let initial_indices = groups
            .iter()
            .map(|_| rng.gen_range(0..option_count))
            .collect();

        Self::build(question.into(), groups, answers, initial_indices)
    }

    /// Build a quiz whose rows start on the given options.
    ///
    /// Indices outside a row fall back to its first option.
    pub fn with_initial_indices(
        question: impl Into<String>,
        groups: Vec<OptionGroup>,
        answers: Vec<String>,
        initial_indices: Vec<usize>,
    ) -> Result<Self, ConfigError> {
        validate(&groups, &answers)?;
        if initial_indices.len() != groups.len() {
            return Err(ConfigError::InitialIndexCount {
                rows: groups.len(),
                indices: initial_indices.len(),
            });
        }

        Self::build(question.into(), groups, answers, initial_indices)
    }

    pub fn from_config<R>(config: QuizConfig, rng: &mut R) -> Result<Self, ConfigError>
    where
        R: Rng,
    {
        Self::new(config.question, config.options, config.answers, rng)
    }

    fn build(
        question: String,
        groups: Vec<OptionGroup>,
        answers: Vec<String>,
        initial_indices: Vec<usize>,
    ) -> Result<Self, ConfigError> {
        let changes = RowChanges::default();
        let controls = groups
            .into_iter()
            .zip(initial_indices)
            .enumerate()
            .map(|(row, (group, index))| {
                let mut control = SwitchControl::new(group, index, false)?;
                let sink = Rc::clone(&changes);
                control.on_change(move |value| sink.borrow_mut().push((row, value.to_string())));
                Ok(control)
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        let selected_values = controls
            .iter()
            .map(|control| control.current_selection().value.clone())
            .collect();

        let mut engine = Self {
            question,
            controls,
            answers,
            selected_values,
            tier: ScoreTier::Baseline,
            locked: false,
            subscribers: Vec::new(),
            changes,
        };
        engine.refresh();

        debug!(
            "quiz ready: {} rows, initial tier {:?}",
            engine.row_count(),
            engine.tier
        );
        Ok(engine)
    }

    /// Register a listener for state changes.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&QuizSnapshot) + 'static,
    {
        self.subscribers.push(Box::new(listener));
    }

    /// Select option `index` on `row`.
    ///
    /// Returns true if the selection changed. Unknown rows, unknown options,
    /// the current option and a locked quiz are all no-ops.
    pub fn select(&mut self, row: usize, index: usize) -> bool {
        self.route(row, |control| control.select(index))
    }

    /// Move `row` one option to the right, wrapping around.
    pub fn select_next(&mut self, row: usize) -> bool {
        self.route(row, SwitchControl::select_next)
    }

    /// Move `row` one option to the left, wrapping around.
    pub fn select_previous(&mut self, row: usize) -> bool {
        self.route(row, SwitchControl::select_previous)
    }

    fn route<F>(&mut self, row: usize, action: F) -> bool
    where
        F: FnOnce(&mut SwitchControl) -> Option<&str>,
    {
        let Some(control) = self.controls.get_mut(row) else {
            return false;
        };
        let changed = action(control).is_some();

        let pending = self.changes.take();
        for (row, value) in pending {
            self.on_row_changed(row, value);
        }
        changed
    }

    /// Handle a switch notification: record `value` for `row`, re-score and
    /// notify subscribers.
    fn on_row_changed(&mut self, row: usize, value: String) {
        if self.locked || row >= self.selected_values.len() {
            return;
        }

        self.selected_values[row] = value;
        self.refresh();
        debug!(
            "row {} changed: {}/{} correct, tier {:?}",
            row,
            self.matches(),
            self.row_count(),
            self.tier
        );

        let snapshot = self.snapshot();
        for subscriber in &mut self.subscribers {
            subscriber(&snapshot);
        }
    }

    /// Score the current selection. Does not modify any state.
    pub fn evaluate(&self) -> ScoreTier {
        ScoreTier::from_matches(self.matches(), self.answers.len())
    }

    fn refresh(&mut self) {
        self.tier = self.evaluate();

        if self.tier == ScoreTier::AllCorrect && !self.locked {
            self.locked = true;
            for control in &mut self.controls {
                control.set_disabled(true);
            }
            info!("all {} rows correct, quiz locked", self.row_count());
        }
    }

    /// Number of rows whose selection matches the answer key.
    pub fn matches(&self) -> usize {
        self.selected_values
            .iter()
            .zip(&self.answers)
            .filter(|(selected, answer)| selected == answer)
            .count()
    }

    pub fn snapshot(&self) -> QuizSnapshot {
        QuizSnapshot {
            tier: self.tier,
            locked: self.locked,
            selected_indices: self
                .controls
                .iter()
                .map(SwitchControl::selected_index)
                .collect(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn selected_values(&self) -> &[String] {
        &self.selected_values
    }

    pub fn tier(&self) -> ScoreTier {
        self.tier
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn theme(&self) -> Theme {
        self.tier.theme()
    }

    pub fn row_count(&self) -> usize {
        self.controls.len()
    }

    /// Options per row; every row has the same amount.
    pub fn option_count(&self) -> usize {
        self.controls.first().map_or(0, SwitchControl::len)
    }

    pub fn control(&self, row: usize) -> Option<&SwitchControl> {
        self.controls.get(row)
    }

    pub fn controls(&self) -> &[SwitchControl] {
        &self.controls
    }
}

impl fmt::Debug for QuizEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizEngine")
            .field("question", &self.question)
            .field("controls", &self.controls)
            .field("answers", &self.answers)
            .field("selected_values", &self.selected_values)
            .field("tier", &self.tier)
            .field("locked", &self.locked)
            .finish()
    }
}

/// Check row and answer cardinalities. Returns the option count per row.
fn validate(groups: &[OptionGroup], answers: &[String]) -> Result<usize, ConfigError> {
    let Some(first) = groups.first() else {
        return Err(ConfigError::NoRows);
    };

    if groups.len() != answers.len() {
        return Err(ConfigError::AnswerCount {
            rows: groups.len(),
            answers: answers.len(),
        });
    }

    let expected = first.len();
    if expected == 0 {
        return Err(ConfigError::NoOptions);
    }

    if let Some((row, group)) = groups
        .iter()
        .enumerate()
        .find(|(_, group)| group.len() != expected)
    {
        return Err(ConfigError::RowLength {
            row,
            expected,
            found: group.len(),
        });
    }

    Ok(expected)
}
