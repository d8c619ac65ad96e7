use thiserror::Error;

/// A quiz definition that cannot be displayed.
///
/// Only raised while constructing a [`SwitchControl`](crate::SwitchControl)
/// or [`QuizEngine`](crate::QuizEngine); the interactive path never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("A quiz needs at least one row of options")]
    NoRows,

    #[error("A switch needs at least one option")]
    NoOptions,

    #[error("Every row needs to have a correct answer: {rows} rows, {answers} answers")]
    AnswerCount { rows: usize, answers: usize },

    #[error("Every row must have the same amount of options: row {row} has {found}, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Expected one initial index per row: {rows} rows, {indices} indices")]
    InitialIndexCount { rows: usize, indices: usize },
}
