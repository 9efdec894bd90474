use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetaSyntaxError {
    #[error("unexpected character '{ch}' at line {line}, column {col}")]
    UnexpectedChar { ch: char, line: usize, col: usize },

    #[error("expected {expected} at line {line}, column {col}")]
    UnexpectedToken {
        expected: &'static str,
        line: usize,
        col: usize,
    },

    #[error("rule starting at line {line}, column {col} is missing its terminating ';'")]
    UnterminatedRule { line: usize, col: usize },
}
