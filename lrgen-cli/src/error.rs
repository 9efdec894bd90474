use thiserror::Error;

use crate::meta::MetaSyntaxError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("malformed grammar: {0}")]
    MetaSyntax(#[from] MetaSyntaxError),

    #[error(transparent)]
    Generator(#[from] lrgen::GeneratorError),

    #[error(transparent)]
    Grammar(#[from] lrgen::GrammarError),

    #[error("parse error: {0}")]
    Driver(#[from] lrgen::DriverError),

    #[error("failed to serialize emitted artifact: {0}")]
    Emit(#[from] serde_json::Error),

    #[error("unrecognized terminal `{0}` in --input stream")]
    UnknownTerminal(String),
}
