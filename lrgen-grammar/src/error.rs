use thiserror::Error;

/// Errors raised while assembling a [`crate::Grammar`] from raw rule input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GrammarError {
    #[error("grammar has no rules")]
    EmptyGrammar,

    #[error("non-terminal `{name}` has no alternatives")]
    NoAlternatives { name: String },
}
