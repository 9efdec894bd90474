use thiserror::Error;

use lrgen_grammar::GrammarError;
use lrgen_lr::TableError;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error(transparent)]
    Grammar(#[from] GrammarError),
    #[error(transparent)]
    Table(#[from] TableError),
}
