//! Facade crate wiring the grammar model, FIRST/FOLLOW engine, canonical
//! LR(1) construction, table builder, and shift-reduce driver into a single
//! pipeline, plus emission of the finished tables as a structured artifact.

mod error;
mod emit;

pub use error::GeneratorError;
pub use emit::{EmittedAction, EmittedArtifact, EmittedRule};

pub use lrgen_driver::{CstNode, DriverError, Token};
pub use lrgen_grammar::{Grammar, GrammarBuilder, GrammarError, Rule, RuleId};
pub use lrgen_lr::{Action, Conflict, ParseTables, StateId, TableError};
pub use lrgen_sets::{FirstSets, FollowSets};

/// A completed generator run: the grammar, its predict sets, the canonical
/// collection, and the finished driver tables.
pub struct GeneratedParser {
    pub grammar: Grammar,
    pub first: FirstSets,
    pub follow: FollowSets,
    pub collection: lrgen_lr::CanonicalCollection,
    pub tables: ParseTables,
}

impl GeneratedParser {
    /// Runs the shift-reduce driver over `tokens` using this run's tables.
    pub fn parse(
        &self,
        tokens: impl IntoIterator<Item = Token>,
    ) -> Result<CstNode, DriverError> {
        lrgen_driver::parse(&self.grammar, &self.tables, tokens)
    }

    pub fn emit(&self) -> EmittedArtifact {
        EmittedArtifact::build(&self.grammar, &self.tables)
    }
}

/// Builds a grammar from raw `(lhs, alternatives)` rule tuples and runs the
/// full construction pipeline, failing fast on the first LR(1) conflict.
pub fn generate(
    raw_rules: Vec<(String, Vec<Vec<String>>)>,
) -> Result<GeneratedParser, GeneratorError> {
    let grammar = build_grammar(raw_rules)?;
    let (first, follow, collection) = build_sets_and_collection(&grammar);
    let tables = lrgen_lr::TableBuilder::build(&grammar, &collection)?;
    Ok(GeneratedParser {
        grammar,
        first,
        follow,
        collection,
        tables,
    })
}

/// As [`generate`], but resolves every conflict deterministically instead of
/// failing, returning the full list of conflicts encountered alongside the
/// tables.
pub fn generate_with_fallback(
    raw_rules: Vec<(String, Vec<Vec<String>>)>,
) -> Result<(GeneratedParser, Vec<Conflict>), GrammarError> {
    let grammar = build_grammar(raw_rules)?;
    let (first, follow, collection) = build_sets_and_collection(&grammar);
    let (tables, conflicts) = lrgen_lr::TableBuilder::build_with_fallback(&grammar, &collection);
    Ok((
        GeneratedParser {
            grammar,
            first,
            follow,
            collection,
            tables,
        },
        conflicts,
    ))
}

fn build_grammar(raw_rules: Vec<(String, Vec<Vec<String>>)>) -> Result<Grammar, GrammarError> {
    let mut builder = GrammarBuilder::new();
    for (lhs, alternatives) in raw_rules {
        builder.rule(lhs, alternatives);
    }
    builder.build()
}

fn build_sets_and_collection(
    grammar: &Grammar,
) -> (FirstSets, FollowSets, lrgen_lr::CanonicalCollection) {
    let first = FirstSets::compute(grammar);
    let follow = FollowSets::compute(grammar, &first);
    let collection = lrgen_lr::CanonicalCollection::build(grammar, &first);
    (first, follow, collection)
}
