//! Grammar model: rule storage, symbol classification, and the builder that
//! assembles a [`Grammar`] from raw meta-syntax rule tuples.

mod builder;
mod error;
mod rule;
mod symbol_table;

use lrgen_symbol::NonTerminalId;

pub use builder::GrammarBuilder;
pub use error::GrammarError;
pub use rule::{Rule, RuleId};
pub use symbol_table::SymbolTable;

/// An augmented, fully-classified context-free grammar: rule 0 is always
/// `S' -> S` where `S` is [`Grammar::start`].
#[derive(Debug, Clone)]
pub struct Grammar {
    symbols: SymbolTable,
    rules: Vec<rule::Rule>,
    start: NonTerminalId,
    augmented_start: NonTerminalId,
}

impl Grammar {
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// The user's declared start symbol (the LHS of the first input rule).
    pub fn start(&self) -> NonTerminalId {
        self.start
    }

    /// The synthesized `S'` left-hand side of rule 0.
    pub fn augmented_start(&self) -> NonTerminalId {
        self.augmented_start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lrgen_symbol::Symbol;

    fn list_grammar() -> Grammar {
        // list : item | list item ;
        // item : ID ;
        GrammarBuilder::new()
            .rule("list", vec![vec!["item".into()], vec!["list".into(), "item".into()]])
            .rule("item", vec![vec!["ID".into()]])
            .build()
            .unwrap()
    }

    #[test]
    fn start_is_lhs_of_first_rule() {
        let g = list_grammar();
        assert_eq!(g.symbols().nonterminal_name(g.start()), "list");
    }

    #[test]
    fn augmented_rule_zero_wraps_start() {
        let g = list_grammar();
        let rule0 = g.rule(RuleId(0));
        assert_eq!(rule0.lhs, g.augmented_start());
        assert_eq!(rule0.rhs, vec![Symbol::NonTerminal(g.start())]);
    }

    #[test]
    fn terminals_exclude_declared_nonterminals() {
        let g = list_grammar();
        assert!(g.symbols().terminal_id("ID").is_some());
        assert!(g.symbols().terminal_id("list").is_none());
        assert!(g.symbols().terminal_id("item").is_none());
    }

    #[test]
    fn end_of_input_is_appended_last() {
        let g = list_grammar();
        let eoi = g.symbols().end_of_input();
        assert_eq!(eoi.index(), g.symbols().num_terminals() - 1);
        assert_eq!(g.symbols().terminal_name(eoi), "$");
    }

    #[test]
    fn empty_grammar_is_rejected() {
        let err = GrammarBuilder::new().build().unwrap_err();
        assert_eq!(err, GrammarError::EmptyGrammar);
    }

    #[test]
    fn nonterminal_with_no_alternatives_is_rejected() {
        let mut b = GrammarBuilder::new();
        b.rule("empty", vec![]);
        let err = b.build().unwrap_err();
        assert_eq!(
            err,
            GrammarError::NoAlternatives {
                name: "empty".into()
            }
        );
    }

    #[test]
    fn epsilon_alternative_is_permitted() {
        // opt : a | ;  -- second alternative is an explicit empty RHS
        let g = GrammarBuilder::new()
            .rule("opt", vec![vec!["a".into()], vec![]])
            .build()
            .unwrap();
        assert_eq!(g.num_rules(), 3); // augmented + two alternatives
        let (_, empty_rule) = g
            .rules_for(g.start())
            .find(|(_, r)| r.is_empty())
            .expect("epsilon alternative present");
        assert!(empty_rule.rhs.is_empty());
    }
}
