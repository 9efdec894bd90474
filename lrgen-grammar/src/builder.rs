use std::collections::HashSet;

use lrgen_symbol::{NonTerminalId, Symbol};

use crate::error::GrammarError;
use crate::rule::{Rule, RuleId};
use crate::symbol_table::{SymbolTable, END_OF_INPUT_NAME};
use crate::Grammar;

/// Name of the synthesized augmented-start non-terminal. The trailing quote
/// is illegal in the meta-syntax's identifier class, so it can never collide
/// with a user-declared symbol.
const AUGMENTED_SUFFIX: &str = "'";

/// Assembles a [`Grammar`] from raw `(lhs, alternatives)` pairs, classifying
/// every right-hand-side symbol as terminal or non-terminal in two passes,
/// the way `cfg-grammar`'s rule builder and `cfg-parser`'s `Grammar::parse`
/// both do: first collect every declared left-hand side, then classify.
pub struct GrammarBuilder {
    raw_rules: Vec<(String, Vec<Vec<String>>)>,
}

impl GrammarBuilder {
    pub fn new() -> GrammarBuilder {
        GrammarBuilder {
            raw_rules: Vec::new(),
        }
    }

    /// Registers one meta-syntax rule: `lhs : alt_1 | alt_2 | ... ;`. Each
    /// alternative is a sequence of symbol names; an empty `Vec` is a valid
    /// ε-alternative.
    pub fn rule(&mut self, lhs: impl Into<String>, alternatives: Vec<Vec<String>>) -> &mut Self {
        self.raw_rules.push((lhs.into(), alternatives));
        self
    }

    pub fn build(self) -> Result<Grammar, GrammarError> {
        build_grammar(self.raw_rules)
    }
}

impl Default for GrammarBuilder {
    fn default() -> Self {
        GrammarBuilder::new()
    }
}

fn build_grammar(raw_rules: Vec<(String, Vec<Vec<String>>)>) -> Result<Grammar, GrammarError> {
    if raw_rules.is_empty() {
        return Err(GrammarError::EmptyGrammar);
    }

    // Pass 1: every declared LHS is a non-terminal, in first-seen order. The
    // first LHS encountered is the grammar's start symbol.
    let mut nonterminal_names: Vec<String> = Vec::new();
    let mut nonterminal_set: HashSet<&str> = HashSet::new();
    for (lhs, alternatives) in &raw_rules {
        if alternatives.is_empty() {
            return Err(GrammarError::NoAlternatives { name: lhs.clone() });
        }
        if nonterminal_set.insert(lhs.as_str()) {
            nonterminal_names.push(lhs.clone());
        }
    }
    let nonterminal_set: HashSet<&str> = nonterminal_names.iter().map(String::as_str).collect();

    // Pass 2: classify every RHS symbol against the non-terminal set,
    // assigning terminal ids in first-seen order; `$` is appended last.
    let mut terminal_names: Vec<String> = Vec::new();
    let mut terminal_set: HashSet<&str> = HashSet::new();
    for (_, alternatives) in &raw_rules {
        for alt in alternatives {
            for sym in alt {
                if !nonterminal_set.contains(sym.as_str()) && terminal_set.insert(sym.as_str()) {
                    terminal_names.push(sym.clone());
                }
            }
        }
    }
    terminal_names.push(END_OF_INPUT_NAME.to_string());

    let start_name = raw_rules[0].0.clone();
    let augmented_start_name = format!("{start_name}{AUGMENTED_SUFFIX}");
    let mut nonterminal_names_with_augmented = nonterminal_names.clone();
    nonterminal_names_with_augmented.push(augmented_start_name);

    let symbols = SymbolTable::new(terminal_names, nonterminal_names_with_augmented);
    let start = symbols
        .nonterminal_id(&start_name)
        .expect("start symbol registered in pass 1");
    let augmented_start = NonTerminalId((symbols.num_nonterminals() - 1) as u32);

    let mut rules = vec![Rule {
        lhs: augmented_start,
        rhs: vec![Symbol::NonTerminal(start)],
    }];

    for (lhs, alternatives) in &raw_rules {
        let lhs_id = symbols
            .nonterminal_id(lhs)
            .expect("every lhs was registered in pass 1");
        for alt in alternatives {
            let rhs = alt
                .iter()
                .map(|name| classify(&symbols, name))
                .collect::<Vec<_>>();
            rules.push(Rule { lhs: lhs_id, rhs });
        }
    }

    log::debug!(
        "grammar built: {} rules, {} terminals, {} non-terminals",
        rules.len(),
        symbols.num_terminals(),
        symbols.num_nonterminals(),
    );

    Ok(Grammar {
        symbols,
        rules,
        start,
        augmented_start,
    })
}

fn classify(symbols: &SymbolTable, name: &str) -> Symbol {
    if let Some(id) = symbols.nonterminal_id(name) {
        Symbol::NonTerminal(id)
    } else {
        Symbol::Terminal(
            symbols
                .terminal_id(name)
                .expect("every rhs symbol was classified in pass 2"),
        )
    }
}

impl Grammar {
    pub fn rule(&self, id: RuleId) -> &Rule {
        &self.rules[id.index()]
    }

    pub fn rules(&self) -> impl Iterator<Item = (RuleId, &Rule)> {
        self.rules
            .iter()
            .enumerate()
            .map(|(i, r)| (RuleId(i as u32), r))
    }

    pub fn num_rules(&self) -> usize {
        self.rules.len()
    }

    /// Every rule whose left-hand side is `lhs`, in declaration order.
    pub fn rules_for(&self, lhs: NonTerminalId) -> impl Iterator<Item = (RuleId, &Rule)> {
        self.rules().filter(move |(_, r)| r.lhs == lhs)
    }
}
