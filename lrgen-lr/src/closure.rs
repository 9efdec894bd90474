use std::collections::{BTreeSet, VecDeque};

use lrgen_grammar::Grammar;
use lrgen_sets::FirstSets;
use lrgen_symbol::Symbol;

use crate::item::Lr1Item;

pub type ItemSet = BTreeSet<Lr1Item>;

/// CLOSURE(I): repeatedly adds, for every item `[A -> a . B b, l]` with `B` a
/// non-terminal, one item `[B -> . g, t]` per rule `B -> g` and per terminal
/// `t` in the canonical lookahead set `FIRST(b l)`, not a FOLLOW-based
/// approximation.
pub fn closure(seed: ItemSet, grammar: &Grammar, first: &FirstSets) -> ItemSet {
    let mut result = seed.clone();
    let mut worklist: VecDeque<Lr1Item> = seed.into_iter().collect();

    while let Some(item) = worklist.pop_front() {
        let Some(Symbol::NonTerminal(b)) = item.symbol_after_dot(grammar) else {
            continue;
        };
        let rule = grammar.rule(item.rule);
        let beta = &rule.rhs[(item.dot as usize + 1)..];
        let (mut lookaheads, beta_derives_epsilon) = first.of_sequence(beta);
        if beta_derives_epsilon {
            lookaheads.insert(item.lookahead);
        }

        for (rule_id, _) in grammar.rules_for(b) {
            for &lookahead in &lookaheads {
                let new_item = Lr1Item::start(rule_id, lookahead);
                if result.insert(new_item) {
                    worklist.push_back(new_item);
                }
            }
        }
    }

    result
}

/// GOTO(I, X): advance every item of `I` whose next symbol is `X`, then
/// close the result.
pub fn goto(items: &ItemSet, symbol: Symbol, grammar: &Grammar, first: &FirstSets) -> ItemSet {
    let advanced: ItemSet = items
        .iter()
        .filter(|item| item.symbol_after_dot(grammar) == Some(symbol))
        .map(Lr1Item::advanced)
        .collect();
    closure(advanced, grammar, first)
}
