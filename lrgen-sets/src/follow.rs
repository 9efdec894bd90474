use std::collections::BTreeSet;

use lrgen_grammar::Grammar;
use lrgen_symbol::{NonTerminalId, Symbol, TerminalId};

use crate::FirstSets;

/// FOLLOW sets for every non-terminal, computed by fixed point from a
/// grammar's rules and its [`FirstSets`].
///
/// These are not used to seed canonical LR(1) lookaheads (CLOSURE uses
/// `FIRST(beta a)` directly); they exist for diagnostics and for the
/// emitted artifact's verbose rendering.
#[derive(Debug, Clone)]
pub struct FollowSets {
    per_nonterminal: Vec<BTreeSet<TerminalId>>,
}

impl FollowSets {
    pub fn compute(grammar: &Grammar, first: &FirstSets) -> FollowSets {
        let mut per_nonterminal = vec![BTreeSet::new(); grammar.symbols().num_nonterminals()];
        per_nonterminal[grammar.start().index()].insert(grammar.symbols().end_of_input());

        let mut changed = true;
        let mut rounds = 0;
        while changed {
            changed = false;
            rounds += 1;
            for (_, rule) in grammar.rules() {
                for (i, &symbol) in rule.rhs.iter().enumerate() {
                    let Symbol::NonTerminal(b) = symbol else {
                        continue;
                    };
                    let beta = &rule.rhs[i + 1..];
                    let (first_beta, beta_derives_epsilon) = first.of_sequence(beta);
                    for t in first_beta {
                        changed |= per_nonterminal[b.index()].insert(t);
                    }
                    if beta_derives_epsilon {
                        let follow_lhs = per_nonterminal[rule.lhs.index()].clone();
                        for t in follow_lhs {
                            changed |= per_nonterminal[b.index()].insert(t);
                        }
                    }
                }
            }
        }
        log::debug!("FOLLOW sets converged after {rounds} round(s)");

        FollowSets { per_nonterminal }
    }

    pub fn of(&self, nonterminal: NonTerminalId) -> &BTreeSet<TerminalId> {
        &self.per_nonterminal[nonterminal.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lrgen_grammar::GrammarBuilder;

    #[test]
    fn start_follow_contains_end_of_input() {
        let g = GrammarBuilder::new()
            .rule("s", vec![vec!["a".into()]])
            .build()
            .unwrap();
        let first = FirstSets::compute(&g);
        let follow = FollowSets::compute(&g, &first);
        assert!(follow.of(g.start()).contains(&g.symbols().end_of_input()));
    }

    #[test]
    fn follow_propagates_across_nullable_tail() {
        // s : a b ;
        // b : ;
        // a : x ;
        let g = GrammarBuilder::new()
            .rule("s", vec![vec!["a".into(), "b".into()]])
            .rule("b", vec![vec![]])
            .rule("a", vec![vec!["x".into()]])
            .build()
            .unwrap();
        let first = FirstSets::compute(&g);
        let follow = FollowSets::compute(&g, &first);
        let a = g.symbols().nonterminal_id("a").unwrap();
        // FOLLOW(a) must include FOLLOW(s) == {$} because b is nullable.
        assert!(follow.of(a).contains(&g.symbols().end_of_input()));
    }
}
