use std::collections::BTreeSet;

use lrgen_grammar::Grammar;
use lrgen_symbol::{NonTerminalId, Symbol, TerminalId};

/// FIRST(X) for a single non-terminal: the terminals that can begin some
/// string derivable from X, plus whether X can derive the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FirstSet {
    terminals: BTreeSet<TerminalId>,
    has_epsilon: bool,
}

/// FIRST sets for every non-terminal in a grammar, computed by fixed point.
#[derive(Debug, Clone)]
pub struct FirstSets {
    per_nonterminal: Vec<FirstSet>,
}

impl FirstSets {
    /// Computes FIRST(X) for every non-terminal X in `grammar`.
    pub fn compute(grammar: &Grammar) -> FirstSets {
        let mut per_nonterminal =
            vec![FirstSet::default(); grammar.symbols().num_nonterminals()];

        let mut changed = true;
        let mut rounds = 0;
        while changed {
            changed = false;
            rounds += 1;
            for (_, rule) in grammar.rules() {
                let (terminals, has_epsilon) = first_of_seq(&per_nonterminal, &rule.rhs);
                let entry = &mut per_nonterminal[rule.lhs.index()];
                for t in terminals {
                    changed |= entry.terminals.insert(t);
                }
                if has_epsilon && !entry.has_epsilon {
                    entry.has_epsilon = true;
                    changed = true;
                }
            }
        }
        log::debug!("FIRST sets converged after {rounds} round(s)");

        FirstSets { per_nonterminal }
    }

    /// FIRST(X) as a set of terminals, for any symbol X (terminal or
    /// non-terminal). Never includes the ε marker; use
    /// [`FirstSets::derives_epsilon`] for that.
    pub fn of_symbol(&self, symbol: Symbol) -> BTreeSet<TerminalId> {
        match symbol {
            Symbol::Terminal(t) => {
                let mut set = BTreeSet::new();
                set.insert(t);
                set
            }
            Symbol::NonTerminal(n) => self.per_nonterminal[n.index()].terminals.clone(),
        }
    }

    pub fn derives_epsilon(&self, nonterminal: NonTerminalId) -> bool {
        self.per_nonterminal[nonterminal.index()].has_epsilon
    }

    /// FIRST(β) for a symbol sequence β: the canonical left-to-right union
    /// used both to seed FOLLOW and to seed CLOSURE lookaheads.
    pub fn of_sequence(&self, seq: &[Symbol]) -> (BTreeSet<TerminalId>, bool) {
        first_of_seq(&self.per_nonterminal, seq)
    }
}

fn first_of_seq(per_nonterminal: &[FirstSet], seq: &[Symbol]) -> (BTreeSet<TerminalId>, bool) {
    let mut result = BTreeSet::new();
    for &symbol in seq {
        match symbol {
            Symbol::Terminal(t) => {
                result.insert(t);
                return (result, false);
            }
            Symbol::NonTerminal(n) => {
                let set = &per_nonterminal[n.index()];
                result.extend(set.terminals.iter().copied());
                if !set.has_epsilon {
                    return (result, false);
                }
            }
        }
    }
    (result, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lrgen_grammar::GrammarBuilder;

    #[test]
    fn terminal_first_is_itself() {
        let g = GrammarBuilder::new()
            .rule("s", vec![vec!["a".into()]])
            .build()
            .unwrap();
        let first = FirstSets::compute(&g);
        let a = g.symbols().terminal_id("a").unwrap();
        assert_eq!(first.of_symbol(Symbol::Terminal(a)), BTreeSet::from([a]));
    }

    #[test]
    fn epsilon_propagates_through_a_chain() {
        // s : a b ;
        // a : ;
        // b : x ;
        let g = GrammarBuilder::new()
            .rule("s", vec![vec!["a".into(), "b".into()]])
            .rule("a", vec![vec![]])
            .rule("b", vec![vec!["x".into()]])
            .build()
            .unwrap();
        let first = FirstSets::compute(&g);
        let x = g.symbols().terminal_id("x").unwrap();
        assert_eq!(first.of_symbol(Symbol::NonTerminal(g.start())), BTreeSet::from([x]));
        assert!(!first.derives_epsilon(g.start()));
    }

    #[test]
    fn nullable_start_reports_epsilon() {
        let g = GrammarBuilder::new()
            .rule("s", vec![vec!["a".into()], vec![]])
            .rule("a", vec![vec!["x".into()]])
            .build()
            .unwrap();
        let first = FirstSets::compute(&g);
        assert!(first.derives_epsilon(g.start()));
    }
}
