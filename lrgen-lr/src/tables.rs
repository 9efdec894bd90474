use thiserror::Error;

use lrgen_grammar::{Grammar, RuleId};
use lrgen_symbol::TerminalId;

use crate::collection::{CanonicalCollection, StateId};

/// One ACTION table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Shift(StateId),
    Reduce(RuleId),
    Accept,
}

/// Two actions assigned to the same (state, terminal) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conflict {
    pub state: StateId,
    pub terminal: TerminalId,
    pub first: Action,
    pub second: Action,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    #[error(
        "conflict in state {} on terminal {}: {:?} vs {:?}",
        .0.state, .0.terminal.0, .0.first, .0.second
    )]
    Conflict(Conflict),
}

/// Dense ACTION table: `action[state][terminal]`.
#[derive(Debug, Clone)]
pub struct ActionTable {
    rows: Vec<Vec<Option<Action>>>,
}

impl ActionTable {
    pub fn get(&self, state: StateId, terminal: TerminalId) -> Option<Action> {
        self.rows[state.index()][terminal.index()]
    }

    pub fn num_states(&self) -> usize {
        self.rows.len()
    }
}

/// Dense GOTO table: `goto[state][nonterminal]`.
#[derive(Debug, Clone)]
pub struct GotoTable {
    rows: Vec<Vec<Option<StateId>>>,
}

impl GotoTable {
    pub fn get(&self, state: StateId, nonterminal: lrgen_symbol::NonTerminalId) -> Option<StateId> {
        self.rows[state.index()][nonterminal.index()]
    }

    pub fn num_states(&self) -> usize {
        self.rows.len()
    }
}

/// The finished driver tables for one grammar.
#[derive(Debug, Clone)]
pub struct ParseTables {
    pub action: ActionTable,
    pub goto: GotoTable,
}

/// Builds [`ParseTables`] from a grammar's canonical collection, detecting
/// and reporting shift/reduce and reduce/reduce conflicts.
pub struct TableBuilder;

impl TableBuilder {
    /// Fails on the first conflict encountered.
    pub fn build(
        grammar: &Grammar,
        collection: &CanonicalCollection,
    ) -> Result<ParseTables, TableError> {
        let (tables, conflicts) = populate(grammar, collection, false);
        match conflicts.into_iter().next() {
            Some(c) => Err(TableError::Conflict(c)),
            None => Ok(tables),
        }
    }

    /// Resolves every conflict deterministically (shift over reduce, earlier
    /// rule over later on reduce/reduce) and returns the tables alongside
    /// every conflict it resolved, never silently.
    pub fn build_with_fallback(
        grammar: &Grammar,
        collection: &CanonicalCollection,
    ) -> (ParseTables, Vec<Conflict>) {
        populate(grammar, collection, true)
    }
}

fn populate(
    grammar: &Grammar,
    collection: &CanonicalCollection,
    fallback: bool,
) -> (ParseTables, Vec<Conflict>) {
    let num_terminals = grammar.symbols().num_terminals();
    let num_nonterminals = grammar.symbols().num_nonterminals();
    let num_states = collection.states.len();

    let mut action_rows: Vec<Vec<Option<Action>>> =
        vec![vec![None; num_terminals]; num_states];
    let mut goto_rows: Vec<Vec<Option<StateId>>> = vec![vec![None; num_nonterminals]; num_states];
    let mut conflicts = Vec::new();

    'states: for (state_index, state) in collection.states.iter().enumerate() {
        let state_id = StateId(state_index as u32);

        for (&symbol, &target) in &state.transitions {
            match symbol {
                lrgen_symbol::Symbol::Terminal(t) => {
                    if !set_action(
                        &mut action_rows[state_index],
                        state_id,
                        t,
                        Action::Shift(target),
                        fallback,
                        &mut conflicts,
                    ) {
                        break 'states;
                    }
                }
                lrgen_symbol::Symbol::NonTerminal(n) => {
                    goto_rows[state_index][n.index()] = Some(target);
                }
            }
        }

        for item in &state.items {
            if !item.is_complete(grammar) {
                continue;
            }
            let rule = grammar.rule(item.rule);
            let action = if rule.lhs == grammar.augmented_start()
                && item.lookahead == grammar.symbols().end_of_input()
            {
                Action::Accept
            } else {
                Action::Reduce(item.rule)
            };
            if !set_action(
                &mut action_rows[state_index],
                state_id,
                item.lookahead,
                action,
                fallback,
                &mut conflicts,
            ) {
                break 'states;
            }
        }
    }

    (
        ParseTables {
            action: ActionTable { rows: action_rows },
            goto: GotoTable { rows: goto_rows },
        },
        conflicts,
    )
}

/// Writes `action` into `row[terminal]`, resolving or recording a conflict.
/// Returns `false` when the caller (non-fallback mode) should abort
/// construction immediately.
fn set_action(
    row: &mut [Option<Action>],
    state: StateId,
    terminal: TerminalId,
    action: Action,
    fallback: bool,
    conflicts: &mut Vec<Conflict>,
) -> bool {
    match row[terminal.index()] {
        None => {
            row[terminal.index()] = Some(action);
            true
        }
        Some(existing) if existing == action => true,
        Some(existing) => {
            let conflict = Conflict {
                state,
                terminal,
                first: existing,
                second: action,
            };
            log::warn!(
                "LR(1) conflict in state {state} on terminal {}: {existing:?} vs {action:?}",
                terminal.0
            );
            conflicts.push(conflict);
            if !fallback {
                return false;
            }
            row[terminal.index()] = Some(resolve(existing, action));
            true
        }
    }
}

fn resolve(existing: Action, new: Action) -> Action {
    match (existing, new) {
        (Action::Accept, _) | (_, Action::Accept) => Action::Accept,
        (Action::Shift(_), Action::Reduce(_)) => existing,
        (Action::Reduce(_), Action::Shift(_)) => new,
        (Action::Reduce(r1), Action::Reduce(r2)) => {
            if r1.index() <= r2.index() {
                existing
            } else {
                new
            }
        }
        (Action::Shift(_), Action::Shift(_)) => existing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lrgen_grammar::GrammarBuilder;
    use lrgen_sets::FirstSets;

    #[test]
    fn unambiguous_list_grammar_builds_without_conflict() {
        let g = GrammarBuilder::new()
            .rule(
                "list",
                vec![vec!["item".into()], vec!["list".into(), "item".into()]],
            )
            .rule("item", vec![vec!["ID".into()]])
            .build()
            .unwrap();
        let first = FirstSets::compute(&g);
        let collection = crate::CanonicalCollection::build(&g, &first);
        let tables = TableBuilder::build(&g, &collection).unwrap();
        assert!(tables.action.num_states() > 0);
    }

    #[test]
    fn ambiguous_expression_grammar_reports_conflict() {
        // e : e PLUS e | ID ;
        let g = GrammarBuilder::new()
            .rule(
                "e",
                vec![
                    vec!["e".into(), "PLUS".into(), "e".into()],
                    vec!["ID".into()],
                ],
            )
            .build()
            .unwrap();
        let first = FirstSets::compute(&g);
        let collection = crate::CanonicalCollection::build(&g, &first);
        let err = TableBuilder::build(&g, &collection).unwrap_err();
        assert!(matches!(err, TableError::Conflict(_)));
    }

    #[test]
    fn fallback_resolves_shift_over_reduce() {
        let g = GrammarBuilder::new()
            .rule(
                "e",
                vec![
                    vec!["e".into(), "PLUS".into(), "e".into()],
                    vec!["ID".into()],
                ],
            )
            .build()
            .unwrap();
        let first = FirstSets::compute(&g);
        let collection = crate::CanonicalCollection::build(&g, &first);
        let (_tables, conflicts) = TableBuilder::build_with_fallback(&g, &collection);
        assert!(!conflicts.is_empty());
    }
}
