use serde::Serialize;

use lrgen_grammar::Grammar;
use lrgen_lr::{Action, ParseTables, StateId};
use lrgen_symbol::{NonTerminalId, TerminalId};

#[derive(Debug, Clone, Serialize)]
pub struct EmittedRule {
    pub lhs: String,
    pub rhs: Vec<String>,
    pub len: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EmittedAction {
    Shift { state: u32 },
    Reduce { rule: u32 },
    Accept,
    None,
}

/// A structured dump of a finished generator run: the rule list, the
/// terminal/non-terminal name tables, and the dense ACTION/GOTO tables.
/// Stable across repeated runs over the same grammar.
#[derive(Debug, Clone, Serialize)]
pub struct EmittedArtifact {
    pub rules: Vec<EmittedRule>,
    pub terminals: Vec<String>,
    pub nonterminals: Vec<String>,
    pub action: Vec<Vec<EmittedAction>>,
    pub goto: Vec<Vec<i64>>,
}

impl EmittedArtifact {
    pub fn build(grammar: &Grammar, tables: &ParseTables) -> EmittedArtifact {
        let rules = grammar
            .rules()
            .map(|(_, rule)| EmittedRule {
                lhs: grammar.symbols().nonterminal_name(rule.lhs).to_string(),
                rhs: rule
                    .rhs
                    .iter()
                    .map(|sym| symbol_name(grammar, *sym))
                    .collect(),
                len: rule.len(),
            })
            .collect();

        let terminals = grammar
            .symbols()
            .terminals()
            .map(|(_, name)| name.to_string())
            .collect();
        let nonterminals = grammar
            .symbols()
            .nonterminals()
            .map(|(_, name)| name.to_string())
            .collect();

        let num_states = tables.action.num_states();
        let num_terminals = grammar.symbols().num_terminals();
        let num_nonterminals = grammar.symbols().num_nonterminals();

        let action = (0..num_states)
            .map(|s| {
                (0..num_terminals)
                    .map(|t| {
                        match tables
                            .action
                            .get(StateId(s as u32), TerminalId(t as u32))
                        {
                            Some(Action::Shift(target)) => EmittedAction::Shift { state: target.0 },
                            Some(Action::Reduce(rule)) => EmittedAction::Reduce { rule: rule.0 },
                            Some(Action::Accept) => EmittedAction::Accept,
                            None => EmittedAction::None,
                        }
                    })
                    .collect()
            })
            .collect();

        let goto = (0..num_states)
            .map(|s| {
                (0..num_nonterminals)
                    .map(|n| {
                        tables
                            .goto
                            .get(StateId(s as u32), NonTerminalId(n as u32))
                            .map(|sid| sid.0 as i64)
                            .unwrap_or(-1)
                    })
                    .collect()
            })
            .collect();

        EmittedArtifact {
            rules,
            terminals,
            nonterminals,
            action,
            goto,
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// A deterministic, human-readable rendering: one line per rule, then
    /// one line per non-`none` ACTION/GOTO cell. Stable for a given grammar.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (i, rule) in self.rules.iter().enumerate() {
            out.push_str(&format!("{i}: {} -> {}\n", rule.lhs, rule.rhs.join(" ")));
        }
        for (state, row) in self.action.iter().enumerate() {
            for (t, cell) in row.iter().enumerate() {
                let rendered = match cell {
                    EmittedAction::Shift { state: target } => format!("shift {target}"),
                    EmittedAction::Reduce { rule } => format!("reduce {rule}"),
                    EmittedAction::Accept => "accept".to_string(),
                    EmittedAction::None => continue,
                };
                out.push_str(&format!(
                    "state {state}, {}: {rendered}\n",
                    self.terminals[t]
                ));
            }
        }
        for (state, row) in self.goto.iter().enumerate() {
            for (n, target) in row.iter().enumerate() {
                if *target < 0 {
                    continue;
                }
                out.push_str(&format!(
                    "state {state}, {}: goto {target}\n",
                    self.nonterminals[n]
                ));
            }
        }
        out
    }
}

fn symbol_name(grammar: &Grammar, symbol: lrgen_symbol::Symbol) -> String {
    match symbol {
        lrgen_symbol::Symbol::Terminal(t) => grammar.symbols().terminal_name(t).to_string(),
        lrgen_symbol::Symbol::NonTerminal(n) => grammar.symbols().nonterminal_name(n).to_string(),
    }
}
