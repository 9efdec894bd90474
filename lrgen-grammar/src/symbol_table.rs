use std::collections::HashMap;

use lrgen_symbol::{NonTerminalId, TerminalId};

/// Bidirectional name/id maps for terminals and non-terminals.
///
/// Ids are assigned in first-seen order; the end-of-input terminal is always
/// appended last among terminals, as required by the table layout.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    terminal_names: Vec<String>,
    terminal_ids: HashMap<String, TerminalId>,
    nonterminal_names: Vec<String>,
    nonterminal_ids: HashMap<String, NonTerminalId>,
    end_of_input: TerminalId,
}

/// Name reserved for the end-of-input terminal; cannot collide with a user
/// identifier because the meta-syntax's identifier class excludes `$`.
pub const END_OF_INPUT_NAME: &str = "$";

impl SymbolTable {
    pub(crate) fn new(
        terminal_names: Vec<String>,
        nonterminal_names: Vec<String>,
    ) -> SymbolTable {
        let terminal_ids = terminal_names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), TerminalId(i as u32)))
            .collect();
        let nonterminal_ids = nonterminal_names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), NonTerminalId(i as u32)))
            .collect();
        let end_of_input = TerminalId((terminal_names.len() - 1) as u32);
        SymbolTable {
            terminal_names,
            terminal_ids,
            nonterminal_names,
            nonterminal_ids,
            end_of_input,
        }
    }

    pub fn terminal_id(&self, name: &str) -> Option<TerminalId> {
        self.terminal_ids.get(name).copied()
    }

    pub fn nonterminal_id(&self, name: &str) -> Option<NonTerminalId> {
        self.nonterminal_ids.get(name).copied()
    }

    pub fn terminal_name(&self, id: TerminalId) -> &str {
        &self.terminal_names[id.index()]
    }

    pub fn nonterminal_name(&self, id: NonTerminalId) -> &str {
        &self.nonterminal_names[id.index()]
    }

    pub fn terminals(&self) -> impl Iterator<Item = (TerminalId, &str)> {
        self.terminal_names
            .iter()
            .enumerate()
            .map(|(i, name)| (TerminalId(i as u32), name.as_str()))
    }

    pub fn nonterminals(&self) -> impl Iterator<Item = (NonTerminalId, &str)> {
        self.nonterminal_names
            .iter()
            .enumerate()
            .map(|(i, name)| (NonTerminalId(i as u32), name.as_str()))
    }

    pub fn num_terminals(&self) -> usize {
        self.terminal_names.len()
    }

    pub fn num_nonterminals(&self) -> usize {
        self.nonterminal_names.len()
    }

    /// The always-present end-of-input terminal, `$`.
    pub fn end_of_input(&self) -> TerminalId {
        self.end_of_input
    }
}
