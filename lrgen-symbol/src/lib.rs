//! Id types for grammar symbols.
//!
//! Terminals and non-terminals live in separate, zero-based id spaces. A
//! [`Symbol`] tags which space an id belongs to so item and table machinery
//! can dispatch on it without a second lookup.

use std::fmt;

/// A 0-based index into the terminal table, with the end-of-input marker
/// always assigned the last index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TerminalId(pub u32);

/// A 0-based index into the non-terminal table, in first-seen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonTerminalId(pub u32);

impl TerminalId {
    /// Returns the id as a plain index for table lookups.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl NonTerminalId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TerminalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

impl fmt::Display for NonTerminalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// A grammar symbol: either a terminal or a non-terminal.
///
/// Rule right-hand sides are sequences of `Symbol`; ε is never represented as
/// a `Symbol` value, it exists only as a marker inside FIRST sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    Terminal(TerminalId),
    NonTerminal(NonTerminalId),
}

impl Symbol {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }

    #[inline]
    pub const fn is_nonterminal(self) -> bool {
        matches!(self, Symbol::NonTerminal(_))
    }

    /// Returns the terminal id, if this symbol is a terminal.
    pub const fn as_terminal(self) -> Option<TerminalId> {
        match self {
            Symbol::Terminal(t) => Some(t),
            Symbol::NonTerminal(_) => None,
        }
    }

    /// Returns the non-terminal id, if this symbol is a non-terminal.
    pub const fn as_nonterminal(self) -> Option<NonTerminalId> {
        match self {
            Symbol::NonTerminal(n) => Some(n),
            Symbol::Terminal(_) => None,
        }
    }
}

impl From<TerminalId> for Symbol {
    fn from(id: TerminalId) -> Self {
        Symbol::Terminal(id)
    }
}

impl From<NonTerminalId> for Symbol {
    fn from(id: NonTerminalId) -> Self {
        Symbol::NonTerminal(id)
    }
}
