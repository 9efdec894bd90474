use lrgen_symbol::{NonTerminalId, Symbol};

/// A 0-based index into the grammar's rule list. Rule 0 is always the
/// augmented start rule `S' -> S`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuleId(pub u32);

impl RuleId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A numbered production: `lhs -> rhs`. An empty `rhs` is a valid
/// ε-alternative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub lhs: NonTerminalId,
    pub rhs: Vec<Symbol>,
}

impl Rule {
    pub fn len(&self) -> usize {
        self.rhs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rhs.is_empty()
    }
}
