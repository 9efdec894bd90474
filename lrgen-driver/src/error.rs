use thiserror::Error;

use lrgen_lr::StateId;
use lrgen_symbol::TerminalId;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DriverError {
    #[error("parse error in state {state}: no action for lookahead terminal {}", .lookahead.0)]
    ParseError {
        state: StateId,
        lookahead: TerminalId,
    },
}
