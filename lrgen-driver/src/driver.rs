use lrgen_grammar::Grammar;
use lrgen_lr::{Action, ParseTables, StateId};

use crate::cst::CstNode;
use crate::error::DriverError;
use crate::token::Token;

/// A table-interpreting shift-reduce recognizer: two aligned stacks (state
/// ids and CST nodes), driven purely by `ParseTables`. Independent of the
/// construction pipeline. Multiple drivers may run concurrently over the
/// same (read-only) tables.
pub fn parse(
    grammar: &Grammar,
    tables: &ParseTables,
    tokens: impl IntoIterator<Item = Token>,
) -> Result<CstNode, DriverError> {
    let mut stream: Vec<Token> = tokens.into_iter().collect();
    stream.push(Token::new(grammar.symbols().end_of_input()));

    let mut state_stack: Vec<StateId> = vec![StateId(0)];
    let mut symbol_stack: Vec<CstNode> = Vec::new();
    let mut pos = 0;

    loop {
        let state = *state_stack.last().expect("state stack is never empty");
        let lookahead = &stream[pos];

        match tables.action.get(state, lookahead.terminal) {
            Some(Action::Shift(target)) => {
                symbol_stack.push(CstNode::Leaf {
                    terminal: lookahead.terminal,
                    lexeme: lookahead.lexeme.clone(),
                });
                state_stack.push(target);
                pos += 1;
            }
            Some(Action::Reduce(rule_id)) => {
                let rule = grammar.rule(rule_id);
                let arity = rule.rhs.len();
                let split_at = symbol_stack.len() - arity;
                let children = symbol_stack.split_off(split_at);
                state_stack.truncate(state_stack.len() - arity);

                let top = *state_stack.last().expect("state stack is never empty");
                let goto_state = tables
                    .goto
                    .get(top, rule.lhs)
                    .expect("GOTO must be defined for a just-reduced non-terminal");

                symbol_stack.push(CstNode::Internal {
                    nonterminal: rule.lhs,
                    children,
                });
                state_stack.push(goto_state);
            }
            Some(Action::Accept) => {
                return Ok(symbol_stack
                    .pop()
                    .expect("an accepting parse leaves exactly one node"));
            }
            None => {
                return Err(DriverError::ParseError {
                    state,
                    lookahead: lookahead.terminal,
                });
            }
        }
    }
}
