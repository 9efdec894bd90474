//! Command-line front end for `lrgen`: the meta-grammar tokenizer/parser,
//! argument handling, and file I/O. The core LR(1) construction lives in the
//! `lrgen` facade crate and its dependencies; this crate is purely the
//! ambient CLI layer around it.

pub mod cli;
pub mod error;
pub mod meta;
