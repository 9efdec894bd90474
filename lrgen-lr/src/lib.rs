//! Canonical LR(1) item machinery: CLOSURE/GOTO, the canonical collection
//! builder, and the ACTION/GOTO table builder with conflict detection.

mod closure;
mod collection;
mod item;
mod tables;

pub use closure::{closure as closure_of, goto, ItemSet};
pub use collection::{CanonicalCollection, State, StateId};
pub use item::Lr1Item;
pub use tables::{Action, ActionTable, Conflict, GotoTable, ParseTables, TableBuilder, TableError};
