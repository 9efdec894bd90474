//! FIRST/FOLLOW fixed-point computation over a [`lrgen_grammar::Grammar`].

mod first;
mod follow;

pub use first::FirstSets;
pub use follow::FollowSets;
