//! This module contains tabular reinforcement learning logic: a dense, growable value table
//! indexed by `state -> action` and strategies to learn and exploit it.

mod q_table;
pub use self::q_table::QTable;

mod strategies;
pub use self::strategies::*;
