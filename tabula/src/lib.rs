//! This crate exposes tabular reinforcement learning building blocks together with some helper
//! functionality (randomization, logging environment, parallelism) shared by the route optimizer.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod prelude;
pub mod utils;
