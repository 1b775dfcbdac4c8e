//! This module reimports a common used types.

pub use crate::algorithms::rl::{EpsilonGreedy, Greedy, QLearning, QTable, SelectionStrategy};

pub use crate::utils::compare_floats;
pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::InfoLogger;
pub use crate::utils::Parallelism;
pub use crate::utils::Random;
pub use crate::utils::{GenericError, GenericResult};
