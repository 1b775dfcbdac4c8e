use super::Hyperparams;
use tabula::algorithms::rl::QTable;
use tabula::utils::Float;

/// A learned stop ordering policy together with its training counters. A model without table is
/// untrained: nothing was ever loaded or learned.
#[derive(Clone, Debug, PartialEq)]
pub struct PolicyModel {
    /// Action values indexed by `current position -> next position`.
    pub table: Option<QTable>,
    /// Cumulative amount of trained episodes.
    pub episodes_trained: usize,
    /// Learning rate used for training.
    pub learning_rate: Float,
    /// Discount factor used for training.
    pub discount_factor: Float,
}

impl PolicyModel {
    /// Creates an untrained model with given learning parameters.
    pub fn untrained(hyperparams: &Hyperparams) -> Self {
        Self {
            table: None,
            episodes_trained: 0,
            learning_rate: hyperparams.alpha,
            discount_factor: hyperparams.gamma,
        }
    }

    /// Checks whether the model has a table to exploit.
    pub fn is_trained(&self) -> bool {
        self.table.is_some()
    }

    /// Returns amount of positions covered by the table.
    pub fn capacity(&self) -> usize {
        self.table.as_ref().map_or(0, |table| table.capacity())
    }
}

impl Default for PolicyModel {
    fn default() -> Self {
        Self::untrained(&Hyperparams::default())
    }
}
