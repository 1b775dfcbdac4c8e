#[cfg(test)]
#[path = "../../../tests/unit/algorithms/rl/strategies_test.rs"]
mod strategies_test;

use super::QTable;
use crate::utils::{Float, Random};
use std::sync::Arc;

/// Applies q-learning update rule to calculate value of the taken action.
#[derive(Clone, Debug)]
pub struct QLearning {
    alpha: Float,
    gamma: Float,
}

impl QLearning {
    /// Creates a new instance of `QLearning` with learning rate `alpha` and discount factor `gamma`.
    pub fn new(alpha: Float, gamma: Float) -> Self {
        Self { alpha, gamma }
    }

    /// Returns learning rate.
    pub fn alpha(&self) -> Float {
        self.alpha
    }

    /// Returns discount factor.
    pub fn gamma(&self) -> Float {
        self.gamma
    }

    /// Estimates a new action value given its old value, received reward and estimate of the
    /// best value reachable from the next state.
    pub fn value(&self, old_value: Float, reward: Float, future_value: Float) -> Float {
        (1. - self.alpha) * old_value + self.alpha * (reward + self.gamma * future_value)
    }
}

/// An action selection strategy over a value table.
pub trait SelectionStrategy {
    /// Selects one of the candidate actions for the given state. Candidates are expected in
    /// ascending order. Returns `None` when no candidate can be selected.
    fn select(&self, table: &QTable, state: usize, candidates: &[usize]) -> Option<usize>;
}

/// A greedy strategy: selects the candidate with max value. Candidates outside of the table or
/// with non-finite values are skipped, ties are resolved in favor of the first candidate.
#[derive(Clone, Debug, Default)]
pub struct Greedy;

impl SelectionStrategy for Greedy {
    fn select(&self, table: &QTable, state: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .filter_map(|&action| table.get(state, action).filter(|value| value.is_finite()).map(|value| (action, value)))
            .fold(None, |best: Option<(usize, Float)>, (action, value)| match best {
                Some((_, best_value)) if best_value >= value => best,
                _ => Some((action, value)),
            })
            .map(|(action, _)| action)
    }
}

/// An e-greedy action selection strategy which acts as greedy except it can select some
/// random candidate with probability specified.
pub struct EpsilonGreedy {
    epsilon: Float,
    random: Arc<dyn Random + Send + Sync>,
}

impl EpsilonGreedy {
    /// Creates a new instance of `EpsilonGreedy`.
    pub fn new(epsilon: Float, random: Arc<dyn Random + Send + Sync>) -> Self {
        Self { epsilon, random }
    }
}

impl SelectionStrategy for EpsilonGreedy {
    fn select(&self, table: &QTable, state: usize, candidates: &[usize]) -> Option<usize> {
        if candidates.is_empty() {
            return None;
        }

        if self.random.is_hit(self.epsilon) {
            candidates.get(self.random.uniform_index(candidates.len())).copied()
        } else {
            Greedy.select(table, state, candidates)
        }
    }
}
