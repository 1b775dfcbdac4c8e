#[cfg(test)]
#[path = "../../tests/unit/training/trainer_test.rs"]
mod trainer_test;

use super::{SyntheticSettings, generate_synthetic_episodes};
use crate::distance::DistanceMatrix;
use crate::models::{Hyperparams, PolicyModel, RouteError, TrainingEpisode, TrainingMetrics};
use crate::utils::now_rfc3339;
use tabula::algorithms::rl::{EpsilonGreedy, QLearning, QTable, SelectionStrategy};
use tabula::utils::{Environment, Float, round_to};

/// Amount of the most recent episodes used to average reward.
const REWARD_WINDOW: usize = 100;

/// Trains the stop ordering policy with episodic tabular Q-learning. Every episode simulates one
/// tour starting at the depot where the reward of a move is the negated distance driven.
pub struct Trainer {
    hyperparams: Hyperparams,
    synthetic: SyntheticSettings,
    environment: Environment,
}

impl Trainer {
    /// Creates a new instance of `Trainer`.
    pub fn new(hyperparams: Hyperparams, synthetic: SyntheticSettings, environment: Environment) -> Self {
        Self { hyperparams, synthetic, environment }
    }

    /// Runs `episode_count` episodes cycling over the corpus and updates the model in place. When
    /// the corpus is empty, a synthetic one is generated. The model is left untouched when the
    /// request is invalid.
    pub fn train(
        &self,
        model: &mut PolicyModel,
        corpus: &[TrainingEpisode],
        episode_count: usize,
    ) -> Result<TrainingMetrics, RouteError> {
        if episode_count == 0 {
            return Err(RouteError::InvalidTraining("episode count must be positive".to_string()));
        }

        let logger = &self.environment.logger;
        logger(&format!("training route policy with {episode_count} episodes"));

        let synthetic;
        let corpus = if corpus.is_empty() {
            logger("no historical routes are provided, using synthetic ones");
            synthetic = generate_synthetic_episodes(&self.synthetic, self.environment.random.as_ref());
            synthetic.as_slice()
        } else {
            corpus
        };

        let matrices = corpus
            .iter()
            .map(|episode| {
                if episode.locations.is_empty() { Err(RouteError::EmptyInput) } else { DistanceMatrix::new(&episode.locations) }
            })
            .collect::<Result<Vec<_>, _>>()?;

        if matrices.is_empty() {
            return Err(RouteError::InvalidTraining("no training episodes are available".to_string()));
        }

        let learning = QLearning::new(self.hyperparams.alpha, self.hyperparams.gamma);
        let policy = EpsilonGreedy::new(self.hyperparams.epsilon, self.environment.random.clone());
        let table = model.table.get_or_insert_with(QTable::default);

        let rewards = (0..episode_count)
            .map(|episode| {
                let matrix = &matrices[episode % matrices.len()];
                table.ensure_capacity(matrix.size());

                run_episode(table, matrix, &learning, &policy)
            })
            .collect::<Vec<_>>();

        model.episodes_trained += episode_count;
        model.learning_rate = self.hyperparams.alpha;
        model.discount_factor = self.hyperparams.gamma;

        let metrics = create_metrics(model.episodes_trained, rewards.as_slice());
        logger(&format!(
            "training completed: {} episodes in total, average reward {:.2}, improvement {:.2}%",
            metrics.episodes_trained, metrics.avg_reward_last_100, metrics.improvement_pct
        ));

        Ok(metrics)
    }
}

/// Simulates one tour from the depot updating action values on every move. Returns the total
/// reward of the episode.
fn run_episode(table: &mut QTable, matrix: &DistanceMatrix, learning: &QLearning, policy: &EpsilonGreedy) -> Float {
    let size = matrix.size();
    let mut visited = vec![false; size];
    visited[0] = true;

    let mut current = 0;
    let mut visited_count = 1;
    let mut total_reward = 0.;

    while visited_count < size {
        let candidates = (0..size).filter(|&position| !visited[position]).collect::<Vec<_>>();
        let next = policy.select(table, current, candidates.as_slice()).unwrap_or(candidates[0]);

        let reward = -matrix.distance(current, next);
        let future_value = if visited_count + 1 < size {
            table.max_value(next, size).unwrap_or(0.)
        } else {
            -matrix.distance(next, 0)
        };

        let old_value = table.get(current, next).unwrap_or(0.);
        table.set(current, next, learning.value(old_value, reward, future_value));

        total_reward += reward;
        visited[next] = true;
        visited_count += 1;
        current = next;
    }

    total_reward
}

fn create_metrics(episodes_trained: usize, rewards: &[Float]) -> TrainingMetrics {
    let window = &rewards[rewards.len().saturating_sub(REWARD_WINDOW)..];
    let avg_reward = window.iter().sum::<Float>() / window.len().max(1) as Float;

    let first = rewards.first().copied().unwrap_or(0.);
    let last = rewards.last().copied().unwrap_or(0.);
    let improvement = if first != 0. { (last - first) / first.abs() * 100. } else { 0. };

    TrainingMetrics {
        episodes_trained,
        avg_reward_last_100: round_to(avg_reward, 2),
        improvement_pct: round_to(improvement, 2),
        final_reward: round_to(last, 2),
        trained_at: now_rfc3339(),
    }
}
