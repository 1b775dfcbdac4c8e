#[cfg(test)]
#[path = "../../tests/unit/models/training_test.rs"]
mod training_test;

use super::Location;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tabula::utils::Float;

/// Learning hyper parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hyperparams {
    /// Learning rate.
    pub alpha: Float,
    /// Discount factor.
    pub gamma: Float,
    /// Exploration probability.
    pub epsilon: Float,
}

impl Default for Hyperparams {
    fn default() -> Self {
        Self { alpha: 0.1, gamma: 0.95, epsilon: 0.1 }
    }
}

/// A set of locations used for one training pass. The first location is the depot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingEpisode {
    /// Locations, depot first.
    pub locations: Vec<Location>,
}

/// A stop of a historical (already delivered) route.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoricalStop {
    /// Id of the route the stop belongs to.
    pub route_id: String,
    /// Visited location.
    pub location: Location,
}

impl TrainingEpisode {
    /// Creates a new instance of `TrainingEpisode`.
    pub fn new(locations: Vec<Location>) -> Self {
        Self { locations }
    }

    /// Groups historical stops by their route keeping the order in which routes and stops were
    /// first seen. Routes with less than two locations carry nothing to learn and are skipped.
    pub fn from_history(stops: &[HistoricalStop]) -> Vec<TrainingEpisode> {
        let mut route_order: Vec<&str> = Vec::new();
        let mut routes: HashMap<&str, Vec<Location>> = HashMap::new();

        stops.iter().for_each(|stop| {
            let route_id = stop.route_id.as_str();
            routes
                .entry(route_id)
                .or_insert_with(|| {
                    route_order.push(route_id);
                    Vec::new()
                })
                .push(stop.location.clone());
        });

        route_order
            .into_iter()
            .filter_map(|route_id| routes.remove(route_id))
            .filter(|locations| locations.len() > 1)
            .map(TrainingEpisode::new)
            .collect()
    }
}

/// Metrics of a single training run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingMetrics {
    /// Cumulative amount of trained episodes over the model lifetime.
    pub episodes_trained: usize,
    /// Average episode reward over the last 100 episodes of the run.
    pub avg_reward_last_100: Float,
    /// Relative change in percent between the first and the last episode reward of the run.
    pub improvement_pct: Float,
    /// Reward of the last episode.
    pub final_reward: Float,
    /// RFC 3339 timestamp of the run completion.
    pub trained_at: String,
}
