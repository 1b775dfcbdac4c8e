//! Contains the route service which owns the shared policy.

#[cfg(test)]
#[path = "../tests/unit/service/service_test.rs"]
mod service_test;

use crate::config::OptimizerConfig;
use crate::construction::RouteComposer;
use crate::fleet::FleetPartitioner;
use crate::models::*;
use crate::persistence::{FilePolicyStorage, PolicyStorage, load_policy, save_policy};
use crate::training::Trainer;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tabula::utils::{Environment, GenericResult, parallel_collect};

/// Serves route optimization requests and training runs over one shared policy.
///
/// Readers take a snapshot of the policy and compute without holding any lock. A training run
/// works on a private copy which replaces the shared one only when the run succeeds, so readers
/// observe either the old or the new policy. Training runs are serialized.
pub struct RouteService {
    environment: Environment,
    config: OptimizerConfig,
    storage: Arc<dyn PolicyStorage>,
    policy: RwLock<Arc<PolicyModel>>,
    training: Mutex<()>,
    composer: RouteComposer,
    partitioner: FleetPartitioner,
}

impl RouteService {
    /// Creates a new instance of `RouteService` loading the policy from the storage. When nothing
    /// can be loaded, the service starts untrained. Fails if the config is invalid.
    pub fn new(
        config: OptimizerConfig,
        storage: Arc<dyn PolicyStorage>,
        environment: Environment,
    ) -> GenericResult<Self> {
        config.validate()?;

        let policy = match load_policy(storage.as_ref(), &environment.logger) {
            Some(mut model) => {
                let hyperparams = config.hyperparams_or(model.learning_rate, model.discount_factor);
                model.learning_rate = hyperparams.alpha;
                model.discount_factor = hyperparams.gamma;
                model
            }
            None => PolicyModel::untrained(&config.hyperparams()),
        };

        let composer = RouteComposer::new(config.average_speed_kmh(), environment.logger.clone());
        let partitioner = FleetPartitioner::new(config.average_speed_kmh(), config.savings_ratio());

        Ok(Self {
            environment,
            config,
            storage,
            policy: RwLock::new(Arc::new(policy)),
            training: Mutex::new(()),
            composer,
            partitioner,
        })
    }

    /// Creates a new instance of `RouteService` which keeps the policy in the file specified by
    /// config.
    pub fn from_config(config: OptimizerConfig, environment: Environment) -> GenericResult<Self> {
        let storage = Arc::new(FilePolicyStorage::new(config.model_path()));
        Self::new(config, storage, environment)
    }

    /// Returns a snapshot of the current policy.
    pub fn policy(&self) -> Arc<PolicyModel> {
        self.policy.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Checks whether the current policy is trained.
    pub fn is_trained(&self) -> bool {
        self.policy().is_trained()
    }

    /// Returns cumulative amount of trained episodes.
    pub fn episodes_trained(&self) -> usize {
        self.policy().episodes_trained
    }

    /// Returns optimized route for given locations, the first one is the depot.
    pub fn optimize(&self, locations: &[Location]) -> Result<OptimizedRoute, RouteError> {
        let policy = self.policy();
        self.composer.optimize(policy.as_ref(), locations)
    }

    /// Optimizes several independent location lists in parallel using the same policy snapshot.
    /// Results keep the order of the input.
    pub fn optimize_batch(&self, batch: &[Vec<Location>]) -> Vec<Result<OptimizedRoute, RouteError>> {
        let policy = self.policy();
        let composer = &self.composer;

        self.environment.parallelism.execute(|| {
            parallel_collect(batch, |locations| composer.optimize(policy.as_ref(), locations.as_slice()))
        })
    }

    /// Optimizes the route and splits it between at most `vehicle_count` vehicles.
    pub fn plan(&self, locations: &[Location], vehicle_count: usize) -> Result<FleetPlan, RouteError> {
        if vehicle_count == 0 {
            return Err(RouteError::InvalidVehicleCount);
        }

        let route = self.optimize(locations)?;

        self.partitioner.plan(route, vehicle_count)
    }

    /// Trains the policy and publishes it once the run completes. The policy is persisted
    /// afterwards: a failed save is logged and the trained policy is kept in memory.
    pub fn train(&self, corpus: &[TrainingEpisode], episode_count: usize) -> Result<TrainingMetrics, RouteError> {
        let _guard = self.training.lock().unwrap_or_else(PoisonError::into_inner);

        let mut model = PolicyModel::clone(self.policy().as_ref());
        let hyperparams = self.config.hyperparams_or(model.learning_rate, model.discount_factor);
        let trainer = Trainer::new(hyperparams, self.config.synthetic_settings(), self.environment.clone());

        let metrics = trainer.train(&mut model, corpus, episode_count)?;
        let model = Arc::new(model);

        *self.policy.write().unwrap_or_else(PoisonError::into_inner) = model.clone();

        if let Err(err) = save_policy(self.storage.as_ref(), model.as_ref(), &self.environment.logger) {
            (self.environment.logger)(&format!("cannot save route policy to {}: {err}", self.storage.describe()));
        }

        Ok(metrics)
    }
}
