//! This module reimports a common used types.

pub use crate::config::{OptimizerConfig, read_config};
pub use crate::service::RouteService;

pub use crate::models::{
    FleetPlan, HistoricalStop, Hyperparams, Location, OptimizedRoute, PolicyModel, RouteError, RouteMethod,
    RouteStop, TrainingEpisode, TrainingMetrics, VehicleAssignment,
};

pub use crate::persistence::{FilePolicyStorage, InMemoryPolicyStorage, PolicyStorage};

// Reimport tabula utils
pub use tabula::utils::DefaultRandom;
pub use tabula::utils::Environment;
pub use tabula::utils::Float;
pub use tabula::utils::InfoLogger;
pub use tabula::utils::{GenericError, GenericResult};
