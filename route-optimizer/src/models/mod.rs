//! Contains domain models: locations, routes, fleet assignments, training data and the learned
//! policy model.

mod errors;
pub use self::errors::RouteError;

mod fleet;
pub use self::fleet::{FleetPlan, VehicleAssignment};

mod location;
pub use self::location::{Location, LocationId};

mod policy;
pub use self::policy::PolicyModel;

mod route;
pub use self::route::{OptimizedRoute, RouteMethod, RouteStop};

mod training;
pub use self::training::{HistoricalStop, Hyperparams, TrainingEpisode, TrainingMetrics};
