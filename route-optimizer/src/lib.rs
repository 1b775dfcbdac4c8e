//! A delivery route optimization engine.
//!
//! The crate learns a reusable policy for ordering delivery stops with tabular Q-learning and uses
//! it to compose tours which start and end at the depot. When the policy is missing or cannot
//! cover a location set, tours are built (or completed) with nearest neighbor heuristic. A
//! composed tour can be split between vehicles of a fleet.
//!
//! # Examples
//!
//! ```
//! use route_optimizer::prelude::*;
//! use std::sync::Arc;
//!
//! let environment = Environment::new_repeatable(0);
//! let storage = Arc::new(InMemoryPolicyStorage::default());
//! let service = RouteService::new(OptimizerConfig::default(), storage, environment).expect("cannot create service");
//!
//! let locations = vec![
//!     Location::new("depot", -12.046374, -77.042793),
//!     Location::new("c1", -12.05, -77.03),
//!     Location::new("c2", -12.04, -77.05),
//! ];
//!
//! let route = service.optimize(locations.as_slice()).expect("cannot optimize route");
//! assert_eq!(route.total_stops(), 3);
//! assert_eq!(route.method_used, RouteMethod::GreedyFallback);
//!
//! let metrics = service.train(&[], 100).expect("cannot train policy");
//! assert_eq!(metrics.episodes_trained, 100);
//! assert!(service.is_trained());
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
pub mod features;

pub mod config;
pub mod construction;
pub mod distance;
pub mod fleet;
pub mod models;
pub mod persistence;
pub mod prelude;
pub mod service;
pub mod training;
pub mod utils;
