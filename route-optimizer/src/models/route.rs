#[cfg(test)]
#[path = "../../tests/unit/models/route_test.rs"]
mod route_test;

use super::LocationId;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use tabula::utils::Float;

/// Specifies how the stop order was obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteMethod {
    /// Every step followed the learned policy.
    LearnedPolicy,
    /// No usable policy: nearest neighbor heuristic was used for the whole tour.
    GreedyFallback,
    /// The learned policy was exhausted midway and the rest was built greedily.
    Mixed,
}

impl Display for RouteMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RouteMethod::LearnedPolicy => "learned-policy",
            RouteMethod::GreedyFallback => "greedy-fallback",
            RouteMethod::Mixed => "mixed",
        };

        write!(f, "{name}")
    }
}

/// A visited stop within optimized route.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteStop {
    /// One-based order of the visit.
    pub order_index: usize,
    /// Position of the location in the input list.
    pub position: usize,
    /// Location id.
    pub location_id: LocationId,
    /// Latitude.
    pub lat: Float,
    /// Longitude.
    pub lon: Float,
    /// Location label, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Distance in km from the previous stop, zero for the first one.
    pub distance_from_previous: Float,
}

/// An ordered tour which starts at the depot, visits every location once and returns back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptimizedRoute {
    /// Stops in visit order, the closing leg back to depot is not listed as a stop.
    pub stops: Vec<RouteStop>,
    /// Distance of the closing leg from the last stop back to depot.
    pub return_distance_km: Float,
    /// Total distance including the closing leg.
    pub total_distance_km: Float,
    /// Estimated travel time.
    pub total_time_min: Float,
    /// How the order was obtained.
    pub method_used: RouteMethod,
}

impl OptimizedRoute {
    /// Returns positions of input locations in visit order.
    pub fn positions(&self) -> Vec<usize> {
        self.stops.iter().map(|stop| stop.position).collect()
    }

    /// Returns amount of stops.
    pub fn total_stops(&self) -> usize {
        self.stops.len()
    }
}
