use super::{LocationId, RouteMethod, RouteStop};
use serde::{Deserialize, Serialize};
use tabula::utils::Float;

/// A contiguous part of the optimized tour assigned to a single vehicle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleAssignment {
    /// One-based vehicle index.
    pub vehicle_index: usize,
    /// Stops in visit order.
    pub stops: Vec<RouteStop>,
    /// Sum of stop distances from their previous stop in the combined tour.
    pub distance_subtotal: Float,
    /// Estimated time to drive `distance_subtotal`.
    pub time_subtotal: Float,
}

impl VehicleAssignment {
    /// Returns location ids in delivery order.
    pub fn location_ids(&self) -> Vec<LocationId> {
        self.stops.iter().map(|stop| stop.location_id.clone()).collect()
    }
}

/// A delivery plan for the whole fleet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FleetPlan {
    /// Per vehicle assignments. Can be fewer than requested vehicles.
    pub assignments: Vec<VehicleAssignment>,
    /// Amount of stops in the combined tour.
    pub total_stops: usize,
    /// Total distance of the combined tour including its closing leg.
    pub total_distance_km: Float,
    /// Estimated time of the combined tour.
    pub total_time_min: Float,
    /// Savings estimate versus a non optimized route. It is a fixed share of the total distance,
    /// not a measured value.
    pub estimated_savings_km: Float,
    /// How the tour order was obtained.
    pub method_used: RouteMethod,
    /// RFC 3339 timestamp of planning.
    pub planned_at: String,
}

impl FleetPlan {
    /// Returns amount of vehicles which received at least one stop.
    pub fn vehicles_used(&self) -> usize {
        self.assignments.len()
    }
}
