//! Contains logic to split a single tour between vehicles of a fleet.

#[cfg(test)]
#[path = "../../tests/unit/fleet/partitioner_test.rs"]
mod partitioner_test;

use crate::construction::estimate_time_min;
use crate::models::{FleetPlan, OptimizedRoute, RouteError, VehicleAssignment};
use crate::utils::now_rfc3339;
use tabula::utils::Float;

/// Splits an optimized tour into contiguous, order preserving chunks of equal size (the last one
/// can be shorter), one chunk per vehicle.
///
/// NOTE the first stop of every chunk keeps its distance from the preceding stop of the combined
/// tour: vehicle subtotals are shares of the tour distance, not a distance of a separate trip
/// which starts at the depot.
#[derive(Clone, Debug)]
pub struct FleetPartitioner {
    average_speed_kmh: Float,
    savings_ratio: Float,
}

impl FleetPartitioner {
    /// Creates a new instance of `FleetPartitioner`. `savings_ratio` is a fixed share of the tour
    /// distance reported as an estimated saving.
    pub fn new(average_speed_kmh: Float, savings_ratio: Float) -> Self {
        assert!(average_speed_kmh > 0.);
        Self { average_speed_kmh, savings_ratio }
    }

    /// Partitions route stops between at most `vehicle_count` vehicles.
    pub fn partition(&self, route: &OptimizedRoute, vehicle_count: usize) -> Result<Vec<VehicleAssignment>, RouteError> {
        if vehicle_count == 0 {
            return Err(RouteError::InvalidVehicleCount);
        }

        let total_stops = route.stops.len();
        let chunk_size = total_stops.div_ceil(vehicle_count).max(1);

        Ok(route
            .stops
            .chunks(chunk_size)
            .take(vehicle_count)
            .enumerate()
            .map(|(idx, stops)| {
                let distance_subtotal = stops.iter().map(|stop| stop.distance_from_previous).sum::<Float>();

                VehicleAssignment {
                    vehicle_index: idx + 1,
                    stops: stops.to_vec(),
                    distance_subtotal,
                    time_subtotal: estimate_time_min(distance_subtotal, self.average_speed_kmh),
                }
            })
            .collect())
    }

    /// Creates a fleet plan with per vehicle assignments and aggregated estimates.
    pub fn plan(&self, route: OptimizedRoute, vehicle_count: usize) -> Result<FleetPlan, RouteError> {
        let assignments = self.partition(&route, vehicle_count)?;

        Ok(FleetPlan {
            assignments,
            total_stops: route.total_stops(),
            total_distance_km: route.total_distance_km,
            total_time_min: route.total_time_min,
            estimated_savings_km: route.total_distance_km * self.savings_ratio,
            method_used: route.method_used,
            planned_at: now_rfc3339(),
        })
    }
}
