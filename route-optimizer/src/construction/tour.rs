#[cfg(test)]
#[path = "../../tests/unit/construction/tour_test.rs"]
mod tour_test;

use crate::distance::DistanceMatrix;
use crate::models::{Location, OptimizedRoute, RouteMethod, RouteStop};
use tabula::utils::Float;

/// A partially built tour which always starts at the depot (position 0).
#[derive(Clone, Debug)]
pub struct Tour {
    order: Vec<usize>,
    visited: Vec<bool>,
}

impl Tour {
    /// Creates a new tour over `size` positions with the depot already visited.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "tour requires at least the depot");

        let mut visited = vec![false; size];
        visited[0] = true;

        Self { order: vec![0], visited }
    }

    /// Returns the last visited position.
    pub fn current(&self) -> usize {
        self.order.last().copied().unwrap_or(0)
    }

    /// Returns unvisited positions in ascending order.
    pub fn unvisited(&self) -> Vec<usize> {
        self.visited.iter().enumerate().filter(|(_, visited)| !**visited).map(|(position, _)| position).collect()
    }

    /// Checks whether there are still positions to visit.
    pub fn has_unvisited(&self) -> bool {
        self.order.len() < self.visited.len()
    }

    /// Visits the position. It must be unvisited.
    pub fn visit(&mut self, position: usize) {
        assert!(!self.visited[position], "position {position} is already visited");

        self.visited[position] = true;
        self.order.push(position);
    }

    /// Returns visited positions in visit order.
    pub fn order(&self) -> &[usize] {
        self.order.as_slice()
    }

    /// Converts a complete tour into optimized route with distance and time estimates.
    pub fn into_route(
        self,
        locations: &[Location],
        matrix: &DistanceMatrix,
        method_used: RouteMethod,
        average_speed_kmh: Float,
    ) -> OptimizedRoute {
        assert!(!self.has_unvisited(), "tour is not complete");

        let stops = self
            .order
            .iter()
            .enumerate()
            .map(|(idx, &position)| {
                let location = &locations[position];
                let distance_from_previous = if idx > 0 { matrix.distance(self.order[idx - 1], position) } else { 0. };

                RouteStop {
                    order_index: idx + 1,
                    position,
                    location_id: location.id.clone(),
                    lat: location.lat,
                    lon: location.lon,
                    label: location.label.clone(),
                    distance_from_previous,
                }
            })
            .collect::<Vec<_>>();

        let return_distance_km = matrix.distance(self.current(), 0);
        let total_distance_km = stops.iter().map(|stop| stop.distance_from_previous).sum::<Float>() + return_distance_km;

        OptimizedRoute {
            stops,
            return_distance_km,
            total_distance_km,
            total_time_min: estimate_time_min(total_distance_km, average_speed_kmh),
            method_used,
        }
    }
}

/// Estimates driving time in minutes for the distance at the given average speed.
pub(crate) fn estimate_time_min(distance_km: Float, average_speed_kmh: Float) -> Float {
    distance_km / average_speed_kmh * 60.
}
