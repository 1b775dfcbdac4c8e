#[cfg(test)]
#[path = "../../tests/unit/construction/composer_test.rs"]
mod composer_test;

use super::{Tour, complete_with_nearest_neighbor};
use crate::distance::DistanceMatrix;
use crate::models::{Location, OptimizedRoute, PolicyModel, RouteError, RouteMethod};
use tabula::algorithms::rl::{Greedy, SelectionStrategy};
use tabula::utils::{Float, InfoLogger};

/// Composes an ordered tour for a location list exploiting the learned policy. When the policy
/// cannot be used, the tour is built (or completed) with nearest neighbor heuristic.
#[derive(Clone)]
pub struct RouteComposer {
    average_speed_kmh: Float,
    logger: InfoLogger,
}

impl RouteComposer {
    /// Creates a new instance of `RouteComposer`.
    pub fn new(average_speed_kmh: Float, logger: InfoLogger) -> Self {
        assert!(average_speed_kmh > 0.);
        Self { average_speed_kmh, logger }
    }

    /// Returns an optimized route which starts at the first location, visits all of them once
    /// and returns back. The policy is only read.
    pub fn optimize(&self, policy: &PolicyModel, locations: &[Location]) -> Result<OptimizedRoute, RouteError> {
        let matrix = create_matrix(locations)?;

        let Some(table) = policy.table.as_ref() else {
            (self.logger)("policy is not trained, using nearest neighbor heuristic");
            return Ok(self.build_greedy(locations, &matrix));
        };

        let mut tour = Tour::new(matrix.size());
        let mut method_used = RouteMethod::LearnedPolicy;

        while tour.has_unvisited() {
            let candidates = tour.unvisited();

            match Greedy.select(table, tour.current(), candidates.as_slice()) {
                Some(next) => tour.visit(next),
                None => {
                    (self.logger)(&format!(
                        "no usable policy value at position {} (table capacity is {}), completing {} stops greedily",
                        tour.current(),
                        table.capacity(),
                        candidates.len()
                    ));
                    method_used = RouteMethod::Mixed;
                    complete_with_nearest_neighbor(&mut tour, &matrix);
                }
            }
        }

        Ok(tour.into_route(locations, &matrix, method_used, self.average_speed_kmh))
    }

    /// Returns a route built with nearest neighbor heuristic only.
    pub fn greedy_route(&self, locations: &[Location]) -> Result<OptimizedRoute, RouteError> {
        let matrix = create_matrix(locations)?;

        Ok(self.build_greedy(locations, &matrix))
    }

    fn build_greedy(&self, locations: &[Location], matrix: &DistanceMatrix) -> OptimizedRoute {
        let mut tour = Tour::new(matrix.size());

        complete_with_nearest_neighbor(&mut tour, matrix);

        tour.into_route(locations, matrix, RouteMethod::GreedyFallback, self.average_speed_kmh)
    }
}

fn create_matrix(locations: &[Location]) -> Result<DistanceMatrix, RouteError> {
    if locations.is_empty() {
        return Err(RouteError::EmptyInput);
    }

    DistanceMatrix::new(locations)
}
