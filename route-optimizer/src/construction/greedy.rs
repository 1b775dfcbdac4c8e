use super::Tour;
use crate::distance::DistanceMatrix;

/// Completes the tour by always moving to the nearest unvisited position.
pub fn complete_with_nearest_neighbor(tour: &mut Tour, matrix: &DistanceMatrix) {
    while tour.has_unvisited() {
        let candidates = tour.unvisited();

        match matrix.nearest(tour.current(), candidates.as_slice()) {
            Some(next) => tour.visit(next),
            None => break,
        }
    }
}
