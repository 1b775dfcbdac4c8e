//! Contains great-circle distance logic and a pairwise distance matrix.

#[cfg(test)]
#[path = "../../tests/unit/distance/distance_test.rs"]
mod distance_test;

use crate::models::{Location, RouteError};
use tabula::utils::{Float, compare_floats};

/// Mean Earth radius in km.
pub const EARTH_RADIUS_KM: Float = 6371.;

/// Gets distance in km between two points using haversine formula.
pub fn get_distance(p1: &Location, p2: &Location) -> Float {
    let d_lat = degree_rad(p2.lat - p1.lat);
    let d_lon = degree_rad(p2.lon - p1.lon);

    let lat1 = degree_rad(p1.lat);
    let lat2 = degree_rad(p2.lat);

    let a = (d_lat / 2.).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.).sin().powi(2);
    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Checks that all locations have finite coordinates within valid degree ranges.
pub fn validate_locations(locations: &[Location]) -> Result<(), RouteError> {
    locations.iter().enumerate().try_for_each(|(index, location)| {
        let reason = if !location.lat.is_finite() || !location.lon.is_finite() {
            Some(format!("non-finite coordinates ({}, {}) of '{}'", location.lat, location.lon, location.id))
        } else if !(-90. ..=90.).contains(&location.lat) {
            Some(format!("latitude {} of '{}' is outside of [-90, 90]", location.lat, location.id))
        } else if !(-180. ..=180.).contains(&location.lon) {
            Some(format!("longitude {} of '{}' is outside of [-180, 180]", location.lon, location.id))
        } else {
            None
        };

        match reason {
            Some(reason) => Err(RouteError::InvalidLocation { index, reason }),
            None => Ok(()),
        }
    })
}

/// A square matrix of distances in km between positions of a location list. It is symmetric
/// and has zero diagonal.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    values: Vec<Float>,
}

impl DistanceMatrix {
    /// Builds distance matrix for given locations. Locations are validated first, so no distance
    /// is ever calculated from invalid coordinates.
    pub fn new(locations: &[Location]) -> Result<Self, RouteError> {
        validate_locations(locations)?;

        let size = locations.len();
        let mut values = vec![0.; size * size];

        (0..size).for_each(|from| {
            (from + 1..size).for_each(|to| {
                let distance = get_distance(&locations[from], &locations[to]);
                values[from * size + to] = distance;
                values[to * size + from] = distance;
            })
        });

        Ok(Self { size, values })
    }

    /// Returns amount of positions.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns distance between two positions.
    pub fn distance(&self, from: usize, to: usize) -> Float {
        assert!(from < self.size && to < self.size);
        self.values[from * self.size + to]
    }

    /// Returns the candidate nearest to `from`, ties are resolved in favor of the first one.
    pub fn nearest(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .reduce(|best, candidate| {
                if compare_floats(self.distance(from, candidate), self.distance(from, best)).is_lt() {
                    candidate
                } else {
                    best
                }
            })
    }
}

/// Converts degrees to radians.
#[inline(always)]
fn degree_rad(degrees: Float) -> Float {
    std::f64::consts::PI * degrees / 180.
}
