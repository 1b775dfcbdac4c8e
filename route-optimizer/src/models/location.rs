use serde::{Deserialize, Serialize};
use tabula::utils::Float;

/// An opaque location identifier assigned by the caller.
pub type LocationId = String;

/// Represents a geographical location to visit. Position 0 in any list of locations is the depot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Location id.
    pub id: LocationId,
    /// Latitude in degrees.
    pub lat: Float,
    /// Longitude in degrees.
    pub lon: Float,
    /// An optional human readable label, e.g. an address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Location {
    /// Creates a new instance of `Location` without label.
    pub fn new(id: impl Into<LocationId>, lat: Float, lon: Float) -> Self {
        Self { id: id.into(), lat, lon, label: None }
    }

    /// Sets location label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
