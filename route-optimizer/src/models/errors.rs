use std::fmt::{Display, Formatter};
use tabula::utils::GenericError;

/// Specifies domain errors returned by the optimizer operations.
#[derive(Clone, Debug, PartialEq)]
pub enum RouteError {
    /// No locations were passed.
    EmptyInput,

    /// A location has non-finite or out of range coordinates.
    InvalidLocation {
        /// Position of the location in the input list.
        index: usize,
        /// A human readable reason.
        reason: String,
    },

    /// Vehicle count must be at least one.
    InvalidVehicleCount,

    /// Training request cannot be processed.
    InvalidTraining(String),
}

impl Display for RouteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteError::EmptyInput => write!(f, "no locations to optimize"),
            RouteError::InvalidLocation { index, reason } => write!(f, "invalid location at position {index}: {reason}"),
            RouteError::InvalidVehicleCount => write!(f, "vehicle count must be at least one"),
            RouteError::InvalidTraining(reason) => write!(f, "invalid training request: {reason}"),
        }
    }
}

impl std::error::Error for RouteError {}

impl From<RouteError> for GenericError {
    fn from(value: RouteError) -> Self {
        value.to_string().into()
    }
}
