//! Pipeline failure classification.
//!
//! Hard failures abort the run and surface exactly once as a title plus a
//! user-facing description. Soft faults (tolls, geometry, suggestions)
//! never reach this taxonomy.

use crate::cost::CostError;
use crate::geocode::GeocodeError;
use crate::routing::RouteError;

/// A classified trip planning failure.
#[derive(Debug, thiserror::Error)]
pub enum TripError {
    /// Origin, destination, efficiency, or price was left blank
    #[error("required field missing: {0}")]
    MissingRequiredField(&'static str),

    /// Geocoding returned zero matches for a place
    #[error("place not found: {0}")]
    PlaceNotFound(String),

    /// Geocoding returned unusable coordinate data for a place
    #[error("invalid coordinate data for place: {0}")]
    InvalidCoordinate(String),

    /// Routing returned no route between the resolved coordinates
    #[error("no route found between the requested places")]
    RouteNotFound,

    /// Routing returned a route without a summary or geometry
    #[error("incomplete route data: {0}")]
    IncompleteRouteData(&'static str),

    /// Fuel efficiency or price is nonsensical
    #[error("invalid vehicle parameters: {0}")]
    InvalidVehicleParameters(&'static str),

    /// Geocoding transport or decode failure
    #[error("geocoding failed: {0}")]
    Geocoding(#[source] GeocodeError),

    /// Routing transport or decode failure
    #[error("routing failed: {0}")]
    Routing(#[source] RouteError),
}

impl TripError {
    /// Short user-facing title for this failure.
    pub fn title(&self) -> &'static str {
        match self {
            TripError::MissingRequiredField(_) => "Required fields",
            TripError::PlaceNotFound(_) => "Place not found",
            TripError::InvalidCoordinate(_) => "Place could not be located",
            TripError::RouteNotFound => "No route found",
            TripError::IncompleteRouteData(_) => "Route unavailable",
            TripError::InvalidVehicleParameters(_) => "Invalid vehicle settings",
            TripError::Geocoding(_) => "Place lookup failed",
            TripError::Routing(_) => "Route calculation failed",
        }
    }

    /// User-facing description of this failure.
    pub fn user_message(&self) -> String {
        match self {
            TripError::MissingRequiredField(field) => {
                format!("Please fill in the {field} field before calculating.")
            }
            TripError::PlaceNotFound(place) => {
                format!("No match was found for \"{place}\". Check the spelling and try again.")
            }
            TripError::InvalidCoordinate(place) => {
                format!("\"{place}\" could not be located on the map.")
            }
            TripError::RouteNotFound => {
                "No driving route could be found between the given places.".to_string()
            }
            TripError::IncompleteRouteData(_) => {
                "The routing service returned incomplete data. Try again later.".to_string()
            }
            TripError::InvalidVehicleParameters(reason) => {
                format!("Vehicle settings are invalid: {reason}.")
            }
            TripError::Geocoding(_) | TripError::Routing(_) => {
                "The trip could not be calculated. Check the places and try again.".to_string()
            }
        }
    }

    /// Classify a geocoding failure for the place it occurred on.
    pub fn from_geocode(error: GeocodeError, place: &str) -> Self {
        match error {
            GeocodeError::PlaceNotFound(_) => TripError::PlaceNotFound(place.to_string()),
            GeocodeError::InvalidCoordinate(_) => TripError::InvalidCoordinate(place.to_string()),
            other => TripError::Geocoding(other),
        }
    }
}

impl From<RouteError> for TripError {
    fn from(error: RouteError) -> Self {
        match error {
            RouteError::RouteNotFound => TripError::RouteNotFound,
            RouteError::IncompleteRouteData(reason) => TripError::IncompleteRouteData(reason),
            other => TripError::Routing(other),
        }
    }
}

impl From<CostError> for TripError {
    fn from(error: CostError) -> Self {
        match error {
            CostError::InvalidVehicleParameters => {
                TripError::InvalidVehicleParameters("fuel efficiency must be greater than zero")
            }
        }
    }
}
