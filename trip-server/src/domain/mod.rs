//! Domain types for the trip planner.
//!
//! These types represent validated trip data. Coordinates are checked at
//! construction time, so code that receives them can trust their validity.

mod coordinate;
mod place;
mod toll;
mod vehicle;

pub use coordinate::{Coordinate, InvalidCoordinate, LatLng};
pub use place::{GeocodeSuggestion, ResolvedPlace};
pub use toll::{TollLineItem, TollSource};
pub use vehicle::VehicleClass;
