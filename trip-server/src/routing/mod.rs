//! Driving route acquisition.
//!
//! Wraps the OpenRouteService directions endpoint under a fixed driving
//! profile, converting provider units to kilometers and minutes.

mod client;
mod error;
mod types;

pub use client::{Route, RoutingClient, RoutingConfig};
pub use error::RouteError;
pub use types::DirectionsResponse;
