//! Trip planning pipeline.
//!
//! Orchestrates geocoding, routing, geometry normalization, and cost
//! aggregation for a single trip request, producing one consolidated
//! result or one classified failure.

mod error;
mod planner;
mod session;

pub use error::TripError;
pub use planner::{
    GeocodeProvider, PipelineStage, RouteProvider, TripPlanner, TripRequest, TripResult,
};
pub use session::{PlannerSession, ResultSlot, TripOutcome};
