//! HTTP surface: JSON API for planning trips and place suggestions.

mod dto;
mod routes;
mod state;

pub use dto::{
    BoundsResponse, ErrorResponse, GeometryResponse, LatestResponse, MarkerResponse,
    PlanTripRequest, SuggestResponse, SuggestionDto, TollItemResponse, TripResponse,
};
pub use routes::{AppError, create_router};
pub use state::{AppSession, AppState};
