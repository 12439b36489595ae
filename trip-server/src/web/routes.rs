//! HTTP routes and handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use serde::Deserialize;
use tracing::warn;

use crate::pipeline::TripError;

use super::dto::{
    ErrorResponse, LatestResponse, PlanTripRequest, SuggestResponse, TripResponse,
};
use super::state::AppState;

/// An HTTP-mapped failure.
#[derive(Debug)]
pub enum AppError {
    BadRequest { title: String, message: String },
    NotFound { title: String, message: String },
    Upstream { title: String, message: String },
}

impl From<TripError> for AppError {
    fn from(e: TripError) -> Self {
        let title = e.title().to_string();
        let message = e.user_message();
        match e {
            TripError::MissingRequiredField(_) | TripError::InvalidVehicleParameters(_) => {
                AppError::BadRequest { title, message }
            }
            TripError::PlaceNotFound(_)
            | TripError::InvalidCoordinate(_)
            | TripError::RouteNotFound => AppError::NotFound { title, message },
            TripError::IncompleteRouteData(_)
            | TripError::Geocoding(_)
            | TripError::Routing(_) => AppError::Upstream { title, message },
        }
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (title, error) = match self {
            AppError::BadRequest { title, message }
            | AppError::NotFound { title, message }
            | AppError::Upstream { title, message } => (title, message),
        };
        warn!(status = %status, title, error, "request failed");
        (status, Json(ErrorResponse { title, error })).into_response()
    }
}

/// Build the application router.
pub fn create_router(state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/health", get(health))
        .route("/api/places/suggest", get(suggest))
        .route("/api/trip/plan", post(plan_trip))
        .route("/api/trip/latest", get(latest_trip))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

#[derive(Debug, Deserialize)]
struct SuggestParams {
    #[serde(default)]
    q: String,
}

async fn suggest(
    State(state): State<AppState>,
    Query(params): Query<SuggestParams>,
) -> Json<SuggestResponse> {
    let suggestions = state.session.suggest(&params.q).await;
    Json(SuggestResponse::from(suggestions))
}

async fn plan_trip(
    State(state): State<AppState>,
    Json(body): Json<PlanTripRequest>,
) -> Result<Json<TripResponse>, AppError> {
    let request = body.try_into()?;
    let result = state.session.calculate(&request).await?;
    Ok(Json(TripResponse::from(result)))
}

async fn latest_trip(State(state): State<AppState>) -> Result<Json<LatestResponse>, AppError> {
    match state.session.latest().await {
        Some(outcome) => Ok(Json(LatestResponse::from(outcome))),
        None => Err(AppError::NotFound {
            title: "No trip yet".to_string(),
            message: "No trip has been planned in this session.".to_string(),
        }),
    }
}
