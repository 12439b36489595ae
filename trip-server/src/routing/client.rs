//! Routing HTTP client.
//!
//! Issues directions requests for exactly two waypoints under a fixed
//! driving profile, with the API key in the Authorization header.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use tracing::info;

use crate::config::{Credential, ORS_KEY_VAR};
use crate::domain::Coordinate;

use super::error::RouteError;
use super::types::DirectionsResponse;

/// Default base URL for the directions API.
const DEFAULT_BASE_URL: &str = "https://api.openrouteservice.org";

/// Routing profile for this deployment.
const DRIVING_PROFILE: &str = "driving-car";

const METERS_PER_KM: f64 = 1000.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

/// A computed driving route.
#[derive(Debug, Clone)]
pub struct Route {
    /// Route length in kilometers.
    pub distance_km: f64,

    /// Driving time in minutes.
    pub duration_minutes: f64,

    /// Raw polyline coordinates as received. Validated downstream by
    /// `geometry::normalize`; guaranteed non-empty here, nothing more.
    pub raw_geometry: Vec<serde_json::Value>,
}

/// Configuration for the routing client.
#[derive(Debug, Clone)]
pub struct RoutingConfig {
    /// API key sent in the Authorization header.
    pub credential: Credential,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl RoutingConfig {
    /// Create a new config with the given credential.
    pub fn new(credential: Credential) -> Self {
        Self {
            credential,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// Directions API client.
#[derive(Debug, Clone)]
pub struct RoutingClient {
    http: reqwest::Client,
    base_url: String,
    configured: bool,
}

impl RoutingClient {
    /// Create a new routing client with the given configuration.
    pub fn new(config: RoutingConfig) -> Result<Self, RouteError> {
        let mut headers = HeaderMap::new();
        let configured = match config.credential.as_key() {
            Some(key) => {
                let value = HeaderValue::from_str(key).map_err(|_| RouteError::Api {
                    status: 0,
                    message: "invalid API key format".to_string(),
                })?;
                headers.insert(AUTHORIZATION, value);
                true
            }
            None => false,
        };

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            configured,
        })
    }

    /// Compute the driving route from origin to destination.
    ///
    /// Sends the two waypoints in order and converts the summary to
    /// kilometers and minutes.
    pub async fn compute_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Route, RouteError> {
        if !self.configured {
            return Err(RouteError::NotConfigured(ORS_KEY_VAR));
        }

        let url = format!("{}/v2/directions/{DRIVING_PROFILE}/geojson", self.base_url);
        let body = serde_json::json!({
            "coordinates": [
                [origin.longitude(), origin.latitude()],
                [destination.longitude(), destination.latitude()],
            ],
        });

        let response = self.http.post(&url).json(&body).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(RouteError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RouteError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let directions: DirectionsResponse =
            serde_json::from_str(&body).map_err(|e| RouteError::Json {
                message: e.to_string(),
            })?;

        let route = route_from_response(directions)?;
        info!(
            distance_km = route.distance_km,
            duration_minutes = route.duration_minutes,
            points = route.raw_geometry.len(),
            "route summary"
        );
        Ok(route)
    }
}

/// Extract a route from the directions response, converting units.
pub(super) fn route_from_response(directions: DirectionsResponse) -> Result<Route, RouteError> {
    let feature = directions
        .features
        .into_iter()
        .next()
        .ok_or(RouteError::RouteNotFound)?;

    let summary = feature
        .properties
        .and_then(|p| p.summary)
        .ok_or(RouteError::IncompleteRouteData("missing route summary"))?;

    let (distance_m, duration_s) = match (summary.distance, summary.duration) {
        (Some(d), Some(t)) => (d, t),
        _ => {
            return Err(RouteError::IncompleteRouteData(
                "summary lacks distance or duration",
            ));
        }
    };

    let raw_geometry = feature
        .geometry
        .and_then(|g| g.coordinates)
        .and_then(|v| match v {
            serde_json::Value::Array(points) => Some(points),
            _ => None,
        })
        .ok_or(RouteError::IncompleteRouteData("missing coordinate geometry"))?;

    if raw_geometry.is_empty() {
        return Err(RouteError::IncompleteRouteData("empty coordinate geometry"));
    }

    Ok(Route {
        distance_km: distance_m / METERS_PER_KM,
        duration_minutes: duration_s / SECONDS_PER_MINUTE,
        raw_geometry,
    })
}
