//! Geocoding HTTP client.
//!
//! Provides async suggestion and resolution lookups against the
//! OpenRouteService geocoding API, filtered to the configured country.

use tracing::{info, warn};

use crate::config::{Credential, ORS_KEY_VAR};
use crate::domain::{GeocodeSuggestion, ResolvedPlace};

use super::error::GeocodeError;
use super::types::GeocodeResponse;

/// Default base URL for the geocoding API.
const DEFAULT_BASE_URL: &str = "https://api.openrouteservice.org";

/// Country filter for this deployment.
const DEFAULT_COUNTRY: &str = "BR";

/// Queries shorter than this produce no suggestions and no network call.
pub const MIN_SUGGEST_QUERY_LEN: usize = 3;

/// Bounded size of a suggestion lookup.
const SUGGEST_SIZE: u8 = 5;

/// Configuration for the geocoding client.
#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    /// API key passed as the `api_key` query parameter.
    pub credential: Credential,
    /// Base URL for the API.
    pub base_url: String,
    /// Country filter (`boundary.country`).
    pub country: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl GeocodeConfig {
    /// Create a new config with the given credential.
    pub fn new(credential: Credential) -> Self {
        Self {
            credential,
            base_url: DEFAULT_BASE_URL.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the country filter.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }
}

/// Geocoding API client.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    base_url: String,
    country: String,
    credential: Credential,
}

impl GeocodeClient {
    /// Create a new geocoding client with the given configuration.
    pub fn new(config: GeocodeConfig) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            country: config.country,
            credential: config.credential,
        })
    }

    /// Look up autocomplete suggestions for a partial query.
    ///
    /// Returns an empty list without any network call for queries shorter
    /// than [`MIN_SUGGEST_QUERY_LEN`]. Suggestions are advisory: transport
    /// and decode faults are logged and swallowed, never propagated.
    pub async fn suggest(&self, query: &str) -> Vec<GeocodeSuggestion> {
        if query.chars().count() < MIN_SUGGEST_QUERY_LEN {
            return Vec::new();
        }

        match self.search(query, SUGGEST_SIZE).await {
            Ok(response) => suggestions_from_response(&response),
            Err(e) => {
                warn!(query, error = %e, "suggestion lookup failed");
                Vec::new()
            }
        }
    }

    /// Resolve a place name to its canonical coordinate.
    ///
    /// Requests exactly one top match. Zero features and unusable geometry
    /// are hard failures for the owning pipeline run.
    pub async fn resolve(&self, text: &str) -> Result<ResolvedPlace, GeocodeError> {
        let response = self.search(text, 1).await?;
        let place = resolve_from_response(text, &response)?;
        info!(
            place = %place.label,
            lon = place.coordinate.longitude(),
            lat = place.coordinate.latitude(),
            "resolved place"
        );
        Ok(place)
    }

    /// Issue a bounded search against the geocoding endpoint.
    async fn search(&self, text: &str, size: u8) -> Result<GeocodeResponse, GeocodeError> {
        let Some(api_key) = self.credential.as_key() else {
            return Err(GeocodeError::NotConfigured(ORS_KEY_VAR));
        };

        let url = format!("{}/geocode/search", self.base_url);
        let size = size.to_string();

        let response = self
            .http
            .get(&url)
            .query(&[
                ("api_key", api_key),
                ("text", text),
                ("boundary.country", self.country.as_str()),
                ("size", size.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(GeocodeError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
            message: e.to_string(),
        })
    }
}

/// Extract suggestions from a search response, skipping unusable features.
pub(super) fn suggestions_from_response(response: &GeocodeResponse) -> Vec<GeocodeSuggestion> {
    response
        .features
        .iter()
        .filter_map(|feature| {
            Some(GeocodeSuggestion {
                label: feature.label()?.to_string(),
                coordinate: feature.coordinate()?,
            })
        })
        .collect()
}

/// Resolve the top match of a search response into a place.
pub(super) fn resolve_from_response(
    text: &str,
    response: &GeocodeResponse,
) -> Result<ResolvedPlace, GeocodeError> {
    let feature = response
        .features
        .first()
        .ok_or_else(|| GeocodeError::PlaceNotFound(text.to_string()))?;

    let coordinate = feature
        .coordinate()
        .ok_or_else(|| GeocodeError::InvalidCoordinate(text.to_string()))?;

    Ok(ResolvedPlace {
        query_text: text.to_string(),
        coordinate,
        label: feature.label().unwrap_or(text).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: &str) -> GeocodeResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn config_defaults() {
        let config = GeocodeConfig::new(Credential::Present("key".into()));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.country, "BR");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_builder() {
        let config = GeocodeConfig::new(Credential::Absent)
            .with_base_url("http://localhost:8080")
            .with_country("AR");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.country, "AR");
    }

    #[tokio::test]
    async fn short_query_returns_empty_without_network() {
        // Base URL that would fail instantly if contacted; a short query
        // must never get that far.
        let config = GeocodeConfig::new(Credential::Present("key".into()))
            .with_base_url("http://127.0.0.1:1");
        let client = GeocodeClient::new(config).unwrap();

        assert!(client.suggest("").await.is_empty());
        assert!(client.suggest("ab").await.is_empty());
    }

    #[tokio::test]
    async fn unconfigured_resolve_is_a_hard_failure() {
        let client = GeocodeClient::new(GeocodeConfig::new(Credential::Absent)).unwrap();
        let result = client.resolve("São Paulo").await;
        assert!(matches!(result, Err(GeocodeError::NotConfigured(_))));
    }

    #[tokio::test]
    async fn unconfigured_suggest_is_silently_empty() {
        let client = GeocodeClient::new(GeocodeConfig::new(Credential::Absent)).unwrap();
        assert!(client.suggest("São Paulo").await.is_empty());
    }

    #[test]
    fn suggestions_skip_unusable_features() {
        let response = response(
            r#"{
                "features": [
                    { "properties": { "label": "Good" }, "geometry": { "coordinates": [1, 2] } },
                    { "properties": { "label": "Short" }, "geometry": { "coordinates": [1] } },
                    { "geometry": { "coordinates": [3, 4] } }
                ]
            }"#,
        );

        let suggestions = suggestions_from_response(&response);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].label, "Good");
    }

    #[test]
    fn resolve_zero_features_is_place_not_found() {
        let response = response(r#"{ "features": [] }"#);
        let result = resolve_from_response("Nowhere", &response);
        assert!(matches!(result, Err(GeocodeError::PlaceNotFound(p)) if p == "Nowhere"));
    }

    #[test]
    fn resolve_bad_geometry_is_invalid_coordinate() {
        let response = response(
            r#"{ "features": [ { "properties": { "label": "Broken" }, "geometry": { "coordinates": [7] } } ] }"#,
        );
        let result = resolve_from_response("Broken", &response);
        assert!(matches!(result, Err(GeocodeError::InvalidCoordinate(_))));
    }

    #[test]
    fn resolve_falls_back_to_query_text_for_label() {
        let response = response(
            r#"{ "features": [ { "geometry": { "coordinates": [-46.63, -23.55] } } ] }"#,
        );
        let place = resolve_from_response("São Paulo", &response).unwrap();
        assert_eq!(place.label, "São Paulo");
        assert_eq!(place.query_text, "São Paulo");
    }
}
