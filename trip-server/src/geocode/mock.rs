//! Mock geocoding client for development without API credentials.
//!
//! Loads canned search responses from JSON files and serves them as if
//! they were live API responses.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::{GeocodeSuggestion, ResolvedPlace};

use super::client::{MIN_SUGGEST_QUERY_LEN, resolve_from_response, suggestions_from_response};
use super::error::GeocodeError;
use super::types::GeocodeResponse;

/// Mock geocoding client that serves responses from fixture files.
///
/// Expects files named `{slug}.json` (e.g. `sao-paulo.json`), where the slug
/// is the lowercased query with non-alphanumeric runs collapsed to `-`.
#[derive(Debug, Clone)]
pub struct MockGeocodeClient {
    responses: HashMap<String, GeocodeResponse>,
}

impl MockGeocodeClient {
    /// Create a mock client by loading JSON fixtures from a directory.
    pub fn new(fixture_dir: impl AsRef<Path>) -> Result<Self, GeocodeError> {
        let fixture_dir = fixture_dir.as_ref();
        let mut responses = HashMap::new();

        let entries = std::fs::read_dir(fixture_dir).map_err(|e| GeocodeError::Json {
            message: format!("failed to read fixture directory {fixture_dir:?}: {e}"),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| GeocodeError::Json {
                message: format!("failed to read fixture entry: {e}"),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let slug = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| GeocodeError::Json {
                    message: format!("invalid fixture filename: {path:?}"),
                })?
                .to_string();

            let json = std::fs::read_to_string(&path).map_err(|e| GeocodeError::Json {
                message: format!("failed to read {path:?}: {e}"),
            })?;

            let response: GeocodeResponse =
                serde_json::from_str(&json).map_err(|e| GeocodeError::Json {
                    message: format!("failed to parse {path:?}: {e}"),
                })?;

            responses.insert(slug, response);
        }

        if responses.is_empty() {
            return Err(GeocodeError::Json {
                message: format!("no geocode fixtures found in {fixture_dir:?}"),
            });
        }

        Ok(Self { responses })
    }

    /// Look up suggestions, mimicking `GeocodeClient::suggest`.
    pub async fn suggest(&self, query: &str) -> Vec<GeocodeSuggestion> {
        if query.chars().count() < MIN_SUGGEST_QUERY_LEN {
            return Vec::new();
        }
        match self.responses.get(&slug(query)) {
            Some(response) => suggestions_from_response(response),
            None => Vec::new(),
        }
    }

    /// Resolve a place, mimicking `GeocodeClient::resolve`.
    pub async fn resolve(&self, text: &str) -> Result<ResolvedPlace, GeocodeError> {
        match self.responses.get(&slug(text)) {
            Some(response) => resolve_from_response(text, response),
            None => Err(GeocodeError::PlaceNotFound(text.to_string())),
        }
    }
}

/// Fixture key for a query: lowercase, non-alphanumeric runs become `-`.
fn slug(query: &str) -> String {
    let mut out = String::with_capacity(query.len());
    let mut pending_dash = false;
    for c in query.to_lowercase().chars() {
        if c.is_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c);
        } else {
            pending_dash = true;
        }
    }
    out
}
