//! Geocoding: free-text place names to coordinates.
//!
//! Wraps the OpenRouteService geocoding endpoint with a bounded-suggestion
//! lookup and a single-match resolver, plus a suggestion cache and a
//! fixture-backed mock for development without credentials.

mod cache;
mod client;
mod error;
mod mock;
mod types;

pub use cache::{CachedGeocodeClient, SuggestionCacheConfig};
pub use client::{GeocodeClient, GeocodeConfig, MIN_SUGGEST_QUERY_LEN};
pub use error::GeocodeError;
pub use mock::MockGeocodeClient;
pub use types::{GeocodeFeature, GeocodeResponse};
