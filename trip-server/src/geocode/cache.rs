//! Caching layer for suggestion lookups.
//!
//! Suggestion queries repeat heavily while a user types, so responses are
//! cached by normalized query with a short TTL. Resolution is deliberately
//! not cached: each pipeline run issues its hard-path calls exactly once.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{GeocodeSuggestion, ResolvedPlace};

use super::client::{GeocodeClient, MIN_SUGGEST_QUERY_LEN};
use super::error::GeocodeError;

/// Configuration for the suggestion cache.
#[derive(Debug, Clone)]
pub struct SuggestionCacheConfig {
    /// TTL for cached suggestion lists.
    pub ttl: Duration,

    /// Maximum number of cached queries.
    pub max_capacity: u64,
}

impl Default for SuggestionCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
            max_capacity: 1000,
        }
    }
}

/// Geocoding client with cached suggestion lookups.
pub struct CachedGeocodeClient {
    inner: GeocodeClient,
    suggestions: MokaCache<String, Arc<Vec<GeocodeSuggestion>>>,
}

impl CachedGeocodeClient {
    /// Wrap a geocoding client with a suggestion cache.
    pub fn new(inner: GeocodeClient, config: &SuggestionCacheConfig) -> Self {
        let suggestions = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, suggestions }
    }

    /// Look up suggestions, serving repeats from the cache.
    ///
    /// Failed lookups cache as empty for the TTL; suggestions are advisory
    /// so a brief stale-empty window is acceptable.
    pub async fn suggest(&self, query: &str) -> Vec<GeocodeSuggestion> {
        if query.chars().count() < MIN_SUGGEST_QUERY_LEN {
            return Vec::new();
        }

        let key = query.trim().to_lowercase();
        if let Some(hit) = self.suggestions.get(&key).await {
            return (*hit).clone();
        }

        let fresh = Arc::new(self.inner.suggest(query).await);
        self.suggestions.insert(key, Arc::clone(&fresh)).await;
        (*fresh).clone()
    }

    /// Resolve a place name. Always goes to the provider.
    pub async fn resolve(&self, text: &str) -> Result<ResolvedPlace, GeocodeError> {
        self.inner.resolve(text).await
    }
}
