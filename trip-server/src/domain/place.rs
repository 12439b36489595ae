//! Place types produced by geocoding.

use super::Coordinate;

/// An autocomplete suggestion for a partial place query.
///
/// Suggestions are ephemeral: each new query replaces the previous list
/// wholesale, and queries shorter than the minimum length produce none.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeSuggestion {
    /// Human-readable place label.
    pub label: String,

    /// Coordinate of the suggested place.
    pub coordinate: Coordinate,
}

/// A place resolved to a canonical coordinate.
///
/// Immutable once resolved; a new query produces a new value.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlace {
    /// The free-text query this place was resolved from.
    pub query_text: String,

    /// Canonical coordinate of the top match.
    pub coordinate: Coordinate,

    /// Provider label for the match, falling back to the query text.
    pub label: String,
}
