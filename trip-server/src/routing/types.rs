//! Directions API response DTOs.
//!
//! Same defensive posture as the geocoding DTOs: optional fields
//! throughout, raw JSON values for the coordinate geometry.

use serde::Deserialize;

/// Response from `v2/directions/{profile}/geojson`.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    /// Route features. Absent decodes as empty.
    #[serde(default)]
    pub features: Vec<RouteFeature>,
}

/// A single route feature.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteFeature {
    pub properties: Option<RouteProperties>,
    pub geometry: Option<GeometryDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteProperties {
    pub summary: Option<SummaryDto>,
}

/// Distance/duration summary in provider units.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryDto {
    /// Distance in meters.
    pub distance: Option<f64>,

    /// Duration in seconds.
    pub duration: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeometryDto {
    /// Raw polyline: expected `[[lon, lat], ...]` but not trusted to be.
    pub coordinates: Option<serde_json::Value>,
}
