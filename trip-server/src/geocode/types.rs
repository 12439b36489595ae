//! Geocoding API response DTOs.
//!
//! These payloads are loosely typed by contract: every nested field is
//! optional, and coordinate arrays are decoded as raw JSON values so they
//! can be validated field-by-field instead of trusted to be numeric pairs.

use serde::Deserialize;

use crate::domain::Coordinate;

/// Response from `geocode/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    /// Matching features, best first. Absent decodes as empty.
    #[serde(default)]
    pub features: Vec<GeocodeFeature>,
}

/// A single geocoding match.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeFeature {
    pub properties: Option<GeocodeProperties>,
    pub geometry: Option<GeocodeGeometry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeProperties {
    /// Human-readable place label.
    pub label: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeGeometry {
    /// Raw `[lon, lat]` array; may be missing, short, or non-numeric.
    pub coordinates: Option<serde_json::Value>,
}

impl GeocodeFeature {
    /// The feature's coordinate, if its geometry carries at least two
    /// numeric components.
    pub fn coordinate(&self) -> Option<Coordinate> {
        let values = self.geometry.as_ref()?.coordinates.as_ref()?.as_array()?;
        Coordinate::from_json_values(values)
    }

    /// The feature's label, if present.
    pub fn label(&self) -> Option<&str> {
        self.properties.as_ref()?.label.as_deref()
    }
}
