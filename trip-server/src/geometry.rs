//! Route geometry validation and normalization.
//!
//! Routing providers return polylines as loosely-typed JSON arrays. This
//! module filters them into a renderable polyline with origin/destination
//! markers and a bounding region. It is pure and never fails: malformed
//! input degrades to "nothing renderable" rather than raising.

use serde_json::Value;
use tracing::debug;

use crate::domain::{Coordinate, LatLng};

/// Label used for explicit markers whose endpoint has no name.
const UNKNOWN_LABEL: &str = "Unknown";

/// Minimal rectangle containing every point of a polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRegion {
    pub min_lat: f64,
    pub min_lng: f64,
    pub max_lat: f64,
    pub max_lng: f64,
}

/// A marker for a route endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMarker {
    /// Position in display order.
    pub position: LatLng,

    /// Popup label. `None` for markers derived from the polyline.
    pub label: Option<String>,
}

/// Endpoint information supplied by the caller for labelled markers.
#[derive(Debug, Clone)]
pub struct EndpointInfo {
    pub coordinate: Coordinate,
    pub name: Option<String>,
}

/// Validated route geometry, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteGeometry {
    /// Polyline in display order (latitude, longitude).
    pub polyline: Vec<LatLng>,

    /// Origin marker, absent when nothing is renderable.
    pub origin: Option<RouteMarker>,

    /// Destination marker, absent when nothing is renderable.
    pub destination: Option<RouteMarker>,

    /// Bounding region over all kept points, for viewport fitting.
    pub bounds: Option<BoundingRegion>,
}

impl RouteGeometry {
    /// Geometry with nothing to render.
    pub fn empty() -> Self {
        Self {
            polyline: Vec::new(),
            origin: None,
            destination: None,
            bounds: None,
        }
    }

    /// Whether the geometry carries at least one valid point.
    pub fn is_renderable(&self) -> bool {
        !self.polyline.is_empty()
    }
}

/// Normalize a raw coordinate sequence into renderable geometry.
///
/// Keeps only elements that are arrays of two or more numbers, interpreting
/// each as `[longitude, latitude, ...]` and converting to display order.
/// Explicit endpoint info, when supplied, takes precedence over markers
/// derived from the first and last kept points.
pub fn normalize(
    raw: &Value,
    origin: Option<&EndpointInfo>,
    destination: Option<&EndpointInfo>,
) -> RouteGeometry {
    let Some(elements) = raw.as_array() else {
        debug!("route geometry is not a coordinate sequence");
        return RouteGeometry::empty();
    };

    let mut polyline = Vec::with_capacity(elements.len());
    let mut dropped = 0usize;
    for element in elements {
        let coord = element
            .as_array()
            .and_then(|values| Coordinate::from_json_values(values));
        match coord {
            Some(coord) => polyline.push(coord.to_lat_lng()),
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        debug!(dropped, kept = polyline.len(), "dropped malformed route points");
    }

    if polyline.is_empty() {
        return RouteGeometry::empty();
    }

    let first = polyline[0];
    let last = polyline[polyline.len() - 1];
    let origin = Some(marker_for(origin, first));
    let destination = Some(marker_for(destination, last));
    let bounds = Some(bounds_of(&polyline));

    RouteGeometry {
        polyline,
        origin,
        destination,
        bounds,
    }
}

/// Marker for an endpoint: explicit info when supplied, otherwise derived.
fn marker_for(info: Option<&EndpointInfo>, derived: LatLng) -> RouteMarker {
    match info {
        Some(info) => RouteMarker {
            position: info.coordinate.to_lat_lng(),
            label: Some(
                info.name
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
            ),
        },
        None => RouteMarker {
            position: derived,
            label: None,
        },
    }
}

/// Bounding region over a non-empty point list.
fn bounds_of(points: &[LatLng]) -> BoundingRegion {
    let mut bounds = BoundingRegion {
        min_lat: f64::MAX,
        min_lng: f64::MAX,
        max_lat: f64::MIN,
        max_lng: f64::MIN,
    };
    for point in points {
        bounds.min_lat = bounds.min_lat.min(point.lat);
        bounds.min_lng = bounds.min_lng.min(point.lng);
        bounds.max_lat = bounds.max_lat.max(point.lat);
        bounds.max_lng = bounds.max_lng.max(point.lng);
    }
    bounds
}
