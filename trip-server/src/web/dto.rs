//! Wire types for the JSON API.

use serde::{Deserialize, Serialize};

use crate::domain::{GeocodeSuggestion, TollLineItem, VehicleClass};
use crate::geometry::{BoundingRegion, RouteGeometry, RouteMarker};
use crate::pipeline::{TripError, TripOutcome, TripRequest, TripResult};

/// Body of `POST /api/trip/plan`.
#[derive(Debug, Deserialize)]
pub struct PlanTripRequest {
    pub origin: Option<String>,
    pub destination: Option<String>,
    #[serde(default)]
    pub vehicle: Option<VehicleClass>,
    pub fuel_efficiency_km_per_unit: Option<f64>,
    pub fuel_price_per_unit: Option<f64>,
}

impl TryFrom<PlanTripRequest> for TripRequest {
    type Error = TripError;

    fn try_from(body: PlanTripRequest) -> Result<Self, Self::Error> {
        Ok(TripRequest {
            origin: body
                .origin
                .ok_or(TripError::MissingRequiredField("origin"))?,
            destination: body
                .destination
                .ok_or(TripError::MissingRequiredField("destination"))?,
            vehicle: body.vehicle.unwrap_or_default(),
            fuel_efficiency_km_per_unit: body
                .fuel_efficiency_km_per_unit
                .ok_or(TripError::MissingRequiredField("fuel efficiency"))?,
            fuel_price_per_unit: body
                .fuel_price_per_unit
                .ok_or(TripError::MissingRequiredField("fuel price"))?,
        })
    }
}

/// One place suggestion.
#[derive(Debug, Serialize)]
pub struct SuggestionDto {
    pub label: String,
    pub lat: f64,
    pub lng: f64,
}

/// Body of `GET /api/places/suggest`.
#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<SuggestionDto>,
}

impl From<Vec<GeocodeSuggestion>> for SuggestResponse {
    fn from(suggestions: Vec<GeocodeSuggestion>) -> Self {
        Self {
            suggestions: suggestions
                .into_iter()
                .map(|s| {
                    let position = s.coordinate.to_lat_lng();
                    SuggestionDto {
                        label: s.label,
                        lat: position.lat,
                        lng: position.lng,
                    }
                })
                .collect(),
        }
    }
}

/// One itemized toll.
#[derive(Debug, Serialize)]
pub struct TollItemResponse {
    pub name: String,
    pub cost: f64,
}

impl From<TollLineItem> for TollItemResponse {
    fn from(item: TollLineItem) -> Self {
        Self {
            name: item.name,
            cost: item.cost,
        }
    }
}

/// An endpoint marker.
#[derive(Debug, Serialize)]
pub struct MarkerResponse {
    pub lat: f64,
    pub lng: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl From<RouteMarker> for MarkerResponse {
    fn from(marker: RouteMarker) -> Self {
        Self {
            lat: marker.position.lat,
            lng: marker.position.lng,
            label: marker.label,
        }
    }
}

/// Viewport-fitting bounds.
#[derive(Debug, Serialize)]
pub struct BoundsResponse {
    pub min_lat: f64,
    pub min_lng: f64,
    pub max_lat: f64,
    pub max_lng: f64,
}

impl From<BoundingRegion> for BoundsResponse {
    fn from(bounds: BoundingRegion) -> Self {
        Self {
            min_lat: bounds.min_lat,
            min_lng: bounds.min_lng,
            max_lat: bounds.max_lat,
            max_lng: bounds.max_lng,
        }
    }
}

/// Renderable route geometry.
#[derive(Debug, Serialize)]
pub struct GeometryResponse {
    /// Polyline as `[lat, lng]` pairs in display order.
    pub polyline: Vec<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<MarkerResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<MarkerResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<BoundsResponse>,
}

impl From<RouteGeometry> for GeometryResponse {
    fn from(geometry: RouteGeometry) -> Self {
        Self {
            polyline: geometry
                .polyline
                .into_iter()
                .map(|p| [p.lat, p.lng])
                .collect(),
            origin: geometry.origin.map(Into::into),
            destination: geometry.destination.map(Into::into),
            bounds: geometry.bounds.map(Into::into),
        }
    }
}

/// Body of a successful `POST /api/trip/plan`.
#[derive(Debug, Serialize)]
pub struct TripResponse {
    pub distance_km: f64,
    pub duration_minutes: f64,
    pub fuel_cost: f64,
    pub toll_cost: f64,
    pub total_cost: f64,
    pub toll_source: &'static str,
    pub tolls: Vec<TollItemResponse>,
    pub geometry: GeometryResponse,
}

impl From<TripResult> for TripResponse {
    fn from(result: TripResult) -> Self {
        Self {
            distance_km: result.distance_km,
            duration_minutes: result.duration_minutes,
            fuel_cost: result.fuel_cost,
            toll_cost: result.toll_cost,
            total_cost: result.total_cost,
            toll_source: result.toll_source.as_str(),
            tolls: result.tolls.into_iter().map(Into::into).collect(),
            geometry: result.geometry.into(),
        }
    }
}

/// Body of `GET /api/trip/latest`.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LatestResponse {
    Completed { trip: TripResponse },
    Failed { title: String, error: String },
}

impl From<TripOutcome> for LatestResponse {
    fn from(outcome: TripOutcome) -> Self {
        match outcome {
            TripOutcome::Completed(result) => LatestResponse::Completed {
                trip: result.into(),
            },
            TripOutcome::Failed { title, message } => LatestResponse::Failed {
                title,
                error: message,
            },
        }
    }
}

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub title: String,
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinate;

    #[test]
    fn plan_request_requires_all_fields() {
        let body = PlanTripRequest {
            origin: None,
            destination: Some("Rio de Janeiro".into()),
            vehicle: None,
            fuel_efficiency_km_per_unit: Some(12.5),
            fuel_price_per_unit: Some(5.50),
        };
        let result = TripRequest::try_from(body);
        assert!(matches!(
            result,
            Err(TripError::MissingRequiredField("origin"))
        ));
    }

    #[test]
    fn plan_request_defaults_the_vehicle() {
        let body = PlanTripRequest {
            origin: Some("São Paulo".into()),
            destination: Some("Rio de Janeiro".into()),
            vehicle: None,
            fuel_efficiency_km_per_unit: Some(12.5),
            fuel_price_per_unit: Some(5.50),
        };
        let request = TripRequest::try_from(body).unwrap();
        assert_eq!(request.vehicle, VehicleClass::Car);
    }

    #[test]
    fn plan_request_deserializes_vehicle_names() {
        let body: PlanTripRequest = serde_json::from_str(
            r#"{
                "origin": "São Paulo",
                "destination": "Rio de Janeiro",
                "vehicle": "motorcycle",
                "fuel_efficiency_km_per_unit": 20.0,
                "fuel_price_per_unit": 5.50
            }"#,
        )
        .unwrap();
        assert_eq!(body.vehicle, Some(VehicleClass::Motorcycle));
    }

    #[test]
    fn suggestions_convert_to_display_order() {
        let suggestions = vec![GeocodeSuggestion {
            label: "São Paulo, SP, Brazil".into(),
            coordinate: Coordinate::from_lon_lat(-46.63, -23.55).unwrap(),
        }];
        let response = SuggestResponse::from(suggestions);
        assert_eq!(response.suggestions.len(), 1);
        assert_eq!(response.suggestions[0].lat, -23.55);
        assert_eq!(response.suggestions[0].lng, -46.63);
    }

    #[test]
    fn empty_geometry_serializes_without_markers() {
        let response = GeometryResponse::from(RouteGeometry::empty());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["polyline"], serde_json::json!([]));
        assert!(json.get("origin").is_none());
        assert!(json.get("bounds").is_none());
    }

    #[test]
    fn failed_outcome_serializes_with_status_tag() {
        let response = LatestResponse::from(TripOutcome::Failed {
            title: "No route found".into(),
            message: "No driving route could be found.".into(),
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["title"], "No route found");
    }
}
