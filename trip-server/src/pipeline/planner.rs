//! The trip planning pipeline itself.
//!
//! A single `plan` call validates the request, resolves both places
//! concurrently, computes the route, normalizes its geometry, and
//! aggregates fuel and toll costs into one result. Hard failures abort
//! the run with a classified [`TripError`]; toll and geometry faults
//! degrade instead of aborting.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

use crate::cost;
use crate::domain::{Coordinate, GeocodeSuggestion, ResolvedPlace, TollLineItem, TollSource, VehicleClass};
use crate::geocode::{CachedGeocodeClient, GeocodeClient, GeocodeError, MockGeocodeClient};
use crate::geometry::{self, EndpointInfo, RouteGeometry};
use crate::routing::{Route, RouteError, RoutingClient};
use crate::toll::{TollEstimator, TollQuoter};

use super::error::TripError;

/// A trip to be planned.
#[derive(Debug, Clone)]
pub struct TripRequest {
    /// Free-text origin place name.
    pub origin: String,

    /// Free-text destination place name.
    pub destination: String,

    /// Vehicle class, used for toll pricing.
    pub vehicle: VehicleClass,

    /// Fuel efficiency in kilometers per unit of fuel.
    pub fuel_efficiency_km_per_unit: f64,

    /// Fuel price per unit.
    pub fuel_price_per_unit: f64,
}

impl TripRequest {
    /// Check the request before any network call.
    pub fn validate(&self) -> Result<(), TripError> {
        if self.origin.trim().is_empty() {
            return Err(TripError::MissingRequiredField("origin"));
        }
        if self.destination.trim().is_empty() {
            return Err(TripError::MissingRequiredField("destination"));
        }
        if !self.fuel_efficiency_km_per_unit.is_finite() || self.fuel_efficiency_km_per_unit <= 0.0 {
            return Err(TripError::InvalidVehicleParameters(
                "fuel efficiency must be greater than zero",
            ));
        }
        if !self.fuel_price_per_unit.is_finite() || self.fuel_price_per_unit < 0.0 {
            return Err(TripError::InvalidVehicleParameters(
                "fuel price must not be negative",
            ));
        }
        Ok(())
    }
}

/// Stage a pipeline run is currently in, for observability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Idle,
    ResolvingPlaces,
    ResolvingRoute,
    ComputingCosts,
    Completed,
    Failed,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Idle => "idle",
            PipelineStage::ResolvingPlaces => "resolving_places",
            PipelineStage::ResolvingRoute => "resolving_route",
            PipelineStage::ComputingCosts => "computing_costs",
            PipelineStage::Completed => "completed",
            PipelineStage::Failed => "failed",
        }
    }
}

/// Place resolution seam for the pipeline.
#[async_trait]
pub trait GeocodeProvider: Send + Sync {
    async fn resolve(&self, text: &str) -> Result<ResolvedPlace, GeocodeError>;
    async fn suggest(&self, query: &str) -> Vec<GeocodeSuggestion>;
}

#[async_trait]
impl GeocodeProvider for GeocodeClient {
    async fn resolve(&self, text: &str) -> Result<ResolvedPlace, GeocodeError> {
        GeocodeClient::resolve(self, text).await
    }

    async fn suggest(&self, query: &str) -> Vec<GeocodeSuggestion> {
        GeocodeClient::suggest(self, query).await
    }
}

#[async_trait]
impl GeocodeProvider for CachedGeocodeClient {
    async fn resolve(&self, text: &str) -> Result<ResolvedPlace, GeocodeError> {
        CachedGeocodeClient::resolve(self, text).await
    }

    async fn suggest(&self, query: &str) -> Vec<GeocodeSuggestion> {
        CachedGeocodeClient::suggest(self, query).await
    }
}

#[async_trait]
impl GeocodeProvider for MockGeocodeClient {
    async fn resolve(&self, text: &str) -> Result<ResolvedPlace, GeocodeError> {
        MockGeocodeClient::resolve(self, text).await
    }

    async fn suggest(&self, query: &str) -> Vec<GeocodeSuggestion> {
        MockGeocodeClient::suggest(self, query).await
    }
}

#[async_trait]
impl<T: GeocodeProvider> GeocodeProvider for std::sync::Arc<T> {
    async fn resolve(&self, text: &str) -> Result<ResolvedPlace, GeocodeError> {
        (**self).resolve(text).await
    }

    async fn suggest(&self, query: &str) -> Vec<GeocodeSuggestion> {
        (**self).suggest(query).await
    }
}

/// Route computation seam for the pipeline.
#[async_trait]
pub trait RouteProvider: Send + Sync {
    async fn compute_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Route, RouteError>;
}

#[async_trait]
impl RouteProvider for RoutingClient {
    async fn compute_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Route, RouteError> {
        RoutingClient::compute_route(self, origin, destination).await
    }
}

#[async_trait]
impl<T: RouteProvider> RouteProvider for std::sync::Arc<T> {
    async fn compute_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Route, RouteError> {
        (**self).compute_route(origin, destination).await
    }
}

/// A fully planned trip.
#[derive(Debug, Clone)]
pub struct TripResult {
    /// Route length in kilometers.
    pub distance_km: f64,

    /// Driving time in minutes.
    pub duration_minutes: f64,

    /// Fuel cost, rounded to two decimals.
    pub fuel_cost: f64,

    /// Toll cost, rounded to two decimals.
    pub toll_cost: f64,

    /// Fuel plus tolls, rounded to two decimals.
    pub total_cost: f64,

    /// Renderable route geometry, possibly empty.
    pub geometry: RouteGeometry,

    /// Itemized tolls.
    pub tolls: Vec<TollLineItem>,

    /// Whether tolls came from the provider or the heuristic.
    pub toll_source: TollSource,
}

/// The trip planning pipeline.
pub struct TripPlanner<G, R, Q> {
    geocoder: G,
    router: R,
    tolls: TollEstimator<Q>,
}

impl<G, R, Q> TripPlanner<G, R, Q>
where
    G: GeocodeProvider,
    R: RouteProvider,
    Q: TollQuoter,
{
    pub fn new(geocoder: G, router: R, tolls: TollEstimator<Q>) -> Self {
        Self {
            geocoder,
            router,
            tolls,
        }
    }

    /// Plan a trip end to end.
    pub async fn plan(&self, request: &TripRequest) -> Result<TripResult, TripError> {
        request.validate()?;

        info!(
            stage = PipelineStage::ResolvingPlaces.as_str(),
            origin = %request.origin,
            destination = %request.destination,
            "planning trip"
        );

        let (origin, destination) = futures::join!(
            self.geocoder.resolve(&request.origin),
            self.geocoder.resolve(&request.destination),
        );
        let origin = origin.map_err(|e| TripError::from_geocode(e, &request.origin))?;
        let destination =
            destination.map_err(|e| TripError::from_geocode(e, &request.destination))?;

        debug!(stage = PipelineStage::ResolvingRoute.as_str(), "places resolved");

        let route = self
            .router
            .compute_route(origin.coordinate, destination.coordinate)
            .await?;

        debug!(
            stage = PipelineStage::ComputingCosts.as_str(),
            distance_km = route.distance_km,
            "route resolved"
        );

        let geometry = geometry::normalize(
            &Value::Array(route.raw_geometry),
            Some(&EndpointInfo {
                coordinate: origin.coordinate,
                name: Some(origin.label.clone()),
            }),
            Some(&EndpointInfo {
                coordinate: destination.coordinate,
                name: Some(destination.label.clone()),
            }),
        );

        let fuel_cost = cost::round2(cost::fuel_cost(
            route.distance_km,
            request.fuel_efficiency_km_per_unit,
            request.fuel_price_per_unit,
        )?);

        let tolls = self
            .tolls
            .estimate(
                origin.coordinate,
                destination.coordinate,
                request.vehicle,
                route.distance_km,
            )
            .await;

        let total_cost = cost::round2(cost::total_cost(fuel_cost, tolls.cost));

        info!(
            stage = PipelineStage::Completed.as_str(),
            distance_km = route.distance_km,
            fuel_cost,
            toll_cost = tolls.cost,
            total_cost,
            toll_source = tolls.source.as_str(),
            "trip planned"
        );

        Ok(TripResult {
            distance_km: route.distance_km,
            duration_minutes: route.duration_minutes,
            fuel_cost,
            toll_cost: tolls.cost,
            total_cost,
            geometry,
            tolls: tolls.items,
            toll_source: tolls.source,
        })
    }

    /// Look up place suggestions for a partial query.
    pub async fn suggest(&self, query: &str) -> Vec<GeocodeSuggestion> {
        self.geocoder.suggest(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::toll::{TollError, TollQuote};
    use chrono::{DateTime, Utc};

    fn coord(lon: f64, lat: f64) -> Coordinate {
        Coordinate::from_lon_lat(lon, lat).unwrap()
    }

    fn place(text: &str, lon: f64, lat: f64) -> ResolvedPlace {
        ResolvedPlace {
            query_text: text.to_string(),
            coordinate: coord(lon, lat),
            label: format!("{text}, Brazil"),
        }
    }

    /// Geocoder backed by a fixed place table.
    struct MapGeocoder(HashMap<String, ResolvedPlace>);

    impl MapGeocoder {
        fn with(places: &[ResolvedPlace]) -> Self {
            Self(
                places
                    .iter()
                    .map(|p| (p.query_text.clone(), p.clone()))
                    .collect(),
            )
        }
    }

    #[async_trait]
    impl GeocodeProvider for MapGeocoder {
        async fn resolve(&self, text: &str) -> Result<ResolvedPlace, GeocodeError> {
            self.0
                .get(text)
                .cloned()
                .ok_or_else(|| GeocodeError::PlaceNotFound(text.to_string()))
        }

        async fn suggest(&self, _query: &str) -> Vec<GeocodeSuggestion> {
            Vec::new()
        }
    }

    /// Router returning a fixed route.
    struct FixedRouter {
        distance_km: f64,
        duration_minutes: f64,
    }

    #[async_trait]
    impl RouteProvider for FixedRouter {
        async fn compute_route(
            &self,
            origin: Coordinate,
            destination: Coordinate,
        ) -> Result<Route, RouteError> {
            Ok(Route {
                distance_km: self.distance_km,
                duration_minutes: self.duration_minutes,
                raw_geometry: vec![
                    serde_json::json!([origin.longitude(), origin.latitude()]),
                    serde_json::json!([destination.longitude(), destination.latitude()]),
                ],
            })
        }
    }

    /// Router that finds no route.
    struct NoRouteRouter;

    #[async_trait]
    impl RouteProvider for NoRouteRouter {
        async fn compute_route(
            &self,
            _origin: Coordinate,
            _destination: Coordinate,
        ) -> Result<Route, RouteError> {
            Err(RouteError::RouteNotFound)
        }
    }

    /// Quoter that always fails with a provider error.
    struct DownQuoter;

    #[async_trait]
    impl TollQuoter for DownQuoter {
        async fn quote(
            &self,
            _origin: Coordinate,
            _destination: Coordinate,
            _vehicle: VehicleClass,
            _departure: DateTime<Utc>,
        ) -> Result<TollQuote, TollError> {
            Err(TollError::Api {
                status: 503,
                message: "unavailable".into(),
            })
        }
    }

    fn request(origin: &str, destination: &str) -> TripRequest {
        TripRequest {
            origin: origin.to_string(),
            destination: destination.to_string(),
            vehicle: VehicleClass::Car,
            fuel_efficiency_km_per_unit: 12.5,
            fuel_price_per_unit: 5.50,
        }
    }

    fn two_cities() -> MapGeocoder {
        MapGeocoder::with(&[
            place("São Paulo", -46.63, -23.55),
            place("Rio de Janeiro", -43.17, -22.91),
        ])
    }

    #[tokio::test]
    async fn long_trip_with_provider_down_uses_the_fallback() {
        let planner = TripPlanner::new(
            two_cities(),
            FixedRouter {
                distance_km: 430.0,
                duration_minutes: 360.0,
            },
            TollEstimator::new(DownQuoter),
        );

        let result = planner
            .plan(&request("São Paulo", "Rio de Janeiro"))
            .await
            .unwrap();

        assert_eq!(result.distance_km, 430.0);
        assert_eq!(result.duration_minutes, 360.0);
        assert_eq!(result.fuel_cost, 189.2);
        assert_eq!(result.toll_cost, 53.75);
        assert_eq!(result.total_cost, 242.95);
        assert_eq!(result.toll_source, TollSource::Heuristic);
        assert_eq!(result.tolls.len(), 2);
    }

    #[tokio::test]
    async fn short_trip_with_provider_down_is_toll_free() {
        let planner = TripPlanner::new(
            two_cities(),
            FixedRouter {
                distance_km: 150.0,
                duration_minutes: 110.0,
            },
            TollEstimator::new(DownQuoter),
        );

        let result = planner
            .plan(&request("São Paulo", "Rio de Janeiro"))
            .await
            .unwrap();

        assert_eq!(result.toll_cost, 0.0);
        assert!(result.tolls.is_empty());
        assert_eq!(result.total_cost, result.fuel_cost);
        assert_eq!(result.toll_source, TollSource::Heuristic);
    }

    #[tokio::test]
    async fn unknown_place_fails_the_run() {
        let planner = TripPlanner::new(
            two_cities(),
            FixedRouter {
                distance_km: 430.0,
                duration_minutes: 360.0,
            },
            TollEstimator::new(DownQuoter),
        );

        let result = planner.plan(&request("Atlantis", "Rio de Janeiro")).await;
        assert!(matches!(result, Err(TripError::PlaceNotFound(p)) if p == "Atlantis"));
    }

    #[tokio::test]
    async fn missing_route_fails_the_run() {
        let planner = TripPlanner::new(two_cities(), NoRouteRouter, TollEstimator::new(DownQuoter));

        let result = planner.plan(&request("São Paulo", "Rio de Janeiro")).await;
        assert!(matches!(result, Err(TripError::RouteNotFound)));
    }

    #[tokio::test]
    async fn geometry_carries_labelled_endpoint_markers() {
        let planner = TripPlanner::new(
            two_cities(),
            FixedRouter {
                distance_km: 430.0,
                duration_minutes: 360.0,
            },
            TollEstimator::new(DownQuoter),
        );

        let result = planner
            .plan(&request("São Paulo", "Rio de Janeiro"))
            .await
            .unwrap();

        assert!(result.geometry.is_renderable());
        let origin = result.geometry.origin.as_ref().unwrap();
        assert_eq!(origin.label.as_deref(), Some("São Paulo, Brazil"));
        let destination = result.geometry.destination.as_ref().unwrap();
        assert_eq!(destination.label.as_deref(), Some("Rio de Janeiro, Brazil"));
        assert!(result.geometry.bounds.is_some());
    }

    #[test]
    fn validation_rejects_blank_fields() {
        let mut blank_origin = request(" ", "Rio de Janeiro");
        blank_origin.origin = "  ".to_string();
        assert!(matches!(
            blank_origin.validate(),
            Err(TripError::MissingRequiredField("origin"))
        ));

        let blank_destination = request("São Paulo", "");
        assert!(matches!(
            blank_destination.validate(),
            Err(TripError::MissingRequiredField("destination"))
        ));
    }

    #[test]
    fn validation_rejects_bad_vehicle_parameters() {
        let mut bad = request("São Paulo", "Rio de Janeiro");
        bad.fuel_efficiency_km_per_unit = 0.0;
        assert!(matches!(
            bad.validate(),
            Err(TripError::InvalidVehicleParameters(_))
        ));

        bad.fuel_efficiency_km_per_unit = 12.5;
        bad.fuel_price_per_unit = -1.0;
        assert!(matches!(
            bad.validate(),
            Err(TripError::InvalidVehicleParameters(_))
        ));
    }

    #[test]
    fn stage_names() {
        assert_eq!(PipelineStage::Idle.as_str(), "idle");
        assert_eq!(PipelineStage::ResolvingPlaces.as_str(), "resolving_places");
        assert_eq!(PipelineStage::Completed.as_str(), "completed");
        assert_eq!(PipelineStage::Failed.as_str(), "failed");
    }
}
