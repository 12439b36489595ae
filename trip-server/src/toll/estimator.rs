//! Toll estimation with provider-first, fallback-second resolution.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::domain::{Coordinate, TollLineItem, TollSource, VehicleClass};

use super::client::TollQuoter;
use super::fallback::fallback_estimate;

/// A resolved toll estimate. Always valid, whatever happened upstream.
#[derive(Debug, Clone)]
pub struct TollEstimate {
    /// Total toll cost.
    pub cost: f64,

    /// Itemized tolls, possibly empty.
    pub items: Vec<TollLineItem>,

    /// Where the numbers came from.
    pub source: TollSource,
}

/// Toll estimator: live provider when configured, distance-based fallback
/// otherwise. Never raises to its caller.
pub struct TollEstimator<Q> {
    client: Option<Q>,
}

impl<Q: TollQuoter> TollEstimator<Q> {
    /// Create an estimator backed by a live toll provider.
    pub fn new(client: Q) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Create an estimator in permanent fallback mode (no credentials).
    pub fn fallback_only() -> Self {
        Self { client: None }
    }

    /// Estimate toll cost for a trip.
    ///
    /// Every failure path resolves to the fallback estimate; the result's
    /// `source` records whether the provider or the heuristic produced it.
    pub async fn estimate(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        vehicle: VehicleClass,
        distance_km: f64,
    ) -> TollEstimate {
        match &self.client {
            Some(client) => {
                match client.quote(origin, destination, vehicle, Utc::now()).await {
                    Ok(quote) => {
                        info!(
                            cost = quote.cost,
                            items = quote.items.len(),
                            "toll quote from provider"
                        );
                        return TollEstimate {
                            cost: quote.cost,
                            items: quote.items,
                            source: TollSource::Provider,
                        };
                    }
                    Err(e) => {
                        warn!(error = %e, distance_km, "toll provider failed, falling back to estimate");
                    }
                }
            }
            None => {
                debug!(distance_km, "toll provider not configured, using estimate");
            }
        }

        let (cost, items) = fallback_estimate(distance_km);
        TollEstimate {
            cost,
            items,
            source: TollSource::Heuristic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toll::client::TollQuote;
    use crate::toll::error::TollError;
    use chrono::{DateTime, Utc};

    fn coord(lon: f64, lat: f64) -> Coordinate {
        Coordinate::from_lon_lat(lon, lat).unwrap()
    }

    /// Quoter that always fails in a chosen way.
    struct FailingQuoter(fn() -> TollError);

    #[async_trait::async_trait]
    impl TollQuoter for FailingQuoter {
        async fn quote(
            &self,
            _origin: Coordinate,
            _destination: Coordinate,
            _vehicle: VehicleClass,
            _departure: DateTime<Utc>,
        ) -> Result<TollQuote, TollError> {
            Err((self.0)())
        }
    }

    /// Quoter that returns a fixed quote.
    struct FixedQuoter(f64);

    #[async_trait::async_trait]
    impl TollQuoter for FixedQuoter {
        async fn quote(
            &self,
            _origin: Coordinate,
            _destination: Coordinate,
            _vehicle: VehicleClass,
            _departure: DateTime<Utc>,
        ) -> Result<TollQuote, TollError> {
            Ok(TollQuote {
                cost: self.0,
                items: vec![TollLineItem {
                    name: "Plaza".into(),
                    cost: self.0,
                }],
            })
        }
    }

    fn failure_modes() -> Vec<FailingQuoter> {
        vec![
            FailingQuoter(|| TollError::Api {
                status: 500,
                message: "server error".into(),
            }),
            FailingQuoter(|| TollError::Api {
                status: 429,
                message: "rate limited".into(),
            }),
            FailingQuoter(|| TollError::Json {
                message: "unexpected token".into(),
            }),
            FailingQuoter(|| TollError::MissingCosts),
        ]
    }

    #[tokio::test]
    async fn provider_quote_is_used_verbatim() {
        let estimator = TollEstimator::new(FixedQuoter(42.5));
        let estimate = estimator
            .estimate(coord(-46.63, -23.55), coord(-43.17, -22.91), VehicleClass::Car, 430.0)
            .await;

        assert_eq!(estimate.cost, 42.5);
        assert_eq!(estimate.items.len(), 1);
        assert_eq!(estimate.source, TollSource::Provider);
    }

    #[tokio::test]
    async fn short_trip_failures_resolve_to_zero() {
        for quoter in failure_modes() {
            let estimator = TollEstimator::new(quoter);
            let estimate = estimator
                .estimate(coord(0.0, 0.0), coord(1.0, 1.0), VehicleClass::Car, 150.0)
                .await;

            assert_eq!(estimate.cost, 0.0);
            assert!(estimate.items.is_empty());
            assert_eq!(estimate.source, TollSource::Heuristic);
        }
    }

    #[tokio::test]
    async fn long_trip_failures_resolve_to_distance_estimate() {
        for quoter in failure_modes() {
            let estimator = TollEstimator::new(quoter);
            let estimate = estimator
                .estimate(coord(0.0, 0.0), coord(1.0, 1.0), VehicleClass::Car, 430.0)
                .await;

            assert_eq!(estimate.cost, 53.75);
            assert_eq!(estimate.items.len(), 2);
            assert_eq!(estimate.source, TollSource::Heuristic);
        }
    }

    #[tokio::test]
    async fn fallback_only_mode_never_quotes() {
        let estimator = TollEstimator::<FixedQuoter>::fallback_only();
        let estimate = estimator
            .estimate(coord(0.0, 0.0), coord(1.0, 1.0), VehicleClass::Motorcycle, 430.0)
            .await;

        assert_eq!(estimate.cost, 53.75);
        assert_eq!(estimate.source, TollSource::Heuristic);
    }
}
