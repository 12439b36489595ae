//! Latest-result tracking with request fencing.
//!
//! Each planning run takes a generation number before it starts. Only the
//! outcome of the highest generation ever wins the slot, so a slow stale
//! run can never overwrite the result of a newer one.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;
use tracing::debug;

use crate::toll::TollQuoter;

use super::error::TripError;
use super::planner::{GeocodeProvider, RouteProvider, TripPlanner, TripRequest, TripResult};

/// Outcome of a planning run, as seen by result consumers.
#[derive(Debug, Clone)]
pub enum TripOutcome {
    /// The run completed with a planned trip.
    Completed(TripResult),

    /// The run failed; both fields are user-facing.
    Failed { title: String, message: String },
}

/// Fenced slot holding the latest planning outcome.
#[derive(Debug, Default)]
pub struct ResultSlot {
    generation: AtomicU64,
    latest: RwLock<Option<(u64, TripOutcome)>>,
}

impl ResultSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a generation number for a run about to start.
    pub fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Publish a run's outcome. Outcomes from superseded generations are
    /// discarded.
    pub async fn publish(&self, generation: u64, outcome: TripOutcome) {
        let mut latest = self.latest.write().await;
        match latest.as_ref() {
            Some((current, _)) if *current > generation => {
                debug!(generation, current, "discarding stale trip outcome");
            }
            _ => {
                *latest = Some((generation, outcome));
            }
        }
    }

    /// The most recent published outcome, if any.
    pub async fn latest(&self) -> Option<TripOutcome> {
        self.latest.read().await.as_ref().map(|(_, o)| o.clone())
    }
}

/// A planner plus the fenced slot its results publish into.
pub struct PlannerSession<G, R, Q> {
    planner: TripPlanner<G, R, Q>,
    slot: Arc<ResultSlot>,
}

impl<G, R, Q> PlannerSession<G, R, Q>
where
    G: GeocodeProvider,
    R: RouteProvider,
    Q: TollQuoter,
{
    pub fn new(planner: TripPlanner<G, R, Q>) -> Self {
        Self {
            planner,
            slot: Arc::new(ResultSlot::new()),
        }
    }

    /// Plan a trip and publish its outcome into the slot.
    pub async fn calculate(&self, request: &TripRequest) -> Result<TripResult, TripError> {
        let generation = self.slot.begin();

        match self.planner.plan(request).await {
            Ok(result) => {
                self.slot
                    .publish(generation, TripOutcome::Completed(result.clone()))
                    .await;
                Ok(result)
            }
            Err(e) => {
                self.slot
                    .publish(
                        generation,
                        TripOutcome::Failed {
                            title: e.title().to_string(),
                            message: e.user_message(),
                        },
                    )
                    .await;
                Err(e)
            }
        }
    }

    /// The latest published outcome.
    pub async fn latest(&self) -> Option<TripOutcome> {
        self.slot.latest().await
    }

    /// Place suggestions, delegated to the planner.
    pub async fn suggest(&self, query: &str) -> Vec<crate::domain::GeocodeSuggestion> {
        self.planner.suggest(query).await
    }
}
