//! Shared application state for the HTTP layer.

use std::sync::Arc;

use crate::geocode::CachedGeocodeClient;
use crate::pipeline::PlannerSession;
use crate::routing::RoutingClient;
use crate::toll::TollClient;

/// The session type the server runs with.
pub type AppSession = PlannerSession<Arc<CachedGeocodeClient>, RoutingClient, TollClient>;

/// State shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<AppSession>,
}

impl AppState {
    pub fn new(session: AppSession) -> Self {
        Self {
            session: Arc::new(session),
        }
    }
}
