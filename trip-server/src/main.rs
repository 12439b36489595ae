use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use trip_server::config::AppConfig;
use trip_server::geocode::{CachedGeocodeClient, GeocodeClient, GeocodeConfig, SuggestionCacheConfig};
use trip_server::pipeline::{PlannerSession, TripPlanner};
use trip_server::routing::{RoutingClient, RoutingConfig};
use trip_server::toll::{TollClient, TollConfig, TollEstimator};
use trip_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();
    if !config.ors_key.is_present() {
        warn!("ORS_API_KEY not set; geocoding and routing calls will fail");
    }

    // Geocoding with a suggestion cache
    let geocode_client = GeocodeClient::new(GeocodeConfig::new(config.ors_key.clone()))
        .expect("failed to create geocoding client");
    let geocoder = Arc::new(CachedGeocodeClient::new(
        geocode_client,
        &SuggestionCacheConfig::default(),
    ));

    // Routing
    let router = RoutingClient::new(RoutingConfig::new(config.ors_key))
        .expect("failed to create routing client");

    // Tolls: live provider when a key is configured, distance estimate otherwise
    let tolls = match config.toll_key.as_key() {
        Some(key) => {
            let client =
                TollClient::new(TollConfig::new(key)).expect("failed to create toll client");
            TollEstimator::new(client)
        }
        None => {
            warn!("TOLLGURU_API_KEY not set; toll costs will use the distance estimate");
            TollEstimator::fallback_only()
        }
    };

    let session = PlannerSession::new(TripPlanner::new(geocoder, router, tolls));
    let state = AppState::new(session);
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!(%addr, "trip planner listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app).await.expect("server error");
}
