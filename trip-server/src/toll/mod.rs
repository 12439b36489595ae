//! Toll cost acquisition with a deterministic fallback.
//!
//! The live toll provider is queried once per trip; any failure or absence
//! of usable cost data resolves to the distance-based fallback estimate.
//! Nothing in this module ever raises to the pipeline.

mod client;
mod error;
mod estimator;
mod fallback;
mod types;

pub use client::{TollClient, TollConfig, TollQuote, TollQuoter};
pub use error::TollError;
pub use estimator::{TollEstimate, TollEstimator};
pub use fallback::{FALLBACK_MIN_DISTANCE_KM, FALLBACK_RATE_PER_100_KM, fallback_estimate};
pub use types::TollResponse;
