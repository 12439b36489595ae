//! Toll cost types.

/// One itemized toll along a route.
#[derive(Debug, Clone, PartialEq)]
pub struct TollLineItem {
    /// Toll plaza name, or a synthetic name for estimated items.
    pub name: String,

    /// Cost in the deployment currency, never negative.
    pub cost: f64,
}

/// Provenance of a toll estimate.
///
/// Downstream consumers must be able to tell a real provider quote apart
/// from the distance-based heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TollSource {
    /// Costs came from the live toll provider.
    Provider,

    /// Costs came from the deterministic distance-based fallback.
    Heuristic,
}

impl TollSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            TollSource::Provider => "provider",
            TollSource::Heuristic => "heuristic",
        }
    }
}
