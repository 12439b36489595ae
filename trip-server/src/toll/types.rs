//! Toll API request and response DTOs.

use serde::{Deserialize, Serialize};

use crate::domain::TollLineItem;

/// Request body for `calc/route`.
#[derive(Debug, Clone, Serialize)]
pub struct TollRequest {
    pub source: PointBody,
    pub destination: PointBody,
    #[serde(rename = "vehicleType")]
    pub vehicle_type: &'static str,
    /// ISO 8601 departure timestamp.
    pub departure_time: String,
}

/// A `{lat, lng}` point in the request body.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PointBody {
    pub lat: f64,
    pub lng: f64,
}

/// Response from `calc/route`.
#[derive(Debug, Clone, Deserialize)]
pub struct TollResponse {
    pub route: Option<TollRoute>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TollRoute {
    /// Cost breakdown; absence means no usable data.
    pub costs: Option<TollCosts>,

    /// Itemized tolls along the route.
    pub tolls: Option<Vec<TollItemDto>>,
}

/// Cost breakdown by payment method.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TollCosts {
    /// Electronic tag cost, preferred when present.
    pub tag: Option<f64>,

    /// Cash cost.
    pub cash: Option<f64>,
}

impl TollCosts {
    /// Effective toll cost: tag, else cash, else zero.
    pub fn effective(&self) -> f64 {
        self.tag.or(self.cash).unwrap_or(0.0)
    }
}

/// One toll plaza in the provider's itemized list.
#[derive(Debug, Clone, Deserialize)]
pub struct TollItemDto {
    pub name: Option<String>,
    pub cost: Option<f64>,
    #[serde(rename = "tagCost")]
    pub tag_cost: Option<f64>,
    #[serde(rename = "cashCost")]
    pub cash_cost: Option<f64>,
}

impl TollItemDto {
    /// Convert to a domain line item, defaulting missing fields and
    /// clamping negative costs to zero.
    pub fn to_line_item(&self) -> TollLineItem {
        let cost = self
            .cost
            .or(self.tag_cost)
            .or(self.cash_cost)
            .unwrap_or(0.0);
        TollLineItem {
            name: self.name.clone().unwrap_or_else(|| "Toll".to_string()),
            cost: cost.max(0.0),
        }
    }
}
