//! Toll provider HTTP client.

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::domain::{Coordinate, TollLineItem, VehicleClass};

use super::error::TollError;
use super::types::{PointBody, TollRequest, TollResponse};

/// Default base URL for the toll API.
const DEFAULT_BASE_URL: &str = "https://dev.tollguru.com";

/// A usable toll quote from the provider.
#[derive(Debug, Clone)]
pub struct TollQuote {
    /// Effective toll cost (tag preferred over cash).
    pub cost: f64,

    /// Itemized tolls, possibly empty.
    pub items: Vec<TollLineItem>,
}

/// Source of toll quotes, abstracted for testing the estimator's
/// failure handling without a live provider.
#[async_trait::async_trait]
pub trait TollQuoter: Send + Sync {
    /// Request a toll quote for a trip.
    async fn quote(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        vehicle: VehicleClass,
        departure: DateTime<Utc>,
    ) -> Result<TollQuote, TollError>;
}

/// Configuration for the toll client.
#[derive(Debug, Clone)]
pub struct TollConfig {
    /// API key sent in the `x-api-key` header.
    pub api_key: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl TollConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// Toll API client.
#[derive(Debug, Clone)]
pub struct TollClient {
    http: reqwest::Client,
    base_url: String,
}

impl TollClient {
    /// Create a new toll client with the given configuration.
    pub fn new(config: TollConfig) -> Result<Self, TollError> {
        let mut headers = HeaderMap::new();
        let api_key = HeaderValue::from_str(&config.api_key).map_err(|_| TollError::Api {
            status: 0,
            message: "invalid API key format".to_string(),
        })?;
        headers.insert(HeaderName::from_static("x-api-key"), api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }
}

#[async_trait::async_trait]
impl TollQuoter for TollClient {
    async fn quote(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        vehicle: VehicleClass,
        departure: DateTime<Utc>,
    ) -> Result<TollQuote, TollError> {
        let url = format!("{}/v1/calc/route", self.base_url);
        let request = TollRequest {
            source: PointBody {
                lat: origin.latitude(),
                lng: origin.longitude(),
            },
            destination: PointBody {
                lat: destination.latitude(),
                lng: destination.longitude(),
            },
            vehicle_type: vehicle.provider_code(),
            departure_time: departure.to_rfc3339_opts(SecondsFormat::Secs, true),
        };

        let response = self.http.post(&url).json(&request).send().await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TollError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let response: TollResponse = serde_json::from_str(&body).map_err(|e| TollError::Json {
            message: e.to_string(),
        })?;

        quote_from_response(response)
    }
}

/// Extract a usable quote, treating an absent cost breakdown as failure.
pub(super) fn quote_from_response(response: TollResponse) -> Result<TollQuote, TollError> {
    let route = response.route.ok_or(TollError::MissingCosts)?;
    let costs = route.costs.ok_or(TollError::MissingCosts)?;

    let items = route
        .tolls
        .unwrap_or_default()
        .iter()
        .map(|item| item.to_line_item())
        .collect();

    Ok(TollQuote {
        cost: costs.effective(),
        items,
    })
}
