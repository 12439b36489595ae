//! Geocoding client error types.

/// Errors from the geocoding client.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded
    #[error("json parse error: {message}")]
    Json { message: String },

    /// API returned an error status code
    #[error("geocoding api error {status}: {message}")]
    Api { status: u16, message: String },

    /// Invalid or missing API key
    #[error("unauthorized (invalid geocoding api key)")]
    Unauthorized,

    /// Provider returned zero features for the query
    #[error("no match found for place: {0}")]
    PlaceNotFound(String),

    /// Top match carried no usable coordinate geometry
    #[error("invalid coordinate data for place: {0}")]
    InvalidCoordinate(String),

    /// No credential was configured at startup
    #[error("geocoding not configured: {0} is not set")]
    NotConfigured(&'static str),
}
