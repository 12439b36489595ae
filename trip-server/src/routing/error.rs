//! Routing client error types.

/// Errors from the routing client.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded
    #[error("json parse error: {message}")]
    Json { message: String },

    /// API returned an error status code
    #[error("routing api error {status}: {message}")]
    Api { status: u16, message: String },

    /// Invalid or missing API key
    #[error("unauthorized (invalid routing api key)")]
    Unauthorized,

    /// Provider returned no route features
    #[error("no route found between the requested coordinates")]
    RouteNotFound,

    /// Returned route lacked a summary or coordinate geometry
    #[error("incomplete route data: {0}")]
    IncompleteRouteData(&'static str),

    /// No credential was configured at startup
    #[error("routing not configured: {0} is not set")]
    NotConfigured(&'static str),
}
