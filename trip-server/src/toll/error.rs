//! Toll client error types.
//!
//! These never cross the estimator boundary: every variant resolves to the
//! fallback estimate.

/// Errors from the toll provider client.
#[derive(Debug, thiserror::Error)]
pub enum TollError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded
    #[error("json parse error: {message}")]
    Json { message: String },

    /// API returned an error status code
    #[error("toll api error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response carried no cost breakdown
    #[error("toll response has no cost breakdown")]
    MissingCosts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            TollError::MissingCosts.to_string(),
            "toll response has no cost breakdown"
        );
        let err = TollError::Api {
            status: 429,
            message: "rate limited".into(),
        };
        assert_eq!(err.to_string(), "toll api error 429: rate limited");
    }
}
