//! Process configuration.
//!
//! Credentials are read once at process start into typed values. An absent
//! credential selects documented degraded behavior (geocoding and routing
//! fail hard at the call site; toll lookup runs in permanent fallback mode)
//! instead of surfacing as an undefined failure somewhere downstream.

/// Environment variable holding the OpenRouteService API key.
pub const ORS_KEY_VAR: &str = "ORS_API_KEY";

/// Environment variable holding the TollGuru API key.
pub const TOLL_KEY_VAR: &str = "TOLLGURU_API_KEY";

/// An API credential that may be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    Present(String),
    Absent,
}

impl Credential {
    /// Read a credential from the environment.
    ///
    /// Empty or whitespace-only values count as absent.
    pub fn from_env(var: &str) -> Self {
        match std::env::var(var) {
            Ok(value) if !value.trim().is_empty() => Credential::Present(value),
            _ => Credential::Absent,
        }
    }

    /// The key, if present.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Credential::Present(key) => Some(key),
            Credential::Absent => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Credential::Present(_))
    }
}

/// Configuration assembled once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// OpenRouteService key, shared by geocoding and routing.
    pub ors_key: Credential,

    /// TollGuru key. Absent selects the distance-based fallback estimator.
    pub toll_key: Credential,
}

impl AppConfig {
    /// Read configuration from the environment.
    pub fn from_env() -> Self {
        Self {
            ors_key: Credential::from_env(ORS_KEY_VAR),
            toll_key: Credential::from_env(TOLL_KEY_VAR),
        }
    }
}
