//! Configuration for reference lookups

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default encyclopedia endpoint
pub const DEFAULT_ENDPOINT: &str = "https://en.wikipedia.org";

/// Configuration for the Wikipedia lookup client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceConfig {
    /// Base URL; `/w/api.php` and `/api/rest_v1/...` are appended
    pub endpoint: String,

    /// Per-request timeout (seconds)
    pub timeout_secs: u64,

    /// Attempts per request before giving up
    pub max_retries: u32,

    /// User-Agent sent with every request
    pub user_agent: String,
}

impl ReferenceConfig {
    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.trim().is_empty() {
            return Err("endpoint must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        if self.max_retries == 0 {
            return Err("max_retries must be at least 1".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 8,
            max_retries: 2,
            user_agent: concat!("glass-claim-detector/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
