//! Configuration for the quick verifier

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Quick verifier configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// Candidates allowed to perform lookups at the same time
    pub max_concurrent_lookups: usize,

    /// Upper bound for each single lookup call (milliseconds)
    pub lookup_timeout_ms: u64,

    /// How long a cached verdict stays valid (seconds)
    pub cache_ttl_secs: u64,

    /// Characters of the lowercased candidate text used as cache key
    pub cache_key_len: usize,

    /// Characters of the candidate sent as the absolutist search query
    pub query_max_chars: usize,

    /// Lowest plausible Everest height in metres
    pub everest_min_m: f64,

    /// Highest plausible Everest height in metres
    pub everest_max_m: f64,

    /// Coverage below which an absolutist claim is unsupported
    pub max_coverage: f64,

    /// Content words an absolutist claim needs before coverage is judged
    pub min_content_words: usize,
}

impl VerifierConfig {
    /// Per-lookup timeout
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }

    /// Cache time-to-live
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Interactive preset: one lookup at a time with a short timeout
    pub fn interactive() -> Self {
        Self {
            max_concurrent_lookups: 1,
            lookup_timeout_ms: 1_500,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_concurrent_lookups == 0 {
            return Err("max_concurrent_lookups must be at least 1".to_string());
        }
        if self.lookup_timeout_ms == 0 {
            return Err("lookup_timeout_ms must be greater than 0".to_string());
        }
        if self.cache_key_len == 0 {
            return Err("cache_key_len must be greater than 0".to_string());
        }
        if self.query_max_chars == 0 {
            return Err("query_max_chars must be greater than 0".to_string());
        }
        if self.everest_min_m >= self.everest_max_m {
            return Err(format!(
                "everest_min_m ({}) must be below everest_max_m ({})",
                self.everest_min_m, self.everest_max_m
            ));
        }
        if !(0.0..=1.0).contains(&self.max_coverage) {
            return Err(format!("max_coverage must be in [0.0, 1.0], got {}", self.max_coverage));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize TOML: {}", e))
    }
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            max_concurrent_lookups: 2,
            lookup_timeout_ms: 4_000,
            cache_ttl_secs: 300,
            cache_key_len: 160,
            query_max_chars: 140,
            everest_min_m: 5_000.0,
            everest_max_m: 10_000.0,
            max_coverage: 0.2,
            min_content_words: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = VerifierConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.cache_ttl(), Duration::from_secs(300));
        assert_eq!(config.max_concurrent_lookups, 2);
    }

    #[test]
    fn test_invalid_everest_bounds() {
        let config = VerifierConfig {
            everest_min_m: 9_000.0,
            everest_max_m: 8_000.0,
            ..VerifierConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_roundtrip_keeps_limits() {
        let config = VerifierConfig {
            max_concurrent_lookups: 4,
            ..VerifierConfig::default()
        };
        let parsed = VerifierConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed.max_concurrent_lookups, 4);
        assert_eq!(parsed.cache_key_len, 160);
    }
}
