//! Configuration for the Collector

use serde::{Deserialize, Serialize};

/// Configuration for the Collector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectorConfig {
    /// Maximum corpus length in characters, newline separators included
    pub char_limit: usize,

    /// Maximum number of visible elements considered per pass
    pub element_cap: usize,

    /// Maximum paragraphs taken from fetched HTML
    #[serde(default = "default_html_max_paragraphs")]
    pub html_max_paragraphs: usize,

    /// Minimum paragraph length (characters) kept from fetched HTML
    #[serde(default = "default_html_min_paragraph_len")]
    pub html_min_paragraph_len: usize,
}

fn default_html_max_paragraphs() -> usize {
    120
}

fn default_html_min_paragraph_len() -> usize {
    40
}

impl CollectorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.char_limit == 0 {
            return Err("char_limit must be greater than 0".to_string());
        }
        if self.element_cap == 0 {
            return Err("element_cap must be greater than 0".to_string());
        }
        if self.html_max_paragraphs == 0 {
            return Err("html_max_paragraphs must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for CollectorConfig {
    /// Full-page scan: 16,000 characters from at most 600 elements
    fn default() -> Self {
        Self {
            char_limit: 16_000,
            element_cap: 600,
            html_max_paragraphs: default_html_max_paragraphs(),
            html_min_paragraph_len: default_html_min_paragraph_len(),
        }
    }
}

impl CollectorConfig {
    /// Compact preset for batch escalation: 6,000 characters, 200 elements
    pub fn compact() -> Self {
        Self {
            char_limit: 6_000,
            element_cap: 200,
            ..Self::default()
        }
    }

    /// Server-side page fetch preset: 12,000 characters
    pub fn fetched_page() -> Self {
        Self {
            char_limit: 12_000,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert!(CollectorConfig::default().validate().is_ok());
        assert!(CollectorConfig::compact().validate().is_ok());
        assert!(CollectorConfig::fetched_page().validate().is_ok());
    }

    #[test]
    fn test_zero_budget_is_invalid() {
        let mut config = CollectorConfig::default();
        config.char_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = CollectorConfig::from_toml("char_limit = 8000\nelement_cap = 50\n").unwrap();
        assert_eq!(config.char_limit, 8000);
        assert_eq!(config.html_max_paragraphs, 120);
    }
}
