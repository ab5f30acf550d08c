//! Configuration for scan passes
//!
//! Defines pacing (throttle, cooldown) and output bounds (highlights,
//! escalation batch).

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Scanner and its background worker
///
/// # Examples
///
/// ```
/// use glass_scanner::ScannerConfig;
///
/// let config = ScannerConfig::default();
/// assert_eq!(config.cooldown_secs, 45);
///
/// // Re-scan sooner, show more
/// let config = ScannerConfig::eager();
/// assert_eq!(config.max_highlights, 12);
///
/// // Re-scan rarely
/// let config = ScannerConfig::relaxed();
/// assert_eq!(config.cooldown_secs, 120);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Minimum time between two passes (milliseconds)
    /// Default: 200
    pub min_scan_interval_ms: u64,

    /// Trailing throttle that coalesces scroll/resize/mutation triggers (milliseconds)
    /// Default: 300
    pub throttle_ms: u64,

    /// Window during which unchanged content is not verified again (seconds)
    /// Default: 45
    pub cooldown_secs: u64,

    /// Leading characters of the corpus that identify its content
    /// Default: 1200
    pub fingerprint_len: usize,

    /// Corpora shorter than this are not scanned
    /// Default: 40
    pub min_corpus_len: usize,

    /// Highlights reported per pass
    /// Default: 8
    pub max_highlights: usize,

    /// Longest highlight label, ellipsis included
    /// Default: 36
    pub reason_max_chars: usize,

    /// Label used when a verdict carries no note
    #[serde(default = "default_fallback_label")]
    pub fallback_label: String,

    /// Items in one escalation batch
    /// Default: 60
    pub escalation_item_limit: usize,

    /// Characters in one escalation batch
    /// Default: 6000
    pub escalation_char_limit: usize,

    /// Wait for a lookup permit instead of skipping the candidate
    /// Default: true
    #[serde(default = "default_wait_for_lookups")]
    pub wait_for_lookups: bool,
}

fn default_fallback_label() -> String {
    "Likely false".to_string()
}

fn default_wait_for_lookups() -> bool {
    true
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            min_scan_interval_ms: 200,
            throttle_ms: 300,
            cooldown_secs: 45,
            fingerprint_len: 1200,
            min_corpus_len: 40,
            max_highlights: 8,
            reason_max_chars: 36,
            fallback_label: default_fallback_label(),
            escalation_item_limit: 60,
            escalation_char_limit: 6000,
            wait_for_lookups: true,
        }
    }
}

impl ScannerConfig {
    /// Eager configuration: short cooldown, more highlights
    ///
    /// Suited to transcripts, where new text arrives continuously.
    pub fn eager() -> Self {
        Self {
            min_scan_interval_ms: 100,
            throttle_ms: 150,
            cooldown_secs: 10,
            max_highlights: 12,
            ..Self::default()
        }
    }

    /// Relaxed configuration: long cooldown, lookups never queue
    pub fn relaxed() -> Self {
        Self {
            min_scan_interval_ms: 500,
            throttle_ms: 1000,
            cooldown_secs: 120,
            wait_for_lookups: false,
            ..Self::default()
        }
    }

    /// Minimum pass interval as Duration
    pub fn min_scan_interval(&self) -> Duration {
        Duration::from_millis(self.min_scan_interval_ms)
    }

    /// Trigger throttle as Duration
    pub fn throttle(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }

    /// Cooldown window as Duration
    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.cooldown_secs)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.fingerprint_len == 0 {
            return Err("fingerprint_len must be greater than 0".to_string());
        }
        if self.reason_max_chars < 2 {
            return Err("reason_max_chars must be at least 2".to_string());
        }
        if self.escalation_item_limit == 0 {
            return Err("escalation_item_limit must be greater than 0".to_string());
        }
        if self.escalation_char_limit == 0 {
            return Err("escalation_char_limit must be greater than 0".to_string());
        }
        if self.throttle_ms == 0 {
            return Err("throttle_ms must be greater than 0".to_string());
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
