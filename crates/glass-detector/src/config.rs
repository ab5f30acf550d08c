//! Configuration for the Detector
//!
//! The default weights and thresholds are empirical starting points, not
//! derived values. Tune them against a labelled corpus.

use serde::{Deserialize, Serialize};

/// Additive score deltas for each lexical signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Lower bound (chars) of the "reasonable length" window
    pub reasonable_min_len: usize,

    /// Upper bound (chars) of the "reasonable length" window
    pub reasonable_max_len: usize,

    /// Bonus for a length inside the window
    pub length: f64,

    /// Bonus for absolutist language (only, always, never, ...)
    pub absolutist: f64,

    /// Bonus for a number or percentage
    pub numeric: f64,

    /// Bonus for a copula or claim verb (is, has, accounts for, ...)
    pub verb: f64,

    /// Bonus for common myth cues (dead, orbits, flat, ...)
    pub myth: f64,

    /// Delta for attribution phrases (according to, study, ...)
    pub attribution: f64,

    /// Delta for hedging language (may, often, approximately, ...)
    pub hedge: f64,

    /// Sentences shorter than this get `short_death` when they mention a death
    pub short_len: usize,

    /// Bonus for a short sentence mentioning a death
    pub short_death: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            reasonable_min_len: 20,
            reasonable_max_len: 280,
            length: 0.5,
            absolutist: 1.0,
            numeric: 0.8,
            verb: 0.6,
            myth: 0.8,
            attribution: -0.3,
            hedge: -0.8,
            short_len: 40,
            short_death: 1.2,
        }
    }
}

/// Configuration for the Detector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Shortest full-corpus sentence kept (characters)
    pub min_sentence_len: usize,

    /// Longest full-corpus sentence kept (characters)
    pub max_sentence_len: usize,

    /// Inputs shorter than this are treated as a single short-field candidate
    pub short_input_max_len: usize,

    /// Maximum sentences taken from one corpus element
    pub max_sentences_per_element: usize,

    /// Acceptance threshold for full-corpus candidates
    pub full_threshold: f64,

    /// Acceptance threshold for short-field candidates
    pub short_threshold: f64,

    /// Score weights
    #[serde(default)]
    pub weights: ScoreWeights,
}

impl DetectorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.min_sentence_len == 0 {
            return Err("min_sentence_len must be greater than 0".to_string());
        }
        if self.min_sentence_len > self.max_sentence_len {
            return Err("min_sentence_len cannot exceed max_sentence_len".to_string());
        }
        if self.max_sentences_per_element == 0 {
            return Err("max_sentences_per_element must be greater than 0".to_string());
        }
        if self.weights.reasonable_min_len > self.weights.reasonable_max_len {
            return Err("reasonable_min_len cannot exceed reasonable_max_len".to_string());
        }
        if !self.full_threshold.is_finite() || !self.short_threshold.is_finite() {
            return Err("thresholds must be finite".to_string());
        }
        Ok(())
    }
}

impl Default for DetectorConfig {
    /// Default configuration with the stock thresholds (2.2 / 1.4)
    fn default() -> Self {
        Self {
            min_sentence_len: 12,
            max_sentence_len: 400,
            short_input_max_len: 40,
            max_sentences_per_element: 12,
            full_threshold: 2.2,
            short_threshold: 1.4,
            weights: ScoreWeights::default(),
        }
    }
}

impl DetectorConfig {
    /// Strict preset: fewer, stronger candidates
    pub fn strict() -> Self {
        Self {
            full_threshold: 2.6,
            short_threshold: 1.8,
            max_sentences_per_element: 6,
            ..Self::default()
        }
    }

    /// Lenient preset: more candidates reach the verifier
    pub fn lenient() -> Self {
        Self {
            full_threshold: 1.8,
            short_threshold: 1.0,
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
        assert!(DetectorConfig::default().validate().is_ok());
        assert!(DetectorConfig::strict().validate().is_ok());
        assert!(DetectorConfig::lenient().validate().is_ok());
    }

    #[test]
    fn test_invalid_sentence_bounds() {
        let mut config = DetectorConfig::default();
        config.min_sentence_len = 500;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = DetectorConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = DetectorConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.full_threshold, parsed.full_threshold);
        assert_eq!(config.short_threshold, parsed.short_threshold);
        assert_eq!(config.weights, parsed.weights);
    }
}
