//! Configuration management for the CLI.
//!
//! One TOML file holds a section per pipeline stage plus CLI settings:
//!
//! ```toml
//! [settings]
//! color = true
//! format = "text"
//!
//! [scanner]
//! cooldown_secs = 45
//! # ...
//! ```
//!
//! Missing sections fall back to their defaults. A section that is present
//! must be complete apart from the fields that carry their own defaults.

use crate::error::{CliError, Result};
use glass_collector::CollectorConfig;
use glass_detector::DetectorConfig;
use glass_reference::ReferenceConfig;
use glass_scanner::ScannerConfig;
use glass_verifier::VerifierConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlassConfig {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Text collection limits
    #[serde(default)]
    pub collector: CollectorConfig,

    /// Segmentation and scoring
    #[serde(default)]
    pub detector: DetectorConfig,

    /// Encyclopedia endpoint
    #[serde(default)]
    pub reference: ReferenceConfig,

    /// Quick verification rules and lookup limits
    #[serde(default)]
    pub verifier: VerifierConfig,

    /// Pass pacing and report bounds
    #[serde(default)]
    pub scanner: ScannerConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text and tables
    Text,
    /// JSON format
    Json,
}

impl GlassConfig {
    /// Default configuration file path: `~/.glass/config.toml`.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".glass").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default path is read
    /// when present and built-in defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let path = Self::default_path()?;
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };

        let contents = fs::read_to_string(&path).map_err(|e| {
            CliError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: GlassConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.collector.validate().map_err(section("collector"))?;
        self.detector.validate().map_err(section("detector"))?;
        self.reference.validate().map_err(section("reference"))?;
        self.verifier.validate().map_err(section("verifier"))?;
        self.scanner.validate().map_err(section("scanner"))?;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
        }
    }
}

fn section(name: &'static str) -> impl Fn(String) -> CliError {
    move |e| CliError::Config(format!("[{}] {}", name, e))
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_default_config() {
        let config = GlassConfig::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Text);
        assert_eq!(config.scanner.cooldown_secs, 45);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = GlassConfig::from_toml("[settings]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert!(config.settings.color);
        assert_eq!(config.verifier.max_concurrent_lookups, 2);
    }

    #[test]
    fn test_invalid_section_is_named() {
        let mut config = GlassConfig::default();
        config.verifier.max_concurrent_lookups = 0;
        let text = config.to_toml().unwrap();

        let err = GlassConfig::from_toml(&text).unwrap_err();
        assert!(err.to_string().contains("[verifier]"));
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[settings]\ncolor = false").unwrap();

        let config = GlassConfig::load(Some(file.path())).unwrap();
        assert!(!config.settings.color);
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let dir = tempdir().unwrap();
        let result = GlassConfig::load(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_saved_file_loads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = GlassConfig::default();
        config.scanner.max_highlights = 3;
        config.save_to(&path).unwrap();

        let loaded = GlassConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.scanner.max_highlights, 3);
        assert_eq!(loaded.reference.endpoint, config.reference.endpoint);
    }
}
