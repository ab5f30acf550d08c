//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reference lookup could not be set up
    #[error("Reference error: {0}")]
    Lookup(#[from] glass_reference::LookupError),

    /// Detector could not be built
    #[error("Detector error: {0}")]
    Detector(#[from] glass_detector::DetectorError),

    /// Verifier could not be built
    #[error("Verifier error: {0}")]
    Verifier(#[from] glass_verifier::VerifierError),

    /// Scanner could not be built or its worker failed
    #[error("Scanner error: {0}")]
    Scan(#[from] glass_scanner::ScanError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
