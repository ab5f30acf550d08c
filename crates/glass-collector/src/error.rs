//! Error types for the Collector

use thiserror::Error;

/// Errors that can occur while enumerating a text source
#[derive(Error, Debug)]
pub enum CollectorError {
    /// The source root is not available (detached document, closed stream)
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
