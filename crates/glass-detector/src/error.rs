//! Error types for the Detector

use thiserror::Error;

/// Errors that can occur when building a Detector
///
/// Segmentation and scoring themselves cannot fail.
#[derive(Error, Debug)]
pub enum DetectorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
