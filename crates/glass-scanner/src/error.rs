//! Error types for scan operations

use thiserror::Error;

/// Errors that can occur when building or running a scanner
///
/// A scan pass itself never fails; every failure path maps to a `ScanOutcome`.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Worker error (channel or runtime issues)
    #[error("Worker error: {0}")]
    Worker(String),
}
