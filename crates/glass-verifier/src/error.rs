//! Verifier error types

use thiserror::Error;

/// Errors that can occur when building a verifier
///
/// Verification itself never fails: lookup problems degrade to `Unknown`.
#[derive(Error, Debug)]
pub enum VerifierError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
