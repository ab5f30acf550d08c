//! Glass Reference Lookup Layer
//!
//! Implementations of the `ReferenceLookup` trait from `glass-domain`.
//!
//! # Lookups
//!
//! - `WikipediaLookup`: title search and article summaries over HTTP
//! - `OfflineLookup`: never finds anything, for air-gapped runs
//! - `MockLookup`: deterministic canned answers for testing
//!
//! Lookups are best effort. Callers treat any error exactly like "no match".
//!
//! # Examples
//!
//! ```
//! use glass_reference::MockLookup;
//! use glass_domain::traits::ReferenceLookup;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let lookup = MockLookup::new()
//!     .with_title("elon musk", "Elon Musk")
//!     .with_summary("Elon Musk", "Elon Reeve Musk (born 1971) is a businessman.");
//!
//! let title = lookup.search_title("elon musk").await.unwrap();
//! assert_eq!(title.as_deref(), Some("Elon Musk"));
//! assert_eq!(lookup.call_count(), 1);
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod mock;
pub mod wikipedia;

use glass_domain::traits::ReferenceLookup;
use thiserror::Error;

pub use config::ReferenceConfig;
pub use mock::MockLookup;
pub use wikipedia::WikipediaLookup;

/// Errors that can occur during reference lookups
#[derive(Error, Debug)]
pub enum LookupError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Response body could not be understood
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Endpoint URL is unusable
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Generic error
    #[error("Lookup error: {0}")]
    Other(String),
}

/// Lookup that never finds anything
///
/// Lets every verification step run without network access. Candidates that
/// need a reference come back `Unknown`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineLookup;

impl ReferenceLookup for OfflineLookup {
    type Error = LookupError;

    async fn search_title(&self, _query: &str) -> Result<Option<String>, LookupError> {
        Ok(None)
    }

    async fn summary(&self, _title: &str) -> Result<Option<String>, LookupError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_lookup_finds_nothing() {
        let lookup = OfflineLookup;
        assert!(lookup.search_title("anything").await.unwrap().is_none());
        assert!(lookup.summary("Anything").await.unwrap().is_none());
    }

    #[test]
    fn test_error_display() {
        let err = LookupError::Communication("HTTP 503".to_string());
        assert_eq!(err.to_string(), "Communication error: HTTP 503");
    }
}
