//! Trait definitions for external interactions
//!
//! These traits define the boundaries between detector logic and the outside
//! world. Implementations live in other crates (glass-collector,
//! glass-reference).

use crate::SourceElement;
use std::future::Future;

/// A source of visible text
///
/// Abstracts over a live DOM subtree, an accumulating transcript and fetched
/// HTML. Sources that have no notion of visibility report every element as
/// visible. Sources must leave out the detector's own overlay UI.
///
/// Implemented by the collector layer (glass-collector)
pub trait TextSource {
    /// Error type for enumeration
    type Error;

    /// Enumerate the source's elements in document order
    fn enumerate(&self) -> Result<Vec<SourceElement>, Self::Error>;
}

/// Read-only, best-effort encyclopedia lookup
///
/// Both operations return `Ok(None)` when nothing matches. Callers treat
/// every error as "no opinion".
///
/// Implemented by the infrastructure layer (glass-reference)
pub trait ReferenceLookup {
    /// Error type for lookup operations
    type Error;

    /// Best matching article title for a keyword query
    fn search_title(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send;

    /// Short prose summary for an article title
    fn summary(
        &self,
        title: &str,
    ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send;
}
