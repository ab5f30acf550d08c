//! Mock lookup for deterministic testing

use crate::LookupError;
use glass_domain::traits::ReferenceLookup;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock reference lookup
///
/// Answers from canned maps without any network calls. Queries are matched
/// case-insensitively after trimming; titles are matched exactly.
///
/// # Examples
///
/// ```
/// use glass_reference::MockLookup;
///
/// let lookup = MockLookup::new()
///     .with_default_title("Mount Everest")
///     .with_summary("Mount Everest", "Mount Everest is 8,849 m tall.");
/// assert_eq!(lookup.call_count(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockLookup {
    titles: Arc<Mutex<HashMap<String, String>>>,
    summaries: Arc<Mutex<HashMap<String, String>>>,
    default_title: Option<String>,
    failing: bool,
    delay: Option<Duration>,
    call_count: Arc<Mutex<usize>>,
}

impl MockLookup {
    /// Create an empty mock that finds nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `query` with `title`
    pub fn with_title(self, query: impl AsRef<str>, title: impl Into<String>) -> Self {
        self.titles
            .lock()
            .unwrap()
            .insert(normalize_query(query.as_ref()), title.into());
        self
    }

    /// Answer every unmatched query with `title`
    pub fn with_default_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = Some(title.into());
        self
    }

    /// Summary text for `title`
    pub fn with_summary(self, title: impl Into<String>, summary: impl Into<String>) -> Self {
        self.summaries
            .lock()
            .unwrap()
            .insert(title.into(), summary.into());
        self
    }

    /// Fail every call with a communication error
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Sleep before answering each call
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of lookups made (searches and summaries)
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }

    async fn begin_call(&self) -> Result<(), LookupError> {
        *self.call_count.lock().unwrap() += 1;

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing {
            return Err(LookupError::Communication("mock lookup failure".to_string()));
        }
        Ok(())
    }
}

fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

impl ReferenceLookup for MockLookup {
    type Error = LookupError;

    async fn search_title(&self, query: &str) -> Result<Option<String>, LookupError> {
        self.begin_call().await?;

        let found = self
            .titles
            .lock()
            .unwrap()
            .get(&normalize_query(query))
            .cloned();
        Ok(found.or_else(|| self.default_title.clone()))
    }

    async fn summary(&self, title: &str) -> Result<Option<String>, LookupError> {
        self.begin_call().await?;
        Ok(self.summaries.lock().unwrap().get(title).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_query_matching_is_case_insensitive() {
        let lookup = MockLookup::new().with_title("Elon Musk", "Elon Musk");
        let title = lookup.search_title("  elon MUSK ").await.unwrap();
        assert_eq!(title.as_deref(), Some("Elon Musk"));
    }

    #[tokio::test]
    async fn test_unmatched_query_uses_default() {
        let lookup = MockLookup::new();
        assert!(lookup.search_title("nothing").await.unwrap().is_none());

        let lookup = lookup.with_default_title("Earth");
        assert_eq!(
            lookup.search_title("nothing").await.unwrap().as_deref(),
            Some("Earth")
        );
    }

    #[tokio::test]
    async fn test_failing_counts_calls() {
        let lookup = MockLookup::new().failing();
        assert!(lookup.search_title("x").await.is_err());
        assert!(lookup.summary("X").await.is_err());
        assert_eq!(lookup.call_count(), 2);

        lookup.reset_call_count();
        assert_eq!(lookup.call_count(), 0);
    }

    #[tokio::test]
    async fn test_clones_share_call_count() {
        let lookup = MockLookup::new().with_summary("Earth", "Earth is the third planet.");
        let clone = lookup.clone();
        clone.summary("Earth").await.unwrap();
        assert_eq!(lookup.call_count(), 1);
    }
}
