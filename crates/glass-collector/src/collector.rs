//! Core Collector implementation

use crate::config::CollectorConfig;
use glass_domain::traits::TextSource;
use glass_domain::{Corpus, SourceElement};
use std::fmt::Display;
use tracing::{debug, warn};

/// Builds a bounded corpus from a text source
#[derive(Debug, Clone, Default)]
pub struct Collector {
    config: CollectorConfig,
}

impl Collector {
    /// Create a new Collector
    pub fn new(config: CollectorConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    /// Collect the visible text of `source` for pass `generation`
    ///
    /// Invisible elements are skipped, at most `element_cap` visible elements
    /// are considered, and accumulation stops at the first element that does
    /// not fit in the remaining budget.
    pub fn collect<S>(&self, source: &S, generation: u64) -> Corpus
    where
        S: TextSource,
        S::Error: Display,
    {
        let budget = self.config.char_limit;

        let elements = match source.enumerate() {
            Ok(elements) => elements,
            Err(e) => {
                warn!("Text source unavailable, nothing to scan: {}", e);
                return Corpus::empty(generation, budget);
            }
        };

        let mut total = 0usize;
        let mut kept: Vec<SourceElement> = Vec::new();

        for element in elements
            .into_iter()
            .filter(|e| e.visible)
            .take(self.config.element_cap)
        {
            let text = element.text.trim();
            if text.is_empty() {
                continue;
            }

            let separator = usize::from(!kept.is_empty());
            let len = text.chars().count();
            if total + separator + len > budget {
                debug!(
                    "Budget reached after {} elements ({} of {} chars)",
                    kept.len(),
                    total,
                    budget
                );
                break;
            }

            total += separator + len;
            kept.push(SourceElement {
                text: text.to_string(),
                ..element
            });
        }

        debug!(
            "Collected {} elements, {} chars for pass {}",
            kept.len(),
            total,
            generation
        );

        Corpus::new(generation, kept, budget)
    }
}

/// Collect `source` with a character budget and default element cap
pub fn collect<S>(source: &S, char_limit: usize) -> Corpus
where
    S: TextSource,
    S::Error: Display,
{
    let config = CollectorConfig {
        char_limit,
        ..CollectorConfig::default()
    };
    Collector::new(config).collect(source, 0)
}
