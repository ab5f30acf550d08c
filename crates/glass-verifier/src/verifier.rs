//! Quick verifier: fixed rules first, then lookup-backed checks

use crate::config::VerifierConfig;
use crate::error::VerifierError;
use crate::rules::{self, MythRule};
use glass_domain::traits::ReferenceLookup;
use glass_domain::{Candidate, Verdict};
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::debug;

/// Note attached when a death claim targets someone presumed alive
pub const DEATH_RUMOR_NOTE: &str = "rule: death-rumor pattern";

/// Note attached when a reference summary does not back an absolute claim
pub const UNSUPPORTED_NOTE: &str = "reference: key terms unsupported";

/// Heuristic, pre-LLM verifier
///
/// Checks run in priority order and the first `Incorrect` wins:
///
/// 1. fixed myth patterns, no lookup
/// 2. death rumors against the subject's encyclopedia summary
/// 3. absolute claims whose content words the nearest summary does not cover
///
/// Everything else is `Unknown`. Lookup errors, timeouts and missing results
/// are logged and read as "no opinion"; verification never fails.
///
/// Only candidates that reach a lookup take a permit, so at most
/// `max_concurrent_lookups` candidates talk to the reference at once.
pub struct QuickVerifier<L> {
    lookup: L,
    config: VerifierConfig,
    permits: Arc<Semaphore>,
}

impl<L> QuickVerifier<L>
where
    L: ReferenceLookup,
    L::Error: Display,
{
    /// Create a new verifier
    pub fn new(lookup: L, config: VerifierConfig) -> Self {
        let permits = Arc::new(Semaphore::new(config.max_concurrent_lookups.max(1)));
        Self {
            lookup,
            config,
            permits,
        }
    }

    /// Create a verifier, rejecting an invalid configuration
    pub fn try_new(lookup: L, config: VerifierConfig) -> Result<Self, VerifierError> {
        config.validate().map_err(VerifierError::Config)?;
        Ok(Self::new(lookup, config))
    }

    /// Configuration in use
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Reference lookup in use
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Lookup permits currently free
    pub fn available_permits(&self) -> usize {
        self.permits.available_permits()
    }

    /// Verify a candidate, waiting for a lookup permit when one is needed
    pub async fn verify(&self, candidate: &Candidate) -> Verdict {
        if let Some(verdict) = self.local_verdict(candidate) {
            return verdict;
        }

        match self.permits.acquire().await {
            Ok(_permit) => self.lookup_checks(candidate).await,
            Err(_) => Verdict::unknown(candidate.clone()),
        }
    }

    /// Verify a candidate without waiting
    ///
    /// Returns `None` when the candidate needs a lookup and every permit is
    /// taken. The candidate stays eligible for a later pass.
    pub async fn try_verify(&self, candidate: &Candidate) -> Option<Verdict> {
        if let Some(verdict) = self.local_verdict(candidate) {
            return Some(verdict);
        }

        let Ok(_permit) = self.permits.try_acquire() else {
            debug!("Lookup limit reached, skipping \"{}\"", candidate.text);
            return None;
        };
        Some(self.lookup_checks(candidate).await)
    }

    /// Whether verifying `text` would hit the reference lookup
    pub fn needs_lookup(&self, text: &str) -> bool {
        let text = text.trim();
        rules::death_subject(text).is_some() || self.absolutist_words(text).is_some()
    }

    /// Verdict reachable without a lookup: a fixed rule, or nothing to look up
    fn local_verdict(&self, candidate: &Candidate) -> Option<Verdict> {
        let text = candidate.text.trim();

        if let Some(rule) = MythRule::find(text, &self.config) {
            debug!("Rule {:?} matched \"{}\"", rule, text);
            return Some(Verdict::incorrect(candidate.clone(), rule.note()));
        }
        if !self.needs_lookup(text) {
            return Some(Verdict::unknown(candidate.clone()));
        }
        None
    }

    /// Content words of an absolute claim with enough of them to judge coverage
    fn absolutist_words(&self, text: &str) -> Option<Vec<String>> {
        if !rules::is_absolutist(text) {
            return None;
        }
        let words = rules::content_words(text);
        (words.len() >= self.config.min_content_words).then_some(words)
    }

    async fn lookup_checks(&self, candidate: &Candidate) -> Verdict {
        let text = candidate.text.trim();

        if let Some(subject) = rules::death_subject(text) {
            if let Some(summary) = self.nearest_summary(subject).await {
                if rules::is_presumed_alive(&summary) {
                    debug!("\"{}\" is presumed alive", subject);
                    return Verdict::incorrect(candidate.clone(), DEATH_RUMOR_NOTE);
                }
            }
        }

        if let Some(words) = self.absolutist_words(text) {
            let query = rules::truncate_chars(text, self.config.query_max_chars);
            if let Some(summary) = self.nearest_summary(query).await {
                let coverage = rules::coverage(&words, &summary);
                debug!("Coverage {:.2} for \"{}\"", coverage, text);
                if coverage < self.config.max_coverage {
                    return Verdict::incorrect(candidate.clone(), UNSUPPORTED_NOTE);
                }
            }
        }

        Verdict::unknown(candidate.clone())
    }

    /// Summary of the best matching article for `query`
    async fn nearest_summary(&self, query: &str) -> Option<String> {
        let title = self.bounded(self.lookup.search_title(query)).await?;
        self.bounded(self.lookup.summary(&title)).await
    }

    /// Run one lookup under the timeout; every failure reads as `None`
    async fn bounded<F>(&self, call: F) -> Option<String>
    where
        F: Future<Output = Result<Option<String>, L::Error>>,
    {
        match tokio::time::timeout(self.config.lookup_timeout(), call).await {
            Ok(Ok(found)) => found,
            Ok(Err(e)) => {
                debug!("Reference lookup failed: {}", e);
                None
            }
            Err(_) => {
                debug!(
                    "Reference lookup timed out after {:?}",
                    self.config.lookup_timeout()
                );
                None
            }
        }
    }
}
