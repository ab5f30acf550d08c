//! Core Scanner implementation

use crate::config::ScannerConfig;
use crate::error::ScanError;
use crate::metrics::ScanMetrics;
use crate::report::{build_escalations, Highlight, ScanOutcome, ScanReport};
use glass_collector::Collector;
use glass_detector::Detector;
use glass_domain::traits::{ReferenceLookup, TextSource};
use glass_domain::{Candidate, Corpus, ElementRef, InputMode, SourceElement, Verdict, VerdictKind};
use glass_verifier::{QuickVerifier, VerdictCache};
use std::fmt::Display;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Runs scan passes: collect, segment, score, verify, report
///
/// The scanner owns all per-pass state. Each collection gets a new
/// generation; element references from older generations no longer resolve.
/// The verdict cache survives across passes.
///
/// A new scanner starts disabled.
pub struct Scanner<L> {
    config: ScannerConfig,
    collector: Collector,
    detector: Detector,
    verifier: Arc<QuickVerifier<L>>,
    cache: VerdictCache,
    metrics: ScanMetrics,
    enabled: bool,
    generation: u64,
    current: Option<Corpus>,
    last_pass_at: Option<Instant>,
    last_completed: Option<(String, Instant)>,
}

impl<L> Scanner<L>
where
    L: ReferenceLookup + Send + Sync + 'static,
    L::Error: Display,
{
    /// Create a scanner from its parts
    pub fn new(
        config: ScannerConfig,
        collector: Collector,
        detector: Detector,
        verifier: QuickVerifier<L>,
    ) -> Self {
        let cache = VerdictCache::new(
            verifier.config().cache_ttl(),
            verifier.config().cache_key_len,
        );
        Self {
            config,
            collector,
            detector,
            verifier: Arc::new(verifier),
            cache,
            metrics: ScanMetrics::new(),
            enabled: false,
            generation: 0,
            current: None,
            last_pass_at: None,
            last_completed: None,
        }
    }

    /// Create a scanner, rejecting an invalid configuration
    pub fn try_new(
        config: ScannerConfig,
        collector: Collector,
        detector: Detector,
        verifier: QuickVerifier<L>,
    ) -> Result<Self, ScanError> {
        config.validate().map_err(ScanError::Config)?;
        collector.config().validate().map_err(ScanError::Config)?;
        detector.config().validate().map_err(ScanError::Config)?;
        verifier.config().validate().map_err(ScanError::Config)?;
        Ok(Self::new(config, collector, detector, verifier))
    }

    /// Scanner with default collector, detector and verifier settings
    pub fn with_lookup(lookup: L) -> Self {
        Self::new(
            ScannerConfig::default(),
            Collector::default(),
            Detector::default(),
            QuickVerifier::new(lookup, Default::default()),
        )
    }

    /// Start accepting passes
    pub fn enable(&mut self) {
        if !self.enabled {
            info!("Scanner enabled");
        }
        self.enabled = true;
    }

    /// Stop accepting passes and drop the current pass
    pub fn disable(&mut self) {
        if self.enabled {
            info!("Scanner disabled");
        }
        self.enabled = false;
        self.current = None;
    }

    /// Check if the scanner accepts passes
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Configuration in use
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Detector in use
    pub fn detector(&self) -> &Detector {
        &self.detector
    }

    /// Shared verifier
    pub fn verifier(&self) -> &Arc<QuickVerifier<L>> {
        &self.verifier
    }

    /// Verdict cache
    pub fn cache(&self) -> &VerdictCache {
        &self.cache
    }

    /// Counters across passes
    pub fn metrics(&self) -> &ScanMetrics {
        &self.metrics
    }

    /// Reset the counters
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    /// Generation of the most recent collection
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Corpus of the most recent completed (or empty) pass
    pub fn current_corpus(&self) -> Option<&Corpus> {
        self.current.as_ref()
    }

    /// Collect `source` under a fresh generation
    pub fn collect<S>(&mut self, source: &S) -> Corpus
    where
        S: TextSource,
        S::Error: Display,
    {
        self.generation += 1;
        self.collector.collect(source, self.generation)
    }

    /// Resolve an element reference against the current pass
    ///
    /// References from any other generation are stale and yield `None`.
    pub fn resolve(&self, element: ElementRef) -> Option<&SourceElement> {
        self.current.as_ref()?.resolve(element)
    }

    /// Whether a report belongs to the current pass
    pub fn is_current(&self, report: &ScanReport) -> bool {
        self.current
            .as_ref()
            .is_some_and(|c| c.generation() == report.generation)
    }

    /// Collect `source` and run a pass now
    pub async fn scan<S>(&mut self, source: &S) -> ScanOutcome
    where
        S: TextSource,
        S::Error: Display,
    {
        self.scan_at(source, Instant::now()).await
    }

    /// Collect `source` and run a pass at `now`
    ///
    /// Nothing is collected when the pass is refused up front.
    pub async fn scan_at<S>(&mut self, source: &S, now: Instant) -> ScanOutcome
    where
        S: TextSource,
        S::Error: Display,
    {
        if let Some(outcome) = self.admit(now) {
            return self.finish(outcome);
        }
        let corpus = self.collect(source);
        let outcome = self.run_pass(corpus, now).await;
        self.finish(outcome)
    }

    /// Run a pass over a shared source, holding its lock only while collecting
    pub async fn scan_shared<S>(&mut self, source: &Mutex<S>, now: Instant) -> ScanOutcome
    where
        S: TextSource,
        S::Error: Display,
    {
        if let Some(outcome) = self.admit(now) {
            return self.finish(outcome);
        }
        let corpus = {
            let guard = source.lock().await;
            self.collect(&*guard)
        };
        let outcome = self.run_pass(corpus, now).await;
        self.finish(outcome)
    }

    /// Run a pass over an already collected corpus at `now`
    pub async fn scan_corpus(&mut self, corpus: Corpus, now: Instant) -> ScanOutcome {
        if let Some(outcome) = self.admit(now) {
            return self.finish(outcome);
        }
        self.generation = self.generation.max(corpus.generation());
        let outcome = self.run_pass(corpus, now).await;
        self.finish(outcome)
    }

    /// Lifecycle and minimum-interval gate
    fn admit(&mut self, now: Instant) -> Option<ScanOutcome> {
        if !self.enabled {
            return Some(ScanOutcome::Disabled);
        }
        if let Some(last) = self.last_pass_at {
            if now.saturating_duration_since(last) < self.config.min_scan_interval() {
                return Some(ScanOutcome::Throttled);
            }
        }
        self.last_pass_at = Some(now);
        None
    }

    fn finish(&mut self, outcome: ScanOutcome) -> ScanOutcome {
        self.metrics.record(&outcome);
        debug!("Scan pass {}: {}", self.generation, outcome.as_str());
        outcome
    }

    async fn run_pass(&mut self, corpus: Corpus, now: Instant) -> ScanOutcome {
        if corpus.is_empty() || corpus.char_len() < self.config.min_corpus_len {
            self.current = Some(corpus);
            return ScanOutcome::Empty;
        }

        let fingerprint = corpus.fingerprint(self.config.fingerprint_len);
        if let Some((last, at)) = &self.last_completed {
            if *last == fingerprint && now.saturating_duration_since(*at) < self.config.cooldown() {
                return ScanOutcome::Cooldown;
            }
        }

        self.cache.purge_expired(now);

        let candidates = self.detector.segment_corpus(&corpus);
        let candidate_count = candidates.len();
        let accepted = self.detector.accept(candidates);
        let accepted_count = accepted.len();

        let (verdicts, cache_hits, skipped) = self.verify_all(accepted, now).await;

        let highlights = verdicts
            .iter()
            .filter(|v| v.kind == VerdictKind::Incorrect)
            .take(self.config.max_highlights)
            .map(|v| self.highlight(v, &corpus))
            .collect();
        let escalations = build_escalations(
            &verdicts,
            self.config.escalation_item_limit,
            self.config.escalation_char_limit,
        );

        let report = ScanReport {
            generation: corpus.generation(),
            highlights,
            escalations,
            verdicts,
            candidates: candidate_count,
            accepted: accepted_count,
            skipped,
            cache_hits,
        };

        info!(
            "Pass {} completed: {} candidates, {} accepted, {} flagged, {} escalated",
            report.generation,
            report.candidates,
            report.accepted,
            report.flagged(),
            report.escalations.len()
        );

        self.last_completed = Some((fingerprint, now));
        self.current = Some(corpus);
        ScanOutcome::Completed(report)
    }

    /// Verify accepted candidates with bounded concurrency
    ///
    /// Returns verdicts in document order plus cache-hit and skip counts.
    /// Skipped candidates are not cached.
    async fn verify_all(&mut self, accepted: Vec<Candidate>, now: Instant) -> (Vec<Verdict>, usize, usize) {
        let mut slots: Vec<Option<Verdict>> = vec![None; accepted.len()];
        let mut cache_hits = 0;
        let mut skipped = 0;
        let mut tasks = JoinSet::new();

        for (i, candidate) in accepted.into_iter().enumerate() {
            if let Some(hit) = self.cache.get(&candidate, now) {
                slots[i] = Some(hit);
                cache_hits += 1;
                continue;
            }

            let verifier = Arc::clone(&self.verifier);
            let wait = self.config.wait_for_lookups;
            tasks.spawn(async move {
                let verdict = if wait {
                    Some(verifier.verify(&candidate).await)
                } else {
                    verifier.try_verify(&candidate).await
                };
                (i, verdict)
            });
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((i, Some(verdict))) => {
                    self.cache.insert(&verdict, now);
                    slots[i] = Some(verdict);
                }
                Ok((_, None)) => skipped += 1,
                Err(e) => {
                    warn!("Verification task failed: {}", e);
                    skipped += 1;
                }
            }
        }

        (slots.into_iter().flatten().collect(), cache_hits, skipped)
    }

    fn highlight(&self, verdict: &Verdict, corpus: &Corpus) -> Highlight {
        let candidate = &verdict.candidate;
        let is_field = candidate
            .source
            .and_then(|r| corpus.resolve(r))
            .is_some_and(|e| e.field);

        Highlight {
            text: candidate.text.clone(),
            label: verdict.label(self.config.reason_max_chars, &self.config.fallback_label),
            source: candidate.source,
            element: candidate.source.map(|r| r.index),
            whole_element: is_field || candidate.mode == InputMode::ShortField,
            score: candidate.score,
        }
    }
}
