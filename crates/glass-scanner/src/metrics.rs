//! Metrics collection for scan passes

use crate::report::{ScanOutcome, ScanReport};

/// Counters accumulated across scan passes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanMetrics {
    /// Passes requested while disabled
    pub disabled: usize,

    /// Passes refused by the minimum interval
    pub throttled: usize,

    /// Passes with too little text
    pub empty: usize,

    /// Passes skipped because content was unchanged
    pub cooldown: usize,

    /// Passes that ran to completion
    pub completed: usize,

    /// Candidates segmented
    pub candidates_seen: usize,

    /// Candidates that cleared their threshold
    pub candidates_accepted: usize,

    /// Candidates verified (cache hits excluded)
    pub verified: usize,

    /// Verdicts served from the cache
    pub cache_hits: usize,

    /// Candidates skipped because every lookup permit was taken
    pub skipped: usize,

    /// `Incorrect` verdicts
    pub flagged: usize,

    /// Items handed to the escalation batch
    pub escalated: usize,
}

impl ScanMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one pass
    pub fn record(&mut self, outcome: &ScanOutcome) {
        match outcome {
            ScanOutcome::Disabled => self.disabled += 1,
            ScanOutcome::Throttled => self.throttled += 1,
            ScanOutcome::Empty => self.empty += 1,
            ScanOutcome::Cooldown => self.cooldown += 1,
            ScanOutcome::Completed(report) => self.record_report(report),
        }
    }

    fn record_report(&mut self, report: &ScanReport) {
        self.completed += 1;
        self.candidates_seen += report.candidates;
        self.candidates_accepted += report.accepted;
        self.cache_hits += report.cache_hits;
        self.skipped += report.skipped;
        self.verified += report.accepted - report.cache_hits - report.skipped;
        self.flagged += report.flagged();
        self.escalated += report.escalations.len();
    }

    /// Total pass requests, whatever their outcome
    pub fn total_passes(&self) -> usize {
        self.disabled + self.throttled + self.empty + self.cooldown + self.completed
    }

    /// Reset all metrics
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let lines = [
            "Scan Metrics Summary".to_string(),
            "====================".to_string(),
            format!("Passes requested: {}", self.total_passes()),
            format!("  Completed: {}", self.completed),
            format!("  Throttled: {}", self.throttled),
            format!("  Cooldown: {}", self.cooldown),
            format!("  Empty: {}", self.empty),
            format!("  Disabled: {}", self.disabled),
            String::new(),
            format!(
                "Candidates: {} seen, {} accepted",
                self.candidates_seen, self.candidates_accepted
            ),
            format!(
                "Verification: {} verified, {} cached, {} skipped",
                self.verified, self.cache_hits, self.skipped
            ),
            format!("Flagged: {}", self.flagged),
            format!("Escalated: {}", self.escalated),
        ];
        lines.join("\n")
    }
}
