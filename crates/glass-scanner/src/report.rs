//! Scan pass results

use glass_domain::{ElementRef, Verdict, VerdictKind};
use serde::Serialize;

/// A sentence to mark as likely false
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlight {
    /// Sentence text to locate inside its element
    pub text: String,

    /// Short reason shown next to the highlight
    pub label: String,

    /// Element the sentence came from
    #[serde(skip)]
    pub source: Option<ElementRef>,

    /// Index of that element in the pass's corpus
    pub element: Option<usize>,

    /// Mark the whole element (input fields) instead of a text range
    pub whole_element: bool,

    /// Claim score that got the sentence verified
    pub score: f64,
}

/// One `{ id, text }` entry for the downstream batch classifier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EscalationItem {
    /// Sequential id: `s1`, `s2`, ...
    pub id: String,

    /// Candidate sentence
    pub text: String,

    /// Element the sentence came from, for mapping answers back
    #[serde(skip)]
    pub source: Option<ElementRef>,
}

/// Package `Unknown` verdicts as an escalation batch, in order
///
/// Stops at the first item that would exceed `item_limit` items or
/// `char_limit` characters in total.
pub fn build_escalations(
    verdicts: &[Verdict],
    item_limit: usize,
    char_limit: usize,
) -> Vec<EscalationItem> {
    let mut items = Vec::new();
    let mut total = 0usize;

    for verdict in verdicts.iter().filter(|v| v.kind == VerdictKind::Unknown) {
        let len = verdict.candidate.char_len();
        if items.len() >= item_limit || total + len > char_limit {
            break;
        }
        total += len;
        items.push(EscalationItem {
            id: format!("s{}", items.len() + 1),
            text: verdict.candidate.text.clone(),
            source: verdict.candidate.source,
        });
    }

    items
}

/// Everything a completed pass produced
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// Pass generation; element references in this report belong to it
    pub generation: u64,

    /// `Incorrect` verdicts to highlight, at most `max_highlights`
    pub highlights: Vec<Highlight>,

    /// `Unknown` candidates for the batch classifier
    pub escalations: Vec<EscalationItem>,

    /// Every verdict of the pass, in document order
    #[serde(skip)]
    pub verdicts: Vec<Verdict>,

    /// Candidates segmented from the corpus
    pub candidates: usize,

    /// Candidates that cleared their threshold
    pub accepted: usize,

    /// Accepted candidates left unverified this pass
    pub skipped: usize,

    /// Verdicts served from the cache
    pub cache_hits: usize,
}

impl ScanReport {
    /// Whether anything was flagged
    pub fn has_highlights(&self) -> bool {
        !self.highlights.is_empty()
    }

    /// Number of `Incorrect` verdicts, including those past the highlight cap
    pub fn flagged(&self) -> usize {
        self.verdicts.iter().filter(|v| v.kind.is_flagged()).count()
    }
}

/// Result of asking the scanner for a pass
#[derive(Debug, Clone)]
pub enum ScanOutcome {
    /// Scanner is disabled
    Disabled,

    /// Too soon after the previous pass
    Throttled,

    /// Not enough visible text
    Empty,

    /// Content unchanged within the cooldown window
    Cooldown,

    /// Pass ran to completion
    Completed(ScanReport),
}

impl ScanOutcome {
    /// Short name for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanOutcome::Disabled => "disabled",
            ScanOutcome::Throttled => "throttled",
            ScanOutcome::Empty => "empty",
            ScanOutcome::Cooldown => "cooldown",
            ScanOutcome::Completed(_) => "completed",
        }
    }

    /// Report of a completed pass
    pub fn report(&self) -> Option<&ScanReport> {
        match self {
            ScanOutcome::Completed(report) => Some(report),
            _ => None,
        }
    }

    /// Take the report of a completed pass
    pub fn into_report(self) -> Option<ScanReport> {
        match self {
            ScanOutcome::Completed(report) => Some(report),
            _ => None,
        }
    }
}
