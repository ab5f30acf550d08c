//! Verdict module - results of the quick verifier

use crate::Candidate;
use std::fmt;

/// Opinion of the quick verifier about a candidate
///
/// There is deliberately no `Correct`: a claim the verifier could confirm is
/// treated exactly like one it knows nothing about, so no highlight is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerdictKind {
    /// The claim is very likely false; a highlight should be placed
    Incorrect,

    /// No opinion
    Unknown,
}

impl VerdictKind {
    /// Verdict name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictKind::Incorrect => "incorrect",
            VerdictKind::Unknown => "unknown",
        }
    }

    /// Whether the verdict should surface a highlight
    pub fn is_flagged(&self) -> bool {
        matches!(self, VerdictKind::Incorrect)
    }
}

impl fmt::Display for VerdictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of verifying one candidate
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    /// The verified candidate
    pub candidate: Candidate,

    /// The verifier's opinion
    pub kind: VerdictKind,

    /// Short human-readable reason, e.g. `rule: flat-earth pattern`
    pub note: Option<String>,
}

impl Verdict {
    /// An `Incorrect` verdict with a reason
    pub fn incorrect(candidate: Candidate, note: impl Into<String>) -> Self {
        Self {
            candidate,
            kind: VerdictKind::Incorrect,
            note: Some(note.into()),
        }
    }

    /// An `Unknown` verdict
    pub fn unknown(candidate: Candidate) -> Self {
        Self {
            candidate,
            kind: VerdictKind::Unknown,
            note: None,
        }
    }

    /// Highlight label: the note truncated to `max_chars`, or `fallback`
    ///
    /// # Examples
    ///
    /// ```
    /// use glass_domain::{Candidate, InputMode, Verdict};
    ///
    /// let c = Candidate::new("The earth is flat.", InputMode::FullCorpus);
    /// let v = Verdict::incorrect(c, "rule: flat-earth pattern");
    /// assert_eq!(v.label(36, "Likely false"), "rule: flat-earth pattern");
    /// ```
    pub fn label(&self, max_chars: usize, fallback: &str) -> String {
        match &self.note {
            Some(note) if !note.trim().is_empty() => truncate_reason(note, max_chars),
            _ => truncate_reason(fallback, max_chars),
        }
    }
}

/// Truncate a reason to at most `max_chars` characters, ending with `…` when cut
pub fn truncate_reason(reason: &str, max_chars: usize) -> String {
    let reason = reason.trim();
    if reason.chars().count() <= max_chars {
        return reason.to_string();
    }
    let keep = max_chars.saturating_sub(2);
    let mut out: String = reason.chars().take(keep).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InputMode;

    #[test]
    fn test_only_incorrect_is_flagged() {
        assert!(VerdictKind::Incorrect.is_flagged());
        assert!(!VerdictKind::Unknown.is_flagged());
    }

    #[test]
    fn test_truncate_short_reason_untouched() {
        assert_eq!(truncate_reason("Likely false", 36), "Likely false");
    }

    #[test]
    fn test_truncate_long_reason() {
        let long = "reference summary does not support the claim at all";
        let cut = truncate_reason(long, 36);
        assert_eq!(cut.chars().count(), 35);
        assert!(cut.ends_with('…'));
        assert!(cut.starts_with("reference summary"));
    }

    #[test]
    fn test_label_falls_back_without_note() {
        let v = Verdict::unknown(Candidate::new("x", InputMode::FullCorpus));
        assert_eq!(v.label(36, "Likely false"), "Likely false");
    }
}
