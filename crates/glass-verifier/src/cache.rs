//! Verdict cache keyed by normalized candidate text

use glass_domain::{Candidate, Verdict, VerdictKind};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Cache key: trimmed, first `key_len` characters, lowercased
pub fn cache_key(text: &str, key_len: usize) -> String {
    text.trim().chars().take(key_len).collect::<String>().to_lowercase()
}

#[derive(Debug, Clone)]
struct CachedVerdict {
    kind: VerdictKind,
    note: Option<String>,
    stored_at: Instant,
}

/// Time-limited verdict cache shared across scan passes
///
/// Only the verdict kind and note are stored. A hit is re-attached to the
/// candidate that asked for it, so element references always belong to the
/// current pass. Callers pass `now` explicitly.
#[derive(Debug)]
pub struct VerdictCache {
    entries: HashMap<String, CachedVerdict>,
    ttl: Duration,
    key_len: usize,
}

impl VerdictCache {
    /// Create an empty cache
    pub fn new(ttl: Duration, key_len: usize) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            key_len,
        }
    }

    /// Fresh cached verdict for `candidate`, if any
    pub fn get(&self, candidate: &Candidate, now: Instant) -> Option<Verdict> {
        let entry = self.entries.get(&cache_key(&candidate.text, self.key_len))?;
        if now.saturating_duration_since(entry.stored_at) >= self.ttl {
            return None;
        }
        Some(Verdict {
            candidate: candidate.clone(),
            kind: entry.kind,
            note: entry.note.clone(),
        })
    }

    /// Store a verdict, replacing any previous entry for the same key
    pub fn insert(&mut self, verdict: &Verdict, now: Instant) {
        self.entries.insert(
            cache_key(&verdict.candidate.text, self.key_len),
            CachedVerdict {
                kind: verdict.kind,
                note: verdict.note.clone(),
                stored_at: now,
            },
        );
    }

    /// Drop expired entries, returning how many were removed
    pub fn purge_expired(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        let ttl = self.ttl;
        self.entries
            .retain(|_, entry| now.saturating_duration_since(entry.stored_at) < ttl);
        before - self.entries.len()
    }

    /// Number of entries, expired ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
