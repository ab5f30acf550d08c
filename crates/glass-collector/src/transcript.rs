//! Accumulating speech transcript source

use glass_domain::traits::TextSource;
use glass_domain::SourceElement;
use std::collections::VecDeque;
use std::convert::Infallible;

/// An append-only transcript buffer
///
/// Every appended utterance becomes one element. Transcript text is always
/// "visible", so the collector's visibility filter is a no-op here.
///
/// A live transcript can be bounded with [`TranscriptSource::with_window`]:
/// the oldest utterances are dropped once the held text exceeds the window,
/// so a scan pass always sees the most recent speech.
#[derive(Debug, Clone, Default)]
pub struct TranscriptSource {
    utterances: VecDeque<String>,
    window: Option<usize>,
    held_chars: usize,
}

impl TranscriptSource {
    /// Create an empty, unbounded transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty transcript that keeps about `max_chars` of recent text
    ///
    /// The newest utterance is always kept, even when it alone exceeds the window.
    ///
    /// # Examples
    ///
    /// ```
    /// use glass_collector::TranscriptSource;
    ///
    /// let mut t = TranscriptSource::with_window(12);
    /// t.append("first line");
    /// t.append("second line");
    /// assert_eq!(t.len(), 1);
    /// ```
    pub fn with_window(max_chars: usize) -> Self {
        Self {
            window: Some(max_chars),
            ..Self::default()
        }
    }

    /// Append an utterance; blank input is ignored
    pub fn append(&mut self, utterance: impl Into<String>) {
        let utterance = utterance.into();
        if utterance.trim().is_empty() {
            return;
        }
        self.held_chars += utterance.chars().count();
        self.utterances.push_back(utterance);
        self.trim_to_window();
    }

    fn trim_to_window(&mut self) {
        let Some(window) = self.window else {
            return;
        };
        while self.held_chars > window && self.utterances.len() > 1 {
            if let Some(oldest) = self.utterances.pop_front() {
                self.held_chars -= oldest.chars().count();
            }
        }
    }

    /// Replace the whole transcript with the lines of `text`
    pub fn replace_with(&mut self, text: &str) {
        self.clear();
        for line in text.lines() {
            self.append(line);
        }
    }

    /// Number of utterances held
    pub fn len(&self) -> usize {
        self.utterances.len()
    }

    /// Whether the transcript is empty
    pub fn is_empty(&self) -> bool {
        self.utterances.is_empty()
    }

    /// Drop all utterances
    pub fn clear(&mut self) {
        self.utterances.clear();
        self.held_chars = 0;
    }
}

impl TextSource for TranscriptSource {
    type Error = Infallible;

    fn enumerate(&self) -> Result<Vec<SourceElement>, Self::Error> {
        Ok(self
            .utterances
            .iter()
            .map(|u| SourceElement::visible(u.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_utterances_ignored() {
        let mut t = TranscriptSource::new();
        t.append("");
        t.append("   ");
        t.append("Hello there.");
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_replace_with_lines() {
        let mut t = TranscriptSource::new();
        t.append("old");
        t.replace_with("one\n\ntwo\nthree");
        let elements = t.enumerate().unwrap();
        let texts: Vec<_> = elements.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
        assert!(elements.iter().all(|e| e.visible));
    }

    #[test]
    fn test_window_drops_oldest_utterances() {
        let mut t = TranscriptSource::with_window(40);
        t.append("The first thing said.");
        t.append("Then a second remark.");
        t.append("And a third.");

        let elements = t.enumerate().unwrap();
        let texts: Vec<_> = elements.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["Then a second remark.", "And a third."]);
    }

    #[test]
    fn test_window_keeps_oversized_newest_utterance() {
        let mut t = TranscriptSource::with_window(5);
        t.append("short");
        t.append("a much longer utterance than the window");
        assert_eq!(t.len(), 1);

        t.clear();
        assert!(t.is_empty());
        t.append("tiny");
        assert_eq!(t.len(), 1);
    }
}
