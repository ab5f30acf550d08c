//! Sentence segmentation

use crate::config::DetectorConfig;
use crate::lexicon::{passes_prefilter, SHORT_SUGGESTIVE, WHITESPACE};
use glass_domain::InputMode;

/// Split text into sentences at `[.!?]` + whitespace + `[Uppercase0-9"']`
///
/// Whitespace is collapsed first, so newlines between corpus elements never
/// survive into a sentence. No length or lexical filtering is applied.
///
/// # Examples
///
/// ```
/// use glass_detector::split_sentences;
///
/// let parts = split_sentences("It works. 3 tests pass! \"Great\" she said. e.g. here");
/// assert_eq!(parts, vec!["It works.", "3 tests pass!", "\"Great\" she said. e.g. here"]);
/// ```
pub fn split_sentences(text: &str) -> Vec<String> {
    let collapsed = WHITESPACE.replace_all(text.trim(), " ");
    let chars: Vec<(usize, char)> = collapsed.char_indices().collect();

    let mut sentences = Vec::new();
    let mut start = 0usize;

    for i in 0..chars.len() {
        let (_, c) = chars[i];
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let (Some(&(_, gap)), Some(&(next_at, next))) = (chars.get(i + 1), chars.get(i + 2)) else {
            continue;
        };
        if gap == ' ' && starts_sentence(next) {
            let end = chars[i + 1].0;
            push_trimmed(&mut sentences, &collapsed[start..end]);
            start = next_at;
        }
    }
    push_trimmed(&mut sentences, &collapsed[start..]);

    sentences
}

fn starts_sentence(c: char) -> bool {
    c.is_uppercase() || c.is_ascii_digit() || c == '"' || c == '\''
}

fn push_trimmed(out: &mut Vec<String>, sentence: &str) {
    let sentence = sentence.trim();
    if !sentence.is_empty() {
        out.push(sentence.to_string());
    }
}

/// Turns raw text into pre-filtered sentence texts
pub struct SentenceSegmenter {
    min_len: usize,
    max_len: usize,
    short_input_max_len: usize,
}

impl SentenceSegmenter {
    /// Create a segmenter from detector limits
    pub fn new(config: &DetectorConfig) -> Self {
        Self {
            min_len: config.min_sentence_len,
            max_len: config.max_sentence_len,
            short_input_max_len: config.short_input_max_len,
        }
    }

    /// Segment `text` into sentence texts with their extraction mode
    ///
    /// Inputs shorter than `short_input_max_len` rarely carry terminal
    /// punctuation; they become a single short-field candidate when they
    /// contain any suggestive token.
    pub fn segment(&self, text: &str) -> Vec<(String, InputMode)> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        if trimmed.chars().count() < self.short_input_max_len {
            if SHORT_SUGGESTIVE.is_match(trimmed) {
                let single = WHITESPACE.replace_all(trimmed, " ").into_owned();
                return vec![(single, InputMode::ShortField)];
            }
            return Vec::new();
        }

        split_sentences(trimmed)
            .into_iter()
            .filter(|s| {
                let len = s.chars().count();
                len >= self.min_len && len <= self.max_len
            })
            .filter(|s| passes_prefilter(s))
            .map(|s| (s, InputMode::FullCorpus))
            .collect()
    }
}
