//! Candidate module - sentences considered for verification

use crate::ElementRef;

/// How a candidate was extracted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputMode {
    /// A sentence segmented out of page or transcript text
    FullCorpus,

    /// The whole content of a short input field (search box)
    ShortField,
}

impl InputMode {
    /// Mode name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            InputMode::FullCorpus => "full",
            InputMode::ShortField => "short",
        }
    }
}

/// A single sentence extracted from a corpus
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Sentence text
    pub text: String,

    /// Element the sentence came from, if known
    pub source: Option<ElementRef>,

    /// Heuristic claim score
    pub score: f64,

    /// Extraction mode
    pub mode: InputMode,
}

impl Candidate {
    /// Create an unscored candidate
    ///
    /// # Examples
    ///
    /// ```
    /// use glass_domain::{Candidate, InputMode};
    ///
    /// let c = Candidate::new("The earth is flat.", InputMode::FullCorpus);
    /// assert_eq!(c.score, 0.0);
    /// assert!(c.source.is_none());
    /// ```
    pub fn new(text: impl Into<String>, mode: InputMode) -> Self {
        Self {
            text: text.into(),
            source: None,
            score: 0.0,
            mode,
        }
    }

    /// Attach the originating element
    pub fn with_source(mut self, source: ElementRef) -> Self {
        self.source = Some(source);
        self
    }

    /// Attach a score
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    /// Length of the text in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
