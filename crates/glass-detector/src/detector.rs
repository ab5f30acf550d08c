//! Core Detector implementation

use crate::config::DetectorConfig;
use crate::error::DetectorError;
use crate::scorer::compute_claim_score;
use crate::segmenter::SentenceSegmenter;
use glass_domain::{Candidate, Corpus, InputMode};
use tracing::debug;

/// Segments text into scored candidates and applies acceptance thresholds
pub struct Detector {
    config: DetectorConfig,
    segmenter: SentenceSegmenter,
}

impl Detector {
    /// Create a new Detector
    pub fn new(config: DetectorConfig) -> Self {
        let segmenter = SentenceSegmenter::new(&config);
        Self { config, segmenter }
    }

    /// Create a Detector, rejecting an invalid configuration
    pub fn try_new(config: DetectorConfig) -> Result<Self, DetectorError> {
        config.validate().map_err(DetectorError::Config)?;
        Ok(Self::new(config))
    }

    /// Configuration in use
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Segment free text into scored candidates, in document order
    ///
    /// Candidates carry no element reference. Nothing is filtered by score.
    pub fn segment(&self, text: &str) -> Vec<Candidate> {
        self.segmenter
            .segment(text)
            .into_iter()
            .map(|(sentence, mode)| self.scored(sentence, mode))
            .collect()
    }

    /// Segment every contributing element of a corpus separately
    ///
    /// Each candidate is linked to its element through the corpus generation
    /// and the element index. At most `max_sentences_per_element` candidates
    /// are taken from one element.
    pub fn segment_corpus(&self, corpus: &Corpus) -> Vec<Candidate> {
        let mut candidates = Vec::new();

        for (index, element) in corpus.elements().iter().enumerate() {
            let source = corpus.element_ref(index);
            candidates.extend(
                self.segment(&element.text)
                    .into_iter()
                    .take(self.config.max_sentences_per_element)
                    .map(|c| c.with_source(source)),
            );
        }

        debug!(
            "Segmented {} candidates from {} elements (pass {})",
            candidates.len(),
            corpus.elements().len(),
            corpus.generation()
        );

        candidates
    }

    /// Score a candidate's text
    pub fn score(&self, candidate: &Candidate) -> f64 {
        compute_claim_score(&candidate.text, &self.config.weights)
    }

    /// Acceptance threshold for a mode
    pub fn threshold(&self, mode: InputMode) -> f64 {
        match mode {
            InputMode::FullCorpus => self.config.full_threshold,
            InputMode::ShortField => self.config.short_threshold,
        }
    }

    /// Whether a score clears the bar for its mode (`>=`)
    pub fn is_accepted(&self, score: f64, mode: InputMode) -> bool {
        score >= self.threshold(mode)
    }

    /// Keep only candidates that clear their threshold, preserving order
    pub fn accept(&self, candidates: Vec<Candidate>) -> Vec<Candidate> {
        candidates
            .into_iter()
            .filter(|c| self.is_accepted(c.score, c.mode))
            .collect()
    }

    /// Segment a corpus and keep the accepted candidates
    pub fn accepted_from_corpus(&self, corpus: &Corpus) -> Vec<Candidate> {
        self.accept(self.segment_corpus(corpus))
    }

    fn scored(&self, sentence: String, mode: InputMode) -> Candidate {
        let score = compute_claim_score(&sentence, &self.config.weights);
        Candidate::new(sentence, mode).with_score(score)
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}
