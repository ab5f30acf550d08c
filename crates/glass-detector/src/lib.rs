//! Glass Detector
//!
//! Splits corpus text into candidate sentences and assigns each a heuristic
//! claim score.
//!
//! # Overview
//!
//! Segmentation is a regex-style boundary heuristic: a sentence ends at `.`,
//! `!` or `?` followed by whitespace and an uppercase letter, digit or quote.
//! A cheap lexical pre-filter drops sentences with no claim-like token before
//! they are scored. Scoring is additive over lexical signals (absolutist
//! language, numbers, copulas, myth cues) with penalties for attribution and
//! hedging.
//!
//! Two acceptance bars apply: full-corpus sentences must reach
//! `full_threshold`, while the whole content of a short input (a search box
//! the user is typing a claim into) only needs `short_threshold`.
//!
//! # Example Usage
//!
//! ```
//! use glass_detector::{Detector, DetectorConfig};
//!
//! let detector = Detector::new(DetectorConfig::default());
//! let candidates = detector.segment("Elon Musk is dead. More text follows to pad length.");
//!
//! assert_eq!(candidates.len(), 1);
//! assert_eq!(candidates[0].text, "Elon Musk is dead.");
//! assert!(detector.is_accepted(candidates[0].score, candidates[0].mode));
//! ```

#![warn(missing_docs)]

mod config;
mod detector;
mod error;
mod lexicon;
mod scorer;
mod segmenter;

#[cfg(test)]
mod tests;

pub use config::{DetectorConfig, ScoreWeights};
pub use detector::Detector;
pub use error::DetectorError;
pub use scorer::compute_claim_score;
pub use segmenter::{split_sentences, SentenceSegmenter};
