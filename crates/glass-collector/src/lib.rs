//! Glass Collector
//!
//! Gathers visible text from a document-like source into a size-bounded
//! corpus for one scan pass.
//!
//! # Architecture
//!
//! ```text
//! TextSource (DOM | transcript | HTML) → Collector → Corpus → Detector
//! ```
//!
//! The collector never splits an element: if the next whole element would
//! push the corpus past its character budget, collection stops there. A source
//! that cannot be enumerated yields an empty corpus, never an error.
//!
//! # Example Usage
//!
//! ```
//! use glass_collector::{Collector, CollectorConfig, TranscriptSource};
//!
//! let mut transcript = TranscriptSource::new();
//! transcript.append("The sun orbits the earth.");
//! transcript.append("Everyone knows that.");
//!
//! let collector = Collector::new(CollectorConfig::default());
//! let corpus = collector.collect(&transcript, 1);
//!
//! assert_eq!(corpus.elements().len(), 2);
//! assert_eq!(corpus.text(), "The sun orbits the earth.\nEveryone knows that.");
//! ```

#![warn(missing_docs)]

mod collector;
mod config;
mod dom;
mod error;
mod html;
mod transcript;

pub use collector::{collect, Collector};
pub use config::CollectorConfig;
pub use dom::{ComputedStyle, DomNode, DomSource};
pub use error::CollectorError;
pub use html::HtmlSource;
pub use transcript::TranscriptSource;
