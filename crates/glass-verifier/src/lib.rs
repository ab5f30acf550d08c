//! Glass Quick Verifier
//!
//! Free, non-LLM cross-check for claim candidates. Textbook myths are caught
//! by fixed patterns; death rumors and absolute claims are compared against an
//! encyclopedia summary through any `ReferenceLookup`.
//!
//! The verifier only ever answers `Incorrect` or `Unknown`. When it cannot be
//! sure it says nothing: lookup errors, timeouts and empty results all become
//! `Unknown`.
//!
//! # Examples
//!
//! ```
//! use glass_domain::{Candidate, InputMode, VerdictKind};
//! use glass_reference::OfflineLookup;
//! use glass_verifier::{QuickVerifier, VerifierConfig};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let verifier = QuickVerifier::new(OfflineLookup, VerifierConfig::default());
//! let claim = Candidate::new("The sun orbits the earth.", InputMode::FullCorpus);
//!
//! let verdict = verifier.verify(&claim).await;
//! assert_eq!(verdict.kind, VerdictKind::Incorrect);
//! # }
//! ```

#![warn(missing_docs)]

mod cache;
mod config;
mod error;
pub mod rules;
mod verifier;

pub use cache::{cache_key, VerdictCache};
pub use config::VerifierConfig;
pub use error::VerifierError;
pub use rules::MythRule;
pub use verifier::{QuickVerifier, DEATH_RUMOR_NOTE, UNSUPPORTED_NOTE};
