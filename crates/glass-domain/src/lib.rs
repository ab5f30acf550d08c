//! Glass Domain Layer
//!
//! Core value types and boundary traits for the claim detector. This crate has
//! no external dependencies; collectors, scorers, verifiers and lookup clients
//! live in other crates and depend on it.
//!
//! ## Key Concepts
//!
//! - **SourceElement**: one unit of visible text (a DOM node, a transcript line)
//! - **Corpus**: the bounded concatenation of visible text for one scan pass
//! - **Candidate**: a sentence worth checking, with a heuristic claim score
//! - **Verdict**: the quick verifier's opinion (`Incorrect` or `Unknown`)
//! - **ElementRef**: a non-owning, generation-stamped link back to a source element
//!
//! ## Lifecycle
//!
//! Every entity is transient. A scan pass gets a fresh generation number,
//! enumerates its sources, and discards everything when the next pass starts.
//! Results carrying an older generation are stale and must be ignored.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod candidate;
pub mod corpus;
pub mod source;
pub mod traits;
pub mod verdict;

// Re-exports for convenience
pub use candidate::{Candidate, InputMode};
pub use corpus::Corpus;
pub use source::{ElementRef, PositionHint, SourceElement};
pub use verdict::{truncate_reason, Verdict, VerdictKind};
