//! Glass Scanner
//!
//! Orchestrates scan passes over visible text: Collect → Segment → Score →
//! Verify, then packages highlights and an escalation batch.
//!
//! # Overview
//!
//! - **Lifecycle**: explicit `enable()` / `disable()`; a new scanner is disabled
//! - **Pacing**: a minimum interval between passes and a cooldown keyed on a
//!   content fingerprint, so unchanged content is not verified again
//! - **Generations**: each pass stamps its element references; results from an
//!   older pass no longer resolve
//! - **Fail-open**: no pass ever returns an error, only a `ScanOutcome`
//!
//! # Usage
//!
//! ## One-shot pass
//!
//! ```
//! use glass_collector::TranscriptSource;
//! use glass_reference::OfflineLookup;
//! use glass_scanner::{ScanOutcome, Scanner};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mut transcript = TranscriptSource::new();
//! transcript.append("The earth is flat and everyone knows it, obviously.");
//!
//! let mut scanner = Scanner::with_lookup(OfflineLookup);
//! scanner.enable();
//!
//! if let ScanOutcome::Completed(report) = scanner.scan(&transcript).await {
//!     assert_eq!(report.highlights[0].label, "rule: flat-earth pattern");
//! }
//! # }
//! ```
//!
//! ## Background worker
//!
//! See [`ScanWorker`]: it owns a scanner, listens for `ScanCommand`s and sends
//! each completed `ScanReport` on a channel.

#![warn(missing_docs)]

mod config;
mod error;
mod metrics;
mod report;
mod scanner;
mod worker;

pub use config::ScannerConfig;
pub use error::ScanError;
pub use metrics::ScanMetrics;
pub use report::{build_escalations, EscalationItem, Highlight, ScanOutcome, ScanReport};
pub use scanner::Scanner;
pub use worker::{ScanCommand, ScanWorker, Trigger};
