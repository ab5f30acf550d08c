//! Check command implementation.

use crate::cli::CheckArgs;
use crate::config::GlassConfig;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use glass_detector::Detector;
use glass_domain::traits::ReferenceLookup;
use glass_verifier::QuickVerifier;
use serde::Serialize;
use std::fmt::Display;

/// One candidate of a checked text with its score and verdict.
#[derive(Debug, Clone, Serialize)]
pub struct CheckRow {
    /// Sentence text
    pub text: String,
    /// `full` or `short`
    pub mode: &'static str,
    /// Claim score
    pub score: f64,
    /// Threshold the score was compared with
    pub threshold: f64,
    /// Whether the candidate cleared the threshold
    pub accepted: bool,
    /// Verdict of the quick verifier; only accepted candidates are verified
    pub verdict: Option<&'static str>,
    /// Reason attached to the verdict
    pub note: Option<String>,
}

/// Execute the check command.
pub async fn execute_check<L>(
    args: CheckArgs,
    config: &GlassConfig,
    lookup: L,
    formatter: &Formatter,
) -> Result<()>
where
    L: ReferenceLookup,
    L::Error: Display,
{
    let text = args.claim.join(" ");
    if text.trim().is_empty() {
        return Err(CliError::InvalidInput("Nothing to check".to_string()));
    }

    let detector = Detector::try_new(config.detector.clone())?;
    let verifier = QuickVerifier::try_new(lookup, config.verifier.clone())?;

    let rows = check_text(&text, &detector, &verifier).await;
    println!("{}", formatter.format_checks(&rows)?);
    Ok(())
}

/// Segment, score and verify `text`.
pub async fn check_text<L>(
    text: &str,
    detector: &Detector,
    verifier: &QuickVerifier<L>,
) -> Vec<CheckRow>
where
    L: ReferenceLookup,
    L::Error: Display,
{
    let mut rows = Vec::new();

    for candidate in detector.segment(text) {
        let accepted = detector.is_accepted(candidate.score, candidate.mode);
        let verdict = if accepted {
            Some(verifier.verify(&candidate).await)
        } else {
            None
        };

        rows.push(CheckRow {
            mode: candidate.mode.as_str(),
            score: candidate.score,
            threshold: detector.threshold(candidate.mode),
            accepted,
            verdict: verdict.as_ref().map(|v| v.kind.as_str()),
            note: verdict.and_then(|v| v.note),
            text: candidate.text,
        });
    }

    rows
}
