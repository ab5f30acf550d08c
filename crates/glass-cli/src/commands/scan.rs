//! Scan command implementation.

use crate::cli::ScanArgs;
use crate::commands::build_scanner;
use crate::config::GlassConfig;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use glass_collector::{HtmlSource, TranscriptSource};
use glass_domain::traits::ReferenceLookup;
use glass_scanner::ScanOutcome;
use std::fmt::Display;
use std::path::Path;
use tracing::info;

/// Execute the scan command.
pub async fn execute_scan<L>(
    args: ScanArgs,
    config: &GlassConfig,
    lookup: L,
    formatter: &Formatter,
) -> Result<()>
where
    L: ReferenceLookup + Send + Sync + 'static,
    L::Error: Display,
{
    let outcome = run_scan(args, config, lookup).await?;
    println!("{}", formatter.format_outcome(&outcome)?);
    Ok(())
}

/// Load the selected input and run a single pass over it.
pub async fn run_scan<L>(args: ScanArgs, config: &GlassConfig, lookup: L) -> Result<ScanOutcome>
where
    L: ReferenceLookup + Send + Sync + 'static,
    L::Error: Display,
{
    let mut scanner = build_scanner(config, lookup)?;

    let outcome = if let Some(path) = args.html {
        let html = read_input(&path).await?;
        scanner
            .scan(&HtmlSource::with_config(html, &config.collector))
            .await
    } else if let Some(path) = args.text {
        let text = read_input(&path).await?;
        scanner.scan(&paragraphs(&text)).await
    } else if let Some(path) = args.transcript {
        let text = read_input(&path).await?;
        let mut transcript = TranscriptSource::new();
        transcript.replace_with(&text);
        scanner.scan(&transcript).await
    } else {
        return Err(CliError::InvalidInput(
            "One of --html, --text or --transcript is required".to_string(),
        ));
    };

    info!("Scan finished: {}", outcome.as_str());
    Ok(outcome)
}

async fn read_input(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path).await.map_err(|e| {
        CliError::InvalidInput(format!("Cannot read {}: {}", path.display(), e))
    })
}

/// Split plain text into paragraph elements.
///
/// Blank lines end a paragraph; the lines inside one are joined with spaces.
pub fn paragraphs(text: &str) -> TranscriptSource {
    let mut source = TranscriptSource::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            if !current.is_empty() {
                source.append(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        source.append(current.join(" "));
    }

    source
}

#[cfg(test)]
mod tests {
    use super::*;
    use glass_domain::traits::TextSource;
    use glass_reference::{MockLookup, OfflineLookup};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn args_for(path: &Path) -> ScanArgs {
        ScanArgs {
            html: None,
            text: Some(path.to_path_buf()),
            transcript: None,
        }
    }

    #[test]
    fn test_paragraphs_join_wrapped_lines() {
        let source = paragraphs("First line\nwraps here.\n\n\nSecond paragraph.\n");
        let texts: Vec<String> = source
            .enumerate()
            .unwrap()
            .into_iter()
            .map(|e| e.text)
            .collect();
        assert_eq!(texts, vec!["First line wraps here.", "Second paragraph."]);
    }

    #[tokio::test]
    async fn test_scan_text_file_offline() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "The earth is flat and everyone knows it, obviously.").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "Lunch is served at noon in the main hall.").unwrap();

        let outcome = run_scan(args_for(file.path()), &GlassConfig::default(), OfflineLookup)
            .await
            .unwrap();

        let report = outcome.into_report().unwrap();
        assert_eq!(report.highlights.len(), 1);
        assert_eq!(report.highlights[0].label, "rule: flat-earth pattern");
    }

    #[tokio::test]
    async fn test_scan_html_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "<html><head><title>Daily facts</title></head><body>\
             <p>Everyone knows the sun orbits the earth once every single day.</p>\
             </body></html>"
        )
        .unwrap();
        let args = ScanArgs {
            html: Some(file.path().to_path_buf()),
            text: None,
            transcript: None,
        };

        let lookup = MockLookup::new().failing();
        let outcome = run_scan(args, &GlassConfig::default(), lookup).await.unwrap();

        let report = outcome.into_report().unwrap();
        assert_eq!(report.highlights.len(), 1);
        assert_eq!(report.highlights[0].label, "rule: geocentric myth");
    }

    #[tokio::test]
    async fn test_short_file_is_not_scanned() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Hello.").unwrap();

        let outcome = run_scan(args_for(file.path()), &GlassConfig::default(), OfflineLookup)
            .await
            .unwrap();
        assert!(matches!(outcome, ScanOutcome::Empty));
    }

    #[tokio::test]
    async fn test_missing_file_is_invalid_input() {
        let result = run_scan(
            args_for(Path::new("/nonexistent/glass-input.txt")),
            &GlassConfig::default(),
            OfflineLookup,
        )
        .await;
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
