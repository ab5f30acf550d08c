//! Output formatting for the CLI.

use crate::commands::check::CheckRow;
use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use glass_scanner::{Highlight, ScanOutcome, ScanReport};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Longest sentence shown in a table cell
const CELL_MAX_CHARS: usize = 72;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Output format in use.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format the outcome of a scan pass.
    pub fn format_outcome(&self, outcome: &ScanOutcome) -> Result<String> {
        if let ScanOutcome::Completed(report) = outcome {
            return self.format_report(report);
        }
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(
                &serde_json::json!({ "outcome": outcome.as_str() }),
            )?),
            OutputFormat::Text => Ok(self.info(&format!("No pass completed ({})", outcome.as_str()))),
        }
    }

    /// Format a completed scan report.
    pub fn format_report(&self, report: &ScanReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Text => Ok(self.format_report_text(report)),
        }
    }

    fn format_report_text(&self, report: &ScanReport) -> String {
        let mut sections = vec![self.info(&format!(
            "Pass {}: {} candidates, {} accepted, {} flagged",
            report.generation,
            report.candidates,
            report.accepted,
            report.flagged()
        ))];

        if report.highlights.is_empty() {
            sections.push(self.success("No likely-false sentences found."));
        } else {
            sections.push(self.highlight_table(&report.highlights));
        }

        if !report.escalations.is_empty() {
            let mut lines = vec![self.warning(&format!(
                "{} sentence(s) could not be checked quickly:",
                report.escalations.len()
            ))];
            for item in &report.escalations {
                lines.push(format!("  {:>4}  {}", item.id, clip(&item.text)));
            }
            sections.push(lines.join("\n"));
        }

        if report.skipped > 0 {
            sections.push(self.warning(&format!(
                "{} candidate(s) skipped: every lookup slot was busy",
                report.skipped
            )));
        }

        sections.join("\n")
    }

    fn highlight_table(&self, highlights: &[Highlight]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["#", "Label", "Sentence", "Element", "Score"]);

        for (i, highlight) in highlights.iter().enumerate() {
            let element = match (highlight.element, highlight.whole_element) {
                (Some(index), true) => format!("{} (field)", index),
                (Some(index), false) => index.to_string(),
                (None, _) => "-".to_string(),
            };
            builder.push_record([
                (i + 1).to_string(),
                highlight.label.clone(),
                clip(&highlight.text),
                element,
                format!("{:.1}", highlight.score),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format the result of a `check` run.
    pub fn format_checks(&self, rows: &[CheckRow]) -> Result<String> {
        if let OutputFormat::Json = self.format {
            return Ok(serde_json::to_string_pretty(rows)?);
        }
        if rows.is_empty() {
            return Ok(self.colorize("No candidate sentences found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Sentence", "Mode", "Score", "Accepted", "Verdict", "Note"]);

        for row in rows {
            builder.push_record([
                clip(&row.text),
                row.mode.to_string(),
                format!("{:.1} / {:.1}", row.score, row.threshold),
                if row.accepted { "yes" } else { "no" }.to_string(),
                row.verdict.unwrap_or("-").to_string(),
                row.note.clone().unwrap_or_default(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let flagged = rows.iter().filter(|r| r.verdict == Some("incorrect")).count();
        let footer = if flagged > 0 {
            self.error(&format!("{} sentence(s) look false", flagged))
        } else {
            self.success("Nothing flagged")
        };

        Ok(format!("{}\n{}", table, footer))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Shorten long sentences for table cells.
fn clip(text: &str) -> String {
    if text.chars().count() <= CELL_MAX_CHARS {
        return text.to_string();
    }
    let mut out: String = text.chars().take(CELL_MAX_CHARS - 1).collect();
    out.push('…');
    out
}
