//! Watch command implementation.
//!
//! Polls a transcript file, feeds complete new lines into a windowed
//! `TranscriptSource` and lets a `ScanWorker` decide when to scan. Reports
//! are printed as they arrive until Ctrl+C.

use crate::cli::WatchArgs;
use crate::commands::build_scanner;
use crate::config::GlassConfig;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use glass_collector::TranscriptSource;
use glass_domain::traits::ReferenceLookup;
use glass_scanner::{ScanCommand, ScanWorker, Trigger};
use std::fmt::Display;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Execute the watch command.
pub async fn execute_watch<L>(
    args: WatchArgs,
    config: &GlassConfig,
    lookup: L,
    formatter: &Formatter,
) -> Result<()>
where
    L: ReferenceLookup + Send + Sync + 'static,
    L::Error: Display,
{
    if args.poll_ms == 0 {
        return Err(CliError::InvalidInput("--poll-ms must be greater than 0".to_string()));
    }

    let existing = read_transcript(&args.transcript).await?;
    let mut cursor = if args.tail {
        LineCursor::at_end_of(&existing)
    } else {
        LineCursor::default()
    };

    let window = args.window.unwrap_or(config.scanner.fingerprint_len);
    let source = Arc::new(Mutex::new(TranscriptSource::with_window(window)));
    let scanner = build_scanner(config, lookup)?;
    let worker = ScanWorker::new(scanner, Arc::clone(&source));

    let (commands, command_rx) = mpsc::channel(64);
    let (report_tx, mut reports) = mpsc::channel(16);
    let handle = tokio::spawn(worker.run(command_rx, report_tx));

    send(&commands, ScanCommand::Enable).await?;
    println!(
        "{}",
        formatter.info(&format!(
            "Watching {} (Ctrl+C to stop)",
            args.transcript.display()
        ))
    );

    let mut ticker = interval(Duration::from_millis(args.poll_ms));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let content = match read_transcript(&args.transcript).await {
                    Ok(content) => content,
                    Err(e) => {
                        warn!("Transcript not readable: {}", e);
                        continue;
                    }
                };
                let lines = cursor.take_complete_lines(&content);
                if lines.is_empty() {
                    continue;
                }

                debug!("{} new transcript line(s)", lines.len());
                {
                    let mut transcript = source.lock().await;
                    for line in lines {
                        transcript.append(line);
                    }
                }
                send(&commands, ScanCommand::Trigger(Trigger::Mutation)).await?;
            }
            report = reports.recv() => match report {
                Some(report) => println!("{}", formatter.format_report(&report)?),
                None => {
                    warn!("Scan worker stopped unexpectedly");
                    break;
                }
            },
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, stopping watch");
                break;
            }
        }
    }

    // The worker may already be gone; its result below tells why
    let _ = commands.send(ScanCommand::Shutdown).await;
    let scanner = handle
        .await
        .map_err(|e| CliError::Scan(glass_scanner::ScanError::Worker(e.to_string())))??;

    println!("{}", scanner.metrics().summary());
    Ok(())
}

async fn send(commands: &mpsc::Sender<ScanCommand>, command: ScanCommand) -> Result<()> {
    commands
        .send(command)
        .await
        .map_err(|e| CliError::Scan(glass_scanner::ScanError::Worker(e.to_string())))
}

async fn read_transcript(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path).await.map_err(|e| {
        CliError::InvalidInput(format!("Cannot read {}: {}", path.display(), e))
    })
}

/// Read position in a transcript file that is polled repeatedly.
///
/// The last consumed line is kept so that a rewritten file is noticed and
/// read again from the start.
#[derive(Debug, Default)]
pub struct LineCursor {
    offset: usize,
    tail: String,
}

impl LineCursor {
    /// Cursor positioned after the last complete line of `content`.
    pub fn at_end_of(content: &str) -> Self {
        let mut cursor = Self::default();
        cursor.take_complete_lines(content);
        cursor
    }

    /// Byte offset just past the last consumed newline.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Lines completed since the last call, advancing past them.
    ///
    /// A trailing line without a newline is left for the next poll. A file
    /// that shrank or no longer holds the consumed text is read again from
    /// the start.
    pub fn take_complete_lines(&mut self, content: &str) -> Vec<String> {
        let consumed = content.get(self.offset - self.tail.len()..self.offset);
        if consumed != Some(self.tail.as_str()) {
            debug!("Transcript was rewritten, reading from the start");
            self.offset = 0;
            self.tail.clear();
        }

        let pending = &content[self.offset..];
        let Some(end) = pending.rfind('\n') else {
            return Vec::new();
        };
        let last_start = pending[..end].rfind('\n').map_or(0, |i| i + 1);
        self.tail = pending[last_start..=end].to_string();
        self.offset += end + 1;

        pending[..end]
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}
