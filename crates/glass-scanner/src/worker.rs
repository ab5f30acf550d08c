//! Background worker that re-scans on page or transcript events

use crate::report::ScanReport;
use crate::{ScanError, ScanMetrics, Scanner};
use glass_domain::traits::{ReferenceLookup, TextSource};
use std::fmt::Display;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::time::{sleep_until, Duration, Instant};
use tracing::{debug, info};

/// What caused a re-scan request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Viewport scrolled
    Scroll,
    /// Viewport resized
    Resize,
    /// Content changed
    Mutation,
    /// Explicit request
    Manual,
}

/// Command sent to a running worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanCommand {
    /// Request a pass; bursts are coalesced
    Trigger(Trigger),
    /// Enable the scanner and schedule a pass
    Enable,
    /// Disable the scanner and drop any scheduled pass
    Disable,
    /// Stop the worker
    Shutdown,
}

/// Event-driven scan loop
///
/// Triggers arm a trailing throttle: the first trigger schedules a pass
/// `throttle` later and triggers arriving before it fire are folded into that
/// same pass. Completed reports are sent on the report channel. The source is
/// shared with whoever feeds it and is locked only while collecting.
///
/// # Examples
///
/// ```no_run
/// use glass_collector::TranscriptSource;
/// use glass_reference::OfflineLookup;
/// use glass_scanner::{ScanCommand, ScanWorker, Scanner, Trigger};
/// use std::sync::Arc;
/// use tokio::sync::{mpsc, Mutex};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let source = Arc::new(Mutex::new(TranscriptSource::new()));
///     let worker = ScanWorker::new(Scanner::with_lookup(OfflineLookup), Arc::clone(&source));
///
///     let (commands, command_rx) = mpsc::channel(32);
///     let (report_tx, mut reports) = mpsc::channel(8);
///     let handle = tokio::spawn(worker.run(command_rx, report_tx));
///
///     commands.send(ScanCommand::Enable).await?;
///     source.lock().await.append("The sun orbits the earth, as everyone was taught.");
///     commands.send(ScanCommand::Trigger(Trigger::Mutation)).await?;
///
///     if let Some(report) = reports.recv().await {
///         println!("{} highlights", report.highlights.len());
///     }
///     commands.send(ScanCommand::Shutdown).await?;
///     handle.await??;
///     Ok(())
/// }
/// ```
pub struct ScanWorker<L, S> {
    scanner: Scanner<L>,
    source: Arc<Mutex<S>>,
    throttle: Duration,
}

impl<L, S> ScanWorker<L, S>
where
    L: ReferenceLookup + Send + Sync + 'static,
    L::Error: Display,
    S: TextSource + Send,
    S::Error: Display,
{
    /// Create a worker around a scanner and a shared source
    pub fn new(scanner: Scanner<L>, source: Arc<Mutex<S>>) -> Self {
        let throttle = scanner.config().throttle();
        Self {
            scanner,
            source,
            throttle,
        }
    }

    /// Metrics of the wrapped scanner
    pub fn metrics(&self) -> &ScanMetrics {
        self.scanner.metrics()
    }

    /// Run until `Shutdown`, or until either channel closes
    ///
    /// Returns the scanner so its cache and metrics outlive the worker.
    pub async fn run(
        mut self,
        mut commands: mpsc::Receiver<ScanCommand>,
        reports: mpsc::Sender<ScanReport>,
    ) -> Result<Scanner<L>, ScanError> {
        info!("Scan worker started (throttle: {:?})", self.throttle);

        let mut scheduled: Option<Instant> = None;

        loop {
            let deadline = scheduled;
            tokio::select! {
                command = commands.recv() => match command {
                    Some(ScanCommand::Trigger(trigger)) => {
                        debug!("Trigger {:?}", trigger);
                        if self.scanner.is_enabled() && scheduled.is_none() {
                            scheduled = Some(Instant::now() + self.throttle);
                        }
                    }
                    Some(ScanCommand::Enable) => {
                        self.scanner.enable();
                        scheduled.get_or_insert(Instant::now() + self.throttle);
                    }
                    Some(ScanCommand::Disable) => {
                        self.scanner.disable();
                        scheduled = None;
                    }
                    Some(ScanCommand::Shutdown) | None => {
                        info!("Shutdown requested, stopping scan worker");
                        break;
                    }
                },
                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    scheduled = None;
                    let outcome = self
                        .scanner
                        .scan_shared(&self.source, Instant::now().into_std())
                        .await;

                    if let Some(report) = outcome.into_report() {
                        if reports.send(report).await.is_err() {
                            info!("Report receiver dropped, stopping scan worker");
                            break;
                        }
                    }
                }
            }
        }

        info!("Scan worker stopped. Final metrics:\n{}", self.scanner.metrics().summary());
        Ok(self.scanner)
    }
}
