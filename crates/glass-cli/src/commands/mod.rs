//! Command implementations.

pub mod check;
pub mod config;
pub mod scan;
pub mod watch;

pub use self::check::execute_check;
pub use self::config::execute_config;
pub use self::scan::execute_scan;
pub use self::watch::execute_watch;

use crate::config::GlassConfig;
use crate::error::Result;
use glass_collector::Collector;
use glass_detector::Detector;
use glass_domain::traits::ReferenceLookup;
use glass_scanner::Scanner;
use glass_verifier::QuickVerifier;
use std::fmt::Display;

/// Build an enabled scanner from the configuration and a lookup.
pub fn build_scanner<L>(config: &GlassConfig, lookup: L) -> Result<Scanner<L>>
where
    L: ReferenceLookup + Send + Sync + 'static,
    L::Error: Display,
{
    let verifier = QuickVerifier::try_new(lookup, config.verifier.clone())?;
    let mut scanner = Scanner::try_new(
        config.scanner.clone(),
        Collector::new(config.collector.clone()),
        Detector::try_new(config.detector.clone())?,
        verifier,
    )?;
    scanner.enable();
    Ok(scanner)
}
