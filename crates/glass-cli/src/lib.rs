//! Glass CLI library.
//!
//! Command-line front end for the claim detector: one-shot scans of HTML,
//! plain text and transcript files, single-claim checks, and a live watch
//! mode that follows a growing transcript.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::{GlassConfig, OutputFormat};
pub use error::{CliError, Result};
pub use output::Formatter;
