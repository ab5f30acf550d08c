//! CLI command definitions and argument parsing.

use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

/// Glass - flag likely-false factual claims in text.
#[derive(Debug, Parser)]
#[command(name = "glass")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "GLASS_CONFIG")]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Never contact the reference; only the fixed rules can flag claims
    #[arg(long, global = true)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable tables (default)
    Text,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run one scan pass over a file
    Scan(ScanArgs),

    /// Score and verify a single piece of text
    Check(CheckArgs),

    /// Follow a growing transcript file and scan new speech
    Watch(WatchArgs),

    /// Show or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for the scan command.
#[derive(Debug, Parser)]
#[command(group(ArgGroup::new("input").required(true).args(["html", "text", "transcript"])))]
pub struct ScanArgs {
    /// HTML document; title, description and paragraphs are scanned
    #[arg(long)]
    pub html: Option<PathBuf>,

    /// Plain text; blank lines separate paragraphs
    #[arg(long)]
    pub text: Option<PathBuf>,

    /// Transcript; every line is one utterance
    #[arg(long)]
    pub transcript: Option<PathBuf>,
}

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Text to check; short inputs are treated like a search box
    #[arg(required = true)]
    pub claim: Vec<String>,
}

/// Arguments for the watch command.
#[derive(Debug, Parser)]
pub struct WatchArgs {
    /// Transcript file to follow
    #[arg(long)]
    pub transcript: PathBuf,

    /// How often the file is polled (milliseconds)
    #[arg(long, default_value = "500")]
    pub poll_ms: u64,

    /// Characters of recent speech kept for scanning (default: scanner fingerprint length)
    #[arg(long)]
    pub window: Option<usize>,

    /// Ignore lines already in the file when watching starts
    #[arg(long)]
    pub tail: bool,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write the default configuration to the config path
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration file path
    Path,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}
