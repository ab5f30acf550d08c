//! Glass CLI - flag likely-false factual claims from the command line.

use clap::Parser;
use glass_cli::commands;
use glass_cli::{Cli, Command, Formatter, GlassConfig};
use glass_domain::traits::ReferenceLookup;
use glass_reference::{OfflineLookup, WikipediaLookup};
use std::fmt::Display;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> glass_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = GlassConfig::load(cli.config.as_deref())?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Config(args) => {
            commands::execute_config(args, &config, cli.config.as_deref(), &formatter).await?;
        }
        command if cli.offline => {
            execute(command, &config, OfflineLookup, &formatter).await?;
        }
        command => {
            let lookup = WikipediaLookup::new(config.reference.clone())?;
            execute(command, &config, lookup, &formatter).await?;
        }
    }

    Ok(())
}

/// Run a command that needs the reference lookup.
async fn execute<L>(
    command: Command,
    config: &GlassConfig,
    lookup: L,
    formatter: &Formatter,
) -> glass_cli::Result<()>
where
    L: ReferenceLookup + Send + Sync + 'static,
    L::Error: Display,
{
    match command {
        Command::Scan(args) => commands::execute_scan(args, config, lookup, formatter).await,
        Command::Check(args) => commands::execute_check(args, config, lookup, formatter).await,
        Command::Watch(args) => commands::execute_watch(args, config, lookup, formatter).await,
        Command::Config(_) => unreachable!(),
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
