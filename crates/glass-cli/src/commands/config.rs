//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::{GlassConfig, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::{Path, PathBuf};

/// Execute the config command.
///
/// `path` is the `--config` override; without it the default path is used.
pub async fn execute_config(
    args: ConfigArgs,
    config: &GlassConfig,
    path: Option<&Path>,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            let rendered = match formatter.format() {
                OutputFormat::Json => serde_json::to_string_pretty(config)?,
                OutputFormat::Text => config.to_toml()?,
            };
            println!("{}", rendered);
        }
        ConfigAction::Init { force } => {
            let target = config_path(path)?;
            init_config(&target, force)?;
            println!(
                "{}",
                formatter.success(&format!("Wrote default configuration to {}", target.display()))
            );
        }
        ConfigAction::Path => {
            println!("{}", config_path(path)?.display());
        }
    }

    Ok(())
}

fn config_path(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => GlassConfig::default_path(),
    }
}

/// Write the default configuration, refusing to replace a file unless `force`.
pub fn init_config(target: &Path, force: bool) -> Result<()> {
    if target.exists() && !force {
        return Err(CliError::InvalidInput(format!(
            "{} already exists; pass --force to overwrite",
            target.display()
        )));
    }
    GlassConfig::default().save_to(target)
}
