//! tabstop - focusable element locator
//!
//! Main entry point for the tabstop CLI.

mod cli;
mod commands;
mod logging;

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::debug;

use tabstop_config::ConfigLoader;

use cli::{Cli, Commands};

/// Project-local configuration, checked before the user config directory.
const LOCAL_CONFIG: &str = "config/default.toml";

/// Resolve the configuration path when none is given on the command line.
fn default_config_path() -> PathBuf {
    let local = Path::new(LOCAL_CONFIG);
    if local.exists() {
        return local.to_path_buf();
    }
    dirs::config_dir()
        .map(|dir| dir.join("tabstop").join("config.toml"))
        .unwrap_or_else(|| local.to_path_buf())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let config = match &cli.config {
        // An explicit path must exist.
        Some(path) => ConfigLoader::load(path)?,
        None => ConfigLoader::load_or_default(&config_path)?,
    };

    match logging::init_tracing(&config.logging) {
        Ok(()) => debug!("Using configuration from {}", config_path.display()),
        // check-config reports the unusable directive itself.
        Err(_) if matches!(cli.command, Commands::CheckConfig) => {}
        Err(e) => return Err(e),
    }

    match cli.command {
        Commands::Find {
            snapshot,
            root,
            include_scrollable,
            format,
        } => commands::run_find(
            &config,
            &snapshot,
            root.as_deref(),
            include_scrollable,
            format.as_deref(),
        ),
        Commands::Inspect {
            snapshot,
            element,
            format,
        } => commands::run_inspect(&config, &snapshot, &element, format.as_deref()),
        Commands::CheckConfig => commands::run_check_config(&config, &config_path),
    }
}
