//! CLI definitions for tabstop.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// tabstop CLI.
#[derive(Parser)]
#[command(name = "tabstop")]
#[command(about = "Locate focusable elements in a rendered element tree")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (default: config/default.toml, then the
    /// user config directory)
    #[arg(short, long, global = true, env = "TABSTOP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List focusable elements inside a container
    Find {
        /// Path to a JSON tree snapshot
        snapshot: PathBuf,

        /// `id` attribute of the container (default: document root)
        #[arg(long)]
        root: Option<String>,

        /// Also list scrollable regions
        #[arg(long)]
        include_scrollable: bool,

        /// Output format (table, json)
        #[arg(long)]
        format: Option<String>,
    },

    /// Explain whether a single element is focusable
    Inspect {
        /// Path to a JSON tree snapshot
        snapshot: PathBuf,

        /// `id` attribute of the element
        element: String,

        /// Output format (table, json)
        #[arg(long)]
        format: Option<String>,
    },

    /// Validate the configuration file
    CheckConfig,
}
