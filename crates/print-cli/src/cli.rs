//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect which output formats the print server can produce
#[derive(Parser, Debug)]
#[command(name = "print-formats")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Server configuration file (TOML, JSON or YAML)
    #[arg(short, long, global = true, env = "PRINT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Register the ImageMagick provider even if USE_IMAGEMAGICK is not set
    #[arg(long, global = true)]
    pub imagemagick: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List formats that can currently be requested
    Formats {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show registered providers in priority order
    Providers,

    /// Select the handler that would serve a request
    ///
    /// Examples:
    ///   print-formats select                    # Default format (pdf)
    ///   print-formats select --format png
    ///   print-formats select --spec request.json
    Select {
        /// Requested output format
        #[arg(short, long, conflicts_with = "spec")]
        format: Option<String>,

        /// Print request JSON to read `outputFormat` from
        #[arg(short, long)]
        spec: Option<PathBuf>,
    },
}
