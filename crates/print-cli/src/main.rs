//! Print output format CLI
//!
//! Lists the formats a server configuration permits and dry-runs format
//! selection for a request.

mod cli;
mod commands;
mod error;

use std::sync::Arc;

use clap::Parser;
use colored::Colorize;
use print_output::{FormatSelector, ProviderRegistry, RegistryOptions};

use cli::{Cli, Commands};
use error::Result;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    let directive = if cli.verbose { "debug" } else { "warn" };
    if let Err(e) = print_output::logging::init_with_default(directive) {
        eprintln!("{}: failed to initialize logging: {}", "warning".yellow().bold(), e);
    }

    let options = RegistryOptions::from_env();
    let options = if cli.imagemagick {
        options.with_imagemagick(true)
    } else {
        options
    };
    let selector = FormatSelector::new(Arc::new(ProviderRegistry::builtin(&options)));
    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Formats { json } => commands::run_formats(&selector, &config, json),
        Commands::Providers => commands::run_providers(&selector),
        Commands::Select { format, spec } => {
            commands::run_select(&selector, &config, format.as_deref(), spec.as_deref())
        }
    }
}
