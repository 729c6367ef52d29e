//! Command implementations

use std::fs;
use std::path::Path;

use colored::Colorize;
use print_output::{FormatSelector, PrintRequest, ServerConfig};

use crate::error::Result;

/// Load the server configuration, or an empty allow-list when none is given.
pub fn load_config(path: Option<&Path>) -> Result<ServerConfig> {
    match path {
        Some(path) => Ok(ServerConfig::load(path)?),
        None => {
            tracing::debug!("No configuration given, only the default format is permitted");
            Ok(ServerConfig::default())
        }
    }
}

/// Run the formats command
pub fn run_formats(selector: &FormatSelector, config: &ServerConfig, json: bool) -> Result<()> {
    let formats = selector.supported_formats(config);

    if json {
        println!("{}", serde_json::to_string(&formats)?);
        return Ok(());
    }

    for format in &formats {
        println!("{}", format);
    }
    Ok(())
}

/// Run the providers command
pub fn run_providers(selector: &FormatSelector) -> Result<()> {
    println!("{}", "Output Providers".bold());
    println!();

    for (index, provider) in selector.registry().iter().enumerate() {
        let formats: Vec<&str> = provider.formats().iter().map(|f| f.as_str()).collect();
        let status = match provider.enablement_status() {
            None => "enabled".green().to_string(),
            Some(reason) => format!("{} ({})", "disabled".red(), reason),
        };
        println!(
            "  {}. {:<24} {}",
            index + 1,
            provider.name().cyan(),
            status
        );
        println!("     {}", formats.join(", ").dimmed());
    }

    Ok(())
}

/// Run the select command
pub fn run_select(
    selector: &FormatSelector,
    config: &ServerConfig,
    format: Option<&str>,
    spec: Option<&Path>,
) -> Result<()> {
    let handler = match spec {
        Some(path) => {
            let json =
                fs::read_to_string(path).map_err(|e| print_output::Error::io(path, e))?;
            let request = PrintRequest::from_json(&json)?;
            selector.create_for_request(config, &request)?
        }
        None => selector.create(config, format)?,
    };

    println!("handler:      {}", handler.name().green());
    println!("format:       {}", handler.format());
    println!("content-type: {}", handler.content_type());
    println!("suffix:       {}", handler.file_suffix());
    Ok(())
}
