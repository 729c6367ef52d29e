//! ImageMagick-backed image provider
//!
//! Only registered when explicitly opted into, since it shells out to an
//! external tool. Availability of that tool is probed once and cached.

use std::process::Command;
use std::sync::OnceLock;

use crate::format::FormatId;
use crate::provider::{FormatProvider, OutputFormat, SimpleOutputFormat};

/// Executable probed when no command is configured.
pub const DEFAULT_IMAGEMAGICK_COMMAND: &str = "convert";

const IMAGEMAGICK_FORMATS: &[&str] = &["png", "jpg", "jpeg", "gif", "tif", "tiff", "bmp"];

/// Provider that renders images through the ImageMagick command line.
#[derive(Debug)]
pub struct ImageMagickProvider {
    command: String,
    formats: Vec<FormatId>,
    status: OnceLock<Option<String>>,
}

impl ImageMagickProvider {
    pub fn new() -> Self {
        Self::with_command(DEFAULT_IMAGEMAGICK_COMMAND)
    }

    /// Create a provider that probes `command` instead of `convert`.
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            formats: super::format_ids(IMAGEMAGICK_FORMATS),
            status: OnceLock::new(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl Default for ImageMagickProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatProvider for ImageMagickProvider {
    fn name(&self) -> &str {
        "ImageMagickProvider"
    }

    fn enablement_status(&self) -> Option<String> {
        self.status
            .get_or_init(|| probe_command(&self.command))
            .clone()
    }

    fn formats(&self) -> &[FormatId] {
        &self.formats
    }

    fn create(&self, format: &FormatId) -> Box<dyn OutputFormat> {
        Box::new(SimpleOutputFormat::new("ImageMagickOutput", format))
    }
}

/// Run `<command> -version` and describe why it is unusable, if it is.
fn probe_command(command: &str) -> Option<String> {
    match Command::new(command).arg("-version").output() {
        Ok(output) if output.status.success() => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            tracing::debug!(
                "ImageMagick available: {}",
                stdout.lines().next().unwrap_or("").trim()
            );
            None
        }
        Ok(output) => Some(format!(
            "`{} -version` exited with {}",
            command, output.status
        )),
        Err(e) => Some(format!("ImageMagick executable `{}` not usable: {}", command, e)),
    }
}
