//! Server configuration
//!
//! Only the output-format allow-list is modeled here. A configuration file
//! may be TOML, JSON or YAML, detected from its extension:
//!
//! ```toml
//! formats = ["pdf", "png"]
//! ```
//!
//! A single `"*"` entry permits every format; an empty or missing list
//! permits only PDF.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Read-only server configuration consulted during format selection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Output formats clients may request
    #[serde(default)]
    pub formats: BTreeSet<String>,
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with the given allow-list.
    pub fn with_formats<I, S>(formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            formats: formats.into_iter().map(Into::into).collect(),
        }
    }

    /// The configured allow-list.
    pub fn formats(&self) -> &BTreeSet<String> {
        &self.formats
    }

    /// Load configuration from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        let parse_error = |format: &str, message: String| Error::ConfigParse {
            path: path.to_path_buf(),
            format: format.into(),
            message,
        };

        let config: Self = match extension.as_str() {
            "toml" => toml::from_str(&content).map_err(|e| parse_error("TOML", e.to_string()))?,
            "json" => {
                serde_json::from_str(&content).map_err(|e| parse_error("JSON", e.to_string()))?
            }
            "yaml" | "yml" => {
                serde_yaml::from_str(&content).map_err(|e| parse_error("YAML", e.to_string()))?
            }
            _ => return Err(Error::UnsupportedConfigFormat { extension }),
        };

        tracing::debug!(
            "Loaded output formats {:?} from {}",
            config.formats,
            path.display()
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_is_empty() {
        assert!(ServerConfig::default().formats().is_empty());
    }

    #[test]
    fn test_with_formats() {
        let config = ServerConfig::with_formats(["png", "PDF"]);
        let formats: Vec<&str> = config.formats().iter().map(String::as_str).collect();
        assert_eq!(formats, vec!["PDF", "png"]);
    }

    #[test]
    fn test_load_toml() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "config.toml", "formats = [\"pdf\", \"png\"]\n");
        let config = ServerConfig::load(&path).unwrap();
        assert_eq!(config, ServerConfig::with_formats(["pdf", "png"]));
    }

    #[test]
    fn test_load_json() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "config.json", r#"{"formats": ["*"]}"#);
        let config = ServerConfig::load(&path).unwrap();
        assert_eq!(config, ServerConfig::with_formats(["*"]));
    }

    #[test]
    fn test_load_yaml() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "config.YML", "formats:\n  - jpeg\n  - gif\n");
        let config = ServerConfig::load(&path).unwrap();
        assert_eq!(config, ServerConfig::with_formats(["gif", "jpeg"]));
    }

    #[test]
    fn test_missing_formats_key_defaults_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "config.toml", "");
        let config = ServerConfig::load(&path).unwrap();
        assert!(config.formats().is_empty());
    }

    #[test]
    fn test_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "config.toml", "formats = \"pdf\"");
        let err = ServerConfig::load(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { ref format, .. } if format == "TOML"));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "config.ini", "formats=pdf");
        let err = ServerConfig::load(&path).unwrap_err();
        assert!(matches!(err, Error::UnsupportedConfigFormat { ref extension } if extension == "ini"));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = ServerConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
