//! Error types for print-output

use std::path::PathBuf;

/// Result type for print-output operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading configuration or selecting a format
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No enabled, permitted provider can produce the default format.
    ///
    /// This is a deployment defect, not something a caller can correct.
    #[error("There must be a format that can output PDF")]
    NoDefaultFormat,

    #[error(
        "{requested} is not a supported format. Supported formats: {}",
        .supported.join(", ")
    )]
    UnsupportedFormat {
        requested: String,
        supported: Vec<String>,
    },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedConfigFormat { extension: String },

    #[error("Invalid print request: {0}")]
    InvalidRequest(#[from] serde_json::Error),

    #[error("Format identifier must not be empty")]
    EmptyFormat,
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the error signals a broken deployment that must abort the operation.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::NoDefaultFormat)
    }

    /// Whether the error was caused by the request and can be reported back to the client.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedFormat { .. } | Error::InvalidRequest(_) | Error::EmptyFormat
        )
    }
}
