//! Error types for print-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Exit status for a request the server cannot serve.
pub const EXIT_UNSUPPORTED: i32 = 2;

/// Exit status when the deployment cannot produce PDF at all.
pub const EXIT_FATAL: i32 = 70;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from print-output
    #[error(transparent)]
    Output(#[from] print_output::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Output(e) if e.is_fatal() => EXIT_FATAL,
            CliError::Output(print_output::Error::UnsupportedFormat { .. }) => EXIT_UNSUPPORTED,
            _ => 1,
        }
    }
}
