//! FormatProvider trait and the handler it instantiates

use std::fmt::Debug;

use crate::format::FormatId;

/// A handler able to produce one output format.
///
/// Rendering itself happens outside this crate; the handler describes what
/// the selected producer will emit.
pub trait OutputFormat: Send + Sync + Debug {
    /// Concrete handler type name (e.g., "PdfOutput").
    fn name(&self) -> &str;

    /// The format identifier this handler produces.
    fn format(&self) -> &FormatId;

    /// MIME type of the produced document.
    fn content_type(&self) -> &str;

    /// File extension of the produced document, without the leading dot.
    fn file_suffix(&self) -> &str;
}

/// Core trait for format providers.
///
/// Implementations must be safe to call from several request threads at
/// once, since a single registry is shared for the process lifetime.
pub trait FormatProvider: Send + Sync + Debug {
    /// Provider name used in log messages.
    fn name(&self) -> &str;

    /// `None` when the provider is usable, otherwise the reason it is not.
    ///
    /// Called on every selection, so implementations with an expensive
    /// check should cache the outcome.
    fn enablement_status(&self) -> Option<String>;

    /// Identifiers this provider can produce, in preference order.
    fn formats(&self) -> &[FormatId];

    /// Instantiate a handler for `format`.
    ///
    /// Callers only pass identifiers taken from [`FormatProvider::formats`].
    fn create(&self, format: &FormatId) -> Box<dyn OutputFormat>;
}

/// Plain [`OutputFormat`] value shared by the built-in providers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleOutputFormat {
    name: &'static str,
    format: FormatId,
    content_type: String,
    file_suffix: String,
}

impl SimpleOutputFormat {
    /// Create a handler named `name` for `format`, deriving MIME type and suffix from the identifier.
    pub fn new(name: &'static str, format: &FormatId) -> Self {
        let suffix = format.normalized();
        Self {
            name,
            format: format.clone(),
            content_type: content_type_for(&suffix).to_string(),
            file_suffix: suffix,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }
}

impl OutputFormat for SimpleOutputFormat {
    fn name(&self) -> &str {
        self.name
    }

    fn format(&self) -> &FormatId {
        &self.format
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn file_suffix(&self) -> &str {
        &self.file_suffix
    }
}

/// MIME type for a lower-cased format identifier.
pub fn content_type_for(format: &str) -> &'static str {
    match format {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "tif" | "tiff" => "image/tiff",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
