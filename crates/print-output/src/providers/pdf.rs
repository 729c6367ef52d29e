//! PDF provider

use crate::format::{DEFAULT_FORMAT, FormatId};
use crate::provider::{FormatProvider, OutputFormat, SimpleOutputFormat};

/// Provider for the PDF renderer.
///
/// Registered first so the default format is always resolvable.
#[derive(Debug)]
pub struct PdfProvider {
    formats: Vec<FormatId>,
}

impl PdfProvider {
    pub fn new() -> Self {
        Self {
            formats: super::format_ids(&[DEFAULT_FORMAT]),
        }
    }
}

impl Default for PdfProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatProvider for PdfProvider {
    fn name(&self) -> &str {
        "PdfProvider"
    }

    fn enablement_status(&self) -> Option<String> {
        None
    }

    fn formats(&self) -> &[FormatId] {
        &self.formats
    }

    fn create(&self, format: &FormatId) -> Box<dyn OutputFormat> {
        Box::new(SimpleOutputFormat::new("PdfOutput", format))
    }
}
