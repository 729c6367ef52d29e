//! Scalable image provider

use crate::format::FormatId;
use crate::provider::{FormatProvider, OutputFormat, SimpleOutputFormat};

const SCALABLE_FORMATS: &[&str] = &["svg", "png", "jpg", "jpeg", "tif", "tiff", "gif", "bmp"];

/// Provider for the renderer that rasterizes from a vector intermediate.
#[derive(Debug)]
pub struct ScalableImageProvider {
    formats: Vec<FormatId>,
}

impl ScalableImageProvider {
    pub fn new() -> Self {
        Self {
            formats: super::format_ids(SCALABLE_FORMATS),
        }
    }
}

impl Default for ScalableImageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatProvider for ScalableImageProvider {
    fn name(&self) -> &str {
        "ScalableImageProvider"
    }

    fn enablement_status(&self) -> Option<String> {
        None
    }

    fn formats(&self) -> &[FormatId] {
        &self.formats
    }

    fn create(&self, format: &FormatId) -> Box<dyn OutputFormat> {
        Box::new(SimpleOutputFormat::new("ScalableImageOutput", format))
    }
}
