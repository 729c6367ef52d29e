//! Default image provider

use crate::format::FormatId;
use crate::provider::{FormatProvider, OutputFormat, SimpleOutputFormat};

const IMAGE_FORMATS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "tif", "tiff"];

/// Fallback raster image provider, registered last.
#[derive(Debug)]
pub struct ImageProvider {
    formats: Vec<FormatId>,
}

impl ImageProvider {
    pub fn new() -> Self {
        Self {
            formats: super::format_ids(IMAGE_FORMATS),
        }
    }
}

impl Default for ImageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatProvider for ImageProvider {
    fn name(&self) -> &str {
        "ImageProvider"
    }

    fn enablement_status(&self) -> Option<String> {
        None
    }

    fn formats(&self) -> &[FormatId] {
        &self.formats
    }

    fn create(&self, format: &FormatId) -> Box<dyn OutputFormat> {
        Box::new(SimpleOutputFormat::new("ImageOutput", format))
    }
}
