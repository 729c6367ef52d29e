//! Built-in format providers
//!
//! These stand in front of the actual document producers: each one reports
//! whether its producer is usable, which formats it covers, and hands out a
//! handler describing the output.

mod image;
mod imagemagick;
mod pdf;
mod scalable;

pub use image::ImageProvider;
pub use imagemagick::{DEFAULT_IMAGEMAGICK_COMMAND, ImageMagickProvider};
pub use pdf::PdfProvider;
pub use scalable::ScalableImageProvider;

use crate::format::FormatId;

fn format_ids(ids: &[&str]) -> Vec<FormatId> {
    ids.iter().copied().map(FormatId::from).collect()
}
