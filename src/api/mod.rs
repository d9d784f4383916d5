//! High-level, ergonomic library API: resize an image file to a path or to an
//! in-memory buffer. Prefer these entrypoints over the low-level processing
//! modules when embedding imresize.
use std::path::Path;

use crate::core::params::ResizeParams;
use crate::core::processing::resize::resample;
use crate::core::processing::save::save_resized_image;
use crate::error::Result;
use crate::io::reader::decode_image;
use crate::types::{Dimensions, OutputFormat};

/// Result of in-memory resizing
#[derive(Debug, Clone)]
pub struct ResizedImage {
    pub width: u32,
    pub height: u32,
    pub format: OutputFormat,
    /// Interleaved RGBA8, tightly packed, row-major
    pub pixels: Vec<u8>,
}

/// Decodes `input`, resamples it to the requested dimensions, and writes the
/// result to `output` as PNG.
pub fn resize_file_to_path(input: &Path, output: &Path, params: &ResizeParams) -> Result<()> {
    let image = decode_image(input)?;
    save_resized_image(&image, output, params.dimensions)
}

/// Decodes `input` and resamples it to `dimensions` in memory (no output I/O)
pub fn resize_file_to_buffer(input: &Path, dimensions: Dimensions) -> Result<ResizedImage> {
    let image = decode_image(input)?;
    let resized = resample(&image.to_rgba8(), dimensions)?;

    Ok(ResizedImage {
        width: resized.width(),
        height: resized.height(),
        format: OutputFormat::Png,
        pixels: resized.into_raw(),
    })
}
