use std::path::Path;

use image::DynamicImage;
use tracing::info;

use crate::core::processing::resize::resample;
use crate::error::Result;
use crate::io::writers::png::write_rgba_png;
use crate::types::Dimensions;

/// Resamples the decoded image to `dimensions` and writes it to `output`
/// as PNG, whatever the output path's extension says.
pub fn save_resized_image(
    image: &DynamicImage,
    output: &Path,
    dimensions: Dimensions,
) -> Result<()> {
    let src = image.to_rgba8();

    info!(
        "Original size: {}x{}, New size: {}",
        src.width(),
        src.height(),
        dimensions
    );

    let resized = resample(&src, dimensions)?;
    write_rgba_png(
        output,
        resized.width(),
        resized.height(),
        resized.as_raw(),
    )
}
