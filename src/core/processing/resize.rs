use fast_image_resize::{PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;

use crate::error::{Error, Result};
use crate::types::Dimensions;

/// Resamples a tightly-packed RGBA8 buffer to `target_cols` x `target_rows`
/// with nearest-neighbor scaling: each destination pixel takes the value of
/// the single closest source pixel, no blending.
pub fn resize_rgba_buffer(
    data: &[u8],
    original_cols: u32,
    original_rows: u32,
    target_cols: u32,
    target_rows: u32,
) -> Result<Vec<u8>> {
    let resize_options = ResizeOptions::new().resize_alg(ResizeAlg::Nearest);
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original_cols,
        original_rows,
        data.to_vec(),
        PixelType::U8x4,
    )?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x4);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    Ok(dst_image.into_vec())
}

/// Pure resampling step: allocates a fresh buffer of exactly `dimensions`,
/// fills every pixel from the source, and returns it. The source is never
/// modified and no state is shared between calls.
pub fn resample(src: &RgbaImage, dimensions: Dimensions) -> Result<RgbaImage> {
    let resized = resize_rgba_buffer(
        src.as_raw(),
        src.width(),
        src.height(),
        dimensions.width,
        dimensions.height,
    )?;

    RgbaImage::from_raw(dimensions.width, dimensions.height, resized)
        .ok_or(Error::Buffer(fast_image_resize::ImageBufferError::InvalidBufferSize))
}
