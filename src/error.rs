//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, decoder, and resampler errors, and provides semantic
//! variants for argument validation.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(image::ImageError),

    #[error("Encode error: {0}")]
    Encode(image::ImageError),

    #[error("{extension} file extension is not supported (expected jpeg, jpg or png)")]
    UnsupportedFormat { extension: String },

    #[error("Invalid dimensions: {value}. Dimensions should be formatted as '123x123'")]
    InvalidDimensions { value: String },

    #[error("Dimensions must be greater than 0, got: {value}")]
    ZeroDimension { value: String },

    #[error("Image buffer error: {0}")]
    Buffer(#[from] fast_image_resize::ImageBufferError),

    #[error("Resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),
}
