//! Reads and decodes input images. The decoder is selected from the file
//! extension alone; file contents are never sniffed.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader};

use crate::error::{Error, Result};
use crate::types::InputFormat;

/// Opens and decodes the image at `path`.
///
/// The file is opened first, then the extension is matched (case-sensitive)
/// against the supported formats, so an unsupported extension still costs one
/// `open` call but no pixel decoding. Byte streams that are not valid for the
/// chosen format fail with [`Error::Decode`].
pub fn decode_image(path: &Path) -> Result<DynamicImage> {
    let file = File::open(path)?;
    let format = InputFormat::from_path(path)?;

    let mut reader = ImageReader::new(BufReader::new(file));
    reader.set_format(format.to_image_format());
    reader.decode().map_err(|e| match e {
        ImageError::IoError(io) => Error::Io(io),
        other => Error::Decode(other),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn decodes_a_png_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.png");
        RgbaImage::from_pixel(4, 3, Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let decoded = decode_image(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (4, 3));
    }

    #[test]
    fn unsupported_extension_fails_without_decoding() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.gif");
        std::fs::write(&path, b"GIF89a").unwrap();

        let err = decode_image(&path).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { extension } if extension == "gif"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = decode_image(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn mismatched_bytes_are_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("actually_text.jpg");
        std::fs::write(&path, b"not a jpeg at all").unwrap();

        let err = decode_image(&path).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
