use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::error::{Error, Result};

/// Writes a tightly-packed RGBA8 buffer to `output` as PNG, truncating any
/// existing file. A partially written file may remain if encoding fails
/// midway.
pub fn write_rgba_png(output: &Path, cols: u32, rows: u32, data: &[u8]) -> Result<()> {
    let file = File::create(output)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new(writer);
    encoder
        .write_image(data, cols, rows, ExtendedColorType::Rgba8)
        .map_err(Error::Encode)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn written_file_decodes_back_to_the_same_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let data: Vec<u8> = (0..2 * 3 * 4).map(|i| i as u8 * 10).collect();

        write_rgba_png(&path, 2, 3, &data).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!((decoded.width(), decoded.height()), (2, 3));
        assert_eq!(decoded.as_raw(), &data);
    }

    #[test]
    fn existing_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        std::fs::write(&path, b"stale contents").unwrap();

        write_rgba_png(&path, 1, 1, &[1, 2, 3, 4]).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.as_raw(), &[1, 2, 3, 4]);
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing_dir").join("out.png");
        let err = write_rgba_png(&path, 1, 1, &[0, 0, 0, 255]).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
