//! Shared types used across imresize.
//! Includes target `Dimensions` and the input/output format enums.
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Target output size in pixels. Both components are positive; the output
/// image always gets exactly this size, aspect ratio is not preserved.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Dimensions {
    type Err = Error;

    /// Parses `WIDTHxHEIGHT`. The separator is case-insensitive and all
    /// whitespace is ignored, so `100x50`, `100X50` and `100 x 50` are
    /// equivalent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        let invalid = || Error::InvalidDimensions {
            value: s.to_string(),
        };

        let (width, height) = normalized.split_once('x').ok_or_else(invalid)?;
        let width: u32 = width.parse().map_err(|_| invalid())?;
        let height: u32 = height.parse().map_err(|_| invalid())?;

        if width == 0 || height == 0 {
            return Err(Error::ZeroDimension {
                value: s.to_string(),
            });
        }

        Ok(Dimensions { width, height })
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum InputFormat {
    Jpeg,
    Png,
}

impl InputFormat {
    /// Selects a decoder from the path's extension. The match is
    /// case-sensitive: only `jpeg`, `jpg` and `png` are recognized.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default();

        match extension.as_str() {
            "jpeg" | "jpg" => Ok(InputFormat::Jpeg),
            "png" => Ok(InputFormat::Png),
            _ => Err(Error::UnsupportedFormat { extension }),
        }
    }

    pub fn to_image_format(self) -> image::ImageFormat {
        match self {
            InputFormat::Jpeg => image::ImageFormat::Jpeg,
            InputFormat::Png => image::ImageFormat::Png,
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Jpeg => write!(f, "Jpeg"),
            InputFormat::Png => write!(f, "Png"),
        }
    }
}

/// Output encoding. Only PNG is produced, regardless of the output path's
/// extension; the single-variant enum keeps that policy explicit.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum OutputFormat {
    Png,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Png => write!(f, "Png"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_parse_plain() {
        let dims: Dimensions = "100x50".parse().unwrap();
        assert_eq!(dims, Dimensions::new(100, 50));
    }

    #[test]
    fn dimensions_parse_uppercase_separator() {
        let dims: Dimensions = "100X50".parse().unwrap();
        assert_eq!(dims, Dimensions::new(100, 50));
    }

    #[test]
    fn dimensions_parse_with_whitespace() {
        let dims: Dimensions = "100 x 50".parse().unwrap();
        assert_eq!(dims, Dimensions::new(100, 50));
    }

    #[test]
    fn dimensions_reject_non_integer_component() {
        let err = "abcx50".parse::<Dimensions>().unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { .. }));
    }

    #[test]
    fn dimensions_reject_missing_separator() {
        let err = "100".parse::<Dimensions>().unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { .. }));
    }

    #[test]
    fn dimensions_reject_negative_component() {
        let err = "100x-50".parse::<Dimensions>().unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { .. }));
    }

    #[test]
    fn dimensions_reject_zero_component() {
        let err = "100x0".parse::<Dimensions>().unwrap_err();
        assert!(matches!(err, Error::ZeroDimension { .. }));
    }

    #[test]
    fn input_format_from_extension() {
        assert_eq!(
            InputFormat::from_path(Path::new("a.jpeg")).unwrap(),
            InputFormat::Jpeg
        );
        assert_eq!(
            InputFormat::from_path(Path::new("a.jpg")).unwrap(),
            InputFormat::Jpeg
        );
        assert_eq!(
            InputFormat::from_path(Path::new("a.png")).unwrap(),
            InputFormat::Png
        );
    }

    #[test]
    fn input_format_is_case_sensitive() {
        let err = InputFormat::from_path(Path::new("a.PNG")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { .. }));
    }

    #[test]
    fn input_format_rejects_unknown_extension() {
        let err = InputFormat::from_path(Path::new("photo.gif")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { extension } if extension == "gif"));
    }
}
