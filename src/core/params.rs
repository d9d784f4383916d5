use serde::{Deserialize, Serialize};

use crate::types::{Dimensions, OutputFormat};

/// Resize parameters suitable for config files and presets
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResizeParams {
    pub format: OutputFormat,
    /// Exact target size in pixels; aspect ratio is not preserved
    pub dimensions: Dimensions,
}

impl ResizeParams {
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            format: OutputFormat::Png,
            dimensions,
        }
    }
}
