//! Test fixtures and constants.

use pixel_filter::PixelBuffer;
use std::path::{Path, PathBuf};

use canvas_filters::rendering::encode_png;

/// Small RGBA images with known filter results
pub mod images {
    /// Opaque red next to half-transparent green (2x1)
    pub const RED_GREEN: [u8; 8] = [255, 0, 0, 255, 0, 255, 0, 128];

    /// RED_GREEN through average-grayscale
    pub const RED_GREEN_AVERAGE: [u8; 8] = [85, 85, 85, 255, 85, 85, 85, 128];

    /// A muted blue with partial alpha (1x1)
    pub const MUTED: [u8; 4] = [30, 60, 90, 200];

    /// MUTED through saturation 4
    pub const MUTED_SATURATED: [u8; 4] = [0, 60, 180, 200];

    /// A bright pixel that overflows under contrast 1.5 (1x1)
    pub const BRIGHT: [u8; 4] = [245, 235, 100, 1];

    /// BRIGHT through contrast 1.5
    pub const BRIGHT_CONTRAST: [u8; 4] = [255, 255, 86, 1];
}

/// Build a pixel buffer, panicking on invalid fixture data
pub fn image(width: u32, height: u32, data: &[u8]) -> PixelBuffer {
    PixelBuffer::from_raw(width, height, data.to_vec()).expect("invalid fixture image")
}

/// Encode fixture data as PNG bytes
pub fn png_bytes(width: u32, height: u32, data: &[u8]) -> Vec<u8> {
    encode_png(&image(width, height, data)).expect("failed to encode fixture")
}

/// Write fixture data as a PNG file in `dir`
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, png_bytes(width, height, data)).expect("failed to write fixture");
    path
}

/// Path as a query/CLI identifier
pub fn identifier(path: &Path) -> String {
    path.to_str().expect("non-UTF-8 temp path").to_string()
}
