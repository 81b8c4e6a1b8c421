//! Presentation sinks for filtered images.
//!
//! A [`DisplaySink`] receives a finished pixel buffer. The transform core
//! never depends on whether or how the image is shown.

use pixel_filter::PixelBuffer;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::encode_png;
use crate::error::SinkError;

/// Accepts a fully written pixel buffer for display or storage
pub trait DisplaySink: Send + Sync {
    fn present(&self, image: &PixelBuffer) -> Result<(), SinkError>;
}

/// Writes each presented image to a PNG file, replacing earlier content
pub struct PngFileSink {
    path: PathBuf,
}

impl PngFileSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DisplaySink for PngFileSink {
    fn present(&self, image: &PixelBuffer) -> Result<(), SinkError> {
        let png_bytes = encode_png(image)?;
        std::fs::write(&self.path, &png_bytes)?;
        tracing::info!(
            path = %self.path.display(),
            bytes = png_bytes.len(),
            width = image.width(),
            height = image.height(),
            "Wrote filtered image"
        );
        Ok(())
    }
}

/// Keeps the most recently presented image in memory
#[derive(Default)]
pub struct MemorySink {
    last: Mutex<Option<PixelBuffer>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last presented image, if any
    pub fn last(&self) -> Option<PixelBuffer> {
        self.last
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl DisplaySink for MemorySink {
    fn present(&self, image: &PixelBuffer) -> Result<(), SinkError> {
        *self
            .last
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(image.clone());
        Ok(())
    }
}
