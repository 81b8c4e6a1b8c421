//! Error type for pixel buffer validation.

use std::fmt;

/// Precondition violation on a pixel buffer.
///
/// Returned before any pixel is read or written, so a failed call never
/// produces a partially written destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Width or height is zero
    ZeroDimension {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
    /// Buffer length is not `width * height * 4`
    LengthMismatch {
        /// Length implied by the dimensions
        expected: usize,
        /// Length of the buffer that was supplied
        actual: usize,
    },
    /// `width * height * 4` does not fit in `usize`
    DimensionOverflow {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
    /// Row range extends past the image or is reversed
    RowRange {
        /// First row of the range
        start: u32,
        /// One past the last row of the range
        end: u32,
        /// Image height
        height: u32,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::ZeroDimension { width, height } => {
                write!(f, "image dimensions must be non-zero, got {}x{}", width, height)
            }
            BufferError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "pixel buffer length mismatch: expected {} bytes, got {}",
                    expected, actual
                )
            }
            BufferError::DimensionOverflow { width, height } => {
                write!(f, "image dimensions {}x{} overflow buffer size", width, height)
            }
            BufferError::RowRange { start, end, height } => {
                write!(
                    f,
                    "row range {}..{} is invalid for height {}",
                    start, end, height
                )
            }
        }
    }
}

impl std::error::Error for BufferError {}
