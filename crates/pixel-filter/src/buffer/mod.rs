//! Pixel buffer layout and validation.
//!
//! A pixel buffer is a flat byte sequence of interleaved RGBA channels in
//! row-major order. Its length is always `width * height * 4`.

mod error;
mod pixel_buffer;

pub use error::BufferError;
pub use pixel_buffer::PixelBuffer;

/// Number of interleaved channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Index of the red channel of pixel `(x, y)` in a buffer of the given width.
///
/// Returns `(y * width + x) * 4`. The result is always a multiple of 4, and
/// adjacent pixels in a row are exactly 4 bytes apart.
///
/// # Preconditions
///
/// `x < width` and `y < height` are the caller's responsibility. The
/// traversal in [`crate::traversal`] only ever passes in-range coordinates;
/// out-of-range input yields an index belonging to a different pixel or
/// past the end of the buffer.
///
/// # Example
///
/// ```
/// use pixel_filter::offset;
///
/// assert_eq!(offset(0, 0, 640), 0);
/// assert_eq!(offset(1, 0, 640), 4);
/// assert_eq!(offset(0, 1, 640), 640 * 4);
/// ```
#[inline]
pub fn offset(x: u32, y: u32, width: u32) -> usize {
    debug_assert!(x < width, "x {} out of range for width {}", x, width);
    (y as usize * width as usize + x as usize) * CHANNELS
}

/// Byte length of a `width` x `height` RGBA buffer.
///
/// Fails for zero dimensions and for sizes that overflow `usize`.
pub(crate) fn expected_len(width: u32, height: u32) -> Result<usize, BufferError> {
    if width == 0 || height == 0 {
        return Err(BufferError::ZeroDimension { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or(BufferError::DimensionOverflow { width, height })
}

/// Check that `len` matches the dimensions.
pub(crate) fn validate(width: u32, height: u32, len: usize) -> Result<(), BufferError> {
    let expected = expected_len(width, height)?;
    if expected != len {
        return Err(BufferError::LengthMismatch {
            expected,
            actual: len,
        });
    }
    Ok(())
}
