//! Full-buffer traversal: apply a filter while copying an image.
//!
//! The traversal allocates a fresh destination of the same size as the
//! source, visits every pixel in row-major order (`y` outer, `x` inner) and
//! returns the destination only after the last pixel is written.
//!
//! - [`Traversal::CopyOnly`] copies all four channel bytes verbatim.
//! - [`Traversal::Filter`] writes the quantized RGB result of the
//!   adjustment and copies the source alpha unchanged.
//!
//! The source is only read. Dimension checks happen before the first pixel
//! is touched, so an invalid call never yields a partially written buffer.

use std::ops::Range;

use crate::buffer::{offset, validate, BufferError, PixelBuffer, CHANNELS};
use crate::filter::Adjustment;
use crate::quantize::quantize_rgb;

/// What to do with each pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Traversal {
    /// Copy RGBA bytes unchanged.
    CopyOnly,
    /// Replace RGB with the adjustment's output; keep alpha.
    Filter(Adjustment),
}

impl From<Adjustment> for Traversal {
    fn from(adjustment: Adjustment) -> Self {
        Traversal::Filter(adjustment)
    }
}

/// Apply `traversal` to a raw RGBA slice and return a new buffer.
///
/// Fails with [`BufferError`] if the dimensions are zero, overflow, or do
/// not match `source.len()`.
///
/// # Example
///
/// ```
/// use pixel_filter::{apply_filter, Traversal};
///
/// let src = vec![1, 2, 3, 4, 5, 6, 7, 8];
/// let copy = apply_filter(&src, 2, 1, Traversal::CopyOnly).unwrap();
/// assert_eq!(copy, src);
/// ```
pub fn apply_filter(
    source: &[u8],
    width: u32,
    height: u32,
    traversal: Traversal,
) -> Result<Vec<u8>, BufferError> {
    validate(width, height, source.len())?;
    let mut dest = vec![0u8; source.len()];
    traverse(source, width, 0..height, traversal, &mut dest);
    Ok(dest)
}

/// Apply `traversal` to rows `rows` only, writing into an existing buffer.
///
/// `source` and `dest` must both be `width * height * 4` bytes and must not
/// alias. Rows outside the range are left untouched in `dest`, which lets a
/// host split a large image across several calls.
///
/// # Example
///
/// ```
/// use pixel_filter::{apply_rows, Adjustment, Filter, Traversal};
///
/// let src = vec![90u8; 2 * 4 * 4];
/// let mut dest = vec![0u8; src.len()];
/// let gray = Traversal::Filter(Adjustment::new(Filter::AverageGrayscale));
///
/// apply_rows(&src, &mut dest, 2, 4, 0..2, gray).unwrap();
/// apply_rows(&src, &mut dest, 2, 4, 2..4, gray).unwrap();
/// assert_eq!(dest, src);
/// ```
pub fn apply_rows(
    source: &[u8],
    dest: &mut [u8],
    width: u32,
    height: u32,
    rows: Range<u32>,
    traversal: Traversal,
) -> Result<(), BufferError> {
    validate(width, height, source.len())?;
    validate(width, height, dest.len())?;
    if rows.start > rows.end || rows.end > height {
        return Err(BufferError::RowRange {
            start: rows.start,
            end: rows.end,
            height,
        });
    }
    traverse(source, width, rows, traversal, dest);
    Ok(())
}

/// Inner loop. Lengths must already be validated.
fn traverse(source: &[u8], width: u32, rows: Range<u32>, traversal: Traversal, dest: &mut [u8]) {
    for y in rows {
        for x in 0..width {
            let at = offset(x, y, width);
            match traversal {
                Traversal::CopyOnly => {
                    dest[at..at + CHANNELS].copy_from_slice(&source[at..at + CHANNELS]);
                }
                Traversal::Filter(adjustment) => {
                    let [r, g, b] = quantize_rgb(adjustment.evaluate(source, at));
                    dest[at] = r;
                    dest[at + 1] = g;
                    dest[at + 2] = b;
                    dest[at + 3] = source[at + 3];
                }
            }
        }
    }
}

impl PixelBuffer {
    /// Copy this image through `traversal` into a new buffer.
    ///
    /// Infallible: the dimensions were validated when `self` was built.
    pub fn apply(&self, traversal: Traversal) -> PixelBuffer {
        let mut dest = vec![0u8; self.len()];
        traverse(
            self.as_bytes(),
            self.width(),
            0..self.height(),
            traversal,
            &mut dest,
        );
        PixelBuffer::from_validated(self.width(), self.height(), dest)
    }

    /// Apply each adjustment in order, each stage reading the previous
    /// stage's quantized output.
    ///
    /// An empty list returns a plain copy.
    pub fn apply_all(&self, adjustments: &[Adjustment]) -> PixelBuffer {
        let mut current = self.apply(Traversal::CopyOnly);
        for &adjustment in adjustments {
            current = current.apply(Traversal::Filter(adjustment));
        }
        current
    }
}
