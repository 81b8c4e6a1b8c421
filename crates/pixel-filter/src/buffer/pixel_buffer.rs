//! Owned RGBA pixel buffer with validated dimensions.

use super::{expected_len, offset, validate, BufferError, CHANNELS};

/// An owned RGBA8 image: `width * height * 4` bytes, row-major.
///
/// The length invariant is checked once at construction, so every method
/// that walks the buffer can index without re-validating.
///
/// # Example
///
/// ```
/// use pixel_filter::PixelBuffer;
///
/// let image = PixelBuffer::from_raw(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
/// assert_eq!(image.pixel(1, 0), Some([5, 6, 7, 8]));
/// assert_eq!(image.pixel(2, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap an existing RGBA byte vector.
    ///
    /// Fails if either dimension is zero or `data.len() != width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, BufferError> {
        validate(width, height, data.len())?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Allocate a zero-filled (transparent black) buffer.
    pub fn new(width: u32, height: u32) -> Result<Self, BufferError> {
        let len = expected_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Build from data already known to match the dimensions.
    pub(crate) fn from_validated(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * CHANNELS);
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw interleaved RGBA bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return its bytes.
    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: zero-sized buffers are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Red-channel index of `(x, y)`, or `None` if the pixel is outside the image.
    #[inline]
    pub fn offset_of(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(offset(x, y, self.width))
        } else {
            None
        }
    }

    /// The four channel bytes of `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let at = self.offset_of(x, y)?;
        Some([
            self.data[at],
            self.data[at + 1],
            self.data[at + 2],
            self.data[at + 3],
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_accepts_matching_length() {
        let buf = PixelBuffer::from_raw(3, 2, vec![7; 24]).unwrap();
        assert_eq!(buf.width(), 3);
        assert_eq!(buf.height(), 2);
        assert_eq!(buf.len(), 24);
        assert_eq!(buf.pixel_count(), 6);
        assert!(!buf.is_empty());
    }

    #[test]
    fn test_from_raw_rejects_partial_pixel() {
        let err = PixelBuffer::from_raw(1, 1, vec![1, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            BufferError::LengthMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_from_raw_rejects_swapped_dimensions_length() {
        // 2x3 needs 24 bytes, 20 is neither 2x3 nor 3x2
        assert!(PixelBuffer::from_raw(2, 3, vec![0; 20]).is_err());
    }

    #[test]
    fn test_new_is_transparent_black() {
        let buf = PixelBuffer::new(4, 4).unwrap();
        assert!(buf.as_bytes().iter().all(|&b| b == 0));
        assert_eq!(buf.len(), 64);
    }

    #[test]
    fn test_new_rejects_zero_width() {
        assert!(matches!(
            PixelBuffer::new(0, 10),
            Err(BufferError::ZeroDimension { .. })
        ));
    }

    #[test]
    fn test_pixel_reads_row_major() {
        // 2x2: pixel index i has all channels = i * 10
        let data: Vec<u8> = (0..4u8).flat_map(|i| [i * 10; 4]).collect();
        let buf = PixelBuffer::from_raw(2, 2, data).unwrap();
        assert_eq!(buf.pixel(0, 0), Some([0; 4]));
        assert_eq!(buf.pixel(1, 0), Some([10; 4]));
        assert_eq!(buf.pixel(0, 1), Some([20; 4]));
        assert_eq!(buf.pixel(1, 1), Some([30; 4]));
    }

    #[test]
    fn test_pixel_out_of_bounds() {
        let buf = PixelBuffer::new(2, 2).unwrap();
        assert_eq!(buf.pixel(2, 0), None);
        assert_eq!(buf.pixel(0, 2), None);
        assert_eq!(buf.offset_of(5, 5), None);
    }

    #[test]
    fn test_into_raw_returns_data() {
        let data = vec![1, 2, 3, 4];
        let buf = PixelBuffer::from_raw(1, 1, data.clone()).unwrap();
        assert_eq!(buf.into_raw(), data);
    }
}
