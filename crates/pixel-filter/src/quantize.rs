//! Write policy for real-valued filter output.
//!
//! Filters compute in `f32` and may return values outside `0..=255` or with
//! a fractional part. When a result is committed to a byte channel it is
//! rounded to the nearest integer (halfway cases away from zero) and then
//! clamped. Out-of-range values saturate; they never wrap.

/// Round and clamp one channel value to a byte.
///
/// NaN maps to 0.
///
/// # Example
///
/// ```
/// use pixel_filter::quantize_channel;
///
/// assert_eq!(quantize_channel(84.5), 85);
/// assert_eq!(quantize_channel(260.0), 255);
/// assert_eq!(quantize_channel(-3.2), 0);
/// ```
#[inline]
pub fn quantize_channel(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

/// Quantize an RGB triple.
#[inline]
pub fn quantize_rgb(rgb: [f32; 3]) -> [u8; 3] {
    [
        quantize_channel(rgb[0]),
        quantize_channel(rgb[1]),
        quantize_channel(rgb[2]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_values_round_to_nearest() {
        assert_eq!(quantize_channel(0.0), 0);
        assert_eq!(quantize_channel(0.49), 0);
        assert_eq!(quantize_channel(0.5), 1);
        assert_eq!(quantize_channel(127.5), 128);
        assert_eq!(quantize_channel(254.6), 255);
    }

    #[test]
    fn test_overflow_saturates_instead_of_wrapping() {
        // Byte coercion by truncation would turn 260 into 4
        assert_eq!(quantize_channel(260.0), 255);
        assert_eq!(quantize_channel(1.0e9), 255);
        assert_eq!(quantize_channel(f32::INFINITY), 255);
    }

    #[test]
    fn test_negative_values_clamp_to_zero() {
        assert_eq!(quantize_channel(-0.4), 0);
        assert_eq!(quantize_channel(-107.5), 0);
        assert_eq!(quantize_channel(f32::NEG_INFINITY), 0);
    }

    #[test]
    fn test_nan_is_zero() {
        assert_eq!(quantize_channel(f32::NAN), 0);
    }

    #[test]
    fn test_quantize_rgb() {
        assert_eq!(quantize_rgb([-60.0, 60.4, 300.0]), [0, 60, 255]);
    }
}
