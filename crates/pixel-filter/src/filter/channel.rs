//! Channel-value filters.
//!
//! Each function reads the R, G, B bytes at `offset`, `offset + 1` and
//! `offset + 2` and returns real-valued intensities. Results are neither
//! rounded nor clamped; see [`crate::quantize`] for the write policy.
//! Alpha is never read.
//!
//! `offset` must address the red channel of a pixel inside `data`
//! (`offset + 2 < data.len()`); an out-of-range offset panics on indexing.

#[inline]
fn rgb(data: &[u8], offset: usize) -> [f32; 3] {
    [
        data[offset] as f32,
        data[offset + 1] as f32,
        data[offset + 2] as f32,
    ]
}

#[inline]
fn map_rgb(data: &[u8], offset: usize, f: impl Fn(f32) -> f32) -> [f32; 3] {
    let [r, g, b] = rgb(data, offset);
    [f(r), f(g), f(b)]
}

/// Unweighted mean of the three color channels.
#[inline]
pub fn average_grayscale(data: &[u8], offset: usize) -> f32 {
    let [r, g, b] = rgb(data, offset);
    (r + g + b) / 3.0
}

/// Perceptual grayscale: `0.3r + 0.587g + 0.114b`.
#[inline]
pub fn luminance_grayscale(data: &[u8], offset: usize) -> f32 {
    let [r, g, b] = rgb(data, offset);
    0.3 * r + 0.587 * g + 0.114 * b
}

/// Multiplicative gain on every channel.
#[inline]
pub fn brightness(data: &[u8], offset: usize, amount: f32) -> [f32; 3] {
    map_rgb(data, offset, |c| c * amount)
}

/// Gamma curve `255 * (c / 255)^amount`.
///
/// `amount < 1` lifts midtones, `amount > 1` darkens them. Black and white
/// are fixed points for any positive amount.
#[inline]
pub fn gamma_brightness(data: &[u8], offset: usize, amount: f32) -> [f32; 3] {
    map_rgb(data, offset, |c| 255.0 * (c / 255.0).powf(amount))
}

/// Linear stretch around mid-gray (127.5).
#[inline]
pub fn contrast(data: &[u8], offset: usize, amount: f32) -> [f32; 3] {
    map_rgb(data, offset, |c| 255.0 * ((c / 255.0 - 0.5) * amount + 0.5))
}

/// Interpolate between the pixel and its average gray.
///
/// `amount = 0` is fully desaturated, `amount = 1` is unchanged and
/// `amount > 1` pushes channels away from gray, possibly outside `0..=255`.
#[inline]
pub fn saturation(data: &[u8], offset: usize, amount: f32) -> [f32; 3] {
    let gray = average_grayscale(data, offset);
    map_rgb(data, offset, |c| c * amount + gray * (1.0 - amount))
}
