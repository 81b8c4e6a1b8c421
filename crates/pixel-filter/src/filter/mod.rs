//! Filter selection and parameters.
//!
//! The numeric kernels live in [`channel`] as plain functions. [`Filter`]
//! names one of them so that callers (CLI flags, query strings, config
//! files) can select a filter at runtime, and [`Adjustment`] pairs that
//! selection with its `amount`.
//!
//! # Example
//!
//! ```
//! use pixel_filter::{Adjustment, Filter};
//!
//! let filter: Filter = "saturation".parse().unwrap();
//! let adjustment = Adjustment::new(filter).amount(0.0);
//!
//! // Fully desaturated: every channel becomes (r + g + b) / 3
//! let rgb = adjustment.evaluate(&[30, 60, 90, 255], 0);
//! assert_eq!(rgb, [60.0, 60.0, 60.0]);
//! ```

pub mod channel;
mod error;

pub use error::ParseFilterError;

use std::fmt;
use std::str::FromStr;

/// Amount used when none is given. Identity for every amount-driven filter.
pub const DEFAULT_AMOUNT: f32 = 1.0;

/// The available per-pixel filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    /// `(r + g + b) / 3` in all three channels
    AverageGrayscale,
    /// `0.3r + 0.587g + 0.114b` in all three channels
    LuminanceGrayscale,
    /// `c * amount`
    Brightness,
    /// `255 * (c / 255)^amount`
    GammaBrightness,
    /// `255 * ((c / 255 - 0.5) * amount + 0.5)`
    Contrast,
    /// `c * amount + gray * (1 - amount)`
    Saturation,
}

impl Filter {
    /// Every filter, in display order.
    pub const ALL: [Filter; 6] = [
        Filter::AverageGrayscale,
        Filter::LuminanceGrayscale,
        Filter::Brightness,
        Filter::GammaBrightness,
        Filter::Contrast,
        Filter::Saturation,
    ];

    /// Canonical kebab-case name, accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Filter::AverageGrayscale => "average-grayscale",
            Filter::LuminanceGrayscale => "luminance-grayscale",
            Filter::Brightness => "brightness",
            Filter::GammaBrightness => "gamma-brightness",
            Filter::Contrast => "contrast",
            Filter::Saturation => "saturation",
        }
    }

    /// Whether `amount` has any effect. The grayscale filters ignore it.
    pub fn uses_amount(self) -> bool {
        !matches!(self, Filter::AverageGrayscale | Filter::LuminanceGrayscale)
    }

    /// Evaluate the filter at `offset`, returning an RGB triple.
    ///
    /// Grayscale scalars are replicated into all three channels. The result
    /// is unclamped; alpha is left to the caller.
    #[inline]
    pub fn evaluate(self, data: &[u8], offset: usize, amount: f32) -> [f32; 3] {
        match self {
            Filter::AverageGrayscale => {
                let gray = channel::average_grayscale(data, offset);
                [gray; 3]
            }
            Filter::LuminanceGrayscale => {
                let gray = channel::luminance_grayscale(data, offset);
                [gray; 3]
            }
            Filter::Brightness => channel::brightness(data, offset, amount),
            Filter::GammaBrightness => channel::gamma_brightness(data, offset, amount),
            Filter::Contrast => channel::contrast(data, offset, amount),
            Filter::Saturation => channel::saturation(data, offset, amount),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Filter {
    type Err = ParseFilterError;

    /// Parse a filter name, case-insensitively.
    ///
    /// Besides the canonical names, accepts `grayscale`/`gray`/`average`
    /// for average grayscale, `luminance` for luminance grayscale and
    /// `bright`/`gamma` for gamma brightness. Underscores are treated as
    /// hyphens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "average-grayscale" | "grayscale" | "gray" | "average" => Ok(Filter::AverageGrayscale),
            "luminance-grayscale" | "luminance" => Ok(Filter::LuminanceGrayscale),
            "brightness" => Ok(Filter::Brightness),
            "gamma-brightness" | "gamma" | "bright" => Ok(Filter::GammaBrightness),
            "contrast" => Ok(Filter::Contrast),
            "saturation" => Ok(Filter::Saturation),
            _ => Err(ParseFilterError::new(s)),
        }
    }
}

/// A filter together with its `amount` parameter.
///
/// # Defaults
///
/// `amount` defaults to [`DEFAULT_AMOUNT`] (1.0), the identity for
/// brightness, gamma brightness, contrast and saturation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    /// Which filter to apply.
    pub filter: Filter,
    /// Filter-specific intensity: gain, gamma exponent, contrast stretch or
    /// saturation weight.
    pub amount: f32,
}

impl Adjustment {
    /// Select `filter` with the default amount.
    #[inline]
    pub fn new(filter: Filter) -> Self {
        Self {
            filter,
            amount: DEFAULT_AMOUNT,
        }
    }

    /// Set the amount.
    #[inline]
    pub fn amount(mut self, amount: f32) -> Self {
        self.amount = amount;
        self
    }

    /// Evaluate at `offset`. See [`Filter::evaluate()`].
    #[inline]
    pub fn evaluate(&self, data: &[u8], offset: usize) -> [f32; 3] {
        self.filter.evaluate(data, offset, self.amount)
    }
}

impl From<Filter> for Adjustment {
    fn from(filter: Filter) -> Self {
        Self::new(filter)
    }
}
