//! pixel-filter: per-pixel filters over interleaved RGBA byte buffers
//!
//! This library works on the pixel layout produced by a 2D drawing surface:
//! a flat, row-major sequence of bytes with four interleaved channels per
//! pixel (R, G, B, A). It provides the channel-value filters (grayscale,
//! brightness, gamma brightness, contrast, saturation) and the full-buffer
//! traversal that applies one of them while copying an image.
//!
//! # Quick Start
//!
//! ```
//! use pixel_filter::{Adjustment, Filter, PixelBuffer, Traversal};
//!
//! // 2x1 image: opaque red, semi-transparent green
//! let source = PixelBuffer::from_raw(2, 1, vec![255, 0, 0, 255, 0, 255, 0, 128]).unwrap();
//!
//! let gray = source.apply(Traversal::Filter(Adjustment::new(Filter::AverageGrayscale)));
//! assert_eq!(gray.as_bytes(), &[85, 85, 85, 255, 85, 85, 85, 128]);
//! ```
//!
//! # Raw Slice API
//!
//! Callers that already hold a byte slice can use [`apply_filter()`]
//! directly. Dimensions are validated before any pixel is read:
//!
//! ```
//! use pixel_filter::{apply_filter, Adjustment, BufferError, Filter, Traversal};
//!
//! let pixels = [10, 20, 30, 40];
//! let contrast = Traversal::Filter(Adjustment::new(Filter::Contrast).amount(2.0));
//! let out = apply_filter(&pixels, 1, 1, contrast).unwrap();
//! assert_eq!(out[3], 40); // alpha is never touched
//!
//! let err = apply_filter(&pixels, 2, 1, Traversal::CopyOnly).unwrap_err();
//! assert_eq!(err, BufferError::LengthMismatch { expected: 8, actual: 4 });
//! ```
//!
//! # Writing Filter Results
//!
//! Filters return real-valued channel intensities that may fall outside
//! `0..=255` or carry a fractional part. Every write into a destination
//! buffer goes through [`quantize_channel()`]: round to the nearest integer,
//! then clamp to the byte range. Values never wrap around.
//!
//! # Filters
//!
//! | Filter | Per-channel result | Identity amount |
//! |--------|--------------------|-----------------|
//! | [`Filter::AverageGrayscale`] | `(r + g + b) / 3` | n/a |
//! | [`Filter::LuminanceGrayscale`] | `0.3r + 0.587g + 0.114b` | n/a |
//! | [`Filter::Brightness`] | `c * amount` | 1 |
//! | [`Filter::GammaBrightness`] | `255 * (c / 255)^amount` | 1 |
//! | [`Filter::Contrast`] | `255 * ((c / 255 - 0.5) * amount + 0.5)` | 1 |
//! | [`Filter::Saturation`] | `c * amount + gray * (1 - amount)` | 1 |
//!
//! The grayscale filters produce a single scalar; [`Filter::evaluate()`]
//! writes it into all three color channels.

pub mod buffer;
pub mod filter;
pub mod quantize;
pub mod traversal;


pub use buffer::{offset, BufferError, PixelBuffer, CHANNELS};
pub use filter::{Adjustment, Filter, ParseFilterError, DEFAULT_AMOUNT};
pub use quantize::{quantize_channel, quantize_rgb};
pub use traversal::{apply_filter, apply_rows, Traversal};
