pub mod filter_service;
pub mod image_source;

pub use filter_service::{FilterService, FilteredImage};
pub use image_source::{FileImageSource, HttpImageSource, ImageLoader, ImageSource};
