pub mod catalog;
pub mod filter;

pub use catalog::{handle_filters, handle_presets, FilterInfo};
pub use catalog::{__path_handle_filters, __path_handle_presets};
pub use filter::{handle_filter, FilterQuery, __path_handle_filter};
