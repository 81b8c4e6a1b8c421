pub mod png_codec;
pub mod sink;

pub use png_codec::{decode_png, encode_png};
pub use sink::{DisplaySink, MemorySink, PngFileSink};
