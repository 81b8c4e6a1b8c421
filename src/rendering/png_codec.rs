use pixel_filter::PixelBuffer;
use std::io::Cursor;

use crate::error::{SinkError, SourceError};

/// Decode a PNG into an RGBA8 pixel buffer.
///
/// Palette, low bit depth and tRNS images are expanded, 16-bit channels are
/// stripped to 8 bits, and gray/RGB images get an opaque alpha channel.
/// Dimensions are checked against `max_dimension` before the frame is
/// allocated.
pub fn decode_png(bytes: &[u8], max_dimension: u32) -> Result<PixelBuffer, SourceError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| SourceError::Decode(e.to_string()))?;

    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };
    if width > max_dimension || height > max_dimension {
        return Err(SourceError::DimensionsExceeded {
            width,
            height,
            max: max_dimension,
        });
    }

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let frame = reader
        .next_frame(&mut buf)
        .map_err(|e| SourceError::Decode(e.to_string()))?;
    if frame.bit_depth != png::BitDepth::Eight {
        return Err(SourceError::Decode(format!(
            "unsupported bit depth after expansion: {:?}",
            frame.bit_depth
        )));
    }
    let data = &buf[..frame.buffer_size()];

    let rgba: Vec<u8> = match frame.color_type {
        png::ColorType::Rgba => data.to_vec(),
        png::ColorType::Rgb => data
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        png::ColorType::Grayscale => data.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        png::ColorType::Indexed => {
            return Err(SourceError::Decode(
                "indexed color was not expanded".to_string(),
            ))
        }
    };

    tracing::debug!(
        width,
        height,
        color_type = ?frame.color_type,
        "Decoded PNG"
    );

    Ok(PixelBuffer::from_raw(width, height, rgba)?)
}

/// Encode an RGBA8 pixel buffer as PNG.
///
/// Written with fast settings, then re-compressed with oxipng. If
/// optimization fails the unoptimized bytes are returned.
pub fn encode_png(image: &PixelBuffer) -> Result<Vec<u8>, SinkError> {
    let png_bytes = encode_rgba(image)?;

    let optimized = oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    )
    .unwrap_or(png_bytes);
    Ok(optimized)
}

fn encode_rgba(image: &PixelBuffer) -> Result<Vec<u8>, SinkError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        let mut writer = encoder
            .write_header()
            .map_err(|e| SinkError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(image.as_bytes())
            .map_err(|e| SinkError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
