use std::io::Write;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::ImageResult;

use crate::encoders::common::{strip_opaque_alpha, write_icc};
use crate::image::Image;

/// PNG is lossless, so "maximum quality" only means spending the most effort on compression.
pub fn encode<W: Write>(image: &Image, writer: &mut W) -> ImageResult<()> {
    let mut encoder =
        PngEncoder::new_with_quality(writer, CompressionType::Best, FilterType::Adaptive);
    write_icc(&mut encoder, image);
    strip_opaque_alpha(&image.pixels).write_with_encoder(encoder)
}
