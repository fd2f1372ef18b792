use std::borrow::Cow;
use std::io::Write;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageResult};

use crate::{encoders::common::write_icc, image::Image};

pub fn encode<W: Write>(image: &Image, writer: &mut W, quality: u8) -> ImageResult<()> {
    let mut encoder = JpegEncoder::new_with_quality(writer, quality.clamp(1, 100));
    write_icc(&mut encoder, image);
    to_jpeg_color(&image.pixels).write_with_encoder(encoder)
}

/// JPEG has no alpha channel and no 16-bit mode, so everything is brought down
/// to 8-bit grayscale or 8-bit RGB. Transparent pixels keep their color values.
fn to_jpeg_color(pixels: &DynamicImage) -> Cow<'_, DynamicImage> {
    use DynamicImage::*;
    match pixels {
        ImageLuma8(_) | ImageRgb8(_) => Cow::Borrowed(pixels),
        ImageLumaA8(_) | ImageLuma16(_) | ImageLumaA16(_) => {
            Cow::Owned(ImageLuma8(pixels.to_luma8()))
        }
        _ => Cow::Owned(ImageRgb8(pixels.to_rgb8())),
    }
}
